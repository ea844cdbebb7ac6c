use crate::cells::{offset_coordinates, Cell, Coordinate, CoordinateSmallVec};
use crate::errors::*;
use crate::units::{Height, Width};
use std::fmt;

/// Rectangular row-major storage of `Cell`s. The dimensions never change after construction.
///
/// Cloning a grid copies every cell, the clone shares nothing with the original.
#[derive(Clone, Eq, PartialEq)]
pub struct Grid {
    width: Width,
    height: Height,
    cells: Vec<Cell>,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: width: {}, height: {}, path cells: {}",
               self.width, self.height, self.count(Cell::Path) + self.count(Cell::Visited))
    }
}

impl Grid {
    /// A grid where every cell is a `Wall`.
    pub fn new(width: Width, height: Height) -> Grid {
        let cells_count = width.0 as usize * height.0 as usize;
        Grid {
            width,
            height,
            cells: vec![Cell::Wall; cells_count],
        }
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.height
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// The cell state at a coordinate.
    ///
    /// Fails with `ErrorKind::OutOfBounds` if the coordinate is not on the grid.
    pub fn at(&self, coord: Coordinate) -> Result<Cell> {
        let index = self.checked_index(coord)?;
        Ok(self.cells[index])
    }

    /// Overwrite the cell state at a coordinate.
    ///
    /// Fails with `ErrorKind::OutOfBounds` if the coordinate is not on the grid.
    pub fn set(&mut self, coord: Coordinate, cell: Cell) -> Result<()> {
        let index = self.checked_index(coord)?;
        self.cells[index] = cell;
        Ok(())
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: Coordinate) -> bool {
        coord.x < self.width.0 && coord.y < self.height.0
    }

    /// Is the coordinate strictly inside the outer ring of walls?
    pub fn is_interior(&self, coord: Coordinate) -> bool {
        coord.x > 0 && coord.y > 0 &&
        coord.x < self.width.0.saturating_sub(1) && coord.y < self.height.0.saturating_sub(1)
    }

    /// Interior cells at odd x and odd y are the only cells a maze generator carves as nodes,
    /// which keeps one layer of wall between any two of them.
    pub fn is_interior_odd(&self, coord: Coordinate) -> bool {
        self.is_interior(coord) && coord.x % 2 == 1 && coord.y % 2 == 1
    }

    /// Interior coordinates `steps` away from `coord` along the four compass directions.
    pub fn interior_neighbours(&self, coord: Coordinate, steps: u32) -> CoordinateSmallVec {
        offset_coordinates(coord, steps)
            .into_iter()
            .filter(|neighbour| self.is_interior(*neighbour))
            .collect()
    }

    /// Number of cells currently in the given state.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Turn every `Visited` cell back into a `Path` cell.
    pub fn clear_visited(&mut self) {
        for cell in self.cells.iter_mut().filter(|c| **c == Cell::Visited) {
            *cell = Cell::Path;
        }
    }

    /// Coordinates in row-major order.
    pub fn iter(&self) -> CellIter {
        CellIter {
            current_cell_number: 0,
            row_width: self.width.0 as usize,
            cells_count: self.cells.len(),
        }
    }

    /// Cell states in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn checked_index(&self, coord: Coordinate) -> Result<usize> {
        if self.is_valid_coordinate(coord) {
            Ok(coord.y as usize * self.width.0 as usize + coord.x as usize)
        } else {
            Err(ErrorKind::OutOfBounds(coord, self.width, self.height).into())
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub struct CellIter {
    current_cell_number: usize,
    row_width: usize,
    cells_count: usize,
}
impl Iterator for CellIter {
    type Item = Coordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = index_to_coordinate(self.row_width, self.current_cell_number);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = Coordinate;
    type IntoIter = CellIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Only called with a non zero row width: an empty row means no cells to iterate.
fn index_to_coordinate(row_width: usize, one_dimensional_index: usize) -> Coordinate {
    let y = one_dimensional_index / row_width;
    let x = one_dimensional_index - (y * row_width);
    Coordinate::new(x as u32, y as u32)
}
