use std::fmt;

use itertools::Itertools;

use crate::cells::{Cell, Coordinate};
use crate::maze::Maze;
use crate::units::{Height, Width};

/// What a renderer should draw for one cell of a maze.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellView {
    Entrance,
    Exit,
    Wall,
    Path,
    Visited,
}

impl CellView {
    /// Two columns per cell keeps the text rendering roughly square in a terminal.
    pub fn glyph(self) -> &'static str {
        match self {
            CellView::Entrance => "E ",
            CellView::Exit => "S ",
            CellView::Wall => "\u{2588}\u{2588}",
            CellView::Path => "  ",
            CellView::Visited => ". ",
        }
    }
}

impl From<Cell> for CellView {
    fn from(cell: Cell) -> CellView {
        match cell {
            Cell::Wall => CellView::Wall,
            Cell::Path => CellView::Path,
            Cell::Visited => CellView::Visited,
        }
    }
}

/// The entrance and exit are shown as such whatever state their cells are in.
pub(crate) fn maze_cell_view(coord: Coordinate,
                             cell: Cell,
                             entrance: Coordinate,
                             exit: Coordinate)
                             -> CellView {
    if coord == entrance {
        CellView::Entrance
    } else if coord == exit {
        CellView::Exit
    } else {
        CellView::from(cell)
    }
}

/// A copy of how every cell of a maze looks, detached from the maze itself.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snapshot {
    width: Width,
    height: Height,
    views: Vec<CellView>,
}

impl Snapshot {
    pub fn of(maze: &Maze) -> Snapshot {
        let grid = maze.grid();
        let (entrance, exit) = (maze.entrance(), maze.exit());
        let views = grid.iter()
            .zip(grid.cells().iter())
            .map(|(coord, &cell)| maze_cell_view(coord, cell, entrance, exit))
            .collect();

        Snapshot {
            width: grid.width(),
            height: grid.height(),
            views,
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

    pub fn at(&self, coord: Coordinate) -> Option<CellView> {
        if coord.x < self.width.0 && coord.y < self.height.0 {
            let index = coord.y as usize * self.width.0 as usize + coord.x as usize;
            self.views.get(index).cloned()
        } else {
            None
        }
    }

    /// Rows of cell views, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        // a maze is never less than 3 cells wide
        self.views.chunks(self.width.0 as usize)
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row.iter().map(|view| view.glyph()).join(""))?;
        }
        Ok(())
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.snapshot())
    }
}
