use crate::cells::{Cell, Coordinate};
use crate::errors::*;
use crate::generators;
use crate::grid::Grid;
use crate::pathing;
use crate::renderers::{self, CellView, Snapshot};
use crate::units::{Height, Width};
use rand::Rng;

const MIN_DIMENSION: u32 = 3;

/// A grid with a fixed entrance in the top left interior corner and a fixed exit in the
/// bottom right interior corner.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    entrance: Coordinate,
    exit: Coordinate,
}

impl Maze {
    /// An ungenerated (all wall) maze.
    ///
    /// Width and height must be odd and at least 3, otherwise `ErrorKind::InvalidDimensions`.
    pub fn new(width: Width, height: Height) -> Result<Maze> {
        if width.0 % 2 == 0 || height.0 % 2 == 0 {
            invalid_dimensions(width, height)
        } else {
            Maze::new_allow_even(width, height)
        }
    }

    /// Like `new` but even dimensions are accepted. The exit of an even sized maze is never
    /// carved by the generator so such a maze cannot be solved.
    pub fn new_allow_even(width: Width, height: Height) -> Result<Maze> {
        Maze::from_grid(Grid::new(width, height))
    }

    /// Wrap an existing grid, e.g. a hand drawn one.
    ///
    /// Fails with `ErrorKind::InvalidDimensions` if the grid is less than 3 cells in either
    /// direction and with `ErrorKind::OpenOuterRing` if any cell of the outer ring is open.
    pub fn from_grid(grid: Grid) -> Result<Maze> {
        let (width, height) = (grid.width(), grid.height());
        if width.0 < MIN_DIMENSION || height.0 < MIN_DIMENSION {
            return invalid_dimensions(width, height);
        }

        let open_ring_cell = grid.iter()
            .zip(grid.cells().iter())
            .find(|&(coord, cell)| cell.is_open() && !grid.is_interior(coord));
        if let Some((coord, _)) = open_ring_cell {
            return Err(ErrorKind::OpenOuterRing(coord).into());
        }

        Ok(Maze {
            grid,
            entrance: Coordinate::new(1, 1),
            exit: Coordinate::new(width.0 - 2, height.0 - 2),
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn entrance(&self) -> Coordinate {
        self.entrance
    }

    #[inline]
    pub fn exit(&self) -> Coordinate {
        self.exit
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.grid.height()
    }

    /// Carve a fresh maze from the entrance, discarding any previous passages.
    pub fn generate<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        self.grid = Grid::new(self.width(), self.height());
        generators::recursive_backtracker(&mut self.grid, self.entrance, rng)
    }

    /// Find the shortest route from the entrance to the exit, see `pathing::solve`.
    pub fn solve(&mut self) -> Result<bool> {
        let entrance = self.entrance;
        pathing::solve(self, entrance)
    }

    /// Find the shortest route from any cell to the exit, see `pathing::solve`.
    pub fn solve_from(&mut self, from: Coordinate) -> Result<bool> {
        pathing::solve(self, from)
    }

    /// Does the grid show a solution, i.e. was the exit reached by the last solve?
    pub fn is_solved(&self) -> bool {
        self.grid.at(self.exit).map(|cell| cell == Cell::Visited).unwrap_or(false)
    }

    /// How a renderer should show a cell: the entrance and exit are shown as such whatever
    /// state the cell is in.
    pub fn cell_view(&self, coord: Coordinate) -> Result<CellView> {
        let cell = self.grid.at(coord)?;
        Ok(renderers::maze_cell_view(coord, cell, self.entrance, self.exit))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(self)
    }

    pub(crate) fn commit_grid(&mut self, grid: Grid) {
        debug_assert!(grid.width() == self.width() && grid.height() == self.height());
        self.grid = grid;
    }
}

fn invalid_dimensions(width: Width, height: Height) -> Result<Maze> {
    Err(ErrorKind::InvalidDimensions(width, height).into())
}


#[cfg(test)]
mod tests {

    use super::*;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    fn is_invalid_dimensions(result: Result<Maze>) -> bool {
        match result {
            Err(ref e) => matches!(e.kind(), ErrorKind::InvalidDimensions(..)),
            Ok(_) => false,
        }
    }

    #[test]
    fn entrance_and_exit() {
        let m = Maze::new(Width(11), Height(7)).unwrap();
        assert_eq!(m.entrance(), Coordinate::new(1, 1));
        assert_eq!(m.exit(), Coordinate::new(9, 5));
        assert_eq!(m.grid().count(Cell::Wall), 11 * 7);
    }

    #[test]
    fn too_small_dimensions_are_rejected() {
        for &(w, h) in &[(0, 0), (1, 5), (5, 1), (2, 3), (3, 2)] {
            assert!(is_invalid_dimensions(Maze::new(Width(w), Height(h))));
            assert!(is_invalid_dimensions(Maze::new_allow_even(Width(w), Height(h))));
        }
    }

    #[test]
    fn even_dimensions_are_rejected_unless_allowed() {
        assert!(is_invalid_dimensions(Maze::new(Width(4), Height(5))));
        assert!(is_invalid_dimensions(Maze::new(Width(5), Height(4))));
        let m = Maze::new_allow_even(Width(4), Height(4)).unwrap();
        assert_eq!(m.exit(), Coordinate::new(2, 2));
    }

    #[test]
    fn invalid_dimensions_message() {
        let err = Maze::new(Width(2), Height(9)).unwrap_err();
        assert!(err.to_string().starts_with("cannot build a 2x9 maze"));
    }

    #[test]
    fn from_grid_checks_size() {
        assert!(is_invalid_dimensions(Maze::from_grid(Grid::new(Width(2), Height(2)))));
        let m = Maze::from_grid(Grid::new(Width(6), Height(3))).unwrap();
        assert_eq!(m.exit(), Coordinate::new(4, 1));
    }

    #[test]
    fn from_grid_rejects_an_open_outer_ring() {
        let mut g = Grid::new(Width(5), Height(5));
        g.set(Coordinate::new(1, 1), Cell::Path).unwrap();
        g.set(Coordinate::new(4, 1), Cell::Path).unwrap();
        match Maze::from_grid(g.clone()) {
            Err(ref e) => assert!(matches!(e.kind(),
                                           ErrorKind::OpenOuterRing(c) if *c == Coordinate::new(4, 1))),
            Ok(_) => panic!("an open outer ring should be rejected"),
        }

        g.set(Coordinate::new(4, 1), Cell::Wall).unwrap();
        g.set(Coordinate::new(2, 0), Cell::Visited).unwrap();
        assert!(Maze::from_grid(g.clone()).is_err());

        g.set(Coordinate::new(2, 0), Cell::Wall).unwrap();
        assert!(Maze::from_grid(g).is_ok());
    }

    #[test]
    fn regenerating_starts_over() {
        let mut m = Maze::new(Width(15), Height(15)).unwrap();
        let mut rng = XorShiftRng::seed_from_u64(5);
        m.generate(&mut rng).unwrap();
        let first = m.grid().clone();
        assert!(m.solve().unwrap());

        let mut rng = XorShiftRng::seed_from_u64(5);
        m.generate(&mut rng).unwrap();
        assert_eq!(m.grid(), &first);
        assert!(!m.is_solved());
    }

    #[test]
    fn cell_views() {
        let mut m = Maze::new(Width(5), Height(5)).unwrap();
        let mut rng = XorShiftRng::seed_from_u64(0);
        m.generate(&mut rng).unwrap();
        assert_eq!(m.cell_view(Coordinate::new(1, 1)).unwrap(), CellView::Entrance);
        assert_eq!(m.cell_view(Coordinate::new(3, 3)).unwrap(), CellView::Exit);
        assert_eq!(m.cell_view(Coordinate::new(0, 0)).unwrap(), CellView::Wall);
        assert_eq!(m.cell_view(Coordinate::new(2, 2)).unwrap(), CellView::Wall);
        assert!(m.cell_view(Coordinate::new(5, 0)).is_err());

        assert!(m.solve().unwrap());
        assert_eq!(m.cell_view(Coordinate::new(1, 1)).unwrap(), CellView::Entrance);
        assert_eq!(m.cell_view(Coordinate::new(3, 3)).unwrap(), CellView::Exit);
        assert!(m.is_solved());
    }

    #[test]
    fn smallest_maze_entrance_is_exit() {
        let mut m = Maze::new(Width(3), Height(3)).unwrap();
        let mut rng = XorShiftRng::seed_from_u64(0);
        m.generate(&mut rng).unwrap();
        assert_eq!(m.entrance(), m.exit());
        assert!(m.solve().unwrap());
        assert_eq!(m.cell_view(Coordinate::new(1, 1)).unwrap(), CellView::Entrance);
        assert_eq!(m.grid().count(Cell::Visited), 1);
    }
}
