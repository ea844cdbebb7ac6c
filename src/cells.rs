use smallvec::SmallVec;
use std::fmt;

/// State of a single grid cell.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum Cell {
    Wall,
    Path,
    Visited,
}

impl Cell {
    /// Can a route pass through this cell? Solved `Visited` cells are still passages.
    #[inline]
    pub fn is_open(self) -> bool {
        self != Cell::Wall
    }
}

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    pub fn new(x: u32, y: u32) -> Coordinate {
        Coordinate { x, y }
    }

    /// The cell lying exactly half way between two coordinates.
    pub fn midpoint(self, other: Coordinate) -> Coordinate {
        Coordinate::new((self.x + other.x) / 2, (self.y + other.y) / 2)
    }
}

impl From<(u32, u32)> for Coordinate {
    fn from(x_y_pair: (u32, u32)) -> Coordinate {
        Coordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

pub type CoordinateSmallVec = SmallVec<[Coordinate; 4]>;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

impl CompassPrimary {
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::North,
                                          CompassPrimary::South,
                                          CompassPrimary::East,
                                          CompassPrimary::West];

    /// Creates a new `Coordinate` offset `steps` cells away in this direction.
    /// Returns None if the Coordinate is not representable.
    /// No grid bounds are checked here, only unsigned over/underflow.
    pub fn offset_coordinate(self, coord: Coordinate, steps: u32) -> Option<Coordinate> {
        let (x, y) = (coord.x, coord.y);
        match self {
            CompassPrimary::North => y.checked_sub(steps).map(|y| Coordinate::new(x, y)),
            CompassPrimary::South => y.checked_add(steps).map(|y| Coordinate::new(x, y)),
            CompassPrimary::East => x.checked_add(steps).map(|x| Coordinate::new(x, y)),
            CompassPrimary::West => x.checked_sub(steps).map(|x| Coordinate::new(x, y)),
        }
    }
}

/// All representable coordinates `steps` away from `coord` along the four compass directions.
pub fn offset_coordinates(coord: Coordinate, steps: u32) -> CoordinateSmallVec {
    CompassPrimary::ALL
        .iter()
        .filter_map(|dir| dir.offset_coordinate(coord, steps))
        .collect()
}
