use crate::cells::{Cell, Coordinate, CoordinateSmallVec};
use crate::errors::*;
use crate::grid::Grid;
use log::{debug, trace};
use rand::Rng;

/// Apply the recursive backtracker maze generation algorithm to a grid, starting at `start`.
///
/// A random walk carves passages two cells at a time, each step knocking down the one wall
/// cell between the current cell and an unvisited cell. When the walk reaches a dead end
/// it backtracks along its own trail (an explicit stack, not the call stack) until it finds
/// a cell with an unvisited neighbour. Every carve joins an already carved cell to a
/// never visited one, so the carved cells form a spanning tree: a perfect maze.
///
/// Only interior cells are ever carved, the outer ring of walls is left alone. Parity is not
/// validated: on a grid with an even width or height the bottom right interior cell is never
/// reached.
///
/// Fails with `ErrorKind::OutOfBounds` if `start` is not on the grid.
pub fn recursive_backtracker<R: Rng>(grid: &mut Grid, start: Coordinate, rng: &mut R) -> Result<()> {

    grid.set(start, Cell::Path)?;
    let mut stack = vec![start];
    let mut carved_count = 1;

    while let Some(&current) = stack.last() {

        let unvisited = unvisited_neighbours(grid, current)?;
        if unvisited.is_empty() {
            stack.pop();
        } else {
            let next = unvisited[rng.gen_range(0..unvisited.len())];
            grid.set(current.midpoint(next), Cell::Path)?;
            grid.set(next, Cell::Path)?;
            trace!("carved {} -> {}", current, next);

            stack.push(next);
            carved_count += 1;
        }
    }

    debug!("recursive backtracker carved {} cells from {} on a {}x{} grid",
           carved_count, start, grid.width(), grid.height());
    Ok(())
}

/// Interior cells two steps away that are still solid wall.
fn unvisited_neighbours(grid: &Grid, coord: Coordinate) -> Result<CoordinateSmallVec> {
    let mut unvisited = CoordinateSmallVec::new();
    for neighbour in grid.interior_neighbours(coord, 2) {
        if grid.at(neighbour)? == Cell::Wall {
            unvisited.push(neighbour);
        }
    }
    Ok(unvisited)
}
