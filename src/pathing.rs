use std::collections::VecDeque;

use log::debug;

use crate::cells::{Cell, Coordinate};
use crate::errors::*;
use crate::grid::Grid;
use crate::maze::Maze;
use crate::utils::{self, FnvHashMap};

// Breadth first search over the open cells of a grid.
//
// Every step costs the same, so the first time BFS reaches a cell it has found the shortest
// route there and the cell never needs revisiting. The working grid doubles as the visited
// set: a reached cell is flipped from `Path` to `Visited` before it is queued, so nothing
// is queued twice. The `parents` map records where each cell was reached from, which is
// all that is needed to walk back from the goal.
//
// A `Visited` overlay from an earlier solve must be reset to `Path` before searching.
// A search can only start from an open interior cell, anything else finds no route.
fn breadth_first_search(working: &mut Grid,
                        from: Coordinate,
                        to: Coordinate)
                        -> Result<Option<FnvHashMap<Coordinate, Coordinate>>> {

    if working.at(from)? != Cell::Path || !working.is_interior(from) {
        return Ok(None);
    }

    working.set(from, Cell::Visited)?;
    let mut parents = utils::fnv_hashmap(working.size());
    let mut frontier = VecDeque::new();
    frontier.push_back(from);

    while let Some(current) = frontier.pop_front() {

        if current == to {
            return Ok(Some(parents));
        }

        for neighbour in working.interior_neighbours(current, 1) {
            if working.at(neighbour)? == Cell::Path {
                working.set(neighbour, Cell::Visited)?;
                parents.insert(neighbour, current);
                frontier.push_back(neighbour);
            }
        }
    }

    Ok(None)
}

/// Walk the BFS parent links back from `to`, returning the route in `from` to `to` order.
fn reconstruct_path(parents: &FnvHashMap<Coordinate, Coordinate>,
                    to: Coordinate)
                    -> Vec<Coordinate> {
    let mut path = vec![to];
    let mut current = to;
    while let Some(&parent) = parents.get(&current) {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}

/// Solve a maze from `from` to the maze exit with a breadth first search.
///
/// The search runs on a private copy of the maze grid. Only when the exit is reached is the
/// copy committed as the maze's grid, with every cell on the shortest route (`from` and the
/// exit included) marked `Visited` and everything else as it was generated. A solution shown
/// by an earlier solve is replaced.
///
/// `Ok(false)` means the exit cannot be reached from `from`, which includes `from` being a
/// wall or on the outer ring; the maze is left untouched, bit for bit. Fails with `ErrorKind::OutOfBounds` if `from` is not on the grid.
pub fn solve(maze: &mut Maze, from: Coordinate) -> Result<bool> {

    let exit = maze.exit();
    let mut unsolved = maze.grid().clone();
    unsolved.clear_visited();

    let mut working = unsolved.clone();
    let parents = match breadth_first_search(&mut working, from, exit)? {
        Some(parents) => parents,
        None => {
            debug!("no route from {} to exit {} ({} cells explored)",
                   from, exit, working.count(Cell::Visited));
            return Ok(false);
        }
    };

    let path = reconstruct_path(&parents, exit);
    for &coord in &path {
        unsolved.set(coord, Cell::Visited)?;
    }
    debug!("solved from {} to exit {}: {} cells on the route, {} cells explored",
           from, exit, path.len(), working.count(Cell::Visited));

    maze.commit_grid(unsolved);
    Ok(true)
}

/// The shortest route between two cells of a grid, in order and with both ends included.
///
/// `Path` and `Visited` cells are both open to the search. `Ok(None)` if there is no route,
/// e.g. when either end is a wall.
/// Fails with `ErrorKind::OutOfBounds` if either coordinate is not on the grid.
pub fn shortest_path(grid: &Grid, from: Coordinate, to: Coordinate) -> Result<Option<Vec<Coordinate>>> {
    grid.at(to)?;

    let mut working = grid.clone();
    working.clear_visited();
    let parents = breadth_first_search(&mut working, from, to)?;
    Ok(parents.map(|parents| reconstruct_path(&parents, to)))
}
