//! **labyrinth** generates perfect mazes with a recursive backtracker and solves them with a
//! breadth first search.

pub mod analysis;
pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod maze;
pub mod pathing;
pub mod renderers;
pub mod units;
mod utils;
