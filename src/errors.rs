// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules in this crate `use crate::errors::*;` to get access to everything
// `error_chain!` creates.
#![allow(deprecated)]

use crate::cells::Coordinate;
use crate::units::{Height, Width};
use error_chain::*;

error_chain! {
    errors {
        OutOfBounds(coord: Coordinate, width: Width, height: Height) {
            description("coordinate outside of the grid")
            display("coordinate {} is outside of the {}x{} grid", coord, width, height)
        }
        InvalidDimensions(width: Width, height: Height) {
            description("invalid maze dimensions")
            display("cannot build a {}x{} maze: width and height must be at least 3 \
                     (and odd for the exit to be reachable)",
                    width, height)
        }
        OpenOuterRing(coord: Coordinate) {
            description("open cell on the outer ring of a maze")
            display("cell {} is on the outer ring of the maze but is not a wall", coord)
        }
    }
}
