//! Graph view of the open cells of a grid, independent of the maze generator and solver.

use crate::cells::{CompassPrimary, Coordinate};
use crate::grid::Grid;
use crate::utils::{self, FnvHashMap};
use petgraph::algo::{connected_components, dijkstra};
use petgraph::graph::{NodeIndex, UnGraph};

/// Undirected graph with one node per open (`Path` or `Visited`) cell and one edge per pair
/// of axis adjacent open cells.
#[derive(Debug)]
pub struct PassageGraph {
    graph: UnGraph<Coordinate, ()>,
    nodes: FnvHashMap<Coordinate, NodeIndex>,
}

pub fn passage_graph(grid: &Grid) -> PassageGraph {

    let open_cells = grid.iter()
        .zip(grid.cells().iter())
        .filter(|&(_, cell)| cell.is_open())
        .map(|(coord, _)| coord)
        .collect::<Vec<Coordinate>>();

    let mut graph = UnGraph::with_capacity(open_cells.len(), open_cells.len());
    let mut nodes = utils::fnv_hashmap(open_cells.len());
    for &coord in &open_cells {
        nodes.insert(coord, graph.add_node(coord));
    }

    // Looking only east and south adds each adjacent pair once.
    for &coord in &open_cells {
        for dir in &[CompassPrimary::East, CompassPrimary::South] {
            let neighbour_index = dir.offset_coordinate(coord, 1)
                .and_then(|neighbour| nodes.get(&neighbour));
            if let Some(&neighbour_index) = neighbour_index {
                graph.add_edge(nodes[&coord], neighbour_index, ());
            }
        }
    }

    PassageGraph { graph, nodes }
}

impl PassageGraph {
    #[inline]
    pub fn nodes_count(&self) -> usize {
        self.graph.node_count()
    }

    #[inline]
    pub fn edges_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// A perfect maze is a tree: connected, and one edge fewer than it has nodes.
    pub fn is_perfect(&self) -> bool {
        connected_components(&self.graph) == 1 &&
        self.edges_count() + 1 == self.nodes_count()
    }

    /// Steps on the shortest route between two open cells, None if either is closed or
    /// there is no route.
    pub fn distance(&self, from: Coordinate, to: Coordinate) -> Option<u32> {
        let (from_index, to_index) = match (self.nodes.get(&from), self.nodes.get(&to)) {
            (Some(&a), Some(&b)) => (a, b),
            _ => return None,
        };
        dijkstra(&self.graph, from_index, Some(to_index), |_| 1u32)
            .get(&to_index)
            .cloned()
    }
}

/// Open cells that are not interior odd cells: every one of them was a wall between two
/// carved cells before the generator knocked it down.
pub fn carved_wall_count(grid: &Grid) -> usize {
    grid.iter()
        .zip(grid.cells().iter())
        .filter(|&(coord, cell)| cell.is_open() && !grid.is_interior_odd(coord))
        .count()
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::cells::Cell;
    use crate::units::{Height, Width};

    // 7x5 grid:
    // #######
    // #.....#
    // #.#.#.#
    // #.....#
    // #######
    fn looped_grid() -> Grid {
        let mut g = Grid::new(Width(7), Height(5));
        for coord in g.iter().collect::<Vec<_>>() {
            if g.is_interior(coord) && !(coord.y == 2 && coord.x % 2 == 0) {
                g.set(coord, Cell::Path).unwrap();
            }
        }
        g
    }

    fn corridor() -> Grid {
        let mut g = Grid::new(Width(7), Height(3));
        for x in 1..6 {
            g.set(Coordinate::new(x, 1), Cell::Path).unwrap();
        }
        g.set(Coordinate::new(3, 1), Cell::Visited).unwrap();
        g
    }

    #[test]
    fn nodes_and_edges() {
        let pg = passage_graph(&corridor());
        assert_eq!(pg.nodes_count(), 5);
        assert_eq!(pg.edges_count(), 4);
        assert!(pg.is_perfect());
    }

    #[test]
    fn loops_are_not_perfect() {
        let pg = passage_graph(&looped_grid());
        assert_eq!(pg.nodes_count(), 13);
        assert_eq!(pg.edges_count(), 14);
        assert!(!pg.is_perfect());
    }

    #[test]
    fn disconnected_is_not_perfect() {
        let mut g = corridor();
        g.set(Coordinate::new(3, 1), Cell::Wall).unwrap();
        let pg = passage_graph(&g);
        assert_eq!(pg.edges_count() + 2, pg.nodes_count());
        assert!(!pg.is_perfect());
        assert_eq!(pg.distance(Coordinate::new(1, 1), Coordinate::new(5, 1)), None);
    }

    #[test]
    fn empty_grid_is_not_perfect() {
        let pg = passage_graph(&Grid::new(Width(5), Height(5)));
        assert_eq!(pg.nodes_count(), 0);
        assert!(!pg.is_perfect());
    }

    #[test]
    fn distances() {
        let pg = passage_graph(&looped_grid());
        let gc = |x, y| Coordinate::new(x, y);
        assert_eq!(pg.distance(gc(1, 1), gc(1, 1)), Some(0));
        assert_eq!(pg.distance(gc(1, 1), gc(5, 3)), Some(6));
        assert_eq!(pg.distance(gc(1, 1), gc(3, 2)), Some(3));
        assert_eq!(pg.distance(gc(1, 1), gc(0, 0)), None);
    }

    #[test]
    fn carved_walls() {
        assert_eq!(carved_wall_count(&corridor()), 2);
        assert_eq!(carved_wall_count(&looped_grid()), 7);
    }
}
