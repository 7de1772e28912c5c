
use super::{ traverse, Algorithm, Search };

use crate::graph::GridGraph;
use crate::grid::Cell;

/// Beginning at the given start coordinates, perform a depth-first search
/// for the goal coordinates across the graph.
///
/// Discovered cells are kept on a stack, so the most recently discovered
/// neighbour is expanded next. The resulting path is not necessarily
/// the shortest one.
pub fn search(graph: &GridGraph, start: Cell, goal: Cell) -> Search {
    traverse(Algorithm::DepthFirst, graph, start, goal, Vec::new())
}

/// This is equivalent to:
/// ```raw
/// search(graph, start, goal).path
/// ```
pub fn path(graph: &GridGraph, start: Cell, goal: Cell) -> Vec<Cell> {
    search(graph, start, goal).path
}
