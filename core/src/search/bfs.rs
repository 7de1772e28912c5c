
use std::collections::VecDeque;

use super::{ traverse, Algorithm, Search };

use crate::graph::GridGraph;
use crate::grid::Cell;

/// Beginning at the given start coordinates, perform a breadth-first search
/// for the goal coordinates across the graph.
///
/// Cells are expanded in the order of their distance from the start, so
/// since every step has the same cost, the path found is a shortest one.
pub fn search(graph: &GridGraph, start: Cell, goal: Cell) -> Search {
    traverse(Algorithm::BreadthFirst, graph, start, goal, VecDeque::new())
}

/// This is equivalent to:
/// ```raw
/// search(graph, start, goal).path
/// ```
pub fn path(graph: &GridGraph, start: Cell, goal: Cell) -> Vec<Cell> {
    search(graph, start, goal).path
}
