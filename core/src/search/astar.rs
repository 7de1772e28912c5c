
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::{ endpoints_in_bounds, finish, Algorithm, Search, SearchState };

use crate::graph::GridGraph;
use crate::grid::{ Cell, CellMap };

/// A node in the "open" list of the A* algorithm to prioritise the search.
struct Open {
    cell: Cell,
    cost: u32,
    priority: f64,
    seq: u64,
}

impl PartialEq for Open {
    fn eq(&self, other: &Open) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Open {}

impl PartialOrd for Open {
    fn partial_cmp(&self, other: &Open) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Open {
    fn cmp(&self, other: &Open) -> Ordering {
        // Lower priorities (= estimated total costs) are considered
        // "greater" for the binary heap. Among equal priorities, the
        // node reached at lower cost is popped first, then the node
        // pushed first.
        other.priority.total_cmp(&self.priority)
            .then_with(|| other.cost.cmp(&self.cost))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Beginning at the given start coordinates, perform an A* search for the
/// goal coordinates across the graph, with unit step costs and the
/// straight-line distance to the goal as heuristic.
///
/// The heuristic never overestimates the remaining number of steps and
/// changes by at most one between adjacent cells, so a cell's cost is
/// final once it is expanded and the path found is a shortest one.
/// A cell may be on the open list several times; all but its cheapest
/// entry are skipped when popped.
pub fn search(graph: &GridGraph, start: Cell, goal: Cell) -> Search {
    let alg = Algorithm::AStar;
    let mut state = SearchState::new(graph);
    if !endpoints_in_bounds(alg, graph, start, goal) {
        return Search::unreachable(state)
    }
    debug!("{}: searching from {} to {}", alg, start, goal);
    let heuristic = |c: Cell| c.distance(goal);
    let mut closed = CellMap::new(graph.width(), graph.height(), false);
    let mut open = BinaryHeap::new();
    let mut seq = 0;
    state.set_root(start);
    state.set_distance(start, 0);
    open.push(Open { cell: start, cost: 0, priority: heuristic(start), seq });
    while let Some(Open { cell, cost, .. }) = open.pop() {
        if closed.insert(cell, true) != Some(false) {
            continue
        }
        trace!("{}: expanding {} at cost {}", alg, cell, cost);
        state.visit(cell);
        if cell == goal {
            return finish(alg, state, goal)
        }
        let new_cost = cost + 1;
        for n in graph.find_neighbors(cell.i, cell.j) {
            if closed.get(n) != Some(&false) {
                continue
            }
            if state.distance(n).map_or(true, |old| new_cost < old) {
                state.set_distance(n, new_cost);
                state.set_parent(n, cell);
                seq += 1;
                let priority = f64::from(new_cost) + heuristic(n);
                open.push(Open { cell: n, cost: new_cost, priority, seq });
            }
        }
    }
    debug!("{}: {} unreachable after {} expansions", alg, goal, state.visited_cells.len());
    Search::unreachable(state)
}

/// This is equivalent to:
/// ```raw
/// search(graph, start, goal).path
/// ```
pub fn path(graph: &GridGraph, start: Cell, goal: Cell) -> Vec<Cell> {
    search(graph, start, goal).path
}
