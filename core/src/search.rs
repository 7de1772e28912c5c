//! Path search on grid graphs.
//!
//! Every search starts from a fresh [`SearchState`], so a graph can be
//! searched repeatedly, or concurrently, without any state carrying
//! over from one search to the next.
//!
//! [`SearchState`]: struct.SearchState.html

pub mod astar;
pub mod bfs;
pub mod dfs;

use crate::graph::GridGraph;
use crate::grid::{ Cell, CellMap };

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// How a cell was discovered during a search.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Link {
    /// The start cell of the search.
    Root,
    /// Discovered while expanding the given cell.
    From(Cell),
}

/// The bookkeeping of a single search: the order in which cells were
/// expanded, how each cell was discovered and, for cost-aware searches,
/// the best known cost of reaching each cell.
#[derive(Clone, Debug)]
pub struct SearchState {
    visited_cells: Vec<Cell>,
    parent: CellMap<Option<Link>>,
    distance: CellMap<Option<u32>>,
}

impl SearchState {
    /// Initialise the bookkeeping for a search on the given graph.
    pub fn new(graph: &GridGraph) -> SearchState {
        SearchState {
            visited_cells: Vec::new(),
            parent: CellMap::new(graph.width(), graph.height(), None),
            distance: CellMap::new(graph.width(), graph.height(), None),
        }
    }

    /// Forget everything recorded so far.
    pub fn reset(&mut self) {
        self.visited_cells.clear();
        self.parent.fill(None);
        self.distance.fill(None);
    }

    /// The expanded cells in the order of expansion.
    pub fn visited_cells(&self) -> &[Cell] {
        &self.visited_cells
    }

    pub fn link(&self, c: Cell) -> Option<Link> {
        self.parent.get(c).and_then(|l| *l)
    }

    /// The cell from which the given cell was discovered. `None` for the
    /// start cell and for cells that were never discovered.
    pub fn get_parent(&self, c: Cell) -> Option<Cell> {
        match self.link(c) {
            Some(Link::From(p)) => Some(p),
            _ => None,
        }
    }

    pub fn is_discovered(&self, c: Cell) -> bool {
        self.link(c).is_some()
    }

    /// The best known cost of reaching a cell. Only recorded by A*.
    pub fn distance(&self, c: Cell) -> Option<u32> {
        self.distance.get(c).and_then(|d| *d)
    }

    /// Trace the path from the start of the search to the given goal
    /// by following the parent links. The path is empty if the goal
    /// was never discovered.
    pub fn trace_path(&self, goal: Cell) -> Vec<Cell> {
        let mut path = Vec::new();
        let mut current = goal;
        // A chain of parent links visits every cell at most once.
        let max_len = self.parent.width() * self.parent.height();
        loop {
            match self.link(current) {
                None => return Vec::new(),
                Some(Link::Root) => {
                    path.push(current);
                    break
                }
                Some(Link::From(p)) => {
                    path.push(current);
                    if path.len() > max_len {
                        return Vec::new()
                    }
                    current = p;
                }
            }
        }
        path.reverse();
        path
    }

    pub(crate) fn visit(&mut self, c: Cell) {
        self.visited_cells.push(c);
    }

    pub(crate) fn set_root(&mut self, c: Cell) {
        self.parent.insert(c, Some(Link::Root));
    }

    pub(crate) fn set_parent(&mut self, c: Cell, p: Cell) {
        self.parent.insert(c, Some(Link::From(p)));
    }

    pub(crate) fn set_distance(&mut self, c: Cell, d: u32) {
        self.distance.insert(c, Some(d));
    }
}

/// The outcome of a search: the path from start to goal, empty if the
/// goal is unreachable, and the bookkeeping of the search.
#[derive(Clone, Debug)]
pub struct Search {
    pub path: Vec<Cell>,
    pub state: SearchState,
}

impl Search {
    fn unreachable(state: SearchState) -> Search {
        Search { path: Vec::new(), state }
    }

    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn visited_cells(&self) -> &[Cell] {
        self.state.visited_cells()
    }

    pub fn get_parent(&self, c: Cell) -> Option<Cell> {
        self.state.get_parent(c)
    }
}

/// The available search strategies.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Algorithm {
    DepthFirst,
    BreadthFirst,
    AStar,
}

impl Algorithm {
    pub fn all() -> impl Iterator<Item=Algorithm> {
        [Algorithm::DepthFirst, Algorithm::BreadthFirst, Algorithm::AStar].iter().cloned()
    }

    /// Search for a path from `start` to `goal` on the given graph.
    pub fn run(self, graph: &GridGraph, start: Cell, goal: Cell) -> Search {
        match self {
            Algorithm::DepthFirst   => dfs::search(graph, start, goal),
            Algorithm::BreadthFirst => bfs::search(graph, start, goal),
            Algorithm::AStar        => astar::search(graph, start, goal),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::DepthFirst   => "dfs",
            Algorithm::BreadthFirst => "bfs",
            Algorithm::AStar        => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Algorithm, String> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "depth-first"   => Ok(Algorithm::DepthFirst),
            "bfs" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "astar" | "a*"          => Ok(Algorithm::AStar),
            other => Err(format!("unknown search algorithm {:?}", other)),
        }
    }
}

/// The set of discovered but not yet expanded cells of an uninformed
/// search. The order in which cells are taken determines the search.
trait Frontier {
    fn put(&mut self, c: Cell);
    fn take(&mut self) -> Option<Cell>;
}

/// Last in, first out.
impl Frontier for Vec<Cell> {
    fn put(&mut self, c: Cell) {
        self.push(c)
    }

    fn take(&mut self) -> Option<Cell> {
        self.pop()
    }
}

/// First in, first out.
impl Frontier for VecDeque<Cell> {
    fn put(&mut self, c: Cell) {
        self.push_back(c)
    }

    fn take(&mut self) -> Option<Cell> {
        self.pop_front()
    }
}

/// Expand cells in frontier order until the goal is expanded or the
/// frontier runs dry. Each cell enters the frontier at most once.
fn traverse<F: Frontier>(
    algorithm: Algorithm,
    graph: &GridGraph,
    start: Cell,
    goal: Cell,
    mut frontier: F,
) -> Search {
    let mut state = SearchState::new(graph);
    if !endpoints_in_bounds(algorithm, graph, start, goal) {
        return Search::unreachable(state)
    }
    debug!("{}: searching from {} to {}", algorithm, start, goal);
    frontier.put(start);
    state.set_root(start);
    while let Some(c) = frontier.take() {
        trace!("{}: expanding {}", algorithm, c);
        state.visit(c);
        if c == goal {
            return finish(algorithm, state, goal)
        }
        for n in graph.find_neighbors(c.i, c.j) {
            if !state.is_discovered(n) {
                state.set_parent(n, c);
                frontier.put(n);
            }
        }
    }
    debug!("{}: {} unreachable after {} expansions", algorithm, goal, state.visited_cells.len());
    Search::unreachable(state)
}

fn endpoints_in_bounds(algorithm: Algorithm, graph: &GridGraph, start: Cell, goal: Cell) -> bool {
    for (what, c) in &[("start", start), ("goal", goal)] {
        if !graph.is_cell_in_bounds(c.i, c.j) {
            warn!("{}: {} {} is outside the {}x{} grid",
                  algorithm, what, c, graph.width(), graph.height());
            return false
        }
    }
    true
}

fn finish(algorithm: Algorithm, state: SearchState, goal: Cell) -> Search {
    let path = state.trace_path(goal);
    debug!("{}: reached {} after {} expansions, path of {} cells",
           algorithm, goal, state.visited_cells.len(), path.len());
    Search { path, state }
}
