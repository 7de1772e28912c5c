//! Grid graphs: occupancy grids whose cells are connected to their
//! axis-aligned neighbours whenever a robot centered on the neighbour
//! would be free of collisions.

use nalgebra::geometry::Point2;

use std::path::Path;

use crate::error::{ Error, Result };
use crate::geo::Frame;
use crate::grid::{ Cell, CollisionMask, Direction, OccupancyGrid };
use crate::map::MapData;

/// Classification and footprint parameters of a grid graph.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GraphConfig {
    /// Cells with a log-odds value at or above the threshold are occupied.
    /// Default: -100
    pub threshold: i32,
    /// Radius of the robot in world units.
    /// Default: 0.15
    pub collision_radius: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            threshold: -100,
            collision_radius: 0.15,
        }
    }
}

impl GraphConfig {
    pub fn with_threshold(mut self, threshold: i32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_collision_radius(mut self, radius: f64) -> Self {
        self.collision_radius = radius;
        self
    }
}

/// An occupancy grid placed in the world, together with the collision
/// mask of the robot that moves across it.
///
/// The graph is never modified by a search, so a single graph may be
/// shared by any number of concurrent searches.
#[derive(Clone, Debug)]
pub struct GridGraph {
    map: MapData,
    config: GraphConfig,
    mask: CollisionMask,
}

impl GridGraph {
    pub fn new(map: MapData, config: GraphConfig) -> Result<GridGraph> {
        let mask = CollisionMask::from_radius(
            &map.frame, config.collision_radius, map.width(), map.height())?;
        Ok(GridGraph { map, config, mask })
    }

    /// Load a map file and build a graph from it.
    pub fn load<P: AsRef<Path>>(path: P, config: GraphConfig) -> Result<GridGraph> {
        Self::new(MapData::load(path)?, config)
    }

    pub fn map(&self) -> &MapData {
        &self.map
    }

    pub fn frame(&self) -> &Frame {
        &self.map.frame
    }

    pub fn grid(&self) -> &OccupancyGrid {
        &self.map.grid
    }

    pub fn width(&self) -> usize {
        self.map.width()
    }

    pub fn height(&self) -> usize {
        self.map.height()
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn threshold(&self) -> i32 {
        self.config.threshold
    }

    pub fn set_threshold(&mut self, threshold: i32) {
        self.config.threshold = threshold;
    }

    pub fn collision_radius(&self) -> f64 {
        self.config.collision_radius
    }

    pub fn collision_radius_cells(&self) -> i32 {
        self.mask.radius_cells()
    }

    pub fn collision_mask(&self) -> &CollisionMask {
        &self.mask
    }

    /// Change the radius of the robot, rebuilding the collision mask.
    /// On error the graph is left unchanged.
    pub fn set_collision_radius(&mut self, radius: f64) -> Result<()> {
        self.mask = CollisionMask::from_radius(
            &self.map.frame, radius, self.map.width(), self.map.height())?;
        self.config.collision_radius = radius;
        Ok(())
    }

    pub fn pos_to_cell(&self, x: f64, y: f64) -> Cell {
        self.map.frame.pos_to_cell(x, y)
    }

    pub fn cell_to_pos(&self, i: i32, j: i32) -> Point2<f64> {
        self.map.frame.cell_to_pos(i, j)
    }

    pub fn is_cell_in_bounds(&self, i: i32, j: i32) -> bool {
        self.map.grid.contains(Cell::new(i, j))
    }

    /// Whether a cell is occupied, failing for cells outside the grid.
    pub fn is_cell_occupied(&self, i: i32, j: i32) -> Result<bool> {
        self.map.grid.get(Cell::new(i, j))
            .map(|v| self.is_occupied_value(v))
            .ok_or(Error::OutOfBounds { i, j })
    }

    /// Classify many cells at once. Fails on the first cell outside
    /// the grid.
    pub fn are_cells_occupied<I>(&self, cells: I) -> Result<Vec<bool>>
    where I: IntoIterator<Item=Cell> {
        cells.into_iter().map(|c| self.is_cell_occupied(c.i, c.j)).collect()
    }

    /// Whether any of the given cells is occupied. Fails on the first
    /// cell outside the grid that is inspected.
    pub fn any_occupied<I>(&self, cells: I) -> Result<bool>
    where I: IntoIterator<Item=Cell> {
        for c in cells {
            if self.is_cell_occupied(c.i, c.j)? {
                return Ok(true)
            }
        }
        Ok(false)
    }

    /// Whether the robot centered on the given cell overlaps an occupied
    /// cell. Parts of the footprint outside the grid are ignored.
    pub fn check_collision(&self, i: i32, j: i32) -> bool {
        self.mask.cells_around(Cell::new(i, j))
            .filter_map(|c| self.map.grid.get(c))
            .any(|v| self.is_occupied_value(v))
    }

    /// The in-bounds, collision-free neighbours of a cell, in the order
    /// east, west, north, south.
    pub fn find_neighbors(&self, i: i32, j: i32) -> Vec<Cell> {
        let c = Cell::new(i, j);
        Direction::all()
            .map(|d| c.neighbour(d))
            .filter(|n| self.is_cell_in_bounds(n.i, n.j) && !self.check_collision(n.i, n.j))
            .collect()
    }

    /// Render the underlying map in its text format.
    pub fn as_string(&self) -> String {
        self.map.to_string()
    }

    fn is_occupied_value(&self, v: i8) -> bool {
        i32::from(v) >= self.config.threshold
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use quickcheck::Gen;
    use rand::Rng;

    pub const FREE: i8 = -120;
    pub const OCCUPIED: i8 = 0;

    /// Build a graph with one-meter cells from rows of `.` (free) and
    /// `#` (occupied), the first row being `j = 0`. The robot covers
    /// `radius_cells` cells.
    pub fn graph_from_rows(rows: &[&str], radius_cells: i32) -> GridGraph {
        let width = rows[0].len();
        let odds = rows.iter()
            .flat_map(|r| r.chars())
            .map(|ch| if ch == '#' { OCCUPIED } else { FREE })
            .collect();
        let map = MapData::new(Point2::new(0., 0.), 1., width, rows.len(), odds).unwrap();
        let config = GraphConfig::default()
            .with_collision_radius(radius_cells as f64 - 0.5);
        GridGraph::new(map, config).unwrap()
    }

    /// A random graph of up to 8x8 cells with up to 40% obstacles.
    pub fn arbitrary_graph<G: Gen>(g: &mut G, max_density: u32) -> GridGraph {
        let width = g.gen_range(1usize, 9usize);
        let height = g.gen_range(1usize, 9usize);
        let density = g.gen_range(0u32, max_density + 1);
        let odds = (0 .. width * height)
            .map(|_| if g.gen_range(0u32, 100u32) < density { OCCUPIED } else { FREE })
            .collect();
        let radius_cells = g.gen_range(1i32, 3i32);
        let map = MapData::new(Point2::new(0., 0.), 1., width, height, odds).unwrap();
        let config = GraphConfig::default()
            .with_collision_radius(radius_cells as f64 - 0.5);
        GridGraph::new(map, config).unwrap()
    }

    pub fn arbitrary_cell<G: Gen>(g: &mut G, graph: &GridGraph) -> Cell {
        Cell::new(g.gen_range(0, graph.width() as i32), g.gen_range(0, graph.height() as i32))
    }
}
