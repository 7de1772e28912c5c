//! A toolkit for path search on occupancy grids, e.g. in the context
//! of planning routes for a disk-shaped robot.

#[macro_use]
extern crate log;
extern crate nalgebra;
extern crate num_traits;
#[macro_use]
extern crate num_derive;
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
extern crate rand;

pub mod error;
pub mod geo;
pub mod graph;
pub mod grid;
pub mod map;
pub mod search;

pub use error::{ Error, Result };
pub use geo::Frame;
pub use graph::{ GraphConfig, GridGraph };
pub use grid::{ Cell, Direction };
pub use map::MapData;
pub use search::{ Algorithm, Search, SearchState };
