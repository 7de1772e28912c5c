//! Rectangular grids of square cells, indexed by column `i`
//! and row `j`.
pub mod cell;
pub mod cellmap;
pub mod mask;
pub mod occupancy;

pub use self::cell::*;
pub use self::cellmap::CellMap;
pub use self::mask::CollisionMask;
pub use self::occupancy::OccupancyGrid;
