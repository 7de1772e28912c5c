//! The footprint of a disk-shaped robot on the grid.

use nalgebra::core::Vector2;

use crate::error::{ Error, Result };
use crate::geo::Frame;
use super::Cell;

/// The offsets, relative to the cell occupied by the center of the
/// robot, of all cells covered by a discretized disk of radius
/// `radius_cells - 1`.
#[derive(Clone, PartialEq, Debug)]
pub struct CollisionMask {
    radius_cells: i32,
    offsets: Vec<Vector2<i32>>,
}

impl CollisionMask {
    /// Build the mask for a robot whose radius spans `radius_cells`
    /// cells. The offsets are ordered row by row.
    pub fn new(radius_cells: i32) -> CollisionMask {
        Self::bounded(radius_cells, radius_cells)
    }

    /// Build the mask for a robot whose radius spans `radius_cells` cells,
    /// keeping only offsets of at most `reach` cells along either axis.
    ///
    /// With `reach` set to the largest offset between two cells of a grid,
    /// the mask gives the same collisions as the full disk for every
    /// center inside that grid.
    pub fn bounded(radius_cells: i32, reach: i32) -> CollisionMask {
        let r = radius_cells.saturating_sub(1).max(0);
        let r2 = i64::from(r) * i64::from(r);
        let n = r.min(reach.max(0));
        let side = 2 * n as usize + 1;
        let mut offsets = Vec::with_capacity(side * side);
        for dj in -n ..= n {
            for di in -n ..= n {
                if i64::from(di) * i64::from(di) + i64::from(dj) * i64::from(dj) <= r2 {
                    offsets.push(Vector2::new(di, dj));
                }
            }
        }
        CollisionMask { radius_cells, offsets }
    }

    /// Build the mask for a robot of the given radius in world units,
    /// for use on a grid of `width` x `height` cells.
    pub fn from_radius(frame: &Frame, radius: f64, width: usize, height: usize)
            -> Result<CollisionMask> {
        if !(radius.is_finite() && radius > 0.) {
            return Err(Error::InvalidParameter { name: "collision radius", value: radius })
        }
        let reach = width.max(height).saturating_sub(1).min(i32::max_value() as usize) as i32;
        let mask = Self::bounded(frame.cells_spanned(radius), reach);
        debug!("Collision mask for radius {} spans {} cells ({} offsets)",
               radius, mask.radius_cells, mask.offsets.len());
        Ok(mask)
    }

    pub fn radius_cells(&self) -> i32 {
        self.radius_cells
    }

    pub fn offsets(&self) -> &[Vector2<i32>] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Whether a relative offset is covered by the mask.
    pub fn covers(&self, di: i32, dj: i32) -> bool {
        self.offsets.iter().any(|v| v.x == di && v.y == dj)
    }

    /// The absolute cells covered when the robot is centered on `c`.
    /// Cells may lie outside the grid.
    pub fn cells_around(&self, c: Cell) -> impl Iterator<Item=Cell> + '_ {
        self.offsets.iter().map(move |v| c + *v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::geometry::Point2;
    use quickcheck::*;

    #[test]
    fn test_small_masks() {
        assert_eq!(CollisionMask::new(1).offsets(), &[Vector2::new(0, 0)][..]);
        let plus = CollisionMask::new(2);
        assert_eq!(plus.len(), 5);
        assert!(plus.covers(0, 0) && plus.covers(1, 0) && plus.covers(0, -1));
        assert!(!plus.covers(1, 1));
        assert_eq!(CollisionMask::new(3).len(), 13);
    }

    #[test]
    fn test_from_radius() {
        let f = Frame::new(Point2::new(0., 0.), 0.05).unwrap();
        let m = CollisionMask::from_radius(&f, 0.15, 10, 10).unwrap();
        assert_eq!(m.radius_cells(), 3);
        assert_eq!(m.len(), 13);
        assert_eq!(CollisionMask::from_radius(&f, 0.01, 10, 10).unwrap().len(), 1);
        assert!(CollisionMask::from_radius(&f, 0., 10, 10).is_err());
        assert!(CollisionMask::from_radius(&f, -1., 10, 10).is_err());
    }

    #[test]
    fn test_huge_radius_bounded_by_grid() {
        let f = Frame::new(Point2::new(0., 0.), 1.).unwrap();
        let m = CollisionMask::from_radius(&f, 1.0e9, 4, 3).unwrap();
        assert_eq!(m.radius_cells(), 1_000_000_000);
        assert_eq!(m.len(), 7 * 7);
        assert!(m.covers(3, -3) && !m.covers(4, 0));
    }

    #[test]
    fn prop_bounded_matches_disk_within_reach() {
        fn prop(r: u8, reach: u8, di: i8, dj: i8) -> bool {
            let cells = (r % 12) as i32 + 1;
            let reach = (reach % 8) as i32;
            let (di, dj) = ((di % 8) as i32, (dj % 8) as i32);
            let full = CollisionMask::new(cells);
            let m = CollisionMask::bounded(cells, reach);
            let within = di.abs() <= reach && dj.abs() <= reach;
            m.covers(di, dj) == (within && full.covers(di, dj))
        }
        quickcheck(prop as fn(u8, u8, i8, i8) -> bool);
    }

    #[test]
    fn prop_disk_membership() {
        fn prop(r: u8, di: i8, dj: i8) -> bool {
            let cells = (r % 12) as i32 + 1;
            let (di, dj) = ((di % 16) as i32, (dj % 16) as i32);
            let m = CollisionMask::new(cells);
            let inside = di * di + dj * dj <= (cells - 1) * (cells - 1);
            m.covers(di, dj) == inside
        }
        quickcheck(prop as fn(u8, i8, i8) -> bool);
    }

    #[test]
    fn prop_mask_symmetric() {
        fn prop(r: u8) -> bool {
            let m = CollisionMask::new((r % 12) as i32 + 1);
            m.offsets().iter().all(|v| m.covers(-v.x, v.y) && m.covers(v.y, v.x))
        }
        quickcheck(prop as fn(u8) -> bool);
    }
}
