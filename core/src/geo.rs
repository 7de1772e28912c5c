//! Geometry of a square cell grid placed in a 2d cartesian world frame.

use nalgebra::geometry::Point2;

use crate::error::{ Error, Result };
use crate::grid::Cell;

/// The placement of a grid in the world: the world coordinates of the
/// outer corner of cell `(0,0)` and the side length of a cell.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Frame {
    pub(crate) origin: Point2<f64>,
    pub(crate) meters_per_cell: f64,
}

impl Frame {
    pub fn new(origin: Point2<f64>, meters_per_cell: f64) -> Result<Frame> {
        if !(meters_per_cell.is_finite() && meters_per_cell > 0.) {
            return Err(Error::InvalidParameter {
                name: "meters per cell",
                value: meters_per_cell,
            })
        }
        Ok(Frame { origin, meters_per_cell })
    }

    pub fn origin(&self) -> Point2<f64> {
        self.origin
    }

    pub fn meters_per_cell(&self) -> f64 {
        self.meters_per_cell
    }

    /// The cell containing the given world position. No bounds
    /// check is performed.
    pub fn pos_to_cell(&self, x: f64, y: f64) -> Cell {
        let i = ((x - self.origin.x) / self.meters_per_cell).floor();
        let j = ((y - self.origin.y) / self.meters_per_cell).floor();
        Cell::new(i as i32, j as i32)
    }

    /// The world position of the center of a cell.
    pub fn cell_to_pos(&self, i: i32, j: i32) -> Point2<f64> {
        let x = self.origin.x + (f64::from(i) + 0.5) * self.meters_per_cell;
        let y = self.origin.y + (f64::from(j) + 0.5) * self.meters_per_cell;
        Point2::new(x, y)
    }

    /// Convert a world distance to a number of whole cells, rounding up.
    pub fn cells_spanned(&self, dist: f64) -> i32 {
        (dist / self.meters_per_cell).ceil() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::*;
    use rand::Rng;

    impl Arbitrary for Frame {
        fn arbitrary<G: Gen>(g: &mut G) -> Frame {
            let ox = g.gen::<i16>() as f64 / 8.;
            let oy = g.gen::<i16>() as f64 / 8.;
            let mpc = g.gen_range(1u32, 101u32) as f64 / 100.;
            Frame { origin: Point2::new(ox, oy), meters_per_cell: mpc }
        }
    }

    #[test]
    fn reject_degenerate_cell_size() {
        let o = Point2::new(0., 0.);
        assert!(Frame::new(o, 0.).is_err());
        assert!(Frame::new(o, -0.05).is_err());
        assert!(Frame::new(o, std::f64::NAN).is_err());
        assert!(Frame::new(o, 0.05).is_ok());
    }

    #[test]
    fn cell_centers() {
        let f = Frame::new(Point2::new(-1., 2.), 0.5).unwrap();
        assert_eq!(f.cell_to_pos(0, 0), Point2::new(-0.75, 2.25));
        assert_eq!(f.pos_to_cell(-1., 2.), Cell::new(0, 0));
        assert_eq!(f.pos_to_cell(-1.01, 1.99), Cell::new(-1, -1));
        assert_eq!(f.pos_to_cell(0.2, 3.6), Cell::new(2, 3));
        assert_eq!(f.cells_spanned(0.15), 1);
        assert_eq!(f.cells_spanned(1.0), 2);
        assert_eq!(f.cells_spanned(1.1), 3);
    }

    #[test]
    fn prop_pos_in_cell_bounds() {
        fn prop(f: Frame, x: i16, y: i16) -> bool {
            let (x, y) = (x as f64 / 10., y as f64 / 10.);
            let c = f.pos_to_cell(x, y);
            let p = f.cell_to_pos(c.i, c.j);
            let half = f.meters_per_cell / 2. + 1e-6;
            (p.x - x).abs() <= half && (p.y - y).abs() <= half
        }
        quickcheck(prop as fn(Frame, i16, i16) -> bool);
    }

    #[test]
    fn prop_center_maps_to_cell() {
        fn prop(f: Frame, i: i16, j: i16) -> bool {
            let p = f.cell_to_pos(i as i32, j as i32);
            f.pos_to_cell(p.x, p.y) == Cell::new(i as i32, j as i32)
        }
        quickcheck(prop as fn(Frame, i16, i16) -> bool);
    }
}
