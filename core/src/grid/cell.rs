//! Cell coordinates and the axis-aligned directions between them.

use nalgebra::core::Vector2;

use std::fmt;
use std::ops::Add;

/// Displacement to the adjacent cell in each direction, in the
/// order of the `Direction` discriminants.
pub const CELL_DIR_VECTORS: [[i32; 2]; 4] =
    [ [1, 0], [-1, 0], [0, 1], [0, -1] ];

/// The coordinates of a cell: `i` is the column (x-direction),
/// `j` is the row (y-direction).
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Cell {
    pub i: i32,
    pub j: i32,
}

impl Cell {
    pub fn new(i: i32, j: i32) -> Cell {
        Cell { i, j }
    }

    /// The adjacent cell in the given direction.
    pub fn neighbour(&self, dir: Direction) -> Cell {
        *self + dir.vector()
    }

    /// Iterate over the four adjacent cells in `Direction` order.
    pub fn neighbours(&self) -> impl Iterator<Item=Cell> + '_ {
        Direction::all().map(move |d| self.neighbour(d))
    }

    /// The straight-line distance to another cell, in cells.
    pub fn distance(&self, other: Cell) -> f64 {
        let di = f64::from(self.i - other.i);
        let dj = f64::from(self.j - other.j);
        (di * di + dj * dj).sqrt()
    }

    /// The number of unit steps between two cells when moving
    /// only along the axes.
    pub fn manhattan(&self, other: Cell) -> u32 {
        ((self.i - other.i).abs() + (self.j - other.j).abs()) as u32
    }
}

impl Add<Vector2<i32>> for Cell {
    type Output = Cell;

    fn add(self, v: Vector2<i32>) -> Cell {
        Cell { i: self.i + v.x, j: self.j + v.y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.i, self.j)
    }
}

/// Directions to the adjacent cells. The discriminants fix the order
/// in which neighbours are enumerated during a search.
#[derive(PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
#[derive(FromPrimitive, Debug)]
pub enum Direction {
    East  = 0,
    West  = 1,
    North = 2,
    South = 3,
}

impl Direction {
    pub fn all() -> impl Iterator<Item=Direction> {
        use num_traits::cast::FromPrimitive;
        (0 .. CELL_DIR_VECTORS.len() as u8).filter_map(Direction::from_u8)
    }

    pub fn vector(self) -> Vector2<i32> {
        Vector2::from(CELL_DIR_VECTORS[self as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::*;
    use rand::Rng;

    impl Arbitrary for Cell {
        fn arbitrary<G: Gen>(g: &mut G) -> Cell {
            Cell::new(g.gen::<i16>() as i32, g.gen::<i16>() as i32)
        }
    }

    impl Arbitrary for Direction {
        fn arbitrary<G: Gen>(g: &mut G) -> Direction {
            use num_traits::cast::FromPrimitive;
            Direction::from_u8(g.gen_range(0u8, 4u8)).unwrap()
        }
    }

    #[test]
    fn test_direction_order() {
        let ns = Cell::new(3, 3).neighbours().collect::<Vec<_>>();
        assert_eq!(ns, vec![ Cell::new(4, 3), Cell::new(2, 3)
                           , Cell::new(3, 4), Cell::new(3, 2) ]);
    }

    #[test]
    fn prop_neighbour_distance() {
        fn prop(c: Cell, d: Direction) -> bool {
            let n = c.neighbour(d);
            c.manhattan(n) == 1 && c.distance(n) == 1.
        }
        quickcheck(prop as fn(Cell, Direction) -> bool);
    }

    #[test]
    fn prop_distance_bounded_by_manhattan() {
        fn prop(a: Cell, b: Cell) -> bool {
            let d = a.distance(b);
            d <= a.manhattan(b) as f64 + 1e-9 && d == b.distance(a)
        }
        quickcheck(prop as fn(Cell, Cell) -> bool);
    }
}
