//! Bounds-checked storage of log-odds occupancy values.

use crate::error::{ Error, Result };
use super::Cell;

/// A `width` x `height` array of signed 8-bit log-odds values,
/// stored row by row. Every access is bounds-checked.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct OccupancyGrid {
    width: usize,
    height: usize,
    odds: Vec<i8>,
}

impl OccupancyGrid {
    /// Wrap row-major occupancy data. The data must contain exactly
    /// `width * height` values.
    pub fn new(width: usize, height: usize, odds: Vec<i8>) -> Result<OccupancyGrid> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidParameter {
                name: "grid size",
                value: (width * height) as f64,
            })
        }
        if odds.len() != width * height {
            return Err(Error::Dimensions { width, height, actual: odds.len() })
        }
        Ok(OccupancyGrid { width, height, odds })
    }

    /// A grid with every cell set to the same value.
    pub fn filled(width: usize, height: usize, value: i8) -> Result<OccupancyGrid> {
        Self::new(width, height, vec![value; width * height])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, c: Cell) -> bool {
        self.index(c).is_some()
    }

    /// The log-odds value of a cell, or `None` if the cell is
    /// outside the grid.
    pub fn get(&self, c: Cell) -> Option<i8> {
        self.index(c).map(|k| self.odds[k])
    }

    pub fn set(&mut self, c: Cell, value: i8) -> Result<()> {
        let k = self.index(c).ok_or(Error::OutOfBounds { i: c.i, j: c.j })?;
        self.odds[k] = value;
        Ok(())
    }

    /// Iterate over the rows of the grid, starting with row `j = 0`.
    pub fn rows(&self) -> impl Iterator<Item=&[i8]> {
        self.odds.chunks(self.width)
    }

    fn index(&self, c: Cell) -> Option<usize> {
        if c.i < 0 || c.j < 0 {
            return None
        }
        let (i, j) = (c.i as usize, c.j as usize);
        if i < self.width && j < self.height {
            Some(j * self.width + i)
        } else {
            None
        }
    }
}
