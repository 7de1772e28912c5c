//! Dense per-cell storage for search bookkeeping.

use super::Cell;

/// A value for every cell of a `width` x `height` grid, stored
/// row by row and indexed by `(row, column)`.
#[derive(Clone, Debug)]
pub struct CellMap<T> {
    width: usize,
    height: usize,
    values: Vec<T>,
}

impl<T: Clone> CellMap<T> {
    pub fn new(width: usize, height: usize, init: T) -> CellMap<T> {
        CellMap { width, height, values: vec![init; width * height] }
    }

    /// Reset every cell to the given value.
    pub fn fill(&mut self, value: T) {
        for v in self.values.iter_mut() {
            *v = value.clone();
        }
    }
}

impl<T> CellMap<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, c: Cell) -> Option<&T> {
        self.index(c).map(move |k| &self.values[k])
    }

    pub fn get_mut(&mut self, c: Cell) -> Option<&mut T> {
        match self.index(c) {
            Some(k) => Some(&mut self.values[k]),
            None => None,
        }
    }

    /// Store a value for a cell, returning the previous one.
    /// Cells outside the map are ignored and yield `None`.
    pub fn insert(&mut self, c: Cell, value: T) -> Option<T> {
        self.get_mut(c).map(|v| std::mem::replace(v, value))
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
