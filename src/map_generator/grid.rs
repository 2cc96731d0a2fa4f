use std::ops::{Index, IndexMut};
use rayon::prelude::*;
use super::error::{GenerationError, Result};

/// A cell of a binary map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Land,
    Water,
}

impl Cell {
    pub fn is_water(self) -> bool {
        self == Cell::Water
    }

    /// `0` for land, `1` for water, the classification handed to renderers.
    pub fn as_u8(self) -> u8 {
        match self {
            Cell::Land => 0,
            Cell::Water => 1,
        }
    }
}

/// Fixed size 2D buffer, addressed as `(row, column)` with `row` in `0..width`
/// and `column` in `0..height`.
///
/// Cells are stored row-major: each of the `width` rows holds `height` cells.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn new(width: usize, height: usize, fill: T) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GenerationError::InvalidDimensions { width, height });
        }
        let len = width.checked_mul(height).ok_or(GenerationError::InvalidDimensions { width, height })?;
        Ok(Self { width, height, cells: vec![fill; len] })
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        if row < self.width && column < self.height {
            Some(&self.cells[self.offset(row, column)])
        } else {
            None
        }
    }

    pub fn set(&mut self, row: usize, column: usize, value: T) {
        let offset = self.offset(row, column);
        self.cells[offset] = value;
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.height)
    }

    /// Every `(row, column)` pair in storage order.
    pub fn coordinates(&self) -> impl Iterator<Item = (usize, usize)> {
        let height = self.height;
        (0..self.width).flat_map(move |row| (0..height).map(move |column| (row, column)))
    }

    pub fn count(&self, predicate: impl Fn(&T) -> bool) -> usize {
        self.cells.iter().filter(|c| predicate(c)).count()
    }

    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Grid<U> {
        Grid { width: self.width, height: self.height, cells: self.cells.iter().map(f).collect() }
    }

    /// Overwrites every cell with `f(row, column)`, one rayon task per row.
    pub(crate) fn par_fill_with<F>(&mut self, f: F)
    where
        T: Send,
        F: Fn(usize, usize) -> T + Sync,
    {
        self.cells
            .par_chunks_mut(self.height)
            .enumerate()
            .for_each(|(row, cells)| {
                for (column, cell) in cells.iter_mut().enumerate() {
                    *cell = f(row, column);
                }
            });
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    fn offset(&self, row: usize, column: usize) -> usize {
        assert!(row < self.width && column < self.height, "cell ({row}, {column}) outside {}x{} grid", self.width, self.height);
        row * self.height + column
    }
}

impl Grid<f64> {
    /// Smallest and largest value in the field.
    pub fn min_max(&self) -> (f64, f64) {
        self.cells.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| (min.min(v), max.max(v)))
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;
    fn index(&self, (row, column): (usize, usize)) -> &T {
        &self.cells[self.offset(row, column)]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        let offset = self.offset(row, column);
        &mut self.cells[offset]
    }
}

/// Signed coordinate access, so neighbourhood and circle scans can step past the
/// border and let the checked variants reject the position.
pub trait IsizeIndexMatrix<T> {
    fn at(&self, i: (isize, isize)) -> &T;
    fn at_mut(&mut self, i: (isize, isize)) -> &mut T;
    fn at_checked(&self, i: (isize, isize)) -> Option<&T>;
    fn at_mut_checked(&mut self, i: (isize, isize)) -> Option<&mut T>;
}

impl<T> IsizeIndexMatrix<T> for Grid<T> {
    fn at(&self, i: (isize, isize)) -> &T {
        &self[(i.0 as usize, i.1 as usize)]
    }
    fn at_mut(&mut self, i: (isize, isize)) -> &mut T {
        &mut self[(i.0 as usize, i.1 as usize)]
    }
    fn at_checked(&self, i: (isize, isize)) -> Option<&T> {
        if i.0 < 0 || i.1 < 0 {
            return None;
        }
        self.get(i.0 as usize, i.1 as usize)
    }
    fn at_mut_checked(&mut self, i: (isize, isize)) -> Option<&mut T> {
        if i.0 < 0 || i.1 < 0 || i.0 as usize >= self.width || i.1 as usize >= self.height {
            return None;
        }
        Some(self.at_mut(i))
    }
}
