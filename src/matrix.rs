//! Fixed-width, append-only-height 2D storage.
//!
//! [`ScoreMatrix`] keeps its cells in a single row-major `Vec`, so a full row is
//! a contiguous slice and `(column, row)` lookups are one multiplication away.
//! The width never changes after construction; rows can only be added whole.
//!
//! Out-of-bounds access is a bug in the caller and panics.

use std::ops::{Index, IndexMut};

/// A row-major matrix with a fixed width and a growable height.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreMatrix<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Clone> ScoreMatrix<T> {
    /// Creates a `width` x `height` matrix with every cell set to `initial`.
    pub fn new(width: usize, height: usize, initial: T) -> Self {
        Self {
            cells: vec![initial; width * height],
            width,
            height,
        }
    }

    /// Returns a copy of this matrix with `row` inserted at index `at`.
    pub fn inserting_row(&self, at: usize, row: Vec<T>) -> Self {
        let mut copy = self.clone();
        copy.insert_row(at, row);
        copy
    }
}

impl<T> ScoreMatrix<T> {
    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn offset(&self, column: usize, row: usize) -> usize {
        assert!(
            column < self.width && row < self.height,
            "matrix index ({column}, {row}) out of bounds for {}x{}",
            self.width,
            self.height
        );
        row * self.width + column
    }

    /// Returns the cell at `(column, row)`.
    ///
    /// # Panics
    /// If `column >= width` or `row >= height`.
    #[inline]
    pub fn get(&self, column: usize, row: usize) -> &T {
        &self.cells[self.offset(column, row)]
    }

    /// Overwrites the cell at `(column, row)`.
    ///
    /// # Panics
    /// If `column >= width` or `row >= height`.
    #[inline]
    pub fn set(&mut self, column: usize, row: usize, value: T) {
        let offset = self.offset(column, row);
        self.cells[offset] = value;
    }

    /// Returns all cells of row `row`, left to right.
    ///
    /// # Panics
    /// If `row >= height`.
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.height, "row {row} out of bounds for height {}", self.height);
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks_exact(0) panics, and a zero-width matrix has only empty rows
        (0..self.height).map(move |row| &self.cells[row * self.width..(row + 1) * self.width])
    }

    /// Builds a matrix of the same shape with every cell passed through `transform`.
    pub fn map<U, F>(&self, transform: F) -> ScoreMatrix<U>
    where
        F: FnMut(&T) -> U,
    {
        ScoreMatrix {
            cells: self.cells.iter().map(transform).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Inserts a full row before row `at`, shifting the following rows down.
    ///
    /// # Panics
    /// If `row.len() != width` or `at > height`.
    pub fn insert_row(&mut self, at: usize, row: Vec<T>) {
        assert_eq!(row.len(), self.width, "row length must equal the matrix width");
        assert!(at <= self.height, "cannot insert row {at} into height {}", self.height);
        let offset = at * self.width;
        self.cells.splice(offset..offset, row);
        self.height += 1;
        debug_assert_eq!(self.cells.len(), self.width * self.height);
    }

    /// Appends a full row at the bottom.
    ///
    /// # Panics
    /// If `row.len() != width`.
    pub fn append_row(&mut self, row: Vec<T>) {
        self.insert_row(self.height, row);
    }
}

impl<T> Index<(usize, usize)> for ScoreMatrix<T> {
    type Output = T;

    fn index(&self, (column, row): (usize, usize)) -> &Self::Output {
        self.get(column, row)
    }
}

impl<T> IndexMut<(usize, usize)> for ScoreMatrix<T> {
    fn index_mut(&mut self, (column, row): (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(column, row);
        &mut self.cells[offset]
    }
}
