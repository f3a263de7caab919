use bytemuck::Pod;
use std::hash::{Hash, Hasher};

/// Dense row-major 2D matrix backed by a flat Vec.
#[derive(Debug, Clone)]
pub struct Matrix2<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Clone> Matrix2<T> {
    pub fn new(rows: usize, cols: usize, init: T) -> Self {
        Self {
            data: vec![init; rows * cols],
            rows,
            cols,
        }
    }

    /// Builds an `n x n` matrix, filling each cell with `f(row, col)`.
    pub fn square_from_fn(n: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                data.push(f(row, col));
            }
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.cols + col]
    }

    #[inline(always)]
    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row * self.cols + col]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }
}

// Implement PartialEq, Eq and Hash using a byte-wise comparison.
impl<T: Pod> PartialEq for Matrix2<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && bytemuck::cast_slice::<T, u8>(&self.data)
                == bytemuck::cast_slice::<T, u8>(&other.data)
    }
}

impl<T: Pod> Eq for Matrix2<T> {}

impl<T: Pod> Hash for Matrix2<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rows.hash(state);
        self.cols.hash(state);
        bytemuck::cast_slice::<T, u8>(&self.data).hash(state);
    }
}
