use num_traits::Float;

use crate::error::{MatrixError, MatrixResult};
use itertools::Itertools;
use std::fmt;
use std::ops;

pub trait Element:  // Avoid repeating all the traits
    Float + fmt::Debug + fmt::Display
{
}

impl<T> Element for T where T: Float + fmt::Debug + fmt::Display {}

/// Dense row-major matrix with fixed dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Element> Matrix<T> {
    /// Zero-filled matrix. Dimensions are immutable afterwards.
    pub fn new(rows: usize, cols: usize) -> MatrixResult<Matrix<T>> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimension { rows, cols });
        }
        Ok(Matrix {
            rows,
            cols,
            cells: vec![T::zero(); rows * cols],
        })
    }

    pub fn identity(n: usize) -> MatrixResult<Matrix<T>> {
        if n == 0 {
            return Err(MatrixError::InvalidDimension { rows: n, cols: n });
        }
        Ok(Matrix {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
        })
    }

    /// Builds a matrix from row vectors. All rows must have the same length.
    pub fn from_rows(lines: Vec<Vec<T>>) -> MatrixResult<Matrix<T>> {
        let rows = lines.len();
        let cols = lines.first().map_or(0, |line| line.len());
        if rows == 0 || cols == 0 || lines.iter().any(|line| line.len() != cols) {
            return Err(MatrixError::InvalidDimension { rows, cols });
        }
        Ok(Matrix {
            rows,
            cols,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> T {
        debug_assert!(
            row < self.rows && col < self.cols,
            "index [{},{}] out of range",
            row,
            col
        );
        self.cells[row * self.cols + col]
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(
            row < self.rows && col < self.cols,
            "index [{},{}] out of range",
            row,
            col
        );
        self.cells[row * self.cols + col] = value;
    }

    /// Bounds-checked element read, for callers outside the crate's control.
    pub fn checked_at(&self, row: usize, col: usize) -> MatrixResult<T> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfRange { row, col });
        }
        Ok(self.cells[row * self.cols + col])
    }

    pub fn checked_set(&mut self, row: usize, col: usize, value: T) -> MatrixResult<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfRange { row, col });
        }
        self.cells[row * self.cols + col] = value;
        Ok(())
    }

    /// In-place transpose. Only defined for square matrices.
    pub fn transpose(&mut self) -> MatrixResult<()> {
        if self.is_empty() {
            return Err(MatrixError::EmptyMatrix);
        }
        if !self.is_square() {
            return Err(MatrixError::SquareMatrixRequired {
                rows: self.rows,
                cols: self.cols,
            });
        }
        for row in 0..self.rows {
            for col in row + 1..self.cols {
                self.cells.swap(row * self.cols + col, col * self.cols + row);
            }
        }
        Ok(())
    }

    /// Rotates a square matrix 90 degrees clockwise.
    pub fn rotate_clockwise(&mut self) -> MatrixResult<()> {
        self.transpose()?;
        self.mirror_columns();
        Ok(())
    }

    /// Rotates a square matrix 90 degrees counter-clockwise.
    pub fn rotate_counter_clockwise(&mut self) -> MatrixResult<()> {
        if self.is_empty() {
            return Err(MatrixError::EmptyMatrix);
        }
        if !self.is_square() {
            return Err(MatrixError::SquareMatrixRequired {
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.mirror_columns();
        self.transpose()
    }

    fn mirror_columns(&mut self) {
        for row in 0..self.rows {
            let offset = row * self.cols;
            for col in 0..self.cols / 2 {
                self.cells.swap(offset + col, offset + self.cols - 1 - col);
            }
        }
    }
}

impl<T: Element> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        for line in self.cells.chunks(self.cols) {
            writeln!(f, "{}", line.iter().map(|value| format!("{:.3}", value)).join(" "))?;
        }
        Ok(())
    }
}

impl<T: Element> ops::Add<&Matrix<T>> for &Matrix<T> {
    type Output = MatrixResult<Matrix<T>>;

    fn add(self, rhs: &Matrix<T>) -> MatrixResult<Matrix<T>> {
        if self.is_empty() || rhs.is_empty() {
            return Err(MatrixError::EmptyMatrix);
        }
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| *a + *b)
                .collect(),
        })
    }
}

impl<T: Element> ops::Sub<&Matrix<T>> for &Matrix<T> {
    type Output = MatrixResult<Matrix<T>>;

    fn sub(self, rhs: &Matrix<T>) -> MatrixResult<Matrix<T>> {
        if self.is_empty() || rhs.is_empty() {
            return Err(MatrixError::EmptyMatrix);
        }
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| *a - *b)
                .collect(),
        })
    }
}

impl<T: Element> ops::Mul<&Matrix<T>> for &Matrix<T> {
    type Output = MatrixResult<Matrix<T>>;

    fn mul(self, rhs: &Matrix<T>) -> MatrixResult<Matrix<T>> {
        if self.is_empty() || rhs.is_empty() {
            return Err(MatrixError::EmptyMatrix);
        }
        if self.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        Ok(Matrix {
            rows: self.rows,
            cols: rhs.cols,
            cells: (0..self.rows)
                .flat_map(|i| {
                    (0..rhs.cols).map(move |j| {
                        (0..self.cols).fold(T::zero(), |acc, k| acc + self.at(i, k) * rhs.at(k, j))
                    })
                })
                .collect(),
        })
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
