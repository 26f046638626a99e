use thiserror::Error;

/// Errors that can occur during matrix operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// A matrix needs at least one row and one column.
    #[error("Invalid dimensions: {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },

    /// Operation on a matrix with no rows or columns.
    #[error("Matrix is empty")]
    EmptyMatrix,

    /// Element access outside the matrix bounds.
    #[error("Index [{row},{col}] is out of range")]
    IndexOutOfRange { row: usize, col: usize },

    /// Operand shapes are not compatible.
    #[error("Dimensions not compatible: {left:?} and {right:?}")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Operation only defined for square matrices.
    #[error("Need a square matrix, got {rows}x{cols}")]
    SquareMatrixRequired { rows: usize, cols: usize },

    /// The system is missing its constant column.
    #[error("Matrix of {rows} equations must be augmented with a constant vector, got {cols} columns")]
    NotAugmented { rows: usize, cols: usize },

    /// The system is inconsistent.
    #[error("System has no solutions")]
    NoSolution,

    /// The system has at least one free variable.
    #[error("System has infinitely many solutions")]
    InfiniteSolutions,

    /// Cholesky factorization hit a non-positive diagonal.
    #[error("Matrix is not positive definite (row {row})")]
    NotPositiveDefinite { row: usize },

    /// Row scaling with a zero divisor.
    #[error("Division of row {row} by zero")]
    DivisionByZero { row: usize },
}

/// Result type for matrix operations.
pub type MatrixResult<T> = Result<T, MatrixError>;
