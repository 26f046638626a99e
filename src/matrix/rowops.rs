//! Elementary row operations. Every higher-level reduction is expressed
//! in terms of these three mutators.

use crate::error::{MatrixError, MatrixResult};
use crate::matrix::matrix::{Element, Matrix};

fn check_row<T: Element>(m: &Matrix<T>, row: usize) -> MatrixResult<()> {
    if row >= m.rows() {
        return Err(MatrixError::IndexOutOfRange { row, col: 0 });
    }
    Ok(())
}

/// Exchanges every element of two rows. No-op when both indices are equal.
pub fn swap_rows<T: Element>(m: &mut Matrix<T>, row_a: usize, row_b: usize) -> MatrixResult<()> {
    check_row(m, row_a)?;
    check_row(m, row_b)?;
    if row_a == row_b {
        return Ok(());
    }
    for col in 0..m.cols() {
        let value = m.at(row_a, col);
        m.set(row_a, col, m.at(row_b, col));
        m.set(row_b, col, value);
    }
    Ok(())
}

/// Divides every element of `row` by `divisor`.
pub fn scale_row<T: Element>(m: &mut Matrix<T>, row: usize, divisor: T) -> MatrixResult<()> {
    check_row(m, row)?;
    if divisor == T::zero() {
        return Err(MatrixError::DivisionByZero { row });
    }
    for col in 0..m.cols() {
        m.set(row, col, m.at(row, col) / divisor);
    }
    Ok(())
}

/// Adds `scalar` times `source` to `target`, element-wise.
pub fn add_scaled_row<T: Element>(
    m: &mut Matrix<T>,
    target: usize,
    source: usize,
    scalar: T,
) -> MatrixResult<()> {
    check_row(m, target)?;
    check_row(m, source)?;
    for col in 0..m.cols() {
        let value = m.at(target, col) + scalar * m.at(source, col);
        m.set(target, col, value);
    }
    Ok(())
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
