//! Gaussian elimination to reduced row echelon form, and the
//! determinant / linear-independence queries built on top of it.

use crate::error::{MatrixError, MatrixResult};
use crate::matrix::matrix::{Element, Matrix};
use crate::matrix::rowops::{add_scaled_row, scale_row, swap_rows};

/// Reduces `m` in place and returns the determinant scale factor: the
/// product of every pivot value before normalization, negated once per
/// row exchange. `determinant` multiplies it with the reduced diagonal.
pub fn rref<T: Element>(m: &mut Matrix<T>) -> MatrixResult<T> {
    if m.is_empty() {
        return Err(MatrixError::EmptyMatrix);
    }

    let mut factor = T::one();
    let mut pivot_col = 0;

    for row in 0..m.rows() {
        if pivot_col >= m.cols() {
            return Ok(factor);
        }

        // first non-zero entry at or below `row`, scanning through the
        // last row inclusive
        let mut i = row;
        while m.at(i, pivot_col) == T::zero() {
            i += 1;
            if i >= m.rows() {
                // dead column, move to the next one
                i = row;
                pivot_col += 1;
                if pivot_col >= m.cols() {
                    return Ok(factor);
                }
            }
        }

        if i != row {
            swap_rows(m, i, row)?;
            // a row exchange flips the determinant sign
            factor = -factor;
        }

        let pivot = m.at(row, pivot_col);
        factor = factor * pivot;
        scale_row(m, row, pivot)?;

        for r in 0..m.rows() {
            if r == row {
                continue;
            }
            let coefficient = m.at(r, pivot_col);
            if coefficient != T::zero() {
                add_scaled_row(m, r, row, -coefficient)?;
            }
        }

        pivot_col += 1;
    }

    Ok(factor)
}

/// Structural check: every pivot is 1 and alone in its column, pivots
/// step rightward, zero rows sit at the bottom.
pub fn is_rref<T: Element>(m: &Matrix<T>) -> bool {
    let mut last_pivot_col = None;

    for row in 0..m.rows() {
        let pivot_col_opt = (0..m.cols()).find(|&col| m.at(row, col) != T::zero());

        if let Some(pivot_col) = pivot_col_opt {
            if let Some(last) = last_pivot_col {
                if pivot_col <= last {
                    return false;
                }
            }
            if m.at(row, pivot_col) != T::one() {
                return false;
            }
            for r in 0..m.rows() {
                if r != row && m.at(r, pivot_col) != T::zero() {
                    return false;
                }
            }
            last_pivot_col = Some(pivot_col);
        } else {
            for r in row + 1..m.rows() {
                if (0..m.cols()).any(|col| m.at(r, col) != T::zero()) {
                    return false;
                }
            }
            break;
        }
    }

    true
}

/// Determinant of a square matrix, via reduction of an internal copy.
pub fn determinant<T: Element>(m: &Matrix<T>) -> MatrixResult<T> {
    if m.is_empty() {
        return Err(MatrixError::EmptyMatrix);
    }
    if !m.is_square() {
        return Err(MatrixError::SquareMatrixRequired {
            rows: m.rows(),
            cols: m.cols(),
        });
    }

    let mut reduced = m.clone();
    let factor = rref(&mut reduced)?;
    let diagonal = (0..reduced.rows()).fold(T::one(), |acc, i| acc * reduced.at(i, i));
    Ok(diagonal * factor)
}

/// The rows of a square matrix are linearly independent iff the
/// determinant is non-zero.
pub fn is_linearly_independent<T: Element>(m: &Matrix<T>) -> MatrixResult<bool> {
    Ok(determinant(m)? != T::zero())
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
