use crate::error::{MatrixError, MatrixResult};
use crate::matrix::matrix::{Element, Matrix};
use crate::matrix::rref;

/// Solves the linear system held in an augmented matrix (coefficients
/// plus a trailing constant column) and returns the solution as a
/// column vector. The input is not mutated.
pub fn solve_system<T: Element>(augmented: &Matrix<T>) -> MatrixResult<Matrix<T>> {
    if augmented.is_empty() {
        return Err(MatrixError::EmptyMatrix);
    }
    if augmented.cols() <= augmented.rows() {
        return Err(MatrixError::NotAugmented {
            rows: augmented.rows(),
            cols: augmented.cols(),
        });
    }

    let mut reduced = augmented.clone();
    rref::rref(&mut reduced)?;

    let last_col = reduced.cols() - 1;
    let mut solution = Matrix::new(reduced.rows(), 1)?;

    // bottom-up back-substitution, reading only already-solved entries
    for i in (0..reduced.rows()).rev() {
        let diagonal = reduced.at(i, i);
        let constant = reduced.at(i, last_col);

        if diagonal == T::zero() {
            if constant != T::zero() {
                return Err(MatrixError::NoSolution);
            }
            return Err(MatrixError::InfiniteSolutions);
        }

        let mut value = constant;
        for j in i + 1..reduced.rows() {
            value = value - reduced.at(i, j) * solution.at(j, 0);
        }
        solution.set(i, 0, value / diagonal);
    }

    Ok(solution)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solve_2x2() {
        // x + y = 2, x - y = 0
        let system =
            Matrix::from_rows(vec![vec![1.0, 1.0, 2.0], vec![1.0, -1.0, 0.0]]).unwrap();
        let solution = solve_system(&system).unwrap();
        assert_eq!(solution.shape(), (2, 1));
        assert_eq!(solution.to_rows(), vec![vec![1.0], vec![1.0]]);
    }

    #[test]
    fn test_solve_3x3() {
        // 2x + y - z = 8, -3x - y + 2z = -11, -2x + y + 2z = -3
        let system = Matrix::from_rows(vec![
            vec![2.0, 1.0, -1.0, 8.0],
            vec![-3.0, -1.0, 2.0, -11.0],
            vec![-2.0, 1.0, 2.0, -3.0],
        ])
        .unwrap();
        let solution = solve_system(&system).unwrap();
        assert_relative_eq!(solution.at(0, 0), 2.0, max_relative = 1e-12);
        assert_relative_eq!(solution.at(1, 0), 3.0, max_relative = 1e-12);
        assert_relative_eq!(solution.at(2, 0), -1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_solve_inconsistent() {
        // 0x + 0y = 5
        let system = Matrix::from_rows(vec![vec![0.0, 0.0, 5.0]]).unwrap();
        assert_eq!(solve_system(&system).unwrap_err(), MatrixError::NoSolution);
    }

    #[test]
    fn test_solve_underdetermined() {
        // the second equation is twice the first
        let system =
            Matrix::from_rows(vec![vec![1.0, 1.0, 2.0], vec![2.0, 2.0, 4.0]]).unwrap();
        assert_eq!(
            solve_system(&system).unwrap_err(),
            MatrixError::InfiniteSolutions
        );
    }

    #[test]
    fn test_solve_requires_augmentation() {
        let square = Matrix::from_rows(vec![vec![1.0, 1.0], vec![1.0, -1.0]]).unwrap();
        assert_eq!(
            solve_system(&square).unwrap_err(),
            MatrixError::NotAugmented { rows: 2, cols: 2 }
        );

        let narrow = Matrix::<f64>::new(3, 2).unwrap();
        assert!(solve_system(&narrow).is_err());
    }

    #[test]
    fn test_solve_leaves_input_intact() {
        let system =
            Matrix::from_rows(vec![vec![1.0, 1.0, 2.0], vec![1.0, -1.0, 0.0]]).unwrap();
        let copy = system.clone();
        solve_system(&system).unwrap();
        assert_eq!(system, copy);
    }
}
