use crate::error::{MatrixError, MatrixResult};
use crate::matrix::matrix::{Element, Matrix};

/// Factors a symmetric positive-definite matrix into the lower-triangular
/// `L` with `L * L^T = A`. The input is not mutated; only its lower
/// triangle is read.
pub fn cholesky<T: Element>(a: &Matrix<T>) -> MatrixResult<Matrix<T>> {
    if a.is_empty() {
        return Err(MatrixError::EmptyMatrix);
    }
    if !a.is_square() {
        return Err(MatrixError::SquareMatrixRequired {
            rows: a.rows(),
            cols: a.cols(),
        });
    }

    let n = a.rows();
    let mut lower = Matrix::new(n, n)?;

    for i in 0..n {
        let mut diag_sum = T::zero();
        for j in 0..i {
            let mut sum = T::zero();
            for k in 0..j {
                sum = sum + lower.at(i, k) * lower.at(j, k);
            }
            // lower.at(j, j) > 0: row j passed the radicand check below
            let value = (a.at(i, j) - sum) / lower.at(j, j);
            lower.set(i, j, value);
            diag_sum = diag_sum + value * value;
        }

        let radicand = a.at(i, i) - diag_sum;
        if radicand <= T::zero() {
            return Err(MatrixError::NotPositiveDefinite { row: i });
        }
        lower.set(i, i, radicand.sqrt());
    }

    Ok(lower)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_cholesky_diagonal() {
        let a = Matrix::from_rows(vec![vec![4.0, 0.0], vec![0.0, 9.0]]).unwrap();
        let lower = cholesky(&a).unwrap();
        assert_eq!(lower.to_rows(), vec![vec![2.0, 0.0], vec![0.0, 3.0]]);
    }

    #[test]
    fn test_cholesky_3x3() {
        let a = Matrix::from_rows(vec![
            vec![4.0, 2.0, 1.0],
            vec![2.0, 5.0, 3.0],
            vec![1.0, 3.0, 6.0],
        ])
        .unwrap();
        let lower = cholesky(&a).unwrap();

        // strictly lower-triangular output with positive diagonal
        assert_eq!(lower.at(0, 1), 0.0);
        assert_eq!(lower.at(0, 2), 0.0);
        assert_eq!(lower.at(1, 2), 0.0);
        assert_relative_eq!(lower.at(0, 0), 2.0, max_relative = 1e-12);
        assert_relative_eq!(lower.at(1, 0), 1.0, max_relative = 1e-12);
        assert_relative_eq!(lower.at(1, 1), 2.0, max_relative = 1e-12);

        let mut transposed = lower.clone();
        transposed.transpose().unwrap();
        let reconstructed = (&lower * &transposed).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(reconstructed.at(i, j), a.at(i, j), max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_cholesky_round_trip_random_spd() {
        // A = B * B^T + n * I is symmetric positive definite
        let n = 6;
        let mut rng = StdRng::seed_from_u64(7);
        let b = Matrix::from_rows(
            (0..n)
                .map(|_| (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect())
                .collect(),
        )
        .unwrap();
        let mut b_t = b.clone();
        b_t.transpose().unwrap();
        let mut a = (&b * &b_t).unwrap();
        for i in 0..n {
            a.set(i, i, a.at(i, i) + n as f64);
        }

        let lower = cholesky(&a).unwrap();
        let mut transposed = lower.clone();
        transposed.transpose().unwrap();
        let reconstructed = (&lower * &transposed).unwrap();

        for i in 0..n {
            for j in 0..n {
                assert_relative_eq!(
                    reconstructed.at(i, j),
                    a.at(i, j),
                    epsilon = 1e-9,
                    max_relative = 1e-9
                );
            }
        }
    }

    #[test]
    fn test_cholesky_not_positive_definite() {
        // symmetric but indefinite (eigenvalues 3 and -1)
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 1.0]]).unwrap();
        assert_eq!(
            cholesky(&a).unwrap_err(),
            MatrixError::NotPositiveDefinite { row: 1 }
        );

        let negative = Matrix::from_rows(vec![vec![-1.0]]).unwrap();
        assert_eq!(
            cholesky(&negative).unwrap_err(),
            MatrixError::NotPositiveDefinite { row: 0 }
        );
    }

    #[test]
    fn test_cholesky_requires_square() {
        let a = Matrix::<f64>::new(2, 3).unwrap();
        assert_eq!(
            cholesky(&a).unwrap_err(),
            MatrixError::SquareMatrixRequired { rows: 2, cols: 3 }
        );
    }

    #[test]
    fn test_cholesky_leaves_input_intact() {
        let a = Matrix::from_rows(vec![vec![4.0, 2.0], vec![2.0, 3.0]]).unwrap();
        let copy = a.clone();
        cholesky(&a).unwrap();
        assert_eq!(a, copy);
    }
}
