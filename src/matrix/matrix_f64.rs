use crate::error::MatrixError;
use crate::matrix::matrix::Matrix;
use crate::matrix::{cholesky, rref, solve};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyType;
use std::ops::{Add, Mul, Sub};

impl From<MatrixError> for PyErr {
    fn from(error: MatrixError) -> PyErr {
        PyValueError::new_err(error.to_string())
    }
}

/// `f64` matrix as seen from Python. Frozen: operations return new
/// objects instead of mutating the receiver.
#[derive(Debug, Clone)]
#[pyclass(frozen)]
pub struct MatrixF64 {
    inner: Matrix<f64>,
}

#[pymethods]
impl MatrixF64 {
    #[classmethod]
    pub fn zeros(_cls: &Bound<PyType>, rows: usize, cols: usize) -> PyResult<Self> {
        Ok(MatrixF64 {
            inner: Matrix::new(rows, cols)?,
        })
    }

    #[classmethod]
    pub fn identity(_cls: &Bound<PyType>, n: usize) -> PyResult<Self> {
        Ok(MatrixF64 {
            inner: Matrix::identity(n)?,
        })
    }

    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<f64>>) -> PyResult<Self> {
        Ok(MatrixF64 {
            inner: Matrix::from_rows(lines)?,
        })
    }

    pub fn to_list(&self) -> Vec<Vec<f64>> {
        self.inner.to_rows()
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.cols()
    }

    #[getter]
    pub fn T(&self) -> PyResult<MatrixF64> {
        let mut transposed = self.inner.clone();
        transposed.transpose()?;
        Ok(MatrixF64 { inner: transposed })
    }

    pub fn at(&self, row: usize, col: usize) -> PyResult<f64> {
        Ok(self.inner.checked_at(row, col)?)
    }

    pub fn __add__(&self, rhs: &MatrixF64) -> PyResult<MatrixF64> {
        Ok(MatrixF64 {
            inner: self.inner.add(&rhs.inner)?,
        })
    }

    pub fn __sub__(&self, rhs: &MatrixF64) -> PyResult<MatrixF64> {
        Ok(MatrixF64 {
            inner: self.inner.sub(&rhs.inner)?,
        })
    }

    pub fn __mul__(&self, rhs: &MatrixF64) -> PyResult<MatrixF64> {
        Ok(MatrixF64 {
            inner: self.inner.mul(&rhs.inner)?,
        })
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }

    /// Reduced copy plus the determinant scale factor.
    pub fn rref(&self) -> PyResult<(MatrixF64, f64)> {
        let mut reduced = self.inner.clone();
        let factor = rref::rref(&mut reduced)?;
        Ok((MatrixF64 { inner: reduced }, factor))
    }

    pub fn is_rref(&self) -> bool {
        rref::is_rref(&self.inner)
    }

    pub fn determinant(&self) -> PyResult<f64> {
        Ok(rref::determinant(&self.inner)?)
    }

    pub fn is_linearly_independent(&self) -> PyResult<bool> {
        Ok(rref::is_linearly_independent(&self.inner)?)
    }

    pub fn cholesky(&self) -> PyResult<MatrixF64> {
        Ok(MatrixF64 {
            inner: cholesky::cholesky(&self.inner)?,
        })
    }

    pub fn solve_system(&self) -> PyResult<MatrixF64> {
        Ok(MatrixF64 {
            inner: solve::solve_system(&self.inner)?,
        })
    }

    pub fn rotate_clockwise(&self) -> PyResult<MatrixF64> {
        let mut rotated = self.inner.clone();
        rotated.rotate_clockwise()?;
        Ok(MatrixF64 { inner: rotated })
    }

    pub fn rotate_counter_clockwise(&self) -> PyResult<MatrixF64> {
        let mut rotated = self.inner.clone();
        rotated.rotate_counter_clockwise()?;
        Ok(MatrixF64 { inner: rotated })
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
