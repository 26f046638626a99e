use pyo3::prelude::*;

pub mod matrix {
    pub mod cholesky;
    pub mod matrix;
    pub mod matrix_f64;
    pub mod rowops;
    pub mod rref;
    pub mod solve;
}

pub mod error;

/// A Python module implemented in Rust.
#[pymodule]
fn rust_linalg(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<matrix::matrix_f64::MatrixF64>()?;
    Ok(())
}
