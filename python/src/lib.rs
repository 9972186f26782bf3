//! codec-python
//!
//! Python bindings for codec-core (PyO3).

use pyo3::prelude::*;

mod ffi;

/// Python module entry point
#[pymodule]
fn rust_codec(m: &Bound<'_, PyModule>) -> PyResult<()> {
    ffi::register(m)?;
    Ok(())
}
