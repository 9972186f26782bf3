//! Python-facing functions. Values cross the boundary as plain ints/strings
//! and bytes; every failure surfaces as `ValueError`.

use chrono::{DateTime, FixedOffset, Utc};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use codec_core::prelude::*;
use codec_core::transaction::{result_from_status, status_of};

fn to_py_err(e: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Encode `(seconds, nanos)` observed at `offset_seconds` east of UTC.
///
/// With `strict=True` a non-zero offset is refused.
#[pyfunction]
#[pyo3(signature = (seconds, nanos, offset_seconds = 0, strict = true))]
fn timestamp_to_bytes<'py>(
    py: Python<'py>,
    seconds: i64,
    nanos: u32,
    offset_seconds: i32,
    strict: bool,
) -> PyResult<Bound<'py, PyBytes>> {
    let offset = FixedOffset::east_opt(offset_seconds)
        .ok_or_else(|| to_py_err(format!("invalid offset: {}", offset_seconds)))?;
    let instant = DateTime::<Utc>::from_timestamp(seconds, nanos)
        .ok_or_else(|| to_py_err(format!("timestamp out of range: {}.{:09}", seconds, nanos)))?;
    let value = instant.with_timezone(&offset);

    let policy = if strict { ZonePolicy::RequireUtc } else { ZonePolicy::AnyZone };
    let bytes = TimestampSerializer::new(policy).to_bytes(&value).map_err(to_py_err)?;
    Ok(PyBytes::new_bound(py, &bytes))
}

/// Decode into `(seconds, nanos)`, always UTC.
#[pyfunction]
fn timestamp_from_bytes(data: &[u8]) -> PyResult<(i64, u32)> {
    let value: DateTime<Utc> = TimestampSerializer::utc_only()
        .from_bytes(data)
        .map_err(to_py_err)?;
    Ok((value.timestamp(), value.timestamp_subsec_nanos()))
}

/// Encode a result given its wire status and description.
#[pyfunction]
#[pyo3(signature = (status, description = String::new()))]
fn transaction_result_to_bytes<'py>(
    py: Python<'py>,
    status: i32,
    description: String,
) -> PyResult<Bound<'py, PyBytes>> {
    let result = result_from_status(status, description).map_err(to_py_err)?;
    let bytes = TransactionResultSerializer::new().to_bytes(&result).map_err(to_py_err)?;
    Ok(PyBytes::new_bound(py, &bytes))
}

/// Decode into `(status, description)`; success yields an empty description.
#[pyfunction]
fn transaction_result_from_bytes(data: &[u8]) -> PyResult<(i32, String)> {
    let result = TransactionResultSerializer::new().from_bytes(data).map_err(to_py_err)?;
    let description = result.description().unwrap_or_default().to_owned();
    Ok((status_of(&result), description))
}

/// Wire code of a registry entry, e.g. `error_code_of("INSUFFICIENT_FUNDS") == 3`.
#[pyfunction]
fn error_code_of(name: &str) -> PyResult<u8> {
    TransactionError::from_name(name)
        .map(TransactionError::code)
        .ok_or_else(|| to_py_err(format!("unknown error name: {}", name)))
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(timestamp_to_bytes, m)?)?;
    m.add_function(wrap_pyfunction!(timestamp_from_bytes, m)?)?;
    m.add_function(wrap_pyfunction!(transaction_result_to_bytes, m)?)?;
    m.add_function(wrap_pyfunction!(transaction_result_from_bytes, m)?)?;
    m.add_function(wrap_pyfunction!(error_code_of, m)?)?;
    Ok(())
}
