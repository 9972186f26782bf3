//! utils.rs
//! Shared validation helpers invoked by the codecs before interpreting bytes.
//!
//! All helpers are pure: they only look at their arguments and never allocate
//! on the success path.

use std::fmt;
use num_enum::TryFromPrimitive;

/// Fixed-width buffer had the wrong size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthError {
    pub actual: usize,
    pub expected: usize,
}

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "length mismatch: expected {} bytes, got {}",
            self.expected, self.actual
        )
    }
}

impl std::error::Error for LengthError {}

/// Numeric field outside its valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeError {
    pub field: &'static str,
    pub value: i128,
    pub min: i128,
    pub max: i128,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} out of range: {} not in [{}, {}]",
            self.field, self.value, self.min, self.max
        )
    }
}

impl std::error::Error for RangeError {}

/// Fails with `LengthError` unless `bytes` is exactly `expected` long.
#[inline]
pub fn check_length(bytes: &[u8], expected: usize) -> Result<(), LengthError> {
    if bytes.len() != expected {
        return Err(LengthError { actual: bytes.len(), expected });
    }
    Ok(())
}

/// Fails with `RangeError` unless `min <= value <= max`.
#[inline]
pub fn check_range<V>(field: &'static str, value: V, min: V, max: V) -> Result<(), RangeError>
where
    V: PartialOrd + Into<i128> + Copy,
{
    if value < min || value > max {
        return Err(RangeError {
            field,
            value: value.into(),
            min: min.into(),
            max: max.into(),
        });
    }
    Ok(())
}

pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:x}", raw),
    }
}

/// Hex preview of a buffer for error messages, truncated to 16 bytes.
pub fn fmt_bytes(b: &[u8]) -> String {
    const PREVIEW: usize = 16;
    if b.len() <= PREVIEW {
        format!("0x{}", hex::encode(b))
    } else {
        format!("0x{}.. ({} bytes)", hex::encode(&b[..PREVIEW]), b.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_length_accepts_exact() {
        assert!(check_length(&[0u8; 12], 12).is_ok());
    }

    #[test]
    fn check_length_reports_actual_and_expected() {
        let err = check_length(&[0u8; 3], 12).unwrap_err();
        assert_eq!(err, LengthError { actual: 3, expected: 12 });
        assert_eq!(err.to_string(), "length mismatch: expected 12 bytes, got 3");
    }

    #[test]
    fn check_range_bounds_inclusive() {
        assert!(check_range("nanos", 0u32, 0, 999_999_999).is_ok());
        assert!(check_range("nanos", 999_999_999u32, 0, 999_999_999).is_ok());
        let err = check_range("nanos", 1_000_000_000u32, 0, 999_999_999).unwrap_err();
        assert_eq!(err.value, 1_000_000_000);
        assert_eq!(
            err.to_string(),
            "nanos out of range: 1000000000 not in [0, 999999999]"
        );
    }

    #[test]
    fn fmt_bytes_truncates_long_input() {
        assert_eq!(fmt_bytes(&[0xab, 0xcd]), "0xabcd");
        assert!(fmt_bytes(&[0u8; 40]).ends_with("(40 bytes)"));
    }
}
