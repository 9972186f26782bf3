//! timestamp/decode.rs
//!
//! Deserializes the fixed 12-byte layout. Length is checked before any byte is
//! interpreted; ranges are checked before a `DateTime` is built.

use byteorder::{ByteOrder, LittleEndian};
use chrono::{DateTime, Utc};

use crate::constants::{MAX_NANOS, TIMESTAMP_LEN};
use crate::timestamp::types::TimestampParts;
use crate::types::SerializationError;
use crate::utils::{check_length, check_range, RangeError};

/// Read the raw parts without building a `DateTime`.
#[inline]
pub fn decode_timestamp_parts_le(buf: &[u8]) -> Result<TimestampParts, SerializationError> {
    check_length(buf, TIMESTAMP_LEN)?;

    let seconds = LittleEndian::read_i64(&buf[0..8]);
    let nanos = LittleEndian::read_u32(&buf[8..12]);

    check_range("nanos", nanos, 0, MAX_NANOS)?;

    Ok(TimestampParts { seconds, nanos })
}

/// Decode into a UTC instant.
pub fn decode_timestamp_le(buf: &[u8]) -> Result<DateTime<Utc>, SerializationError> {
    let parts = decode_timestamp_parts_le(buf)?;
    to_utc(parts)
}

fn to_utc(parts: TimestampParts) -> Result<DateTime<Utc>, SerializationError> {
    let min = DateTime::<Utc>::MIN_UTC.timestamp();
    let max = DateTime::<Utc>::MAX_UTC.timestamp();
    check_range("seconds", parts.seconds, min, max)?;

    // In-range seconds can still overflow together with nanos at the very top.
    DateTime::<Utc>::from_timestamp(parts.seconds, parts.nanos).ok_or_else(|| {
        RangeError {
            field: "seconds",
            value: parts.seconds.into(),
            min: min.into(),
            max: max.into(),
        }
        .into()
    })
}
