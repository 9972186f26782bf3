//! timestamp/encode.rs
//!
//! Serializes `TimestampParts` into the fixed 12-byte layout.

use byteorder::{ByteOrder, LittleEndian};

use crate::constants::TIMESTAMP_LEN;
use crate::timestamp::types::TimestampParts;

/// Encode seconds then nanos, little-endian.
#[inline]
pub fn encode_timestamp_le(parts: TimestampParts) -> [u8; TIMESTAMP_LEN] {
    let mut out = [0u8; TIMESTAMP_LEN];

    LittleEndian::write_i64(&mut out[0..8], parts.seconds);  // 0..8   seconds
    LittleEndian::write_u32(&mut out[8..12], parts.nanos);   // 8..12  nanos

    out
}
