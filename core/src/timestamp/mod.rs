//! timestamp/mod.rs
//! Fixed-width timestamp codec.
//!
//! Wire layout (12 bytes, little-endian):
//! - 0..8   seconds since the Unix epoch (i64, negative before 1970)
//! - 8..12  sub-second nanoseconds (u32, 0..=999_999_999)
//!
//! Decoding always yields UTC. Encoding is governed by a `ZonePolicy`:
//! `RequireUtc` refuses non-UTC input, `AnyZone` writes the instant as-is.

pub mod types;
pub mod encode;
pub mod decode;
pub mod serializer;

pub use types::*;
pub use encode::*;
pub use decode::*;
pub use serializer::*;
