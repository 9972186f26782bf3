//! timestamp/types.rs
//! Zone policy and the decomposed (seconds, nanos) view of an instant.

use chrono::{DateTime, FixedOffset, TimeZone};
use serde::{Deserialize, Serialize};

use crate::constants::MAX_NANOS;
use crate::types::SerializationError;

/// Whether the encoder accepts timestamps carrying a non-UTC offset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZonePolicy {
    /// Non-UTC offsets fail with `InvalidArgument`.
    #[default]
    RequireUtc,
    /// The offset is ignored; the underlying instant is encoded.
    AnyZone,
}

impl ZonePolicy {
    pub fn check(self, offset: &FixedOffset) -> Result<(), SerializationError> {
        match self {
            ZonePolicy::AnyZone => Ok(()),
            ZonePolicy::RequireUtc if offset.local_minus_utc() == 0 => Ok(()),
            ZonePolicy::RequireUtc => Err(SerializationError::invalid_argument(format!(
                "serialized timestamp must be in UTC, got offset {}",
                offset
            ))),
        }
    }
}

/// Epoch seconds and sub-second nanos, exactly as they appear on the wire.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimestampParts {
    pub seconds: i64,
    pub nanos: u32,
}

impl TimestampParts {
    /// Split an instant. The offset does not influence the result.
    ///
    /// chrono represents a leap second as nanos >= 1e9; that has no wire
    /// encoding and is refused.
    pub fn from_datetime<Tz: TimeZone>(value: &DateTime<Tz>) -> Result<Self, SerializationError> {
        let nanos = value.timestamp_subsec_nanos();
        if nanos > MAX_NANOS {
            return Err(SerializationError::invalid_argument(format!(
                "leap second instants cannot be serialized (nanos = {})",
                nanos
            )));
        }
        Ok(Self { seconds: value.timestamp(), nanos })
    }
}
