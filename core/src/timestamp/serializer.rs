//! timestamp/serializer.rs
//!
//! A single codec parameterized by `ZonePolicy`. Both policies are exposed as
//! named constructors so call sites state which one they rely on.

use chrono::{DateTime, FixedOffset, Utc};

use crate::constants::TIMESTAMP_LEN;
use crate::serializer::Serializer;
use crate::timestamp::decode::decode_timestamp_le;
use crate::timestamp::encode::encode_timestamp_le;
use crate::timestamp::types::{TimestampParts, ZonePolicy};
use crate::types::SerializationError;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TimestampSerializer {
    policy: ZonePolicy,
}

impl TimestampSerializer {
    pub const fn new(policy: ZonePolicy) -> Self {
        Self { policy }
    }

    /// Strict variant: refuses non-UTC offsets.
    pub const fn utc_only() -> Self {
        Self::new(ZonePolicy::RequireUtc)
    }

    /// Zone-agnostic variant: encodes the instant whatever its offset.
    pub const fn any_zone() -> Self {
        Self::new(ZonePolicy::AnyZone)
    }

    pub const fn policy(&self) -> ZonePolicy {
        self.policy
    }

    /// Encode into the fixed array without allocating.
    pub fn encode(&self, value: &DateTime<FixedOffset>) -> Result<[u8; TIMESTAMP_LEN], SerializationError> {
        self.policy.check(value.offset())?;
        let parts = TimestampParts::from_datetime(value)?;
        Ok(encode_timestamp_le(parts))
    }
}

impl Serializer<DateTime<FixedOffset>> for TimestampSerializer {
    fn to_bytes(&self, value: &DateTime<FixedOffset>) -> Result<Vec<u8>, SerializationError> {
        Ok(self.encode(value)?.to_vec())
    }

    /// The result always carries a zero (UTC) offset.
    fn from_bytes(&self, bytes: &[u8]) -> Result<DateTime<FixedOffset>, SerializationError> {
        Ok(decode_timestamp_le(bytes)?.fixed_offset())
    }
}

/// `DateTime<Utc>` is UTC by construction, so the policy check always passes.
impl Serializer<DateTime<Utc>> for TimestampSerializer {
    fn to_bytes(&self, value: &DateTime<Utc>) -> Result<Vec<u8>, SerializationError> {
        let parts = TimestampParts::from_datetime(value)?;
        Ok(encode_timestamp_le(parts).to_vec())
    }

    fn from_bytes(&self, bytes: &[u8]) -> Result<DateTime<Utc>, SerializationError> {
        decode_timestamp_le(bytes)
    }
}
