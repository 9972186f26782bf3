//! config.rs
//! Deployment-level codec settings.
//!
//! Loaded from JSON by the host; every field has a default so an empty object
//! is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::timestamp::{TimestampSerializer, ZonePolicy};
use crate::transaction::TransactionResultSerializer;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    /// Zone policy of the timestamp codec (`"require_utc"` or `"any_zone"`).
    pub timestamp_zone_policy: ZonePolicy,
}

impl CodecConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn timestamp_serializer(&self) -> TimestampSerializer {
        TimestampSerializer::new(self.timestamp_zone_policy)
    }

    pub fn transaction_result_serializer(&self) -> TransactionResultSerializer {
        TransactionResultSerializer::new()
    }
}
