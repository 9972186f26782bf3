//! codec-core
//!
//! Deterministic wire codecs shared by a host process and a sandboxed runtime.
//! No Python, no PyO3, no FFI.
//!
//! - `timestamp`: fixed 12-byte little-endian instants
//! - `transaction`: protobuf transaction execution results
//! - `status_registry`: named application error codes
//! - `standard`: bytes, strings, scalars, generic protobuf
//!
//! Every codec implements `Serializer<T>`.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;
pub mod config;
pub mod serializer;

// Codecs
pub mod standard;
pub mod timestamp;
pub mod transaction;
pub mod status_registry;

pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::config::CodecConfig;
    pub use crate::serializer::Serializer;
    pub use crate::standard::StandardSerializers;
    pub use crate::status_registry::TransactionError;
    pub use crate::timestamp::{TimestampSerializer, ZonePolicy};
    pub use crate::transaction::{TransactionResult, TransactionResultSerializer};
    pub use crate::types::{DecodeError, ErrorCategory, SerializationError};
}
