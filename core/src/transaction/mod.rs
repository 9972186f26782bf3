//! transaction/mod.rs
//! Structured codec for transaction execution results.
//!
//! Wire record (protobuf, proto3 rules):
//! - field 1 `int32 status`
//! - field 2 `string description`
//!
//! `status` selects the outcome: `0..=255` is an application error code,
//! `256` is success, `257` is an unexpected error. Every other value is
//! rejected on decode.

pub mod types;
pub mod proto;
pub mod status;
pub mod serializer;

pub use types::*;
pub use proto::TransactionResultProto;
pub use status::*;
pub use serializer::*;
