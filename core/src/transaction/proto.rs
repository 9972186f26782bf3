//! transaction/proto.rs
//!
//! Hand-written prost message equivalent to:
//!
//! ```proto
//! message TransactionResult {
//!   int32 status = 1;
//!   string description = 2;
//! }
//! ```
//!
//! Tags must match `constants::result_fields`.

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct TransactionResultProto {
    #[prost(int32, tag = "1")]
    pub status: i32,
    #[prost(string, tag = "2")]
    pub description: ::prost::alloc::string::String,
}
