//! constants.rs
//! Wire constants shared by every codec.
//!
//! Values here are part of the cross-language contract: a host process and a
//! sandboxed runtime must agree on each of them byte for byte.

/// Serialized timestamp: i64 seconds + u32 nanos, little-endian.
pub const TIMESTAMP_LEN: usize = 8 + 4;

/// Largest valid sub-second nanosecond value.
pub const MAX_NANOS: u32 = 999_999_999;

/// Fixed-width integer encodings.
pub const I32_LEN: usize = 4;
pub const I64_LEN: usize = 8;
pub const BOOL_LEN: usize = 1;

/// Transaction result status codes (field 1 of the structured record).
///
/// `0..=MAX_ERROR_STATUS` carry an application error code verbatim.
pub mod status {
    pub const MAX_ERROR_STATUS: i32 = 255;
    pub const SUCCESS: i32 = 256;
    pub const UNEXPECTED_ERROR: i32 = 257;
}

/// Protobuf field tags of the transaction result record.
pub mod result_fields {
    pub const STATUS_TAG: u32 = 1;
    pub const DESCRIPTION_TAG: u32 = 2;
}

/// Application error codes (mirrored in `status_registry`).
///
/// 4 is reserved and must never be assigned.
pub mod error_codes {
    pub const WALLET_ALREADY_EXISTS: u8    = 0;
    pub const UNKNOWN_RECEIVER: u8         = 1;
    pub const UNKNOWN_SENDER: u8           = 2;
    pub const INSUFFICIENT_FUNDS: u8       = 3;
    pub const RESERVED: u8                 = 4;
    pub const SAME_SENDER_AND_RECEIVER: u8 = 5;
}
