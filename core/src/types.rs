use std::error::Error as StdError;
use std::fmt;

use crate::utils::{LengthError, RangeError};

/// Decode failures: bytes were the right size (or variable-size) but their
/// content cannot be turned into a value.
///
/// `Malformed` and `InvalidStatusCode` stay separate so callers can tell
/// corrupt bytes from a structurally valid record with unknown semantics.
#[derive(Debug)]
pub enum DecodeError {
    /// Bytes are not a valid encoding for the schema.
    Malformed {
        what: &'static str,
        cause: Box<dyn StdError + Send + Sync>,
    },

    /// Structured record parsed, but its status is outside the mapping.
    InvalidStatusCode(i32),

    /// A decoded field is outside its valid range.
    OutOfRange(RangeError),
}

impl DecodeError {
    pub fn malformed<E>(what: &'static str, cause: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        DecodeError::Malformed { what, cause: cause.into() }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use DecodeError::*;
        match self {
            Malformed { what, cause } =>
                write!(f, "malformed {}: {}", what, cause),
            InvalidStatusCode(status) =>
                write!(f, "invalid status code: {}", status),
            OutOfRange(e) =>
                write!(f, "{}", e),
        }
    }
}

impl StdError for DecodeError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            DecodeError::Malformed { cause, .. } => Some(cause.as_ref()),
            DecodeError::OutOfRange(e) => Some(e),
            DecodeError::InvalidStatusCode(_) => None,
        }
    }
}

impl From<RangeError> for DecodeError {
    fn from(e: RangeError) -> Self {
        DecodeError::OutOfRange(e)
    }
}

/// Unified serializer error.
/// - `From<T>` impls enable `?` across every codec.
/// - No variant is retried by the codecs; recovery belongs to the caller.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// Value violates an encode precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Fixed-width input had the wrong size.
    #[error(transparent)]
    LengthMismatch(#[from] LengthError),

    /// Input could not be decoded into a valid value.
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),
}

/// Coarse error buckets, used by telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    InvalidArgument,
    LengthMismatch,
    Malformed,
    InvalidStatusCode,
    OutOfRange,
}

impl SerializationError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        SerializationError::InvalidArgument(msg.into())
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SerializationError::InvalidArgument(_) => ErrorCategory::InvalidArgument,
            SerializationError::LengthMismatch(_) => ErrorCategory::LengthMismatch,
            SerializationError::Decode(DecodeError::Malformed { .. }) => ErrorCategory::Malformed,
            SerializationError::Decode(DecodeError::InvalidStatusCode(_)) => ErrorCategory::InvalidStatusCode,
            SerializationError::Decode(DecodeError::OutOfRange(_)) => ErrorCategory::OutOfRange,
        }
    }

    /// True for every failure raised while parsing bytes.
    pub fn is_decode_failure(&self) -> bool {
        !matches!(self, SerializationError::InvalidArgument(_))
    }
}

impl From<RangeError> for SerializationError {
    fn from(e: RangeError) -> Self {
        SerializationError::Decode(DecodeError::OutOfRange(e))
    }
}
