//! transaction/types.rs
//! Outcome of executing a transaction.

use std::fmt;

/// Closed set of outcomes; immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransactionResult {
    Success,
    /// Error raised by the service with an application-defined code.
    Error { code: u8, description: String },
    /// Failure not anticipated by the service (e.g. a panic in its code).
    UnexpectedError { description: String },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResultKind {
    Success,
    Error,
    UnexpectedError,
}

impl TransactionResult {
    pub fn success() -> Self {
        TransactionResult::Success
    }

    pub fn error(code: u8, description: impl Into<String>) -> Self {
        TransactionResult::Error { code, description: description.into() }
    }

    pub fn unexpected_error(description: impl Into<String>) -> Self {
        TransactionResult::UnexpectedError { description: description.into() }
    }

    pub fn kind(&self) -> ResultKind {
        match self {
            TransactionResult::Success => ResultKind::Success,
            TransactionResult::Error { .. } => ResultKind::Error,
            TransactionResult::UnexpectedError { .. } => ResultKind::UnexpectedError,
        }
    }

    pub fn is_successful(&self) -> bool {
        matches!(self, TransactionResult::Success)
    }

    /// Present only for `Error`.
    pub fn error_code(&self) -> Option<u8> {
        match self {
            TransactionResult::Error { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Present for both error variants; `Success` carries none.
    pub fn description(&self) -> Option<&str> {
        match self {
            TransactionResult::Success => None,
            TransactionResult::Error { description, .. }
            | TransactionResult::UnexpectedError { description } => Some(description),
        }
    }
}

impl fmt::Display for TransactionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionResult::Success =>
                write!(f, "success"),
            TransactionResult::Error { code, description } =>
                write!(f, "error {}: {:?}", code, description),
            TransactionResult::UnexpectedError { description } =>
                write!(f, "unexpected error: {:?}", description),
        }
    }
}
