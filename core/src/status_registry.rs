//! status_registry.rs
//! Named application error codes.
//!
//! Notes:
//! - Codes are part of the wire contract; never renumber or compact them.
//! - 4 is reserved and stays unassigned.
//! - The transaction codec does not consult this registry: any code in
//!   `0..=255` decodes as a generic `Error`. Use `verify` to opt into checking.

use std::fmt;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::constants::error_codes;
use crate::transaction::TransactionResult;
use crate::utils::enum_name_or_hex;

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
pub enum TransactionError {
    WalletAlreadyExists   = error_codes::WALLET_ALREADY_EXISTS,
    UnknownReceiver       = error_codes::UNKNOWN_RECEIVER,
    UnknownSender         = error_codes::UNKNOWN_SENDER,
    InsufficientFunds     = error_codes::INSUFFICIENT_FUNDS,
    SameSenderAndReceiver = error_codes::SAME_SENDER_AND_RECEIVER,
}

impl TransactionError {
    pub const ALL: [TransactionError; 5] = [
        TransactionError::WalletAlreadyExists,
        TransactionError::UnknownReceiver,
        TransactionError::UnknownSender,
        TransactionError::InsufficientFunds,
        TransactionError::SameSenderAndReceiver,
    ];

    /// Wire code of this variant.
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn verify(raw: u8) -> Result<(), RegistryError> {
        Self::try_from_primitive(raw)
            .map(|_| ())
            .map_err(|_| RegistryError::UnknownErrorCode { raw })
    }

    /// Canonical registry name, e.g. `INSUFFICIENT_FUNDS`.
    pub fn name(self) -> &'static str {
        match self {
            TransactionError::WalletAlreadyExists   => "WALLET_ALREADY_EXISTS",
            TransactionError::UnknownReceiver       => "UNKNOWN_RECEIVER",
            TransactionError::UnknownSender         => "UNKNOWN_SENDER",
            TransactionError::InsufficientFunds     => "INSUFFICIENT_FUNDS",
            TransactionError::SameSenderAndReceiver => "SAME_SENDER_AND_RECEIVER",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.name() == name)
    }

    /// Default human-readable description.
    pub fn message(self) -> &'static str {
        match self {
            TransactionError::WalletAlreadyExists   => "wallet already exists",
            TransactionError::UnknownReceiver       => "unknown receiver",
            TransactionError::UnknownSender         => "unknown sender",
            TransactionError::InsufficientFunds     => "insufficient funds",
            TransactionError::SameSenderAndReceiver => "same sender and receiver",
        }
    }

    /// The `TransactionResult::Error` a service returns for this variant.
    pub fn into_result(self, description: impl Into<String>) -> TransactionResult {
        TransactionResult::error(self.code(), description)
    }
}

impl fmt::Display for TransactionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// Code not bound to any named variant (including the reserved 4).
    UnknownErrorCode { raw: u8 },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::UnknownErrorCode { raw } =>
                write!(f, "unknown error code: {}", enum_name_or_hex::<TransactionError>(*raw)),
        }
    }
}

impl std::error::Error for RegistryError {}
