//! transaction/status.rs
//! The status mapping rule, in both directions.
//!
//! This is the only place that knows how outcomes map onto `status`. Encode is
//! an exhaustive match (a new variant will not compile until mapped); decode
//! rejects everything outside `[0, 255] ∪ {256, 257}`.

use crate::constants::status::{MAX_ERROR_STATUS, SUCCESS, UNEXPECTED_ERROR};
use crate::transaction::proto::TransactionResultProto;
use crate::transaction::types::TransactionResult;
use crate::types::DecodeError;

/// Wire status for an outcome.
pub fn status_of(result: &TransactionResult) -> i32 {
    match result {
        TransactionResult::Error { code, .. } => i32::from(*code),
        TransactionResult::Success => SUCCESS,
        TransactionResult::UnexpectedError { .. } => UNEXPECTED_ERROR,
    }
}

/// Rebuild an outcome from a decoded status and description.
///
/// The description of a `Success` record is dropped.
pub fn result_from_status(status: i32, description: String) -> Result<TransactionResult, DecodeError> {
    match status {
        0..=MAX_ERROR_STATUS => {
            let code = u8::try_from(status).map_err(|_| DecodeError::InvalidStatusCode(status))?;
            Ok(TransactionResult::Error { code, description })
        }
        SUCCESS => Ok(TransactionResult::Success),
        UNEXPECTED_ERROR => Ok(TransactionResult::UnexpectedError { description }),
        other => Err(DecodeError::InvalidStatusCode(other)),
    }
}

impl From<&TransactionResult> for TransactionResultProto {
    fn from(result: &TransactionResult) -> Self {
        TransactionResultProto {
            status: status_of(result),
            description: result.description().unwrap_or_default().to_owned(),
        }
    }
}

impl TryFrom<TransactionResultProto> for TransactionResult {
    type Error = DecodeError;

    fn try_from(record: TransactionResultProto) -> Result<Self, DecodeError> {
        result_from_status(record.status, record.description)
    }
}
