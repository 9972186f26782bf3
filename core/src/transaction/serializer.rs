//! transaction/serializer.rs

use crate::serializer::Serializer;
use crate::standard::protobuf::ProtobufSerializer;
use crate::transaction::proto::TransactionResultProto;
use crate::transaction::types::TransactionResult;
use crate::types::SerializationError;

/// Protobuf-backed codec for `TransactionResult`.
///
/// Fails with `Decode(Malformed)` for bytes that are not a record and with
/// `Decode(InvalidStatusCode)` for a record whose status has no outcome.
#[derive(Copy, Clone, Debug)]
pub struct TransactionResultSerializer {
    record: ProtobufSerializer<TransactionResultProto>,
}

impl TransactionResultSerializer {
    pub const fn new() -> Self {
        Self { record: ProtobufSerializer::named("transaction result record") }
    }
}

impl Default for TransactionResultSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Serializer<TransactionResult> for TransactionResultSerializer {
    fn to_bytes(&self, value: &TransactionResult) -> Result<Vec<u8>, SerializationError> {
        self.record.to_bytes(&TransactionResultProto::from(value))
    }

    fn from_bytes(&self, bytes: &[u8]) -> Result<TransactionResult, SerializationError> {
        let record = self.record.from_bytes(bytes)?;
        Ok(TransactionResult::try_from(record)?)
    }
}
