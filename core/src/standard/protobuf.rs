//! standard/protobuf.rs
//! Generic serializer for any `prost` message.
//!
//! prost writes fields in tag order and omits proto3 defaults, so equal
//! messages always produce identical bytes.

use std::fmt;
use std::marker::PhantomData;

use prost::Message;

use crate::serializer::Serializer;
use crate::types::{DecodeError, SerializationError};

pub struct ProtobufSerializer<M> {
    what: &'static str,
    _message: PhantomData<fn() -> M>,
}

impl<M> ProtobufSerializer<M> {
    /// `what` names the record in `Malformed` errors.
    pub const fn named(what: &'static str) -> Self {
        Self { what, _message: PhantomData }
    }

    pub fn new() -> Self {
        Self::named(std::any::type_name::<M>())
    }
}

impl<M> Default for ProtobufSerializer<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Clone for ProtobufSerializer<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for ProtobufSerializer<M> {}

impl<M> fmt::Debug for ProtobufSerializer<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProtobufSerializer").field("what", &self.what).finish()
    }
}

impl<M> Serializer<M> for ProtobufSerializer<M>
where
    M: Message + Default,
{
    fn to_bytes(&self, value: &M) -> Result<Vec<u8>, SerializationError> {
        Ok(value.encode_to_vec())
    }

    fn from_bytes(&self, bytes: &[u8]) -> Result<M, SerializationError> {
        M::decode(bytes).map_err(|e| DecodeError::malformed(self.what, e).into())
    }
}
