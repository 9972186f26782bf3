//! serializer.rs
//! The one contract every codec implements.
//!
//! Callers pick a `Serializer<T>` per domain type and never branch on which
//! codec backs it. Implementations are stateless and `Send + Sync`; a single
//! instance may be shared freely across threads.

use crate::types::SerializationError;

pub trait Serializer<T>: Send + Sync {
    /// Serialize `value` into its wire representation.
    fn to_bytes(&self, value: &T) -> Result<Vec<u8>, SerializationError>;

    /// Parse `bytes` back into a value, or fail without partial output.
    fn from_bytes(&self, bytes: &[u8]) -> Result<T, SerializationError>;
}

impl<T, S> Serializer<T> for &S
where
    S: Serializer<T> + ?Sized,
{
    #[inline]
    fn to_bytes(&self, value: &T) -> Result<Vec<u8>, SerializationError> {
        (**self).to_bytes(value)
    }

    #[inline]
    fn from_bytes(&self, bytes: &[u8]) -> Result<T, SerializationError> {
        (**self).from_bytes(bytes)
    }
}

impl<T, S> Serializer<T> for Box<S>
where
    S: Serializer<T> + ?Sized,
{
    #[inline]
    fn to_bytes(&self, value: &T) -> Result<Vec<u8>, SerializationError> {
        (**self).to_bytes(value)
    }

    #[inline]
    fn from_bytes(&self, bytes: &[u8]) -> Result<T, SerializationError> {
        (**self).from_bytes(bytes)
    }
}
