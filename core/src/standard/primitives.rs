//! standard/primitives.rs
//! Serializers for raw bytes, UTF-8 strings and fixed-width scalars.

use byteorder::{ByteOrder, LittleEndian};

use crate::constants::{BOOL_LEN, I32_LEN, I64_LEN};
use crate::serializer::Serializer;
use crate::types::{DecodeError, SerializationError};
use crate::utils::{check_length, fmt_bytes};

/// Identity codec: the value already is its wire form.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BytesSerializer;

impl Serializer<Vec<u8>> for BytesSerializer {
    fn to_bytes(&self, value: &Vec<u8>) -> Result<Vec<u8>, SerializationError> {
        Ok(value.clone())
    }

    fn from_bytes(&self, bytes: &[u8]) -> Result<Vec<u8>, SerializationError> {
        Ok(bytes.to_vec())
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StringSerializer;

impl Serializer<String> for StringSerializer {
    fn to_bytes(&self, value: &String) -> Result<Vec<u8>, SerializationError> {
        Ok(value.as_bytes().to_vec())
    }

    fn from_bytes(&self, bytes: &[u8]) -> Result<String, SerializationError> {
        String::from_utf8(bytes.to_vec())
            .map_err(|e| DecodeError::malformed("utf-8 string", e).into())
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedI32Serializer;

impl Serializer<i32> for FixedI32Serializer {
    fn to_bytes(&self, value: &i32) -> Result<Vec<u8>, SerializationError> {
        Ok(value.to_le_bytes().to_vec())
    }

    fn from_bytes(&self, bytes: &[u8]) -> Result<i32, SerializationError> {
        check_length(bytes, I32_LEN)?;
        Ok(LittleEndian::read_i32(bytes))
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedI64Serializer;

impl Serializer<i64> for FixedI64Serializer {
    fn to_bytes(&self, value: &i64) -> Result<Vec<u8>, SerializationError> {
        Ok(value.to_le_bytes().to_vec())
    }

    fn from_bytes(&self, bytes: &[u8]) -> Result<i64, SerializationError> {
        check_length(bytes, I64_LEN)?;
        Ok(LittleEndian::read_i64(bytes))
    }
}

/// One byte, strictly 0 or 1.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BoolSerializer;

impl Serializer<bool> for BoolSerializer {
    fn to_bytes(&self, value: &bool) -> Result<Vec<u8>, SerializationError> {
        Ok(vec![u8::from(*value)])
    }

    fn from_bytes(&self, bytes: &[u8]) -> Result<bool, SerializationError> {
        check_length(bytes, BOOL_LEN)?;
        match bytes[0] {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(DecodeError::malformed(
                "bool",
                format!("expected 0x00 or 0x01, got {}", fmt_bytes(bytes)),
            )
            .into()),
        }
    }
}
