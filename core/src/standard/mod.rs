//! standard/mod.rs
//! Ready-made serializers behind the common `Serializer<T>` contract.

pub mod primitives;
pub mod protobuf;

pub use primitives::*;
pub use protobuf::*;

use prost::Message;

use crate::timestamp::TimestampSerializer;
use crate::transaction::TransactionResultSerializer;

/// Entry point handing out every standard codec.
pub struct StandardSerializers;

impl StandardSerializers {
    pub const fn bytes() -> BytesSerializer {
        BytesSerializer
    }

    pub const fn string() -> StringSerializer {
        StringSerializer
    }

    pub const fn fixed_i32() -> FixedI32Serializer {
        FixedI32Serializer
    }

    pub const fn fixed_i64() -> FixedI64Serializer {
        FixedI64Serializer
    }

    pub const fn bool() -> BoolSerializer {
        BoolSerializer
    }

    pub fn protobuf<M: Message + Default>() -> ProtobufSerializer<M> {
        ProtobufSerializer::new()
    }

    /// Strict timestamp codec (non-UTC input is refused).
    pub const fn utc_timestamp() -> TimestampSerializer {
        TimestampSerializer::utc_only()
    }

    /// Zone-agnostic timestamp codec.
    pub const fn any_zone_timestamp() -> TimestampSerializer {
        TimestampSerializer::any_zone()
    }

    pub const fn transaction_result() -> TransactionResultSerializer {
        TransactionResultSerializer::new()
    }
}
