#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use prost::Message;

    use codec_core::serializer::Serializer;
    use codec_core::standard::{ProtobufSerializer, StandardSerializers};
    use codec_core::timestamp::ZonePolicy;
    use codec_core::transaction::{TransactionResult, TransactionResultProto};
    use codec_core::types::{ErrorCategory, SerializationError};

    #[derive(Clone, PartialEq, Message)]
    struct Transfer {
        #[prost(string, tag = "1")]
        sender: String,
        #[prost(string, tag = "2")]
        receiver: String,
        #[prost(int64, tag = "3")]
        amount: i64,
    }

    // # Bytes and strings

    #[test]
    fn bytes_is_identity() {
        let s = StandardSerializers::bytes();
        let value = vec![0u8, 1, 2, 0xFF];
        assert_eq!(s.to_bytes(&value).unwrap(), value);
        assert_eq!(s.from_bytes(&value).unwrap(), value);
        assert!(s.from_bytes(&[]).unwrap().is_empty());
    }

    #[test]
    fn string_round_trip() {
        let s = StandardSerializers::string();
        let value = "grüße".to_owned();
        let bytes = s.to_bytes(&value).unwrap();
        assert_eq!(bytes, value.as_bytes());
        assert_eq!(s.from_bytes(&bytes).unwrap(), value);
    }

    #[test]
    fn string_rejects_invalid_utf8() {
        let err = StandardSerializers::string().from_bytes(&[0x66, 0xFF]).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Malformed);
        assert!(err.to_string().contains("utf-8 string"));
    }

    // # Fixed-width scalars

    #[test]
    fn fixed_i32_little_endian() {
        let s = StandardSerializers::fixed_i32();
        assert_eq!(s.to_bytes(&1).unwrap(), vec![1, 0, 0, 0]);
        assert_eq!(s.to_bytes(&-2).unwrap(), vec![0xFE, 0xFF, 0xFF, 0xFF]);
        assert_eq!(s.from_bytes(&[0x78, 0x56, 0x34, 0x12]).unwrap(), 0x1234_5678);
    }

    #[test]
    fn fixed_i64_little_endian() {
        let s = StandardSerializers::fixed_i64();
        let bytes = s.to_bytes(&i64::MIN).unwrap();
        assert_eq!(bytes, vec![0, 0, 0, 0, 0, 0, 0, 0x80]);
        assert_eq!(s.from_bytes(&bytes).unwrap(), i64::MIN);
    }

    #[test]
    fn fixed_width_length_checked() {
        let err = StandardSerializers::fixed_i32().from_bytes(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, SerializationError::LengthMismatch(e) if e.expected == 4 && e.actual == 3));

        let err = StandardSerializers::fixed_i64().from_bytes(&[0; 9]).unwrap_err();
        assert!(matches!(err, SerializationError::LengthMismatch(e) if e.expected == 8 && e.actual == 9));
    }

    #[test]
    fn bool_is_strict() {
        let s = StandardSerializers::bool();
        assert_eq!(s.to_bytes(&true).unwrap(), vec![1]);
        assert_eq!(s.to_bytes(&false).unwrap(), vec![0]);
        assert!(s.from_bytes(&[1]).unwrap());
        assert!(!s.from_bytes(&[0]).unwrap());

        assert_eq!(s.from_bytes(&[2]).unwrap_err().category(), ErrorCategory::Malformed);
        assert_eq!(s.from_bytes(&[]).unwrap_err().category(), ErrorCategory::LengthMismatch);
    }

    // # Protobuf

    #[test]
    fn protobuf_round_trip() {
        let s: ProtobufSerializer<Transfer> = StandardSerializers::protobuf();
        let value = Transfer { sender: "alice".into(), receiver: "bob".into(), amount: 42 };
        let bytes = s.to_bytes(&value).unwrap();
        assert_eq!(bytes, value.encode_to_vec());
        assert_eq!(s.from_bytes(&bytes).unwrap(), value);
    }

    #[test]
    fn protobuf_malformed_names_record() {
        let s = ProtobufSerializer::<Transfer>::named("transfer");
        let err = s.from_bytes(&[0x0A, 0x10, b'a']).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Malformed);
        assert!(err.to_string().contains("malformed transfer"), "{}", err);
    }

    #[test]
    fn protobuf_carries_transaction_record() {
        let s = ProtobufSerializer::<TransactionResultProto>::new();
        let record = TransactionResultProto { status: 256, description: String::new() };
        assert_eq!(s.to_bytes(&record).unwrap(), vec![0x08, 0x80, 0x02]);
    }

    // # Facade

    #[test]
    fn facade_hands_out_configured_codecs() {
        assert_eq!(StandardSerializers::utc_timestamp().policy(), ZonePolicy::RequireUtc);
        assert_eq!(StandardSerializers::any_zone_timestamp().policy(), ZonePolicy::AnyZone);

        let ts = Utc.with_ymd_and_hms(2000, 1, 1, 1, 1, 1).unwrap();
        assert_eq!(StandardSerializers::utc_timestamp().to_bytes(&ts).unwrap().len(), 12);

        let tx = StandardSerializers::transaction_result();
        let bytes = tx.to_bytes(&TransactionResult::success()).unwrap();
        assert_eq!(tx.from_bytes(&bytes).unwrap(), TransactionResult::Success);
    }
}
