// Timestamp codec: wire layout, zone policies, length and range validation.

#[cfg(test)]
mod tests {
    use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
    use proptest::prelude::*;

    use codec_core::constants::TIMESTAMP_LEN;
    use codec_core::serializer::Serializer;
    use codec_core::timestamp::{
        decode_timestamp_le, decode_timestamp_parts_le, encode_timestamp_le, TimestampParts,
        TimestampSerializer, ZonePolicy,
    };
    use codec_core::types::{DecodeError, SerializationError};

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, nanos: u32) -> DateTime<FixedOffset> {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_nano_opt(h, mi, s, nanos)
            .unwrap()
            .and_utc()
            .fixed_offset()
    }

    fn round_trip(serializer: TimestampSerializer, value: DateTime<FixedOffset>) {
        let bytes = serializer.to_bytes(&value).unwrap();
        assert_eq!(bytes.len(), TIMESTAMP_LEN);

        let decoded: DateTime<FixedOffset> = serializer.from_bytes(&bytes).unwrap();
        assert_eq!(decoded, value);
        assert_eq!(decoded.offset().local_minus_utc(), 0);
        assert_eq!(decoded.timestamp(), value.timestamp());
        assert_eq!(decoded.timestamp_subsec_nanos(), value.timestamp_subsec_nanos());
    }

    fn invalid_bytes(serializer: TimestampSerializer, bytes: &[u8]) -> SerializationError {
        let res: Result<DateTime<FixedOffset>, _> = serializer.from_bytes(bytes);
        res.unwrap_err()
    }

    // # Concrete wire vector

    #[test]
    fn known_vector_2000_01_01() {
        let value = utc(2000, 1, 1, 1, 1, 1, 1);
        assert_eq!(value.timestamp(), 946_688_461);

        let bytes = TimestampSerializer::utc_only().to_bytes(&value).unwrap();
        assert_eq!(
            bytes,
            vec![0xCD, 0x51, 0x6D, 0x38, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00]
        );

        let decoded: DateTime<FixedOffset> = TimestampSerializer::utc_only().from_bytes(&bytes).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn raw_parts_layout() {
        let out = encode_timestamp_le(TimestampParts { seconds: -1, nanos: 999_999_999 });
        assert_eq!(&out[0..8], &[0xFF; 8]);
        assert_eq!(&out[8..12], &999_999_999u32.to_le_bytes());

        let parts = decode_timestamp_parts_le(&out).unwrap();
        assert_eq!(parts, TimestampParts { seconds: -1, nanos: 999_999_999 });
    }

    // # Round-trips

    #[test]
    fn round_trip_both_policies() {
        for s in [TimestampSerializer::utc_only(), TimestampSerializer::any_zone()] {
            round_trip(s, utc(2000, 1, 1, 1, 1, 1, 1));
            round_trip(s, utc(1970, 1, 1, 0, 0, 0, 0));
            round_trip(s, Utc::now().fixed_offset());
        }
    }

    #[test]
    fn round_trip_pre_epoch() {
        let value = utc(1969, 7, 20, 20, 17, 40, 123_456_789);
        assert!(value.timestamp() < 0);
        round_trip(TimestampSerializer::utc_only(), value);
    }

    #[test]
    fn utc_typed_values() {
        let s = TimestampSerializer::utc_only();
        let value = Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap();
        let bytes = s.to_bytes(&value).unwrap();
        let decoded: DateTime<Utc> = s.from_bytes(&bytes).unwrap();
        assert_eq!(decoded, value);
        assert_eq!(decode_timestamp_le(&bytes).unwrap(), value);
    }

    // # Zone policy

    #[test]
    fn strict_rejects_non_utc() {
        let offset = FixedOffset::east_opt(3 * 3600).unwrap();
        let value = offset.with_ymd_and_hms(2019, 1, 1, 10, 0, 0).unwrap();

        let err = TimestampSerializer::utc_only().to_bytes(&value).unwrap_err();
        assert!(matches!(err, SerializationError::InvalidArgument(_)));
        assert!(!err.is_decode_failure());

        // Same instant shifted to UTC succeeds.
        round_trip(TimestampSerializer::utc_only(), value.with_timezone(&Utc).fixed_offset());
    }

    #[test]
    fn any_zone_encodes_the_instant() {
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let value = offset.with_ymd_and_hms(2019, 1, 1, 10, 0, 0).unwrap();

        let s = TimestampSerializer::any_zone();
        let bytes = s.to_bytes(&value).unwrap();
        let decoded: DateTime<FixedOffset> = s.from_bytes(&bytes).unwrap();

        assert_eq!(decoded.timestamp(), value.timestamp());
        assert_eq!(decoded.offset().local_minus_utc(), 0);
        assert_eq!(decoded.to_rfc3339(), "2019-01-01T15:00:00+00:00");
    }

    #[test]
    fn serializer_exposes_policy() {
        assert_eq!(TimestampSerializer::utc_only().policy(), ZonePolicy::RequireUtc);
        assert_eq!(TimestampSerializer::any_zone().policy(), ZonePolicy::AnyZone);
    }

    // # Decode validation

    #[test]
    fn empty_input_is_length_mismatch() {
        let err = invalid_bytes(TimestampSerializer::utc_only(), &[]);
        match err {
            SerializationError::LengthMismatch(e) => {
                assert_eq!(e.actual, 0);
                assert_eq!(e.expected, TIMESTAMP_LEN);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn every_wrong_length_is_rejected() {
        for len in (0..32).filter(|&l| l != TIMESTAMP_LEN) {
            let err = invalid_bytes(TimestampSerializer::any_zone(), &vec![0u8; len]);
            assert!(matches!(err, SerializationError::LengthMismatch(e) if e.actual == len));
        }
    }

    #[test]
    fn nanos_above_range_rejected() {
        let mut bytes = encode_timestamp_le(TimestampParts { seconds: 0, nanos: 0 });
        bytes[8..12].copy_from_slice(&1_000_000_000u32.to_le_bytes());

        let err = invalid_bytes(TimestampSerializer::utc_only(), &bytes);
        assert!(matches!(err, SerializationError::Decode(DecodeError::OutOfRange(r)) if r.field == "nanos"));
    }

    #[test]
    fn seconds_beyond_chrono_range_rejected() {
        let bytes = encode_timestamp_le(TimestampParts { seconds: i64::MAX, nanos: 0 });
        let err = invalid_bytes(TimestampSerializer::utc_only(), &bytes);
        assert!(matches!(err, SerializationError::Decode(DecodeError::OutOfRange(r)) if r.field == "seconds"));
    }

    // # Properties

    proptest! {
        #[test]
        fn prop_round_trip_utc(
            seconds in -62_135_596_800i64..253_402_300_799i64,
            nanos in 0u32..=999_999_999u32,
        ) {
            let value = DateTime::<Utc>::from_timestamp(seconds, nanos).unwrap().fixed_offset();
            let s = TimestampSerializer::utc_only();
            let bytes = s.to_bytes(&value).unwrap();
            prop_assert_eq!(&bytes[0..8], &seconds.to_le_bytes()[..]);
            prop_assert_eq!(&bytes[8..12], &nanos.to_le_bytes()[..]);
            let decoded: DateTime<FixedOffset> = s.from_bytes(&bytes).unwrap();
            prop_assert_eq!(decoded, value);
        }

        #[test]
        fn prop_any_zone_matches_utc_bytes(
            seconds in -2_000_000_000i64..2_000_000_000i64,
            offset_secs in -86_399i32..86_399i32,
        ) {
            let instant = DateTime::<Utc>::from_timestamp(seconds, 0).unwrap();
            let shifted = instant.with_timezone(&FixedOffset::east_opt(offset_secs).unwrap());
            let a = TimestampSerializer::any_zone().to_bytes(&shifted).unwrap();
            let b = TimestampSerializer::utc_only().to_bytes(&instant.fixed_offset()).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
