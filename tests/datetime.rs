//! Caller-sugared datetime/timestamp encoding (tag 0 / tag 1).
use chrono::{DateTime, FixedOffset, TimeZone};
use mini_cbor_value::{decode, encode, Timestamp, Value};

#[test]
fn datetime_encodes_as_tag_zero_rfc3339_text() {
    let dt: DateTime<FixedOffset> = FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2013, 3, 21, 20, 4, 0).unwrap();
    let bytes = encode(&Value::Datetime(dt)).unwrap();
    assert_eq!(bytes[0], 0xc0);
    let (decoded, _) = decode(&bytes).unwrap();
    match decoded {
        Value::TextString(text) => assert!(text.ends_with('Z')),
        other => panic!("expected a text string, got {other:?}"),
    }
}

#[test]
fn whole_second_timestamp_encodes_as_integer_payload() {
    let bytes = encode(&Value::Timestamp(Timestamp::new(1_363_896_240, 0))).unwrap();
    assert_eq!(bytes, vec![0xc1, 0x1a, 0x51, 0x4b, 0x67, 0xb0]);
    let (decoded, _) = decode(&bytes).unwrap();
    assert_eq!(decoded, Value::from(1_363_896_240_000_000_000i64));
}

#[test]
fn fractional_timestamp_encodes_as_float_payload() {
    let bytes = encode(&Value::Timestamp(Timestamp::new(1_363_896_240, 500_000_000))).unwrap();
    assert_eq!(bytes[0], 0xc1);
    assert_eq!(bytes[1], 0xfb); // double-precision float follows
}
