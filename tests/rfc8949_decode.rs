//! Decoder vectors drawn from RFC 8949 Appendix A, exercising definite- and indefinite-length
//! containers, tag interpretation, and the error taxonomy.
use mini_cbor_value::{decode, decode_with_options, CBORError, DecodeOptions, FloatValue, Value};
use num_bigint::BigInt;

#[test]
fn decodes_immediate_and_multibyte_integers() {
    assert_eq!(decode(&[0x00]).unwrap(), (Value::from(0i64), &[][..]));
    assert_eq!(decode(&[0x18, 0x18]).unwrap(), (Value::from(24i64), &[][..]));
    assert_eq!(
        decode(&[0x1a, 0x00, 0x0f, 0x42, 0x40]).unwrap(),
        (Value::from(1000000i64), &[][..])
    );
    assert_eq!(decode(&[0x20]).unwrap(), (Value::from(-1i64), &[][..]));
    assert_eq!(decode(&[0x38, 0x63]).unwrap(), (Value::from(-100i64), &[][..]));
}

#[test]
fn decodes_float_specials() {
    assert_eq!(
        decode(&[0xf9, 0x7c, 0x00]).unwrap(),
        (Value::Float(FloatValue::PositiveInfinity), &[][..])
    );
    assert_eq!(
        decode(&[0xf9, 0xfc, 0x00]).unwrap(),
        (Value::Float(FloatValue::NegativeInfinity), &[][..])
    );
    let (value, rest) = decode(&[0xf9, 0x7e, 0x00]).unwrap();
    assert_eq!(value, Value::Float(FloatValue::NaN));
    assert!(rest.is_empty());
}

#[test]
fn decodes_a_definite_length_map_with_last_duplicate_winning() {
    let (value, rest) = decode(&[0xa2, 0x61, 0x61, 0x01, 0x61, 0x62, 0x02]).unwrap();
    assert_eq!(
        value,
        Value::Map(vec![(Value::text("a"), Value::from(1i64)), (Value::text("b"), Value::from(2i64))])
    );
    assert!(rest.is_empty());

    let (value, _) = decode(&[0xa2, 0x61, 0x61, 0x01, 0x61, 0x61, 0x02]).unwrap();
    assert_eq!(value, Value::Map(vec![(Value::text("a"), Value::from(2i64))]));
}

#[test]
fn decodes_indefinite_length_array() {
    let (value, rest) = decode(&[0x9f, 0x01, 0x02, 0xff]).unwrap();
    assert_eq!(value, Value::Array(vec![Value::from(1i64), Value::from(2i64)]));
    assert!(rest.is_empty());
}

#[test]
fn decodes_indefinite_length_text_string_by_chunks() {
    // "ab" as chunks "a" "b" per RFC 8949 §3.2.3, not a forward scan to the first 0xFF.
    let (value, rest) = decode(&[0x7f, 0x61, 0x61, 0x61, 0x62, 0xff]).unwrap();
    assert_eq!(value, Value::text("ab"));
    assert!(rest.is_empty());
}

#[test]
fn indefinite_text_string_chunk_splitting_a_code_point_is_rejected() {
    // 'é' (U+00E9, UTF-8 0xC3 0xA9) split across two one-byte chunks. The concatenated bytes are
    // valid UTF-8, but RFC 8949 §3.2.3 requires each chunk to be independently valid, and neither
    // lone byte is.
    assert_eq!(
        decode(&[0x7f, 0x61, 0xc3, 0x61, 0xa9, 0xff]).unwrap_err(),
        CBORError::IncompleteUtf8String
    );
}

#[test]
fn embedded_cbor_tag_decodes_to_inner_value() {
    // tag 24 over a 5-byte string "IETF" (0x64 49 45 54 46)
    let (value, rest) = decode(&[0xd8, 0x18, 0x45, 0x64, 0x49, 0x45, 0x54, 0x46]).unwrap();
    assert_eq!(value, Value::text("IETF"));
    assert!(rest.is_empty());
}

#[test]
fn epoch_tag_produces_nanoseconds() {
    let (value, _) = decode(&[0xc1, 0x1a, 0x51, 0x4b, 0x67, 0xb0]).unwrap();
    assert_eq!(value, Value::Integer(BigInt::from(1_363_896_240_000_000_000i64)));
}

#[test]
fn bignum_tags_round_trip() {
    let (value, _) = decode(&[0xc2, 0x49, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]).unwrap();
    let expected = BigInt::from(1u8) << 64;
    assert_eq!(value, Value::Integer(expected));
}

#[test]
fn unknown_tag_round_trips_as_tagged() {
    let (value, _) = decode(&[0xda, 0x00, 0x01, 0x86, 0xa3, 0x01]).unwrap();
    assert_eq!(value, Value::tagged(100003, Value::from(1i64)));
}

#[test]
fn depth_bound_rejects_excessive_nesting() {
    let mut bytes = Vec::new();
    for _ in 0..1025 {
        bytes.push(0x81); // array of 1
    }
    bytes.push(0x00);
    let options = DecodeOptions { max_depth: 1024, ..Default::default() };
    assert_eq!(
        decode_with_options(&bytes, &options).unwrap_err(),
        CBORError::MaxDepthReached
    );
}

#[test]
fn depth_at_the_bound_is_accepted() {
    let mut bytes = Vec::new();
    for _ in 0..1024 {
        bytes.push(0x81);
    }
    bytes.push(0x00);
    let options = DecodeOptions { max_depth: 1024, ..Default::default() };
    assert!(decode_with_options(&bytes, &options).is_ok());
}

#[test]
fn truncated_array_reports_array_kind() {
    assert_eq!(decode(&[0x83, 0x01]).unwrap_err(), CBORError::TruncatedArray);
}

#[test]
fn truncated_map_reports_map_kind() {
    assert_eq!(decode(&[0xa1, 0x61, 0x61]).unwrap_err(), CBORError::TruncatedMap);
}

#[test]
fn odd_indefinite_map_entries_is_an_error() {
    assert_eq!(
        decode(&[0xbf, 0x61, 0x61, 0x01, 0x61, 0x62, 0xff]).unwrap_err(),
        CBORError::OddNumberOfMapValues
    );
}

#[test]
fn invalid_utf8_text_string_is_rejected() {
    assert_eq!(decode(&[0x61, 0xff]).unwrap_err(), CBORError::InvalidUtf8String);
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(decode(&[]).unwrap_err(), CBORError::NoInput);
}
