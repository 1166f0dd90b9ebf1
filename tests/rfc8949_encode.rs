//! Encoder vectors drawn from RFC 8949 Appendix A, plus the additional-information width
//! boundaries the spec calls out explicitly.
use mini_cbor_value::{encode, FloatValue, Value};

#[test]
fn encodes_immediate_unsigned_integers() {
    assert_eq!(encode(&Value::from(0i64)).unwrap(), vec![0x00]);
    assert_eq!(encode(&Value::from(1i64)).unwrap(), vec![0x01]);
    assert_eq!(encode(&Value::from(10i64)).unwrap(), vec![0x0a]);
    assert_eq!(encode(&Value::from(23i64)).unwrap(), vec![0x17]);
}

#[test]
fn encodes_width_boundaries() {
    assert_eq!(encode(&Value::from(24i64)).unwrap(), vec![0x18, 0x18]);
    assert_eq!(encode(&Value::from(25i64)).unwrap(), vec![0x18, 0x19]);
    assert_eq!(encode(&Value::from(100i64)).unwrap(), vec![0x18, 0x64]);
    assert_eq!(encode(&Value::from(1000i64)).unwrap(), vec![0x19, 0x03, 0xe8]);
    assert_eq!(
        encode(&Value::from(1000000i64)).unwrap(),
        vec![0x1a, 0x00, 0x0f, 0x42, 0x40]
    );
    assert_eq!(
        encode(&Value::from(1000000000000i64)).unwrap(),
        vec![0x1b, 0x00, 0x00, 0x00, 0xe8, 0xd4, 0xa5, 0x10, 0x00]
    );
}

#[test]
fn minimum_width_invariant_boundaries() {
    assert_eq!(encode(&Value::from(24i64)).unwrap().len(), 2);
    assert_eq!(encode(&Value::from(256i64)).unwrap().len(), 3);
    assert_eq!(encode(&Value::from(65536i64)).unwrap().len(), 5);
    use num_bigint::BigInt;
    let two_pow_32 = BigInt::from(1u8) << 32;
    assert_eq!(encode(&Value::Integer(two_pow_32)).unwrap().len(), 9);
}

#[test]
fn encodes_negative_integers() {
    assert_eq!(encode(&Value::from(-1i64)).unwrap(), vec![0x20]);
    assert_eq!(encode(&Value::from(-10i64)).unwrap(), vec![0x29]);
    assert_eq!(encode(&Value::from(-100i64)).unwrap(), vec![0x38, 0x63]);
    assert_eq!(encode(&Value::from(-1000i64)).unwrap(), vec![0x39, 0x03, 0xe7]);
}

#[test]
fn encodes_bignum_beyond_native_range() {
    use num_bigint::BigInt;
    // -(2^64) - 1, serialized as tag 3 over a 9-byte big-endian magnitude.
    let n = -(BigInt::from(1u8) << 64u32) - BigInt::from(1u8);
    assert_eq!(
        encode(&Value::Integer(n)).unwrap(),
        vec![0xc3, 0x49, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
    );
}

#[test]
fn encodes_float_specials_as_half_precision() {
    assert_eq!(
        encode(&Value::Float(FloatValue::PositiveInfinity)).unwrap(),
        vec![0xf9, 0x7c, 0x00]
    );
    assert_eq!(
        encode(&Value::Float(FloatValue::NegativeInfinity)).unwrap(),
        vec![0xf9, 0xfc, 0x00]
    );
    assert_eq!(encode(&Value::Float(FloatValue::NaN)).unwrap(), vec![0xf9, 0x7e, 0x00]);
}

#[test]
fn encodes_finite_doubles_at_full_width() {
    assert_eq!(
        encode(&Value::Float(FloatValue::Finite(1.1))).unwrap(),
        vec![0xfb, 0x3f, 0xf1, 0x99, 0x99, 0x99, 0x99, 0x99, 0x9a]
    );
}

#[test]
fn encodes_simple_values_and_constants() {
    assert_eq!(encode(&Value::Boolean(false)).unwrap(), vec![0xf4]);
    assert_eq!(encode(&Value::Boolean(true)).unwrap(), vec![0xf5]);
    assert_eq!(encode(&Value::Null).unwrap(), vec![0xf6]);
    assert_eq!(encode(&Value::Undefined).unwrap(), vec![0xf7]);
}

#[test]
fn encodes_byte_and_text_strings() {
    assert_eq!(encode(&Value::bytes(vec![0x01, 0x02, 0x03, 0x04])).unwrap(), vec![
        0x44, 0x01, 0x02, 0x03, 0x04
    ]);
    assert_eq!(
        encode(&Value::text("IETF")).unwrap(),
        vec![0x64, 0x49, 0x45, 0x54, 0x46]
    );
}

#[test]
fn encodes_arrays() {
    let arr = Value::Array(vec![Value::from(1i64), Value::from(2i64), Value::from(3i64)]);
    assert_eq!(encode(&arr).unwrap(), vec![0x83, 0x01, 0x02, 0x03]);
}

#[test]
fn sorts_map_keys_by_encoded_bytes() {
    let map = Value::Map(vec![
        (Value::text("b"), Value::from(2i64)),
        (Value::text("a"), Value::from(1i64)),
    ]);
    assert_eq!(
        encode(&map).unwrap(),
        vec![0xa2, 0x61, 0x61, 0x01, 0x61, 0x62, 0x02]
    );
}

#[test]
fn rejects_duplicate_map_keys() {
    let map = Value::Map(vec![
        (Value::text("a"), Value::from(1i64)),
        (Value::text("a"), Value::from(2i64)),
    ]);
    assert_eq!(encode(&map), Err(mini_cbor_value::CBORError::DuplicateMapKey));
}

#[test]
fn encodes_tagged_values() {
    let tagged = Value::tagged(32, Value::text("http://www.example.com"));
    let bytes = encode(&tagged).unwrap();
    assert_eq!(bytes[0], 0xd8);
    assert_eq!(bytes[1], 32);
}

#[test]
fn rejects_out_of_range_generic_simple_values() {
    assert_eq!(
        encode(&Value::SimpleValue(20)),
        Err(mini_cbor_value::CBORError::UnencodableValue)
    );
}
