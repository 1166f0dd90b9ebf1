//! Round-trip and external-collaborator coverage: invariants 1 and 5 from the testable
//! properties, plus the base64/base64url tag interpreters.
use mini_cbor_value::{decode, decode_hex, encode, encode_hex, Value};

fn assert_round_trips(value: Value) {
    let bytes = encode(&value).unwrap();
    let (decoded, rest) = decode(&bytes).unwrap();
    assert_eq!(decoded, value);
    assert!(rest.is_empty());
}

#[test]
fn round_trips_scalars_and_containers() {
    assert_round_trips(Value::from(0i64));
    assert_round_trips(Value::from(-12345i64));
    assert_round_trips(Value::Boolean(true));
    assert_round_trips(Value::Boolean(false));
    assert_round_trips(Value::Null);
    assert_round_trips(Value::Undefined);
    assert_round_trips(Value::bytes(vec![0xde, 0xad, 0xbe, 0xef]));
    assert_round_trips(Value::text("hello, cbor"));
    assert_round_trips(Value::Array(vec![
        Value::from(1i64),
        Value::text("two"),
        Value::Array(vec![Value::from(3i64)]),
    ]));
    assert_round_trips(Value::Map(vec![
        (Value::from(1i64), Value::text("one")),
        (Value::from(2i64), Value::text("two")),
    ]));
}

#[test]
fn hex_round_trip_is_idempotent() {
    let value = Value::Array(vec![Value::from(1i64), Value::from(2i64), Value::from(3i64)]);
    let text = encode_hex(&value).unwrap();
    let (decoded, rest) = decode_hex(&text).unwrap();
    assert_eq!(decoded, value);
    assert_eq!(rest, "");
}

#[test]
fn base64url_tag_decodes_to_bytes() {
    // tag 33 over "aGVsbG8" (base64url, unpadded, "hello")
    let bytes = encode(&Value::tagged(33, Value::text("aGVsbG8"))).unwrap();
    let (value, _) = decode(&bytes).unwrap();
    assert_eq!(value, Value::bytes(b"hello".to_vec()));
}

#[test]
fn base64_tag_decodes_to_bytes() {
    // tag 34 over "aGVsbG8=" (standard base64, padded, "hello")
    let bytes = encode(&Value::tagged(34, Value::text("aGVsbG8="))).unwrap();
    let (value, _) = decode(&bytes).unwrap();
    assert_eq!(value, Value::bytes(b"hello".to_vec()));
}

#[test]
fn self_described_cbor_tag_is_transparent() {
    let inner = Value::from(42i64);
    let bytes = encode(&Value::tagged(55799, inner.clone())).unwrap();
    let (value, _) = decode(&bytes).unwrap();
    assert_eq!(value, inner);
}

#[test]
fn value_display_renders_a_readable_diagnostic() {
    let value = Value::Array(vec![Value::from(1i64), Value::text("two"), Value::Null]);
    assert_eq!(value.to_string(), "[1, \"two\", null]");

    let map = Value::Map(vec![(Value::text("a"), Value::from(1i64))]);
    assert_eq!(map.to_string(), "{\"a\": 1}");

    assert_eq!(Value::bytes(vec![0xde, 0xad]).to_string(), "h'dead'");
}
