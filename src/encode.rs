/***************************************************************************************************
 * Copyright (c) 2021-2023 Qualcomm Innovation Center, Inc. All rights reserved.
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy of this software
 * and associated documentation files (the “Software”), to deal in the Software without
 * restriction, including without limitation the rights to use, copy, modify, merge, publish,
 * distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the
 * Software is furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice (including the next
 * paragraph) shall be included in all copies or substantial portions of the
 * Software.
 *
 * THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING
 * BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
 * NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM,
 * DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.
 **************************************************************************************************/
/***************************************************************************************************
 * CBOR encoder
 *
 * Maps a `Value` tree to a bit-exact CBOR byte sequence: minimum-width integer headers, 8-byte
 * double-precision floats with half-precision specials, deterministic map key ordering, and
 * tag envelopes.
 **************************************************************************************************/
use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;

#[cfg(feature = "trace")]
use func_trace::trace;

use crate::bignum;
use crate::datetime::{self, EpochPayload};
use crate::error::{CBORError, Result};
use crate::header::{self, MT_ARRAY, MT_BSTR, MT_MAP, MT_NINT, MT_SIMPLE, MT_TAG, MT_TSTR, MT_UINT};
use crate::value::{FloatValue, Value};

const SIMPLE_FALSE: u8 = 20;
const SIMPLE_TRUE: u8 = 21;
const SIMPLE_NULL: u8 = 22;
const SIMPLE_UNDEFINED: u8 = 23;
const SIMPLE_ONE_BYTE_FOLLOWS: u8 = 24;
const FLOAT_HALF: u8 = 25;
const FLOAT_DOUBLE: u8 = 27;

const HALF_POSITIVE_INFINITY: u16 = 0x7C00;
const HALF_NEGATIVE_INFINITY: u16 = 0xFC00;
const HALF_NAN: u16 = 0x7E00;

/// Encode `value` to a fresh CBOR byte sequence.
#[cfg_attr(feature = "trace", trace)]
pub fn encode(value: &Value) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    encode_into(value, &mut out)?;
    Ok(out)
}

/// Encode `value` and hex-encode the result, for callers that want text rather than bytes.
#[cfg_attr(feature = "trace", trace)]
pub fn encode_hex(value: &Value) -> Result<String> {
    Ok(crate::textcodec::encode_hex_bytes(&encode(value)?))
}

#[cfg_attr(feature = "trace", trace)]
fn encode_into(value: &Value, out: &mut Vec<u8>) -> Result<()> {
    match value {
        Value::Integer(n) => encode_integer(n, out),
        Value::Float(f) => encode_float(f, out),
        Value::Boolean(false) => Ok(out.push(MT_SIMPLE | SIMPLE_FALSE)),
        Value::Boolean(true) => Ok(out.push(MT_SIMPLE | SIMPLE_TRUE)),
        Value::Null => Ok(out.push(MT_SIMPLE | SIMPLE_NULL)),
        Value::Undefined => Ok(out.push(MT_SIMPLE | SIMPLE_UNDEFINED)),
        Value::ByteString(bytes) => {
            header::write_header(out, MT_BSTR, bytes.len() as u64);
            out.extend_from_slice(bytes);
            Ok(())
        }
        Value::TextString(text) => {
            header::write_header(out, MT_TSTR, text.len() as u64);
            out.extend_from_slice(text.as_bytes());
            Ok(())
        }
        Value::Array(items) => {
            header::write_header(out, MT_ARRAY, items.len() as u64);
            for item in items {
                encode_into(item, out)?;
            }
            Ok(())
        }
        Value::Map(pairs) => encode_map(pairs, out),
        Value::SimpleValue(n) => encode_simple(*n, out),
        Value::Tagged(tag, inner) => {
            header::write_header(out, MT_TAG, *tag);
            encode_into(inner, out)
        }
        Value::Datetime(dt) => {
            header::write_header(out, MT_TAG, 0);
            let text = datetime::format_rfc3339(dt);
            encode_into(&Value::TextString(text), out)
        }
        Value::Timestamp(ts) => {
            header::write_header(out, MT_TAG, 1);
            match datetime::epoch_payload(ts) {
                EpochPayload::Integer(seconds) => encode_into(&Value::from(seconds), out),
                EpochPayload::Float(seconds) => encode_into(&Value::from(seconds), out),
            }
        }
    }
}

fn encode_integer(n: &BigInt, out: &mut Vec<u8>) -> Result<()> {
    if bignum::fits_native_range(n) {
        if n.sign() != Sign::Minus {
            let v = n.to_u64().ok_or(CBORError::UnencodableValue)?;
            header::write_header(out, MT_UINT, v);
        } else {
            let magnitude = BigInt::from(-1) - n;
            let v = magnitude.to_u64().ok_or(CBORError::UnencodableValue)?;
            header::write_header(out, MT_NINT, v);
        }
        Ok(())
    } else {
        let (negative, bytes) = bignum::to_tag_payload(n);
        let tag = if negative { 3 } else { 2 };
        header::write_header(out, MT_TAG, tag);
        header::write_header(out, MT_BSTR, bytes.len() as u64);
        out.extend_from_slice(&bytes);
        Ok(())
    }
}

fn encode_float(f: &FloatValue, out: &mut Vec<u8>) -> Result<()> {
    match f {
        FloatValue::Finite(v) => {
            out.push(MT_SIMPLE | FLOAT_DOUBLE);
            out.extend_from_slice(&v.to_bits().to_be_bytes());
        }
        FloatValue::PositiveInfinity => write_half(out, HALF_POSITIVE_INFINITY),
        FloatValue::NegativeInfinity => write_half(out, HALF_NEGATIVE_INFINITY),
        FloatValue::NaN => write_half(out, HALF_NAN),
    }
    Ok(())
}

fn write_half(out: &mut Vec<u8>, bits: u16) {
    out.push(MT_SIMPLE | FLOAT_HALF);
    out.extend_from_slice(&bits.to_be_bytes());
}

fn encode_simple(n: u8, out: &mut Vec<u8>) -> Result<()> {
    if n < 20 {
        out.push(MT_SIMPLE | n);
        Ok(())
    } else if n >= 32 {
        out.push(MT_SIMPLE | SIMPLE_ONE_BYTE_FOLLOWS);
        out.push(n);
        Ok(())
    } else {
        Err(CBORError::UnencodableValue)
    }
}

fn encode_map(pairs: &[(Value, Value)], out: &mut Vec<u8>) -> Result<()> {
    let mut encoded: Vec<(Vec<u8>, Vec<u8>)> = Vec::with_capacity(pairs.len());
    for (k, v) in pairs {
        let mut key_bytes = Vec::new();
        encode_into(k, &mut key_bytes)?;
        let mut value_bytes = Vec::new();
        encode_into(v, &mut value_bytes)?;
        encoded.push((key_bytes, value_bytes));
    }
    encoded.sort_by(|a, b| a.0.cmp(&b.0));
    for window in encoded.windows(2) {
        if window[0].0 == window[1].0 {
            return Err(CBORError::DuplicateMapKey);
        }
    }
    header::write_header(out, MT_MAP, encoded.len() as u64);
    for (key_bytes, value_bytes) in encoded {
        out.extend_from_slice(&key_bytes);
        out.extend_from_slice(&value_bytes);
    }
    Ok(())
}
