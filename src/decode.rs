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
 * CBOR decoder
 *
 * A recursive-descent parser dispatching on the initial byte of a CBOR item, per RFC 8949 §3.
 * Recursion is bounded by `DecodeOptions::max_depth`, incremented on every descent into an
 * array element, map key, map value, tagged inner value, or embedded-CBOR (tag 24) payload.
 **************************************************************************************************/
use num_bigint::BigInt;

#[cfg(feature = "trace")]
use func_trace::trace;

use crate::error::{CBORError, Result};
use crate::header::{self, MT_ARRAY, MT_BSTR, MT_MAP, MT_NINT, MT_SIMPLE, MT_TAG, MT_TSTR, MT_UINT};
use crate::registry::DecodeOptions;
use crate::value::{FloatValue, Value};

/// Decode exactly one CBOR item from the head of `bytes` using the default options, returning
/// the value and the unconsumed remainder.
#[cfg_attr(feature = "trace", trace)]
pub fn decode(bytes: &[u8]) -> Result<(Value, &[u8])> {
    decode_with_options(bytes, &crate::registry::default_options())
}

/// Decode exactly one CBOR item from the head of `bytes` using `options`.
#[cfg_attr(feature = "trace", trace)]
pub fn decode_with_options<'a>(bytes: &'a [u8], options: &DecodeOptions) -> Result<(Value, &'a [u8])> {
    decode_at_depth(bytes, options, 0)
}

/// Hex-decode `text`, then decode one CBOR item, re-hex-encoding the remainder.
#[cfg_attr(feature = "trace", trace)]
pub fn decode_hex(text: &str) -> Result<(Value, String)> {
    decode_hex_with_options(text, &crate::registry::default_options())
}

/// Hex-decode `text`, then decode one CBOR item with `options`, re-hex-encoding the remainder.
#[cfg_attr(feature = "trace", trace)]
pub fn decode_hex_with_options(text: &str, options: &DecodeOptions) -> Result<(Value, String)> {
    let bytes = crate::textcodec::decode_hex_bytes(text)?;
    let (value, rest) = decode_at_depth(&bytes, options, 0)?;
    Ok((value, crate::textcodec::encode_hex_bytes(rest)))
}

/// Entry point used by the tag-interpreter registry to re-enter the decoder at a caller-supplied
/// depth (tag 24 decodes its embedded bytes at the same depth as the tagged item itself).
pub(crate) fn decode_at_depth<'a>(
    buf: &'a [u8],
    options: &DecodeOptions,
    depth: u32,
) -> Result<(Value, &'a [u8])> {
    if depth > options.max_depth {
        return Err(CBORError::MaxDepthReached);
    }
    decode_item(buf, options, depth)
}

fn decode_item<'a>(buf: &'a [u8], options: &DecodeOptions, depth: u32) -> Result<(Value, &'a [u8])> {
    let initial = *buf.first().ok_or(CBORError::NoInput)?;
    let major = initial & 0xe0;
    match major {
        MT_UINT => {
            let h = header::read_header(buf, 0, CBORError::TruncatedUnsignedInteger)?;
            let v = h.value.ok_or(CBORError::InvalidTypeTag(initial))?;
            Ok((Value::Integer(BigInt::from(v)), &buf[h.len..]))
        }
        MT_NINT => {
            let h = header::read_header(buf, 0, CBORError::TruncatedNegativeInteger)?;
            let v = h.value.ok_or(CBORError::InvalidTypeTag(initial))?;
            let n = BigInt::from(-1) - BigInt::from(v);
            Ok((Value::Integer(n), &buf[h.len..]))
        }
        MT_BSTR => decode_byte_string(buf, initial),
        MT_TSTR => decode_text_string(buf, initial),
        MT_ARRAY => decode_array(buf, initial, options, depth),
        MT_MAP => decode_map(buf, initial, options, depth),
        MT_TAG => decode_tag(buf, initial, options, depth),
        MT_SIMPLE => decode_simple_or_float(buf, initial),
        _ => Err(CBORError::InvalidTypeTag(initial)),
    }
}

fn decode_byte_string(buf: &[u8], initial: u8) -> Result<(Value, &[u8])> {
    if initial & 0x1f == 31 {
        let mut data = Vec::new();
        let rest = decode_indefinite_chunks(&buf[1..], MT_BSTR, CBORError::TruncatedByteString, |chunk| {
            data.extend_from_slice(chunk);
            Ok(())
        })?;
        return Ok((Value::ByteString(data), rest));
    }
    let h = header::read_header(buf, 0, CBORError::TruncatedByteString)?;
    let len = h.value.ok_or(CBORError::InvalidTypeTag(initial))? as usize;
    if !crate::utils::within(buf, h.len, len) {
        return Err(CBORError::TruncatedByteString);
    }
    let bytes = buf[h.len..h.len + len].to_vec();
    Ok((Value::ByteString(bytes), &buf[h.len + len..]))
}

fn decode_text_string(buf: &[u8], initial: u8) -> Result<(Value, &[u8])> {
    if initial & 0x1f == 31 {
        // Each chunk must be independently valid UTF-8: concatenating raw chunk bytes before
        // validating would silently accept a chunk boundary that splits a multi-byte code point
        // whenever the merged bytes happen to reassemble into something valid.
        let mut text = String::new();
        let rest = decode_indefinite_chunks(&buf[1..], MT_TSTR, CBORError::TruncatedUtf8String, |chunk| {
            let chunk = std::str::from_utf8(chunk).map_err(|_| CBORError::IncompleteUtf8String)?;
            text.push_str(chunk);
            Ok(())
        })?;
        return Ok((Value::TextString(text), rest));
    }
    let h = header::read_header(buf, 0, CBORError::TruncatedUtf8String)?;
    let len = h.value.ok_or(CBORError::InvalidTypeTag(initial))? as usize;
    if !crate::utils::within(buf, h.len, len) {
        return Err(CBORError::TruncatedUtf8String);
    }
    let text = String::from_utf8(buf[h.len..h.len + len].to_vec())
        .map_err(|_| CBORError::InvalidUtf8String)?;
    Ok((Value::TextString(text), &buf[h.len + len..]))
}

/// Walk the chunk sequence of an indefinite-length byte/text string per RFC 8949 §3.2.3: each
/// chunk is itself a definite-length item of the same major type, and the sequence ends at the
/// `0xFF` break byte. `on_chunk` receives each chunk's raw bytes in order; it is the caller's
/// choice whether to collect them as-is (byte strings) or validate and accumulate them as text
/// (text strings, where RFC 8949 requires each chunk to be independently valid UTF-8 rather than
/// validated once after concatenation).
fn decode_indefinite_chunks<'a>(
    mut rest: &'a [u8],
    expect_major: u8,
    short_err: CBORError,
    mut on_chunk: impl FnMut(&'a [u8]) -> Result<()>,
) -> Result<&'a [u8]> {
    loop {
        let b = *rest.first().ok_or_else(|| short_err.clone())?;
        if b == 0xFF {
            rest = &rest[1..];
            break;
        }
        if b & 0xe0 != expect_major || b & 0x1f == 31 {
            return Err(CBORError::InvalidTypeTag(b));
        }
        let h = header::read_header(rest, 0, short_err.clone())?;
        let len = h.value.ok_or(CBORError::InvalidTypeTag(b))? as usize;
        if !crate::utils::within(rest, h.len, len) {
            return Err(short_err);
        }
        on_chunk(&rest[h.len..h.len + len])?;
        rest = &rest[h.len + len..];
    }
    Ok(rest)
}

fn decode_array<'a>(
    buf: &'a [u8],
    initial: u8,
    options: &DecodeOptions,
    depth: u32,
) -> Result<(Value, &'a [u8])> {
    let mut items = Vec::new();
    if initial & 0x1f == 31 {
        let mut rest = &buf[1..];
        loop {
            let b = *rest.first().ok_or(CBORError::TruncatedArray)?;
            if b == 0xFF {
                rest = &rest[1..];
                break;
            }
            let (item, new_rest) = decode_sequence_item(rest, options, depth + 1, CBORError::TruncatedArray)?;
            items.push(item);
            rest = new_rest;
        }
        return Ok((Value::Array(items), rest));
    }
    let h = header::read_header(buf, 0, CBORError::TruncatedArray)?;
    let n = h.value.ok_or(CBORError::InvalidTypeTag(initial))?;
    let mut rest = &buf[h.len..];
    for _ in 0..n {
        let (item, new_rest) = decode_sequence_item(rest, options, depth + 1, CBORError::TruncatedArray)?;
        items.push(item);
        rest = new_rest;
    }
    Ok((Value::Array(items), rest))
}

fn decode_map<'a>(
    buf: &'a [u8],
    initial: u8,
    options: &DecodeOptions,
    depth: u32,
) -> Result<(Value, &'a [u8])> {
    let mut flat = Vec::new();
    let rest = if initial & 0x1f == 31 {
        let mut rest = &buf[1..];
        loop {
            let b = *rest.first().ok_or(CBORError::TruncatedMap)?;
            if b == 0xFF {
                rest = &rest[1..];
                break;
            }
            let (item, new_rest) = decode_sequence_item(rest, options, depth + 1, CBORError::TruncatedMap)?;
            flat.push(item);
            rest = new_rest;
        }
        if flat.len() % 2 != 0 {
            return Err(CBORError::OddNumberOfMapValues);
        }
        rest
    } else {
        let h = header::read_header(buf, 0, CBORError::TruncatedMap)?;
        let n = h.value.ok_or(CBORError::InvalidTypeTag(initial))?;
        let mut rest = &buf[h.len..];
        for _ in 0..n * 2 {
            let (item, new_rest) = decode_sequence_item(rest, options, depth + 1, CBORError::TruncatedMap)?;
            flat.push(item);
            rest = new_rest;
        }
        rest
    };
    Ok((Value::Map(build_map(flat)), rest))
}

/// Decode one item for use inside an array/map loop, remapping a bare `NoInput` (ran out of
/// buffer mid-container) to the container's own truncation error.
fn decode_sequence_item<'a>(
    buf: &'a [u8],
    options: &DecodeOptions,
    depth: u32,
    container_err: CBORError,
) -> Result<(Value, &'a [u8])> {
    decode_at_depth(buf, options, depth).map_err(|e| if e == CBORError::NoInput { container_err } else { e })
}

/// Build the final pair list from a flat `[k0, v0, k1, v1, ...]` sequence, keeping insertion
/// order but letting a later duplicate key overwrite the earlier one's value.
fn build_map(flat: Vec<Value>) -> Vec<(Value, Value)> {
    let mut result: Vec<(Value, Value)> = Vec::with_capacity(flat.len() / 2);
    let mut iter = flat.into_iter();
    while let (Some(k), Some(v)) = (iter.next(), iter.next()) {
        match result.iter_mut().find(|(existing_k, _)| *existing_k == k) {
            Some(entry) => entry.1 = v,
            None => result.push((k, v)),
        }
    }
    result
}

fn decode_tag<'a>(
    buf: &'a [u8],
    initial: u8,
    options: &DecodeOptions,
    depth: u32,
) -> Result<(Value, &'a [u8])> {
    let h = header::read_header(buf, 0, CBORError::TruncatedTaggedValue)?;
    let tag = h.value.ok_or(CBORError::InvalidTypeTag(initial))?;
    let rest = &buf[h.len..];
    let (inner, rest) =
        decode_sequence_item(rest, options, depth + 1, CBORError::TruncatedTaggedValue)?;
    match options.tag_interpreters.get(tag) {
        Some(interpreter) => {
            let value = interpreter(tag, inner, options, depth + 1)?;
            Ok((value, rest))
        }
        None => Ok((Value::Tagged(tag, Box::new(inner)), rest)),
    }
}

fn decode_simple_or_float(buf: &[u8], initial: u8) -> Result<(Value, &[u8])> {
    let ai = initial & 0x1f;
    match ai {
        0..=19 => Ok((Value::SimpleValue(ai), &buf[1..])),
        20 => Ok((Value::Boolean(false), &buf[1..])),
        21 => Ok((Value::Boolean(true), &buf[1..])),
        22 => Ok((Value::Null, &buf[1..])),
        23 => Ok((Value::Undefined, &buf[1..])),
        24 => {
            let b = *buf.get(1).ok_or(CBORError::TruncatedSimpleValue)?;
            Ok((Value::SimpleValue(b), &buf[2..]))
        }
        25 => {
            if !crate::utils::within(buf, 1, 2) {
                return Err(CBORError::TruncatedFloat);
            }
            let mut bytes = [0u8; 2];
            bytes.copy_from_slice(&buf[1..3]);
            Ok((Value::Float(decode_half(bytes)), &buf[3..]))
        }
        26 => {
            if !crate::utils::within(buf, 1, 4) {
                return Err(CBORError::TruncatedFloat);
            }
            let mut bytes = [0u8; 4];
            bytes.copy_from_slice(&buf[1..5]);
            Ok((Value::Float(decode_single(bytes)), &buf[5..]))
        }
        27 => {
            if !crate::utils::within(buf, 1, 8) {
                return Err(CBORError::TruncatedFloat);
            }
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(&buf[1..9]);
            Ok((Value::Float(decode_double(bytes)), &buf[9..]))
        }
        _ => Err(CBORError::InvalidTypeTag(initial)),
    }
}

fn decode_half(bytes: [u8; 2]) -> FloatValue {
    let f = half::f16::from_bits(u16::from_be_bytes(bytes));
    classify_float(f.is_nan(), f.is_infinite(), f.is_sign_positive(), f.to_f64())
}

fn decode_single(bytes: [u8; 4]) -> FloatValue {
    let f = f32::from_bits(u32::from_be_bytes(bytes));
    classify_float(f.is_nan(), f.is_infinite(), f.is_sign_positive(), f as f64)
}

fn decode_double(bytes: [u8; 8]) -> FloatValue {
    let f = f64::from_bits(u64::from_be_bytes(bytes));
    classify_float(f.is_nan(), f.is_infinite(), f.is_sign_positive(), f)
}

fn classify_float(is_nan: bool, is_infinite: bool, is_sign_positive: bool, value: f64) -> FloatValue {
    if is_nan {
        FloatValue::NaN
    } else if is_infinite {
        if is_sign_positive {
            FloatValue::PositiveInfinity
        } else {
            FloatValue::NegativeInfinity
        }
    } else {
        FloatValue::Finite(value)
    }
}
