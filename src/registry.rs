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
 * Tag-interpreter registry
 *
 * After the decoder produces `(tag, inner)` it looks the tag up here. A matching interpreter
 * replaces the tagged pair with its own result; an unmatched tag decodes to `Value::Tagged`.
 **************************************************************************************************/
use std::collections::HashMap;

use num_bigint::BigInt;

#[cfg(feature = "trace")]
use func_trace::trace;

use crate::bignum;
use crate::datetime;
use crate::error::{CBORError, Result};
use crate::textcodec;
use crate::value::Value;

/// An interpreter receives the tag number, the decoder's already-decoded inner value, the
/// options that were in effect, and the depth the inner value was decoded at (tag 24 needs this
/// to re-enter the decoder at the same depth rather than depth 0).
pub type TagInterpreterFn = fn(u64, Value, &DecodeOptions, u32) -> Result<Value>;

/// The decoder's options record: the recursion-depth bound and the tag-interpreter registry.
#[derive(Clone)]
pub struct DecodeOptions {
    /// The deepest a value may recurse (array element, map key/value, tagged inner value, or
    /// embedded-CBOR re-entry) before decoding fails with `MaxDepthReached`.
    pub max_depth: u32,
    /// The tag number to interpreter function lookup consulted after decoding a tagged value.
    pub tag_interpreters: TagInterpreters,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        default_options()
    }
}

/// A pluggable map from tag number to interpreter function.
#[derive(Clone, Default)]
pub struct TagInterpreters(HashMap<u64, TagInterpreterFn>);

impl TagInterpreters {
    /// An empty registry with no interpreters installed.
    pub fn new() -> Self {
        TagInterpreters(HashMap::new())
    }

    /// A registry pre-populated with the crate's default interpreters (tags 0, 1, 2, 3, 24, 32,
    /// 33, 34, 35, 36 and 55799). Equivalent to `default_tag_interpreters()`.
    pub fn with_defaults() -> Self {
        default_tag_interpreters()
    }

    /// Register `f` as the interpreter for `tag`, replacing any interpreter already registered
    /// for it, and return `self` for chaining.
    pub fn insert(&mut self, tag: u64, f: TagInterpreterFn) -> &mut Self {
        self.0.insert(tag, f);
        self
    }

    /// Look up the interpreter registered for `tag`, if any.
    pub fn get(&self, tag: u64) -> Option<TagInterpreterFn> {
        self.0.get(&tag).copied()
    }
}

/// `{ max_depth: 1024, tag_interpreters: default_tag_interpreters() }`.
#[cfg_attr(feature = "trace", trace)]
pub fn default_options() -> DecodeOptions {
    DecodeOptions { max_depth: 1024, tag_interpreters: default_tag_interpreters() }
}

/// The default interpreter table, covering tags 0, 1, 2, 3, 24, 32, 33, 34, 35, 36 and 55799.
#[cfg_attr(feature = "trace", trace)]
pub fn default_tag_interpreters() -> TagInterpreters {
    let mut table = TagInterpreters::new();
    table.insert(0, interp_datetime_text);
    table.insert(1, interp_epoch);
    table.insert(2, interp_bignum_positive);
    table.insert(3, interp_bignum_negative);
    table.insert(24, interp_embedded_cbor);
    table.insert(32, interp_passthrough_text);
    table.insert(33, interp_base64url);
    table.insert(34, interp_base64);
    table.insert(35, interp_passthrough_text);
    table.insert(36, interp_passthrough_text);
    table.insert(55799, interp_self_described);
    table
}

fn interp_datetime_text(_tag: u64, inner: Value, _options: &DecodeOptions, _depth: u32) -> Result<Value> {
    match inner {
        Value::TextString(_) => Ok(inner),
        _ => Err(CBORError::InvalidTaggedValue),
    }
}

fn interp_epoch(_tag: u64, inner: Value, _options: &DecodeOptions, _depth: u32) -> Result<Value> {
    let nanos = match &inner {
        Value::Integer(n) => {
            let seconds: i64 = n
                .clone()
                .try_into()
                .map_err(|_| CBORError::InvalidTaggedValue)?;
            datetime::nanoseconds_from_integer_seconds(seconds)
        }
        Value::Float(crate::value::FloatValue::Finite(f)) => {
            datetime::nanoseconds_from_float_seconds(*f)
        }
        _ => return Err(CBORError::InvalidTaggedValue),
    };
    Ok(Value::Integer(BigInt::from(nanos)))
}

fn interp_bignum_positive(_tag: u64, inner: Value, _options: &DecodeOptions, _depth: u32) -> Result<Value> {
    match inner {
        Value::ByteString(bytes) => Ok(Value::Integer(bignum::from_tag_payload(false, &bytes))),
        _ => Err(CBORError::InvalidTaggedValue),
    }
}

fn interp_bignum_negative(_tag: u64, inner: Value, _options: &DecodeOptions, _depth: u32) -> Result<Value> {
    match inner {
        Value::ByteString(bytes) => Ok(Value::Integer(bignum::from_tag_payload(true, &bytes))),
        _ => Err(CBORError::InvalidTaggedValue),
    }
}

fn interp_embedded_cbor(_tag: u64, inner: Value, options: &DecodeOptions, depth: u32) -> Result<Value> {
    let bytes = match inner {
        Value::ByteString(bytes) => bytes,
        _ => return Err(CBORError::InvalidTaggedValue),
    };
    let (value, rest) = crate::decode::decode_at_depth(&bytes, options, depth)
        .map_err(|e| CBORError::InvalidCborData(e.to_string()))?;
    if !rest.is_empty() {
        return Err(CBORError::InvalidTrailingData);
    }
    Ok(value)
}

fn interp_passthrough_text(_tag: u64, inner: Value, _options: &DecodeOptions, _depth: u32) -> Result<Value> {
    match inner {
        Value::TextString(_) => Ok(inner),
        _ => Err(CBORError::InvalidTaggedValue),
    }
}

fn interp_base64url(_tag: u64, inner: Value, _options: &DecodeOptions, _depth: u32) -> Result<Value> {
    match inner {
        Value::TextString(text) => Ok(Value::ByteString(textcodec::decode_base64url(&text)?)),
        _ => Err(CBORError::InvalidTaggedValue),
    }
}

fn interp_base64(_tag: u64, inner: Value, _options: &DecodeOptions, _depth: u32) -> Result<Value> {
    match inner {
        Value::TextString(text) => Ok(Value::ByteString(textcodec::decode_base64(&text)?)),
        _ => Err(CBORError::InvalidTaggedValue),
    }
}

fn interp_self_described(_tag: u64, inner: Value, _options: &DecodeOptions, _depth: u32) -> Result<Value> {
    Ok(inner)
}
