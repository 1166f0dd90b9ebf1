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
 * CBOR value model
 *
 * `Value` is the open tree that the encoder consumes and the decoder produces. It is owned:
 * there is no borrowed variant tied to the lifetime of an input buffer.
 **************************************************************************************************/
use std::fmt;

use chrono::{DateTime, FixedOffset};
use num_bigint::BigInt;

/// A finite double, or one of the three special values CBOR can represent without a full
/// double-width payload.
#[derive(Debug, Clone, PartialEq)]
pub enum FloatValue {
    Finite(f64),
    PositiveInfinity,
    NegativeInfinity,
    NaN,
}

/// An instant expressed as a signed seconds-since-epoch count plus a nanosecond remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    /// Whole seconds since the Unix epoch, may be negative.
    pub seconds: i64,
    /// Nanoseconds past `seconds`, always in `[0, 999_999_999]`.
    pub nanoseconds: u32,
}

impl Timestamp {
    /// Build a `Timestamp` from a seconds/nanoseconds pair.
    pub fn new(seconds: i64, nanoseconds: u32) -> Self {
        Timestamp { seconds, nanoseconds }
    }
}

/// `Value` is the sum type exchanged with callers on both the encode and decode path.
///
/// `Datetime` and `Timestamp` are encoder-only: the decoder never produces them, since tags 0
/// and 1 have default interpreters that replace the tagged pair with a plain value (see
/// `registry`).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(BigInt),
    Float(FloatValue),
    Boolean(bool),
    Null,
    Undefined,
    ByteString(Vec<u8>),
    TextString(String),
    Array(Vec<Value>),
    Map(Vec<(Value, Value)>),
    /// A major-type-7 simple value other than `false`/`true`/`null`/`undefined` and the floats.
    SimpleValue(u8),
    /// A tagged value with no registered interpreter, or produced explicitly by the caller.
    Tagged(u64, Box<Value>),
    Datetime(DateTime<FixedOffset>),
    Timestamp(Timestamp),
}

impl Value {
    /// Build a `TextString` from anything convertible to an owned `String`.
    pub fn text<S: Into<String>>(s: S) -> Self {
        Value::TextString(s.into())
    }

    /// Build a `ByteString` from anything convertible to an owned `Vec<u8>`.
    pub fn bytes<B: Into<Vec<u8>>>(b: B) -> Self {
        Value::ByteString(b.into())
    }

    /// Wrap `inner` in a `Tagged` value under the given tag number.
    pub fn tagged(tag: u64, inner: Value) -> Self {
        Value::Tagged(tag, Box::new(inner))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Null => write!(f, "null"),
            Value::Undefined => write!(f, "undefined"),
            Value::ByteString(b) => write!(f, "h'{}'", hex::encode(b)),
            Value::TextString(s) => write!(f, "{s:?}"),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(pairs) => {
                write!(f, "{{")?;
                for (i, (k, v)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
            Value::SimpleValue(n) => write!(f, "simple({n})"),
            Value::Tagged(tag, inner) => write!(f, "{tag}({inner})"),
            Value::Datetime(dt) => write!(f, "{dt}"),
            Value::Timestamp(ts) => {
                // `seconds` and `nanoseconds` combine as `seconds + nanoseconds * 1e-9`, with
                // `nanoseconds` always non-negative (POSIX `timespec` convention), so a
                // negative instant needs its sign and magnitude recombined before printing —
                // naively concatenating the two fields misreads e.g. (-1, 500_000_000) as -1.5s
                // when the actual instant is -0.5s.
                let total_nanos =
                    ts.seconds as i128 * 1_000_000_000 + ts.nanoseconds as i128;
                let sign = if total_nanos < 0 { "-" } else { "" };
                let abs_nanos = total_nanos.unsigned_abs();
                write!(f, "{sign}{}.{:09}", abs_nanos / 1_000_000_000, abs_nanos % 1_000_000_000)
            }
        }
    }
}

impl fmt::Display for FloatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloatValue::Finite(v) => write!(f, "{v}"),
            FloatValue::PositiveInfinity => write!(f, "Infinity"),
            FloatValue::NegativeInfinity => write!(f, "-Infinity"),
            FloatValue::NaN => write!(f, "NaN"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(BigInt::from(v))
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Integer(BigInt::from(v))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        if v.is_nan() {
            Value::Float(FloatValue::NaN)
        } else if v.is_infinite() {
            if v > 0.0 {
                Value::Float(FloatValue::PositiveInfinity)
            } else {
                Value::Float(FloatValue::NegativeInfinity)
            }
        } else {
            Value::Float(FloatValue::Finite(v))
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::TextString(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::TextString(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::ByteString(v)
    }
}
