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
 * mini_cbor_value module definition
 **************************************************************************************************/
#![warn(missing_docs)]

//! # mini_cbor_value
//!
//! An owned-value CBOR ([RFC 8949](https://datatracker.ietf.org/doc/rfc8949/)) encoder, decoder
//! and tag-interpreter registry. The value model is a recursive, open `Value` tree rather than a
//! zero-copy cursor over caller memory, so the crate is a natural fit for building or consuming
//! arbitrary CBOR documents rather than implementing a fixed wire protocol.
//!
//! ```
//! use mini_cbor_value::{decode, encode, Value};
//!
//! let items = Value::Array(vec![Value::from(1i64), Value::from(2i64), Value::from(3i64)]);
//! let bytes = encode(&items).unwrap();
//! assert_eq!(bytes, vec![0x83, 0x01, 0x02, 0x03]);
//!
//! let (decoded, rest) = decode(&bytes).unwrap();
//! assert_eq!(decoded, items);
//! assert!(rest.is_empty());
//! ```
//!
//! Maps are encoded with RFC 8949 §4.2.1 deterministic key ordering: keys are encoded first,
//! then pairs are sorted by the resulting bytes.
//!
//! ```
//! use mini_cbor_value::{encode, Value};
//!
//! let map = Value::Map(vec![(Value::text("a"), Value::from(1i64))]);
//! assert_eq!(encode(&map).unwrap(), vec![0xa1, 0x61, 0x61, 0x01]);
//! ```

mod bignum;
mod datetime;
mod decode;
mod encode;
mod error;
mod header;
mod registry;
mod textcodec;
mod utils;
mod value;

pub use decode::{decode, decode_hex, decode_hex_with_options, decode_with_options};
pub use encode::{encode, encode_hex};
pub use error::{CBORError, Result};
pub use registry::{default_options, default_tag_interpreters, DecodeOptions, TagInterpreterFn, TagInterpreters};
pub use value::{FloatValue, Timestamp, Value};
