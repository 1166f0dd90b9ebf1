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
 * CBOR error API
 *
 * Error types shared by the value model, the encoder, the decoder and the tag-interpreter
 * registry.
 **************************************************************************************************/
use std::result;

use thiserror::Error;

/// An alias for `Result<T, CBORError>` used throughout this crate.
pub type Result<T> = result::Result<T, CBORError>;

/// `CBORError` enumerates every way that encoding, decoding or tag interpretation can fail.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CBORError {
    /// The initial byte did not match any defined major type / additional information
    /// combination.
    #[error("invalid type tag byte 0x{0:02x}")]
    InvalidTypeTag(u8),
    /// The input buffer was empty.
    #[error("no input bytes to decode")]
    NoInput,
    /// An unsigned integer header ran past the end of the buffer.
    #[error("truncated unsigned integer")]
    TruncatedUnsignedInteger,
    /// A negative integer header ran past the end of the buffer.
    #[error("truncated negative integer")]
    TruncatedNegativeInteger,
    /// A byte string's declared length ran past the end of the buffer.
    #[error("truncated byte string")]
    TruncatedByteString,
    /// A text string's declared length ran past the end of the buffer.
    #[error("truncated utf8 string")]
    TruncatedUtf8String,
    /// An array ran out of bytes before all declared items were decoded.
    #[error("truncated array")]
    TruncatedArray,
    /// A map ran out of bytes before all declared pairs were decoded.
    #[error("truncated map")]
    TruncatedMap,
    /// A simple value's extra payload byte was missing.
    #[error("truncated simple value")]
    TruncatedSimpleValue,
    /// A float's payload bytes ran past the end of the buffer.
    #[error("truncated float")]
    TruncatedFloat,
    /// A tagged value's inner item ran past the end of the buffer.
    #[error("truncated tagged value")]
    TruncatedTaggedValue,
    /// An indefinite-length map had an odd number of entries.
    #[error("indefinite-length map has an odd number of values")]
    OddNumberOfMapValues,

    /// A text string's bytes were not valid UTF-8.
    #[error("invalid utf8 in text string")]
    InvalidUtf8String,
    /// An indefinite-length text string's chunk boundary split a UTF-8 code point.
    #[error("incomplete utf8 sequence at chunk boundary")]
    IncompleteUtf8String,

    /// Recursion exceeded the configured `max_depth`.
    #[error("maximum nesting depth exceeded")]
    MaxDepthReached,

    /// The value variant cannot be represented in CBOR.
    #[error("value cannot be encoded")]
    UnencodableValue,
    /// Two map entries encoded to identical key bytes.
    #[error("map has two entries with identical encoded keys")]
    DuplicateMapKey,

    /// A tagged value did not have the shape its interpreter required.
    #[error("tagged value has the wrong shape for its tag")]
    InvalidTaggedValue,
    /// Tag 34 content was not valid standard base64.
    #[error("invalid base64 data: {0}")]
    InvalidBase64Data(String),
    /// Tag 33 content was not valid base64url.
    #[error("invalid base64url data: {0}")]
    InvalidBase64UrlData(String),
    /// Tag 24 content did not decode as well-formed CBOR.
    #[error("invalid embedded cbor data: {0}")]
    InvalidCborData(String),
    /// Tag 24 content decoded but left trailing bytes.
    #[error("embedded cbor left trailing data")]
    InvalidTrailingData,

    /// `decode_hex`/`encode_hex` was given input that is not valid hexadecimal.
    #[error("invalid hex input: {0}")]
    InvalidHex(String),
}
