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
 * CBOR item header encoding/decoding
 *
 * Every CBOR data item starts with an initial byte combining a three-bit major type and a
 * five-bit additional information field, optionally followed by 1/2/4/8 bytes carrying the
 * item's length or immediate value (RFC 8949 §3).
 **************************************************************************************************/
#[cfg(feature = "trace")]
use func_trace::trace;

use crate::error::{CBORError, Result};

pub const MT_UINT: u8 = 0x00;
pub const MT_NINT: u8 = 0x20;
pub const MT_BSTR: u8 = 0x40;
pub const MT_TSTR: u8 = 0x60;
pub const MT_ARRAY: u8 = 0x80;
pub const MT_MAP: u8 = 0xa0;
pub const MT_TAG: u8 = 0xc0;
pub const MT_SIMPLE: u8 = 0xe0;

pub const AI_ONE_BYTE: u8 = 24;
pub const AI_TWO_BYTES: u8 = 25;
pub const AI_FOUR_BYTES: u8 = 26;
pub const AI_EIGHT_BYTES: u8 = 27;
pub const AI_INDEFINITE: u8 = 31;

/// Append the minimum-width header for `major | additional-information(value)` to `out`,
/// choosing the smallest of the five encodings RFC 8949 §3 allows for a given value.
#[cfg_attr(feature = "trace", trace)]
pub fn write_header(out: &mut Vec<u8>, major: u8, value: u64) {
    if value < 24 {
        out.push(major | value as u8);
    } else if value <= u8::MAX as u64 {
        out.push(major | AI_ONE_BYTE);
        out.push(value as u8);
    } else if value <= u16::MAX as u64 {
        out.push(major | AI_TWO_BYTES);
        out.extend_from_slice(&(value as u16).to_be_bytes());
    } else if value <= u32::MAX as u64 {
        out.push(major | AI_FOUR_BYTES);
        out.extend_from_slice(&(value as u32).to_be_bytes());
    } else {
        out.push(major | AI_EIGHT_BYTES);
        out.extend_from_slice(&value.to_be_bytes());
    }
}

/// Append an indefinite-length header (`major | 31`) for containers whose length is not known
/// up front.
#[cfg_attr(feature = "trace", trace)]
pub fn write_indefinite_header(out: &mut Vec<u8>, major: u8) {
    out.push(major | AI_INDEFINITE);
}

/// A decoded initial byte: the major type (top three bits, still in the 0xE0-masked position)
/// and the resolved additional-information value, which is `None` for the indefinite-length
/// marker (additional information 31).
pub struct Header {
    /// The major type, still masked into its 0xE0-shifted bit position.
    pub major: u8,
    /// The resolved additional-information value, or `None` for the indefinite-length marker.
    pub value: Option<u64>,
    /// Number of bytes (including the initial byte) this header occupied.
    pub len: usize,
}

/// Parse the header at `buf[start..]`. `short_err` names the error to return if the buffer ends
/// before the length/value bytes that the additional information field promised are available.
#[cfg_attr(feature = "trace", trace)]
pub fn read_header(buf: &[u8], start: usize, short_err: CBORError) -> Result<Header> {
    let initial = *buf.get(start).ok_or_else(|| short_err.clone())?;
    let major = initial & 0xe0;
    let ai = initial & 0x1f;
    match ai {
        0..=23 => Ok(Header { major, value: Some(ai as u64), len: 1 }),
        24 => {
            let b = byte_at(buf, start + 1, &short_err)?;
            Ok(Header { major, value: Some(b as u64), len: 2 })
        }
        25 => {
            let bytes = slice_at(buf, start + 1, 2, &short_err)?;
            Ok(Header { major, value: Some(u16::from_be_bytes([bytes[0], bytes[1]]) as u64), len: 3 })
        }
        26 => {
            let bytes = slice_at(buf, start + 1, 4, &short_err)?;
            let mut a = [0u8; 4];
            a.copy_from_slice(bytes);
            Ok(Header { major, value: Some(u32::from_be_bytes(a) as u64), len: 5 })
        }
        27 => {
            let bytes = slice_at(buf, start + 1, 8, &short_err)?;
            let mut a = [0u8; 8];
            a.copy_from_slice(bytes);
            Ok(Header { major, value: Some(u64::from_be_bytes(a)), len: 9 })
        }
        31 => Ok(Header { major, value: None, len: 1 }),
        _ => Err(CBORError::InvalidTypeTag(initial)),
    }
}

fn byte_at(buf: &[u8], idx: usize, short_err: &CBORError) -> Result<u8> {
    buf.get(idx).copied().ok_or_else(|| short_err.clone())
}

fn slice_at<'a>(buf: &'a [u8], start: usize, len: usize, short_err: &CBORError) -> Result<&'a [u8]> {
    if crate::utils::within(buf, start, len) {
        Ok(&buf[start..start + len])
    } else {
        Err(short_err.clone())
    }
}
