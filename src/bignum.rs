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
 * Bignum tag (2 / 3) support
 *
 * Integers outside [-(2^64), 2^64 - 1] round-trip through tag 2 (positive) and tag 3 (negative)
 * byte strings holding the big-endian minimal-length unsigned magnitude.
 **************************************************************************************************/
use num_bigint::{BigInt, Sign};

/// `true` if `v` fits the native range CBOR can encode as a plain integer (major type 0 or 1)
/// rather than a bignum tag: `[-(2^64), 2^64 - 1]`.
pub fn fits_native_range(v: &BigInt) -> bool {
    let max = BigInt::from(u64::MAX);
    let min = -(BigInt::from(u64::MAX) + BigInt::from(1u8));
    *v >= min && *v <= max
}

/// Split `v` into `(is_negative, magnitude_bytes)` where `magnitude_bytes` is the big-endian
/// minimal-length unsigned representation CBOR tag 2/3 byte strings carry. For a negative `v`
/// the magnitude is `-1 - v`, per RFC 8949 §3.4.3.
pub fn to_tag_payload(v: &BigInt) -> (bool, Vec<u8>) {
    if v.sign() == Sign::Minus {
        let magnitude = BigInt::from(-1) - v;
        (true, magnitude.to_bytes_be().1)
    } else {
        (false, v.to_bytes_be().1)
    }
}

/// Reconstruct the integer value from a tag 2 (`negative = false`) or tag 3 (`negative = true`)
/// byte string.
pub fn from_tag_payload(negative: bool, bytes: &[u8]) -> BigInt {
    let magnitude = BigInt::from_bytes_be(Sign::Plus, bytes);
    if negative {
        BigInt::from(-1) - magnitude
    } else {
        magnitude
    }
}
