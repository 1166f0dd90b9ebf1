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
 * Tag 0 / tag 1 datetime helpers
 **************************************************************************************************/
use chrono::{DateTime, FixedOffset, SecondsFormat};

use crate::value::Timestamp;

/// Format a calendar datetime as RFC 3339 text for tag 0, using `"Z"` for zero offset and
/// `±HH:MM` otherwise.
pub fn format_rfc3339(dt: &DateTime<FixedOffset>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, dt.offset().local_minus_utc() == 0)
}

/// Split a `Timestamp` into the tag 1 payload: an integer when there is no sub-second
/// remainder, otherwise a floating-point seconds value.
pub enum EpochPayload {
    Integer(i64),
    Float(f64),
}

pub fn epoch_payload(ts: &Timestamp) -> EpochPayload {
    if ts.nanoseconds == 0 {
        EpochPayload::Integer(ts.seconds)
    } else {
        EpochPayload::Float(ts.seconds as f64 + ts.nanoseconds as f64 * 1e-9)
    }
}

/// Convert a tag 1 integer payload (whole seconds) to nanoseconds-since-epoch, per the default
/// tag 1 interpreter.
pub fn nanoseconds_from_integer_seconds(seconds: i64) -> i128 {
    seconds as i128 * 1_000_000_000
}

/// Convert a tag 1 float payload (fractional seconds) to nanoseconds-since-epoch, rounding to
/// the nearest nanosecond and documenting the resulting loss of sub-nanosecond precision.
pub fn nanoseconds_from_float_seconds(seconds: f64) -> i128 {
    (seconds * 1e9).round() as i128
}
