// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{Validation, ValidationError};
use tracing::debug;

/// Two ASCII digits as a number. Rejects signs and whitespace, which
/// `str::parse` would otherwise let through.
fn clock_field(s: &str) -> Option<u8> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u8>().ok()
}

/**
Accepts a 24-hour time of day in the strict form `HH:mm`.

The value must be exactly five bytes with `:` in the middle, `HH` in
`00..=23` and `mm` in `00..=59`. Checks run in that order and the first
failure is the only error reported.
*/
pub fn validate_rfc3339_time(value: &str, key: &str) -> Validation {
    let err = |e: fn(String, String) -> ValidationError| {
        debug!(%key, %value, "invalid time of day");
        Validation::fail(e(key.to_string(), value.to_string()))
    };

    if value.len() != 5 || value.as_bytes()[2] != b':' {
        return err(|key, value| ValidationError::TimeFormat { key, value });
    }

    // byte 2 is ASCII, so both slices fall on char boundaries
    if clock_field(&value[..2]).map_or(true, |hour| hour > 23) {
        return err(|key, value| ValidationError::InvalidHour { key, value });
    }
    if clock_field(&value[3..]).map_or(true, |minute| minute > 59) {
        return err(|key, value| ValidationError::InvalidMinute { key, value });
    }

    Validation::ok()
}

/* -------------------------------------------------------------------------- */
