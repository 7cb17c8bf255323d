// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{names::RegexpValidator, strings::*, Validate, Validation, ValidationError};
use lazy_static::lazy_static;
use tracing::debug;

lazy_static! {
    static ref CLOUD_IOT_ID: RegexpValidator = RegexpValidator::new(CLOUD_IOT_ID_REGEX);
}

/**
Cloud IoT registry/device identifier.

Two independent rules, both always checked:
- must not start with `goog` (case-sensitive)
- letter first, then 2..=254 of letters, digits and `-._+~%`
*/
pub fn validate_cloud_iot_id(value: &str, key: &str) -> Validation {
    let mut res: Validation = Validation::ok();

    if value.starts_with(IOT_RESERVED_PREFIX) {
        debug!(%key, %value, "reserved identifier prefix");
        res.push(ValidationError::ReservedPrefix {
            key: key.to_string(),
            value: value.to_string(),
        });
    }
    res.errors.extend(CLOUD_IOT_ID.validate(value, key).errors);

    res
}

/* -------------------------------------------------------------------------- */
