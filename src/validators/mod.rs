// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Field-level validators for cloud resource configuration values.
//!
//! Every validator follows the same contract: it takes the raw value and the
//! field key (used only for error messages) and returns a [Validation] with
//! any warnings and errors. An empty [Validation] means the value is accepted.

mod cache;
mod iot;
mod names;
mod network;
mod strings;
mod time;

use serde::{Deserialize, Serialize};
use std::{error, fmt};
use strings::*;

pub use iot::validate_cloud_iot_id;
pub use names::*;
pub use network::*;
pub use strings::{
    CLOUD_IOT_ID_REGEX, GCP_NAME_REGEX, IOT_RESERVED_PREFIX, PROJECT_REGEX, REGION_REGEX,
    RFC1918_NETWORKS, SUBNETWORK_REGEX,
};
pub use time::validate_rfc3339_time;

/* -------------------------------------------------------------------------- */

#[rustfmt::skip]
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum ValidationError {
    /// validator built with `min < 2` (RFC1035 names)
    InvalidMin(usize),
    /// validator built with `max < min`
    InvalidMax { min: usize, max: usize },
    /// regexp failed to compile
    InvalidPattern { pattern: String, reason: String },
    NoMatch         { key: String, value: String, pattern: String },
    /// value is not parseable as `address/prefix` (network validators)
    InvalidCidr     { key: String, value: String, reason: String },
    /// host bits are set, `network` is what the value should have been
    NotNetwork      { key: String, value: String, network: String },
    PrefixOutOfRange{ key: String, min: u8, max: u8, got: u8 },
    NotRfc1918      { key: String, value: String },
    /// value is not parseable as `address/prefix` (plain CIDR validator)
    InvalidCidrRange{ key: String, reason: String },
    TimeFormat      { key: String, value: String },
    InvalidHour     { key: String, value: String },
    InvalidMinute   { key: String, value: String },
    ReservedPrefix  { key: String, value: String },
}

impl ValidationError {
    /// True for errors made by whoever configured the validator, as opposed
    /// to errors in the value being validated.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            ValidationError::InvalidMin(_)
                | ValidationError::InvalidMax { .. }
                | ValidationError::InvalidPattern { .. }
        )
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidMin(min) => {
                write!(f, "{ERR_MIN_BOUND} {min}")
            }
            ValidationError::InvalidMax { min, max } => {
                write!(f, "{ERR_MAX_BOUND} [{min}, {max}]")
            }
            ValidationError::InvalidPattern { pattern, reason } => {
                write!(f, "{ERR_BAD_PATTERN} {pattern:?}: {reason}")
            }
            ValidationError::NoMatch { key, value, pattern } => {
                write!(f, "{key:?} ({value:?}) {ERR_NO_MATCH} {pattern:?}")
            }
            ValidationError::InvalidCidr { key, value, reason } => {
                write!(f, "expected {key} {ERR_CIDR_VALUE}, got: {value} with err: {reason}")
            }
            ValidationError::NotNetwork { key, value, network } => {
                write!(f, "expected {key} {ERR_CIDR_NETWORK}, expected {network}, got {value}")
            }
            ValidationError::PrefixOutOfRange { key, min, max, got } => {
                write!(f, "expected {key:?} {ERR_CIDR_BITS} {min} and {max} significant bits, got: {got}")
            }
            ValidationError::NotRfc1918 { key, value } => {
                write!(f, "expected {key:?} {ERR_RFC1918}, got: {value}")
            }
            ValidationError::InvalidCidrRange { key, reason } => {
                write!(f, "{key:?} {ERR_CIDR_RANGE}: {reason}")
            }
            ValidationError::TimeFormat { key, value } => {
                write!(f, "{key:?} ({value:?}) {ERR_TIME_FMT}")
            }
            ValidationError::InvalidHour { key, value } => {
                write!(f, "{key:?} ({value:?}) {ERR_TIME_HOUR}")
            }
            ValidationError::InvalidMinute { key, value } => {
                write!(f, "{key:?} ({value:?}) {ERR_TIME_MINUTE}")
            }
            ValidationError::ReservedPrefix { key, value } => {
                write!(f, "{key:?} ({value:?}) {ERR_RESERVED} {IOT_RESERVED_PREFIX:?}")
            }
        }
    }
}

impl error::Error for ValidationError {}

/* -------------------------------------------------------------------------- */

/// Outcome of validating one value. Both lists empty means "accepted".
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Validation {
    pub warnings: Vec<String>,
    pub errors: Vec<ValidationError>,
}

impl Validation {
    /// Accepted value, nothing to report.
    pub fn ok() -> Self {
        Self::default()
    }

    /// Rejected value with a single error.
    pub fn fail(err: ValidationError) -> Self {
        Self {
            warnings: Vec::new(),
            errors: vec![err],
        }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_config_errors(&self) -> bool {
        self.errors.iter().any(ValidationError::is_config)
    }

    pub fn push(&mut self, err: ValidationError) {
        self.errors.push(err);
    }
}

/* -------------------------------------------------------------------------- */

/**
The validator contract: check `value` of the field named `key`.

Implemented by the parameterized validator structs of this module and by
every `Fn(&str, &str) -> Validation`, so plain functions such as
[validate_rfc3339_time] can be passed wherever a validator is expected.
*/
pub trait Validate {
    fn validate(&self, value: &str, key: &str) -> Validation;
}

impl<F> Validate for F
where F: Fn(&str, &str) -> Validation,
{
    #[inline]
    fn validate(&self, value: &str, key: &str) -> Validation {
        self(value, key)
    }
}

/// `(min, max)` parameters for the parameterized validators, typically
/// deserialized from a schema definition.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: usize,
    pub max: usize,
}

impl Bounds {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

/* -------------------------------------------------------------------------- */
