// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    cache::{anchored, compiled},
    strings::*,
    Bounds, Validate, Validation, ValidationError,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, error};

/// RFC1035 label with a bounded middle segment: first char a lowercase
/// letter, last char alphanumeric, `lo..=hi` letters/digits/hyphens between.
pub fn rfc1035_template(lo: usize, hi: usize) -> String {
    format!("[a-z](?:[-a-z0-9]{{{lo},{hi}}}[a-z0-9])")
}

lazy_static! {
    /// Service account ids: 6 to 30 characters, so 4 to 28 in the middle.
    pub static ref SERVICE_ACCOUNT_NAME_REGEX: String =
        rfc1035_template(SERVICE_ACCOUNT_MIN - 2, SERVICE_ACCOUNT_MAX - 2);

    pub static ref SUBNETWORK_LINK_REGEX: String = format!(
        "projects/({PROJECT_REGEX})/regions/({REGION_REGEX})/subnetworks/({SUBNETWORK_REGEX})$"
    );

    pub static ref SERVICE_ACCOUNT_LINK_REGEX: String = format!(
        r"projects/{PROJECT_REGEX}/serviceAccounts/{}@{PROJECT_REGEX}\.iam\.gserviceaccount\.com$",
        *SERVICE_ACCOUNT_NAME_REGEX
    );

    static ref GCP_NAME: RegexpValidator = RegexpValidator::new(GCP_NAME_REGEX);
    static ref PROJECT_NAME: RegexpValidator = RegexpValidator::new(PROJECT_REGEX);
    static ref REGION_NAME: RegexpValidator = RegexpValidator::new(REGION_REGEX);
    static ref SUBNETWORK_LINK: RegexpValidator = RegexpValidator::new(SUBNETWORK_LINK_REGEX.as_str());
    static ref SERVICE_ACCOUNT_LINK: RegexpValidator =
        RegexpValidator::new(SERVICE_ACCOUNT_LINK_REGEX.as_str());
    static ref SERVICE_ACCOUNT_NAME: Rfc1035Name =
        Rfc1035Name::new(SERVICE_ACCOUNT_MIN, SERVICE_ACCOUNT_MAX);
}

/* -------------------------------------------------------------------------- */

/**
Accepts values matching a regular expression in full.

The pattern is anchored at both ends before compilation, so `[a-z]+` behaves
as `^(?:[a-z]+)$`. Error messages quote the pattern as it was given.

A pattern that does not compile makes every call return an
[ValidationError::InvalidPattern] configuration error.
*/
#[derive(Clone, Debug)]
pub struct RegexpValidator {
    pattern: String,
    re: Result<Regex, ValidationError>,
}

impl RegexpValidator {
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern: String = pattern.into();
        let re = compiled(&anchored(&pattern)).map_err(|e| ValidationError::InvalidPattern {
            pattern: pattern.clone(),
            reason: e.to_string(),
        });
        Self { pattern, re }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The configuration error, if the pattern did not compile.
    pub fn check(&self) -> Result<(), ValidationError> {
        self.re.as_ref().map(|_| ()).map_err(|e| e.clone())
    }
}

impl Validate for RegexpValidator {
    fn validate(&self, value: &str, key: &str) -> Validation {
        match &self.re {
            Err(e) => Validation::fail(e.clone()),
            Ok(re) if re.is_match(value) => Validation::ok(),
            Ok(_) => {
                debug!(%key, %value, pattern = %self.pattern, "value rejected");
                Validation::fail(ValidationError::NoMatch {
                    key: key.to_string(),
                    value: value.to_string(),
                    pattern: self.pattern.clone(),
                })
            }
        }
    }
}

/// Factory for [RegexpValidator].
pub fn validate_regexp(pattern: impl Into<String>) -> RegexpValidator {
    RegexpValidator::new(pattern)
}

/// Generic resource name: lowercase letters, digits and hyphens, 1-63 chars,
/// starting with a letter and not ending with a hyphen.
pub fn validate_gcp_name(value: &str, key: &str) -> Validation {
    GCP_NAME.validate(value, key)
}

/// Project id, optionally domain-scoped (`example.com:my-project`).
pub fn validate_project_name(value: &str, key: &str) -> Validation {
    PROJECT_NAME.validate(value, key)
}

pub fn validate_region_name(value: &str, key: &str) -> Validation {
    REGION_NAME.validate(value, key)
}

/// `projects/<project>/regions/<region>/subnetworks/<name>`
pub fn validate_subnetwork_link(value: &str, key: &str) -> Validation {
    SUBNETWORK_LINK.validate(value, key)
}

/// `projects/<project>/serviceAccounts/<name>@<project>.iam.gserviceaccount.com`
pub fn validate_service_account_link(value: &str, key: &str) -> Validation {
    SERVICE_ACCOUNT_LINK.validate(value, key)
}

/// Service account id (the part before `@`), 6 to 30 characters.
pub fn validate_service_account_name(value: &str, key: &str) -> Validation {
    SERVICE_ACCOUNT_NAME.validate(value, key)
}

/* -------------------------------------------------------------------------- */

/**
RFC1035-style name with a total length of `min..=max` characters.

`min` must be at least 2 (first and last character are fixed classes) and
`max` must not be smaller than `min`. Invalid bounds are reported when the
validator is built (logged, and available through [Rfc1035Name::check]) and
then again by every call to [Validate::validate], whatever the value.
*/
#[derive(Clone, Debug)]
pub struct Rfc1035Name {
    bounds: Bounds,
    inner: Result<RegexpValidator, Vec<ValidationError>>,
}

impl Rfc1035Name {
    pub fn new(min: usize, max: usize) -> Self {
        Self::from_bounds(Bounds::new(min, max))
    }

    pub fn from_bounds(bounds: Bounds) -> Self {
        let Bounds { min, max } = bounds;
        let mut errs: Vec<ValidationError> = Vec::new();
        if min < 2 {
            errs.push(ValidationError::InvalidMin(min));
        }
        if max < min {
            errs.push(ValidationError::InvalidMax { min, max });
        }

        let inner = if errs.is_empty() {
            let pattern: String = format!("^{}$", rfc1035_template(min - 2, max - 2));
            Ok(RegexpValidator::new(pattern))
        } else {
            for e in &errs {
                error!("invalid RFC1035 name validator [{min}, {max}]: {e}");
            }
            Err(errs)
        };

        Self { bounds, inner }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Effective pattern, if the bounds are valid.
    pub fn pattern(&self) -> Option<&str> {
        self.inner.as_ref().ok().map(RegexpValidator::pattern)
    }

    /// Configuration errors of this validator, independent of any value.
    pub fn check(&self) -> Result<(), Vec<ValidationError>> {
        match &self.inner {
            Ok(re) => re.check().map_err(|e| vec![e]),
            Err(errs) => Err(errs.clone()),
        }
    }
}

impl Validate for Rfc1035Name {
    fn validate(&self, value: &str, key: &str) -> Validation {
        match &self.inner {
            Ok(re) => re.validate(value, key),
            Err(errs) => Validation {
                warnings: Vec::new(),
                errors: errs.clone(),
            },
        }
    }
}

/// Factory for [Rfc1035Name].
pub fn validate_rfc1035_name(min: usize, max: usize) -> Rfc1035Name {
    Rfc1035Name::new(min, max)
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "name";

    #[rustfmt::skip]
    #[test]
    fn test_gcp_name() {
        let good: Vec<&str> = vec![
            "a", "ab", "a1", "a-b", "my-instance-01", "z9",
            "a23456789012345678901234567890123456789012345678901234567890123",
        ];
        let bad: Vec<&str> = vec![
            "", "1a", "-a", "a-", "A", "aB", "a_b", "a.b", " a", "a ",
            "a234567890123456789012345678901234567890123456789012345678901234",
        ];
        for v in good {
            assert!(validate_gcp_name(v, KEY).is_ok(), "Failed: '{v}'");
        }
        for v in bad {
            assert_eq!(validate_gcp_name(v, KEY).errors.len(), 1, "Failed: '{v}'");
        }
    }

    #[test]
    fn test_regexp_message() {
        let res: Validation = validate_regexp("[a-z]+").validate("abc1", KEY);
        assert_eq!(res.errors.len(), 1);
        assert_eq!(
            res.errors[0].to_string(),
            r#""name" ("abc1") doesn't match regexp "[a-z]+""#
        );
    }

    #[test]
    fn test_regexp_anchored() {
        let v: RegexpValidator = validate_regexp("b+");
        assert!(v.validate("bbb", KEY).is_ok());
        assert!(!v.validate("abbb", KEY).is_ok());
        assert!(!v.validate("bbba", KEY).is_ok());
    }

    #[test]
    fn test_regexp_invalid_pattern() {
        let v: RegexpValidator = validate_regexp("[a-z");
        assert!(v.check().is_err());
        let res: Validation = v.validate("abc", KEY);
        assert_eq!(res.errors.len(), 1);
        assert!(res.has_config_errors());
    }

    #[test]
    fn test_rfc1035_service_account_case() {
        let v: Rfc1035Name = validate_rfc1035_name(4, 28);
        assert!(v.check().is_ok());
        assert!(v.validate("abcdef", KEY).is_ok());
        assert!(v.validate("abc-def", KEY).is_ok());
        assert_eq!(v.validate("ab", KEY).errors.len(), 1);
        assert_eq!(v.validate("-abcdef", KEY).errors.len(), 1);
        assert_eq!(v.validate("abcdef-", KEY).errors.len(), 1);
        assert_eq!(v.validate("abc", KEY).errors.len(), 1);
        assert!(v.validate("abcd", KEY).is_ok());
    }

    #[test]
    fn test_rfc1035_effective_pattern() {
        let v: Rfc1035Name = validate_rfc1035_name(6, 30);
        assert_eq!(v.pattern(), Some("^[a-z](?:[-a-z0-9]{4,28}[a-z0-9])$"));
        let res: Validation = v.validate("Abcdef", KEY);
        assert_eq!(
            res.errors,
            vec![ValidationError::NoMatch {
                key: KEY.into(),
                value: "Abcdef".into(),
                pattern: "^[a-z](?:[-a-z0-9]{4,28}[a-z0-9])$".into(),
            }]
        );
    }

    #[test]
    fn test_rfc1035_min_too_small() {
        let v: Rfc1035Name = validate_rfc1035_name(1, 10);
        assert_eq!(v.check(), Err(vec![ValidationError::InvalidMin(1)]));
        for value in ["abcdef", "", "-"] {
            let res: Validation = v.validate(value, KEY);
            assert_eq!(res.errors, vec![ValidationError::InvalidMin(1)], "Failed: '{value}'");
        }
    }

    #[test]
    fn test_rfc1035_both_bounds_invalid() {
        let v: Rfc1035Name = validate_rfc1035_name(1, 0);
        let res: Validation = v.validate("abc", KEY);
        assert_eq!(
            res.errors,
            vec![
                ValidationError::InvalidMin(1),
                ValidationError::InvalidMax { min: 1, max: 0 },
            ]
        );
        assert!(res.errors.iter().all(ValidationError::is_config));
    }

    #[test]
    fn test_rfc1035_exact_length() {
        let v: Rfc1035Name = validate_rfc1035_name(2, 2);
        assert!(v.validate("a1", KEY).is_ok());
        assert!(!v.validate("a", KEY).is_ok());
        assert!(!v.validate("abc", KEY).is_ok());
    }

    #[test]
    fn test_service_account_name() {
        assert!(validate_service_account_name("my-service-acct", KEY).is_ok());
        assert!(!validate_service_account_name("short", KEY).is_ok());
        assert!(!validate_service_account_name("a234567890123456789012345678901", KEY).is_ok());
    }

    #[test]
    fn test_links() {
        assert!(validate_subnetwork_link(
            "projects/my-project/regions/us-central1/subnetworks/default",
            KEY
        )
        .is_ok());
        assert!(!validate_subnetwork_link("projects/my-project/subnetworks/default", KEY).is_ok());
        assert!(validate_service_account_link(
            "projects/my-project/serviceAccounts/deployer@my-project.iam.gserviceaccount.com",
            KEY
        )
        .is_ok());
        assert!(!validate_service_account_link(
            "projects/my-project/serviceAccounts/de@my-project.iam.gserviceaccount.com",
            KEY
        )
        .is_ok());
    }

    #[test]
    fn test_project_and_region() {
        assert!(validate_project_name("my-project", KEY).is_ok());
        assert!(validate_project_name("example.com:my-project", KEY).is_ok());
        assert!(validate_project_name("1234567890", KEY).is_ok());
        assert!(!validate_project_name("My_Project", KEY).is_ok());
        assert!(validate_region_name("europe-west4", KEY).is_ok());
        assert!(!validate_region_name("europe-west4-", KEY).is_ok());
    }

    #[test]
    fn test_idempotent() {
        let v: Rfc1035Name = validate_rfc1035_name(4, 28);
        for value in ["abcdef", "-x", ""] {
            assert_eq!(v.validate(value, KEY), v.validate(value, KEY));
            assert_eq!(validate_gcp_name(value, KEY), validate_gcp_name(value, KEY));
        }
    }
}
