// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{strings::*, Bounds, Validate, Validation, ValidationError};
use ipnet::{IpNet, Ipv4Net};
use lazy_static::lazy_static;
use std::net::IpAddr;
use tracing::debug;

// Parsed once from [RFC1918_NETWORKS].
lazy_static! {
    static ref PRIVATE_NETS: Vec<Ipv4Net> = RFC1918_NETWORKS
        .iter()
        .filter_map(|n| n.parse::<Ipv4Net>().ok())
        .collect();
}

/// Whether `ip` falls inside one of the RFC1918 private blocks.
/// IPv6 addresses never do.
pub fn is_rfc1918(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => PRIVATE_NETS.iter().any(|net| net.contains(&v4)),
        IpAddr::V6(_) => false,
    }
}

/* -------------------------------------------------------------------------- */

/**
Accepts network blocks in CIDR notation whose prefix length lies in
`min..=max` (inclusive).

The value must be the canonical form of the network: `10.0.0.0/24` is fine,
`10.0.0.1/24` is not, since host bits are set. A value that does not parse
produces exactly one error; otherwise the canonical-form and prefix-length
checks are both reported.
*/
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CidrNetwork {
    pub min: u8,
    pub max: u8,
}

impl CidrNetwork {
    pub fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// Bounds above 255 saturate, which for prefix lengths means "no limit".
    pub fn from_bounds(bounds: Bounds) -> Self {
        Self {
            min: u8::try_from(bounds.min).unwrap_or(u8::MAX),
            max: u8::try_from(bounds.max).unwrap_or(u8::MAX),
        }
    }

    /// Parse and check `value`, returning the network if it passed.
    pub fn parse(&self, value: &str, key: &str) -> Result<IpNet, Vec<ValidationError>> {
        let net: IpNet = value.parse::<IpNet>().map_err(|e| {
            vec![ValidationError::InvalidCidr {
                key: key.to_string(),
                value: value.to_string(),
                reason: e.to_string(),
            }]
        })?;

        let mut errs: Vec<ValidationError> = Vec::new();

        let network: String = net.trunc().to_string();
        if network != value {
            errs.push(ValidationError::NotNetwork {
                key: key.to_string(),
                value: value.to_string(),
                network,
            });
        }

        let bits: u8 = net.prefix_len();
        if bits < self.min || bits > self.max {
            errs.push(ValidationError::PrefixOutOfRange {
                key: key.to_string(),
                min: self.min,
                max: self.max,
                got: bits,
            });
        }

        match errs.is_empty() {
            true => Ok(net),
            false => Err(errs),
        }
    }
}

impl Validate for CidrNetwork {
    fn validate(&self, value: &str, key: &str) -> Validation {
        match self.parse(value, key) {
            Ok(_) => Validation::ok(),
            Err(errors) => {
                debug!(%key, %value, "network rejected");
                Validation {
                    warnings: Vec::new(),
                    errors,
                }
            }
        }
    }
}

/// Factory for [CidrNetwork].
pub fn validate_cidr_network(min: u8, max: u8) -> CidrNetwork {
    CidrNetwork::new(min, max)
}

/* -------------------------------------------------------------------------- */

/**
A [CidrNetwork] that must also lie within the RFC1918 private ranges.

Membership is address containment, so `10.1.2.0/24` qualifies through
`10.0.0.0/8`. If the [CidrNetwork] check fails, only its errors are returned.
*/
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rfc1918Network {
    cidr: CidrNetwork,
}

impl Rfc1918Network {
    pub fn new(min: u8, max: u8) -> Self {
        Self {
            cidr: CidrNetwork::new(min, max),
        }
    }

    pub fn from_bounds(bounds: Bounds) -> Self {
        Self {
            cidr: CidrNetwork::from_bounds(bounds),
        }
    }
}

impl Validate for Rfc1918Network {
    fn validate(&self, value: &str, key: &str) -> Validation {
        let net: IpNet = match self.cidr.parse(value, key) {
            Ok(net) => net,
            Err(errors) => {
                return Validation {
                    warnings: Vec::new(),
                    errors,
                }
            }
        };

        if is_rfc1918(net.addr()) {
            return Validation::ok();
        }

        debug!(%key, %value, "network outside RFC1918 ranges");
        Validation::fail(ValidationError::NotRfc1918 {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

/// Factory for [Rfc1918Network].
pub fn validate_rfc1918_network(min: u8, max: u8) -> Rfc1918Network {
    Rfc1918Network::new(min, max)
}

/* -------------------------------------------------------------------------- */

/// Accepts any `address/prefix`, with or without host bits set.
pub fn validate_ip_cidr_range(value: &str, key: &str) -> Validation {
    match value.parse::<IpNet>() {
        Ok(_) => Validation::ok(),
        Err(e) => {
            debug!(%key, %value, "invalid CIDR range");
            Validation::fail(ValidationError::InvalidCidrRange {
                key: key.to_string(),
                reason: format!("{e}: {value:?}"),
            })
        }
    }
}

/* -------------------------------------------------------------------------- */
