// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Patterns as published by the Google Cloud API clients.
pub static PROJECT_REGEX: &str = r"(?:(?:[-a-z0-9]{1,63}\.)*(?:[a-z](?:[-a-z0-9]{0,61}[a-z0-9])?):)?(?:[0-9]{1,19}|(?:[a-z0-9](?:[-a-z0-9]{0,61}[a-z0-9])?))";
pub static REGION_REGEX: &str = r"[a-z](?:[-a-z0-9]{0,61}[a-z0-9])?";
pub static SUBNETWORK_REGEX: &str = r"[a-z](?:[-a-z0-9]{0,61}[a-z0-9])?";
pub static GCP_NAME_REGEX: &str = r"^(?:[a-z](?:[-a-z0-9]{0,61}[a-z0-9])?)$";
pub static CLOUD_IOT_ID_REGEX: &str = r"^[a-zA-Z][-a-zA-Z0-9._+~%]{2,254}$";

/// Reserved prefix for Cloud IoT identifiers.
pub static IOT_RESERVED_PREFIX: &str = "goog";

/// Private IPv4 blocks (RFC1918).
pub static RFC1918_NETWORKS: [&str; 3] = ["10.0.0.0/8", "172.16.0.0/12", "192.168.0.0/16"];

/// Service account ids are 6..=30 characters long.
pub(crate) const SERVICE_ACCOUNT_MIN: usize = 6;
pub(crate) const SERVICE_ACCOUNT_MAX: usize = 30;

// names.rs
pub(crate) static ERR_NO_MATCH: &str = "doesn't match regexp";
pub(crate) static ERR_BAD_PATTERN: &str = "invalid regexp";
pub(crate) static ERR_MIN_BOUND: &str = "min must be at least 2. Got:";
pub(crate) static ERR_MAX_BOUND: &str = "max must greater than min. Got";

// network.rs
pub(crate) static ERR_CIDR_VALUE: &str = "to contain a valid Value";
pub(crate) static ERR_CIDR_NETWORK: &str = "to contain a valid network Value";
pub(crate) static ERR_CIDR_BITS: &str = "to contain a network Value with between";
pub(crate) static ERR_RFC1918: &str = "to be an RFC1918-compliant CIDR";
pub(crate) static ERR_CIDR_RANGE: &str = "is not a valid IP CIDR range";

// time.rs
pub(crate) static ERR_TIME_FMT: &str = "must be in the format HH:mm (RFC3399)";
pub(crate) static ERR_TIME_HOUR: &str = "does not contain a valid hour (00-23)";
pub(crate) static ERR_TIME_MINUTE: &str = "does not contain a valid minute (00-59)";

// iot.rs
pub(crate) static ERR_RESERVED: &str = "can not start with";
