// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
Field-level validators for cloud resource configuration.

Each validator checks one configuration value (a resource name, a CIDR block,
a time of day, an identifier) and returns a [Validation] holding warnings and
errors. Validators are pure, `Send + Sync` and can be called from any thread.

```ignore
use fieldcheck::{validate_rfc1918_network, Validate};

let v = validate_rfc1918_network(16, 24);
assert!(v.validate("10.0.0.0/20", "ip_cidr_range").is_ok());
assert!(!v.validate("8.8.8.0/24", "ip_cidr_range").is_ok());
```
*/

mod validators;

pub use validators::*;
