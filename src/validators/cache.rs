// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use lazy_static::lazy_static;
use parking_lot::RwLock;
use regex::Regex;
use std::collections::HashMap;
use tracing::error;

// Compiled regexes keyed by their source pattern. Entries are never evicted:
// the set of patterns is fixed by the validators a program builds.
lazy_static! {
    static ref REGEX_CACHE: RwLock<HashMap<String, Regex>> = RwLock::new(HashMap::new());
}

/**
Compile `pattern`, or return the already compiled copy of it.

[Regex] clones share the compiled program, so handing out clones is cheap.
Compilation failures are not cached.
*/
pub(crate) fn compiled(pattern: &str) -> Result<Regex, regex::Error> {
    if let Some(re) = REGEX_CACHE.read().get(pattern) {
        return Ok(re.clone());
    }

    let re: Regex = Regex::new(pattern).map_err(|e| {
        error!(%pattern, "regexp failed to compile: {e}");
        e
    })?;

    // Another thread may have won the race; either copy is equivalent.
    let mut cache = REGEX_CACHE.write();
    Ok(cache.entry(pattern.to_string()).or_insert(re).clone())
}

/// Wrap `pattern` so that it has to match the whole input.
pub(crate) fn anchored(pattern: &str) -> String {
    format!("^(?:{pattern})$")
}

/* -------------------------------------------------------------------------- */
