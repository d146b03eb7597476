// env-override: Environment Override Data Source
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment override data source.
//!
//! ```text
//! EnvSnapshot [("HOME", "/root"), ("PATH", "/usr/bin")]
//!        |  key.to_lowercase()
//!        v
//! Values {"home": "/root", "path": "/usr/bin"}
//! ```
//!
//! Keys are not prefixed, so they may shadow values from other sources
//! depending on the host's merge order.

use tracing::debug;

use super::{DataSource, Values};
use crate::env::{EnvSnapshot, current_env};

/// Exposes every environment variable to templates under its lowercased name.
///
/// Built with [`new`](Self::new) it reads the live process environment on
/// each call. Built with [`with_snapshot`](Self::with_snapshot) it reads a
/// fixed set of variables instead.
///
/// # Case collisions
///
/// Names that differ only by case (`PATH` and `path`) fold to one key. The
/// value of whichever was enumerated last is kept. For the process
/// environment that order is platform-defined.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentOverrideSource {
    snapshot: Option<EnvSnapshot>,
}

impl EnvironmentOverrideSource {
    /// Name under which hosts list this source.
    pub const NAME: &'static str = "environment_override";

    /// Creates a source backed by the live process environment.
    #[must_use]
    pub const fn new() -> Self {
        Self { snapshot: None }
    }

    /// Creates a source backed by a fixed snapshot.
    #[must_use]
    pub const fn with_snapshot(snapshot: EnvSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
        }
    }

    /// Returns the snapshot the next call will read.
    fn snapshot(&self) -> EnvSnapshot {
        self.snapshot.clone().unwrap_or_else(current_env)
    }
}

impl DataSource for EnvironmentOverrideSource {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn global_values(&self) -> Values {
        let snapshot = self.snapshot();
        let values = lowercase_values(&snapshot);
        debug!(
            variables = snapshot.len(),
            keys = values.len(),
            "Collected environment override values"
        );
        values
    }
}

/// Folds a snapshot into a fresh map keyed by lowercased name.
///
/// Later pairs overwrite earlier ones that lowercase to the same key.
#[must_use]
pub fn lowercase_values(snapshot: &EnvSnapshot) -> Values {
    let mut values = Values::new();
    for (name, value) in snapshot.iter() {
        let key = name.to_lowercase();
        // Values stay out of the log; they may hold secrets.
        if values.insert(key, value.to_owned()).is_some() {
            debug!(
                variable = name,
                "Environment variable collides after lowercasing, later value wins"
            );
        }
    }
    values
}
