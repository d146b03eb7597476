// env-override: Environment Override Data Source
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Data sources for template rendering.
//!
//! ```text
//!            host (out of crate)
//!                   |
//!        Vec<Box<dyn DataSource>>
//!                   |
//!      +------------+------------+
//!      v            v            v
//! global_values  values(tpl)  target_values(tpl)
//!      |
//!      v
//! EnvironmentOverrideSource
//!   EnvSnapshot --> lowercase keys --> Values
//! ```
//!
//! The host owns merge order and precedence across sources. A source only
//! answers for its own values.

pub mod environment;


use std::collections::BTreeMap;

pub use environment::EnvironmentOverrideSource;

/// Key-value data handed to the template renderer.
///
/// Sorted so output is deterministic; consumers must not rely on order.
pub type Values = BTreeMap<String, String>;

/// A pluggable provider of key-value data for template rendering.
///
/// Only [`global_values`](DataSource::global_values) is required. The
/// per-template hooks default to contributing nothing.
pub trait DataSource: Send + Sync {
    /// Returns the name the host uses to list this source (e.g. "environment_override").
    fn name(&self) -> &str;

    /// Values available to every template.
    fn global_values(&self) -> Values;

    /// Values available to a single template.
    fn values(&self, _template: &str) -> Values {
        Values::new()
    }

    /// Target metadata for a single template (destination path, mode, ...).
    fn target_values(&self, _template: &str) -> Values {
        Values::new()
    }
}
