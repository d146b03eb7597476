// env-override: Environment Override Data Source
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable capture.
//!
//! # Architecture
//!
//! ```text
//! EnvSnapshot (shared Arc<[(String, String)]>)
//! Sources: current_env(), EnvSnapshot::from_pairs(), EnvSnapshot::from_map()
//! Ops: get/iter/len
//! ```
//!
//! - **Ordered**: pairs keep the order they were captured or supplied in
//! - **Immutable**: clones share data, nothing is ever modified
//! - **UTF-8 internal**: non-Unicode OS strings are converted lossily at capture

pub mod snapshot;


pub use snapshot::EnvSnapshot;

/// Captures the current process environment.
///
/// Names or values that are not valid Unicode are converted with
/// [`std::ffi::OsStr::to_string_lossy`], so capture never fails.
#[must_use]
pub fn current_env() -> EnvSnapshot {
    let snapshot = EnvSnapshot::from_pairs(std::env::vars_os().map(|(name, value)| {
        (
            name.to_string_lossy().into_owned(),
            value.to_string_lossy().into_owned(),
        )
    }));
    tracing::trace!(count = snapshot.len(), "Captured process environment");
    snapshot
}
