// env-override: Environment Override Data Source
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Immutable environment snapshot.
//!
//! ```text
//! EnvSnapshot
//! vars: Arc<[(name, value)]> in enumeration order
//! clone shares the Arc, no copy
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

/// An ordered, immutable set of environment variables.
///
/// Names are kept exactly as captured (no case folding) and the enumeration
/// order is preserved, so consumers can reason about which of two colliding
/// names was seen last.
///
/// # Thread Safety
/// `EnvSnapshot` is `Send` and `Sync` due to its use of `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: Arc<[(String, String)]>,
}

impl EnvSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a snapshot from `(name, value)` pairs, keeping their order.
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Creates a snapshot from a map of variables.
    ///
    /// Enumeration order is the map's key order.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self::from_pairs(vars)
    }

    /// Gets a variable value by exact name.
    ///
    /// If the name was supplied more than once, the last occurrence wins.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .rev()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns an iterator over `(name, value)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
