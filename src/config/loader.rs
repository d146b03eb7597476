// env-override: Environment Override Data Source
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file(req)
//!   .add_toml_file_optional(opt)
//!   .add_toml_str()
//!   .with_env_prefix()        <PREFIX>_<SECTION>__<KEY>, known keys only
//!   .with_env_snapshot()      (default: current_env())
//!   .set()
//!        |
//!        v
//!    build() --> Config
//! ```

use std::path::Path;

use super::Config;
use crate::env::{EnvSnapshot, current_env};
use crate::error::{ConfigError, Result};

/// `<SECTION>__<KEY>` suffixes the environment layer accepts.
///
/// Anything else under the prefix is left alone: the same environment is
/// exposed as data, so it may hold arbitrary `<PREFIX>_*` variables.
pub const ENV_KEYS: &[&str] = &[
    "GLOBAL__OUTPUT_LOG_LEVEL",
    "GLOBAL__FILE_LOG_LEVEL",
    "GLOBAL__LOG_FILE",
    "OUTPUT__FORMAT",
];

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    env_snapshot: Option<EnvSnapshot>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            env_snapshot: None,
        }
    }

    /// Adds a TOML configuration file to the loader.
    ///
    /// The file will be read when `build()` is called. If the file doesn't exist
    /// or contains invalid TOML, `build()` will return an error.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file(path.as_ref(), true)
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file(path.as_ref(), false)
    }

    fn add_file(mut self, path: &Path, required: bool) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` environment variables at build time.
    ///
    /// For example `ENV_OVERRIDE_OUTPUT__FORMAT=json` sets `output.format`.
    /// Only the keys in [`ENV_KEYS`] are considered.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Reads the environment layer from `snapshot` instead of the process.
    #[must_use]
    pub fn with_env_snapshot(mut self, snapshot: EnvSnapshot) -> Self {
        self.env_snapshot = Some(snapshot);
        self
    }

    /// Sets a configuration override.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or if the value cannot be converted
    /// to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(ConfigError::from)?;
        Ok(self)
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required configuration files are missing.
    /// - Configuration files have invalid TOML syntax.
    /// - A recognized environment variable holds an invalid value.
    /// - The merged configuration cannot be deserialized into the `Config` struct.
    pub fn build(self) -> Result<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => {
                let snapshot = self.env_snapshot.unwrap_or_else(current_env);
                self.builder.add_source(
                    config::Environment::with_prefix(prefix)
                        .prefix_separator("_")
                        .separator("__")
                        .try_parsing(true)
                        .source(Some(known_env_vars(prefix, &snapshot))),
                )
            }
            None => self.builder,
        };
        let cfg = builder.build().map_err(ConfigError::from)?;
        Ok(cfg.try_deserialize().map_err(ConfigError::from)?)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Picks the `<prefix>_<ENV_KEYS>` variables out of `snapshot`.
fn known_env_vars(prefix: &str, snapshot: &EnvSnapshot) -> config::Map<String, String> {
    snapshot
        .iter()
        .filter(|(name, _)| {
            name.strip_prefix(prefix)
                .and_then(|rest| rest.strip_prefix('_'))
                .is_some_and(|key| ENV_KEYS.iter().any(|k| k.eq_ignore_ascii_case(key)))
        })
        .map(|(name, value)| (name.to_owned(), value.to_owned()))
        .collect()
}
