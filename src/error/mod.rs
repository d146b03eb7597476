// env-override: Environment Override Data Source
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//! anyhow::Result  <--  ?  <--  ConfigError | OutputError
//!
//!   Config  Load (transparent), InvalidValue
//!   Output  KeyNotFound, Json, Io
//! ```
//!
//! Reading the environment itself never fails; these cover the layers
//! around it (configuration, printing values).

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Layered sources could not be read, parsed or deserialized.
    #[error(transparent)]
    Load(#[from] config::ConfigError),

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Output Errors ---

/// Errors raised while printing values.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Requested key is not among the collected values.
    #[error("no value for key '{key}'")]
    KeyNotFound { key: String },

    /// JSON serialization failed.
    #[error("failed to serialize values")]
    Json(#[from] serde_json::Error),

    /// Writing to the output stream failed.
    #[error("failed to write values")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests;
