// env-override: Environment Override Data Source
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `values` and `get` command implementations.

use std::io::Write;

use crate::cli::GetArgs;
use crate::config::Config;
use crate::config::types::OutputFormat;
use crate::error::{OutputError, Result};
use crate::source::{DataSource, Values};

/// Prints every global value of `source` in the configured format.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn run_values_command(
    source: &dyn DataSource,
    config: &Config,
    out: &mut impl Write,
) -> Result<()> {
    let values = source.global_values();
    tracing::info!(source = source.name(), count = values.len(), "Printing values");
    write_values(&values, config.output.format, out)?;
    Ok(())
}

/// Prints the value stored under the lowercased `args.key`.
///
/// # Errors
///
/// Returns [`OutputError::KeyNotFound`] if no variable folds to that key.
pub fn run_get_command(
    args: &GetArgs,
    source: &dyn DataSource,
    config: &Config,
    out: &mut impl Write,
) -> Result<()> {
    let key = args.key.to_lowercase();
    let mut values = source.global_values();
    let value = values
        .remove(&key)
        .ok_or_else(|| OutputError::KeyNotFound { key })?;

    match config.output.format {
        OutputFormat::Plain => writeln!(out, "{value}").map_err(OutputError::from)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &value).map_err(OutputError::from)?;
            writeln!(out).map_err(OutputError::from)?;
        }
    }
    Ok(())
}

/// Writes values as `key=value` lines or as one pretty JSON object.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_values(
    values: &Values,
    format: OutputFormat,
    out: &mut impl Write,
) -> std::result::Result<(), OutputError> {
    match format {
        OutputFormat::Plain => {
            for (key, value) in values {
                writeln!(out, "{key}={value}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, values)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
