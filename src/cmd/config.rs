// env-override: Environment Override Data Source
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands.

use std::io::Write;

use crate::config::Config;
use crate::error::{OutputError, Result};

/// Display current configuration options.
///
/// # Errors
///
/// Returns [`OutputError::Io`] if writing fails (e.g. a closed pipe).
pub fn run_options_command(config: &Config, out: &mut impl Write) -> Result<()> {
    for line in config.format_options() {
        writeln!(out, "{line}").map_err(OutputError::from)?;
    }
    Ok(())
}
