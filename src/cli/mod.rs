// env-override: Environment Override Data Source
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! env-override [global options] <command>
//! values
//! get <KEY>
//! options
//! version
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Environment override data source.
///
/// Exposes every environment variable, keyed by its lowercased name.
#[derive(Debug, Parser)]
#[command(
    name = "env-override",
    author,
    version,
    about = "Environment override data source",
    long_about = "Reads the process environment and exposes every variable to templates\n\
                  under its lowercased name (PATH becomes path). Keys are not prefixed,\n\
                  so they may shadow values from other data sources.\n\n\
                  Names that differ only by case fold to one key; the value enumerated\n\
                  last is kept.",
    after_help = "CONFIG FILES:\n\n\
                  env-override.toml in the current directory is loaded if present.\n\
                  Additional files can be given with --ini and are loaded after it.\n\
                  ENV_OVERRIDE_<SECTION>__<KEY> environment variables override files;\n\
                  command-line flags override both."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Prints all values, keyed by lowercased variable name.
    Values,

    /// Prints a single value.
    Get(GetArgs),

    /// Lists all options and their effective values.
    Options,
}

/// Arguments for the `get` command.
#[derive(Debug, Clone, clap::Args)]
pub struct GetArgs {
    /// Variable name; lowercased before lookup.
    #[arg(value_name = "KEY")]
    pub key: String,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
