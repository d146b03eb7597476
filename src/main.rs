// env-override: Environment Override Data Source
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Version | Values | Get | Options
//! ```

use std::io::Write;
use std::process::ExitCode;

use env_override::cli::global::GlobalOptions;
use env_override::cli::{self, Command};
use env_override::cmd::config::run_options_command;
use env_override::cmd::values::{run_get_command, run_values_command};
use env_override::config::loader::ConfigLoader;
use env_override::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use env_override::error::{OutputError, Result};
use env_override::logging::{LogConfig, LogGuard, init_logging};
use env_override::source::EnvironmentOverrideSource;

use anyhow::{Context, anyhow};
use mimalloc::MiMalloc;
use tracing::debug;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let result = match &cli.command {
        Some(command) => run(command, &cli.global),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: &Command, global: &GlobalOptions) -> Result<()> {
    let mut stdout = std::io::stdout().lock();

    if matches!(command, Command::Version) {
        writeln!(stdout, "{}", env!("CARGO_PKG_VERSION")).map_err(OutputError::from)?;
        return Ok(());
    }

    let config = load_config(global)?;
    let _log_guard = start_logging(&config)?;
    debug!(format = %config.output.format, "Configuration loaded");

    let source = EnvironmentOverrideSource::new();
    match command {
        Command::Values => run_values_command(&source, &config, &mut stdout),
        Command::Get(args) => run_get_command(args, &source, &config, &mut stdout),
        Command::Options => run_options_command(&config, &mut stdout),
        Command::Version => Ok(()),
    }
}

fn start_logging(config: &Config) -> Result<LogGuard> {
    let log_config = LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(config.global.log_file.clone())
        .build();
    init_logging(&log_config)
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new().add_toml_file_optional(DEFAULT_CONFIG_FILE);
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> Result<Config> {
    global
        .apply_overrides(build_config_loader(global))?
        .build()
        .context("failed to load config")
}
