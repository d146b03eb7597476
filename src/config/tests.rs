// env-override: Environment Override Data Source
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::config::types::OutputFormat;
use crate::env::EnvSnapshot;
use crate::logging::LogLevel;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    insta::assert_yaml_snapshot!(config, @r"
    global:
      output_log_level: 2
      file_log_level: 5
    output:
      format: plain
    ");
}

#[test]
fn test_output_format_parse() {
    assert_eq!("json".parse::<OutputFormat>().ok(), Some(OutputFormat::Json));
    assert_eq!("PLAIN".parse::<OutputFormat>().ok(), Some(OutputFormat::Plain));
    assert!("xml".parse::<OutputFormat>().is_err());
}

#[test]
fn test_parse_full_config() {
    let config = Config::parse(
        r#"
[global]
output_log_level = 4
log_file = "logs/env.log"

[output]
format = "json"
"#,
    )
    .unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert_eq!(config.global.log_file, Some(PathBuf::from("logs/env.log")));
    assert_eq!(config.output.format, OutputFormat::Json);
}

#[test]
fn test_parse_rejects_unknown_fields() {
    let result = Config::parse(
        r"
[output]
prefix = true
",
    );
    assert!(result.is_err());
}

#[test]
fn test_parse_rejects_out_of_range_log_level() {
    let result = Config::parse(
        r"
[global]
output_log_level = 9
",
    );
    assert!(result.is_err());
}

#[test]
fn test_override_wins_over_toml() {
    let config = ConfigLoader::new()
        .add_toml_str("[output]\nformat = \"json\"\n")
        .set("output.format", "plain")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.output.format, OutputFormat::Plain);
}

#[test]
fn test_optional_missing_file_is_skipped() {
    let config = ConfigLoader::new()
        .add_toml_file_optional("/nonexistent/env-override.toml")
        .build()
        .unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_required_missing_file_fails() {
    let result = ConfigLoader::new()
        .add_toml_file("/nonexistent/env-override.toml")
        .build();
    assert!(result.is_err());
}

#[test]
fn test_env_layer_reads_known_keys() {
    let snapshot = EnvSnapshot::from_pairs([
        ("ENV_OVERRIDE_OUTPUT__FORMAT", "json"),
        ("ENV_OVERRIDE_GLOBAL__OUTPUT_LOG_LEVEL", "4"),
        ("ENV_OVERRIDE_GLOBAL__LOG_FILE", "/tmp/env.log"),
    ]);
    let config = ConfigLoader::new()
        .with_env_prefix("ENV_OVERRIDE")
        .with_env_snapshot(snapshot)
        .build()
        .unwrap();

    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.log_file, Some(PathBuf::from("/tmp/env.log")));
}

#[test]
fn test_env_layer_ignores_unrelated_prefixed_vars() {
    let snapshot = EnvSnapshot::from_pairs([
        ("ENV_OVERRIDE_BOGUS", "1"),
        ("ENV_OVERRIDE_OUTPUT__COLOR", "red"),
        ("ENV_OVERRIDE_OUTPUT_FORMAT", "json"),
        ("OUTPUT__FORMAT", "json"),
    ]);
    let config = ConfigLoader::new()
        .with_env_prefix("ENV_OVERRIDE")
        .with_env_snapshot(snapshot)
        .build()
        .unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn test_env_layer_rejects_invalid_known_value() {
    let snapshot = EnvSnapshot::from_pairs([("ENV_OVERRIDE_OUTPUT__FORMAT", "xml")]);
    let result = ConfigLoader::new()
        .with_env_prefix("ENV_OVERRIDE")
        .with_env_snapshot(snapshot)
        .build();
    assert!(result.is_err());
}

#[test]
fn test_override_wins_over_env_layer() {
    let snapshot = EnvSnapshot::from_pairs([("ENV_OVERRIDE_OUTPUT__FORMAT", "json")]);
    let config = ConfigLoader::new()
        .with_env_prefix("ENV_OVERRIDE")
        .with_env_snapshot(snapshot)
        .set("output.format", "plain")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.output.format, OutputFormat::Plain);
}

#[test]
fn test_format_options() {
    let options = Config::default().format_options();
    assert_eq!(
        options,
        [
            "global.file_log_level   = 5",
            "global.log_file         = ",
            "global.output_log_level = 2",
            "output.format           = plain",
        ]
    );
}
