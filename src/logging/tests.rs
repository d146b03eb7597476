// env-override: Environment Override Data Source
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel, create_log_file};
use std::path::{Path, PathBuf};

#[test]
fn test_log_level_range() {
    assert_eq!(LogLevel::from_u8(0), Some(LogLevel::SILENT));
    assert_eq!(LogLevel::from_u8(5), Some(LogLevel::TRACE));
    assert_eq!(LogLevel::from_u8(6), None);
    assert!(LogLevel::new(9).is_err());
}

#[test]
fn test_log_level_filter_strings() {
    let filters: Vec<_> = (0..=5)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::to_filter_string)
        .collect();
    assert_eq!(filters, ["off", "error", "warn", "info", "debug", "trace"]);
}

#[test]
fn test_log_level_deserialize_rejects_out_of_range() {
    let ok: LogLevel = serde_json::from_str("3").unwrap();
    assert_eq!(ok, LogLevel::INFO);
    assert!(serde_json::from_str::<LogLevel>("7").is_err());
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert_eq!(config.log_file(), None);
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::DEBUG)
        .maybe_with_log_file(Some(PathBuf::from("out.log")))
        .build();
    assert_eq!(config.console_level(), LogLevel::DEBUG);
    assert_eq!(config.log_file(), Some(Path::new("out.log")));
}

#[test]
fn test_create_log_file_makes_parent_dirs() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("nested/logs/env.log");

    create_log_file(&path).unwrap();
    assert!(path.is_file());
}
