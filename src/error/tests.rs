// env-override: Environment Override Data Source
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, OutputError};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "output".to_string(),
        key: "format".to_string(),
        message: "expected 'plain' or 'json', got 'xml'".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'format' in section '[output]': expected 'plain' or 'json', got 'xml'"
    );
}

#[test]
fn test_key_not_found_display() {
    let err = OutputError::KeyNotFound {
        key: "home".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"no value for key 'home'");
}

#[test]
fn test_chain_does_not_repeat_source_message() {
    let io = std::io::Error::other("broken pipe");
    let err = anyhow::Error::from(OutputError::from(io));

    insta::assert_snapshot!(format!("{err:#}"), @"failed to write values: broken pipe");
}

#[test]
fn test_load_error_is_transparent() {
    let source = config::ConfigError::Message("bad toml".to_string());
    let expected = source.to_string();
    let err = ConfigError::from(source);

    assert_eq!(err.to_string(), expected);
    let chained = format!("{:#}", anyhow::Error::from(err).context("failed to load config"));
    assert_eq!(chained.matches(expected.as_str()).count(), 1);
}
