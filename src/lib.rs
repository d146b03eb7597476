// env-override: Environment Override Data Source
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |            values / get / options
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-------------+-------------'
//!                            |
//!                            v
//!          source  DataSource / EnvironmentOverrideSource
//!                            |
//!                            v
//!          env     EnvSnapshot, current_env()
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```
//!
//! # Example
//!
//! ```
//! use env_override::env::EnvSnapshot;
//! use env_override::source::{DataSource, EnvironmentOverrideSource};
//!
//! let snapshot = EnvSnapshot::from_pairs([("HOME", "/root"), ("PATH", "/usr/bin")]);
//! let values = EnvironmentOverrideSource::with_snapshot(snapshot).global_values();
//! assert_eq!(values["home"], "/root");
//! assert_eq!(values["path"], "/usr/bin");
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod env;
pub mod error;
pub mod logging;
pub mod source;
