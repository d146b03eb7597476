// env-override: Environment Override Data Source
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   values, get, options, inis
//! ```

pub mod config;
pub mod values;
