// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the climate bridge.
//!
//! Synchronization itself never fails: absent bindings, unmapped action codes
//! and unsupported modes are all silent no-ops. Errors only surface while
//! building configuration (action maps, JSON config) and while parsing the
//! string forms of the climate enums.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while loading configuration.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The same action code appears more than once in an action map.
    #[error("action code {0} is mapped more than once")]
    DuplicateActionCode(i32),

    /// An invalid climate mode string was provided.
    #[error("invalid climate mode: {0}")]
    InvalidMode(String),

    /// An invalid climate action string was provided.
    #[error("invalid climate action: {0}")]
    InvalidAction(String),

    /// An invalid built-in preset string was provided.
    #[error("invalid climate preset: {0}")]
    InvalidPreset(String),
}

/// Errors related to configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration parsed but is not usable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
