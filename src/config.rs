// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serializable climate configuration.
//!
//! Entity bindings are live objects and are attached through
//! [`ClimateBuilder`](crate::ClimateBuilder); everything else a climate
//! needs can be loaded from JSON.
//!
//! ```
//! use climate_bridge::{ClimateAction, ClimateConfig};
//!
//! let config = ClimateConfig::from_json(r#"{
//!     "name": "floor_heating",
//!     "action_map": [
//!         { "code": 0, "action": "idle" },
//!         { "code": 1, "action": "heating" }
//!     ]
//! }"#).unwrap();
//!
//! let map = config.action_map().unwrap();
//! assert_eq!(map.resolve(1.0), Some(ClimateAction::Heating));
//! ```

use serde::{Deserialize, Serialize};

use crate::action_map::ActionMap;
use crate::error::{ConfigError, Result, ValueError};
use crate::types::ClimateAction;

/// Name used when a configuration does not provide one.
pub const DEFAULT_NAME: &str = "climate";

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

/// One `(code, action)` entry of a configured action map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionMapping {
    /// Integer code reported by the action sensor.
    pub code: i32,
    /// Action the code stands for.
    pub action: ClimateAction,
}

/// Configuration of a [`Climate`](crate::Climate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClimateConfig {
    /// Name used in logs and events.
    #[serde(default = "default_name")]
    pub name: String,

    /// Action code mappings. Codes must be unique.
    #[serde(default)]
    pub action_map: Vec<ActionMapping>,
}

impl Default for ClimateConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}

impl ClimateConfig {
    /// Creates a configuration with no action mappings.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            action_map: Vec::new(),
        }
    }

    /// Adds an action mapping.
    #[must_use]
    pub fn with_action(mut self, code: i32, action: ClimateAction) -> Self {
        self.action_map.push(ActionMapping { code, action });
        self
    }

    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` if the JSON is malformed, and the errors of
    /// [`ClimateConfig::validate`] otherwise.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the name is blank and
    /// `ValueError::DuplicateActionCode` if an action code repeats.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Invalid("climate name must not be empty".to_string()).into());
        }
        self.action_map()?;
        Ok(())
    }

    /// Builds the configured action map.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::DuplicateActionCode` if an action code repeats.
    pub fn action_map(&self) -> std::result::Result<ActionMap, ValueError> {
        ActionMap::new(self.action_map.iter().map(|m| (m.code, m.action)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn defaults_when_fields_missing() {
        let config = ClimateConfig::from_json("{}").unwrap();
        assert_eq!(config.name, DEFAULT_NAME);
        assert!(config.action_map.is_empty());
    }

    #[test]
    fn builder_style_config() {
        let config = ClimateConfig::new("dhw")
            .with_action(0, ClimateAction::Idle)
            .with_action(3, ClimateAction::Heating);
        assert!(config.validate().is_ok());
        assert_eq!(config.action_map().unwrap().len(), 2);
    }

    #[test]
    fn duplicate_codes_rejected() {
        let err = ClimateConfig::from_json(
            r#"{"action_map":[{"code":1,"action":"idle"},{"code":1,"action":"heating"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Value(ValueError::DuplicateActionCode(1))
        ));
    }

    #[test]
    fn blank_name_rejected() {
        let err = ClimateConfig::from_json(r#"{"name":"  "}"#).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Invalid(_))));
    }

    #[test]
    fn unknown_action_rejected() {
        let err = ClimateConfig::from_json(r#"{"action_map":[{"code":1,"action":"boiling"}]}"#)
            .unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Json(_))));
    }

    #[test]
    fn unknown_field_rejected() {
        let err = ClimateConfig::from_json(r#"{"nmae":"typo"}"#).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Json(_))));
    }
}
