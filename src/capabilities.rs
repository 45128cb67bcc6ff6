// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Advertised climate capabilities.
//!
//! Capabilities are derived from the bindings every time they are requested.
//! Nothing is cached, so a preset selector that changes its option list is
//! reflected by the next call to [`Climate::capabilities`](crate::Climate::capabilities).

use serde::Serialize;

use crate::entity::Select;
use crate::types::{ClimateMode, ClimatePreset};

/// Feature set a [`Climate`](crate::Climate) advertises to its consumers.
///
/// # Examples
///
/// ```
/// use climate_bridge::{Capabilities, ClimateMode};
/// use climate_bridge::entity::MemorySelect;
///
/// let caps = Capabilities::from_preset_select(None);
/// assert!(caps.supports_current_temperature);
/// assert_eq!(caps.supported_modes, vec![ClimateMode::Off, ClimateMode::Heat]);
/// assert!(caps.supported_custom_presets.is_empty());
///
/// let select = MemorySelect::new(["comfort", "eco"]);
/// let caps = Capabilities::from_preset_select(Some(&select));
/// assert!(caps.supports_custom_preset("eco"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    /// Reports the current temperature.
    pub supports_current_temperature: bool,

    /// Reports the current action.
    pub supports_action: bool,

    /// Modes a caller may request.
    pub supported_modes: Vec<ClimateMode>,

    /// Built-in presets a caller may request.
    pub supported_presets: Vec<ClimatePreset>,

    /// Custom preset names a caller may request.
    pub supported_custom_presets: Vec<String>,
}

impl Capabilities {
    /// Derives capabilities from the preset selector binding.
    ///
    /// Current temperature and action reporting are always advertised, the
    /// modes are always exactly Off and Heat, and no built-in preset is
    /// offered. Custom presets are the selector's options, if one is bound.
    #[must_use]
    pub fn from_preset_select(preset_select: Option<&dyn Select>) -> Self {
        Self {
            supports_current_temperature: true,
            supports_action: true,
            supported_modes: ClimateMode::SUPPORTED.to_vec(),
            supported_presets: Vec::new(),
            supported_custom_presets: preset_select
                .map(|select| select.options())
                .unwrap_or_default(),
        }
    }

    /// Returns whether `mode` is advertised.
    #[must_use]
    pub fn supports_mode(&self, mode: ClimateMode) -> bool {
        self.supported_modes.contains(&mode)
    }

    /// Returns whether the custom preset `name` is advertised.
    #[must_use]
    pub fn supports_custom_preset(&self, name: &str) -> bool {
        self.supported_custom_presets.iter().any(|p| p == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::MemorySelect;

    #[test]
    fn without_selector() {
        let caps = Capabilities::from_preset_select(None);
        assert!(caps.supports_current_temperature);
        assert!(caps.supports_action);
        assert!(caps.supports_mode(ClimateMode::Off));
        assert!(caps.supports_mode(ClimateMode::Heat));
        assert!(!caps.supports_mode(ClimateMode::Cool));
        assert!(caps.supported_presets.is_empty());
        assert!(caps.supported_custom_presets.is_empty());
    }

    #[test]
    fn custom_presets_follow_selector_options() {
        let select = MemorySelect::new(["comfort", "eco"]);
        let caps = Capabilities::from_preset_select(Some(&select));
        assert_eq!(
            caps.supported_custom_presets,
            vec!["comfort".to_string(), "eco".to_string()]
        );

        select.set_options(["away"]);
        let caps = Capabilities::from_preset_select(Some(&select));
        assert!(caps.supports_custom_preset("away"));
        assert!(!caps.supports_custom_preset("eco"));
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_value(Capabilities::from_preset_select(None)).unwrap();
        assert_eq!(json["supported_modes"], serde_json::json!(["off", "heat"]));
    }
}
