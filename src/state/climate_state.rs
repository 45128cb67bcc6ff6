// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Logical climate controller state.

use serde::{Deserialize, Serialize};

use crate::gate;
use crate::types::{ClimateAction, ClimateMode, ClimatePreset};

/// Current field values of the logical climate controller.
///
/// Temperatures that have not been reported yet are NaN, which serializes as
/// `null`. Fields are only mutated through [`gate::apply`]; the `with_*`
/// methods exist to seed restored state. Fields missing from serialized
/// state take their default value.
///
/// # Examples
///
/// ```
/// use climate_bridge::{ClimateMode, ClimateState};
///
/// let state = ClimateState::new();
/// assert_eq!(state.mode(), ClimateMode::Off);
/// assert!(state.target_temperature().is_nan());
///
/// let restored = ClimateState::new()
///     .with_mode(ClimateMode::Heat)
///     .with_target_temperature(21.0);
/// assert_eq!(restored.target_temperature(), 21.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClimateState {
    pub(crate) mode: ClimateMode,
    pub(crate) action: ClimateAction,
    #[serde(with = "nan_as_null")]
    pub(crate) target_temperature: f32,
    #[serde(with = "nan_as_null")]
    pub(crate) current_temperature: f32,
    pub(crate) custom_preset: Option<String>,
    pub(crate) preset: Option<ClimatePreset>,
}

impl Default for ClimateState {
    fn default() -> Self {
        Self {
            mode: ClimateMode::Off,
            action: ClimateAction::Off,
            target_temperature: f32::NAN,
            current_temperature: f32::NAN,
            custom_preset: None,
            preset: None,
        }
    }
}

impl ClimateState {
    /// Creates the default state: mode and action off, unknown temperatures,
    /// no preset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the operating mode.
    #[must_use]
    pub fn mode(&self) -> ClimateMode {
        self.mode
    }

    /// Returns the current action.
    #[must_use]
    pub fn action(&self) -> ClimateAction {
        self.action
    }

    /// Returns the target temperature (NaN if unknown).
    #[must_use]
    pub fn target_temperature(&self) -> f32 {
        self.target_temperature
    }

    /// Returns the current temperature (NaN if unknown).
    #[must_use]
    pub fn current_temperature(&self) -> f32 {
        self.current_temperature
    }

    /// Returns the active custom preset name.
    #[must_use]
    pub fn custom_preset(&self) -> Option<&str> {
        self.custom_preset.as_deref()
    }

    /// Returns the active built-in preset.
    #[must_use]
    pub fn preset(&self) -> Option<ClimatePreset> {
        self.preset
    }

    /// Sets the mode.
    #[must_use]
    pub fn with_mode(mut self, mode: ClimateMode) -> Self {
        gate::apply(&mut self.mode, mode);
        self
    }

    /// Sets the action.
    #[must_use]
    pub fn with_action(mut self, action: ClimateAction) -> Self {
        gate::apply(&mut self.action, action);
        self
    }

    /// Sets the target temperature.
    #[must_use]
    pub fn with_target_temperature(mut self, temperature: f32) -> Self {
        gate::apply(&mut self.target_temperature, temperature);
        self
    }

    /// Sets the current temperature.
    #[must_use]
    pub fn with_current_temperature(mut self, temperature: f32) -> Self {
        gate::apply(&mut self.current_temperature, temperature);
        self
    }

    /// Activates a custom preset, clearing any built-in preset.
    #[must_use]
    pub fn with_custom_preset(mut self, name: impl Into<String>) -> Self {
        gate::apply(&mut self.custom_preset, Some(name.into()));
        gate::apply(&mut self.preset, None);
        self
    }

    /// Activates a built-in preset, clearing any custom preset.
    #[must_use]
    pub fn with_preset(mut self, preset: ClimatePreset) -> Self {
        gate::apply(&mut self.preset, Some(preset));
        gate::apply(&mut self.custom_preset, None);
        self
    }
}

/// Serializes NaN temperatures as `null` and reads `null` back as NaN.
mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(value: &f32, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
        Ok(Option::<f32>::deserialize(deserializer)?.unwrap_or(f32::NAN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state() {
        let state = ClimateState::new();
        assert_eq!(state.mode(), ClimateMode::Off);
        assert_eq!(state.action(), ClimateAction::Off);
        assert!(state.target_temperature().is_nan());
        assert!(state.current_temperature().is_nan());
        assert_eq!(state.custom_preset(), None);
        assert_eq!(state.preset(), None);
    }

    #[test]
    fn presets_are_mutually_exclusive() {
        let state = ClimateState::new().with_preset(ClimatePreset::Eco);
        assert_eq!(state.preset(), Some(ClimatePreset::Eco));

        let state = state.with_custom_preset("night");
        assert_eq!(state.custom_preset(), Some("night"));
        assert_eq!(state.preset(), None);

        let state = state.with_preset(ClimatePreset::Away);
        assert_eq!(state.custom_preset(), None);
    }

    #[test]
    fn serializes_unknown_temperature_as_null() {
        let json = serde_json::to_value(ClimateState::new()).unwrap();
        assert!(json["target_temperature"].is_null());
        assert_eq!(json["mode"], "off");
    }

    #[test]
    fn deserializes_restored_state() {
        let json = r#"{
            "mode": "heat",
            "action": "idle",
            "target_temperature": 21.5,
            "current_temperature": null,
            "custom_preset": "night",
            "preset": null
        }"#;
        let state: ClimateState = serde_json::from_str(json).unwrap();
        assert_eq!(state.mode(), ClimateMode::Heat);
        assert_eq!(state.action(), ClimateAction::Idle);
        assert_eq!(state.target_temperature(), 21.5);
        assert!(state.current_temperature().is_nan());
        assert_eq!(state.custom_preset(), Some("night"));
    }

    #[test]
    fn partial_restored_state_uses_defaults() {
        let state: ClimateState =
            serde_json::from_str(r#"{"mode": "heat", "custom_preset": "night"}"#).unwrap();
        assert_eq!(state.mode(), ClimateMode::Heat);
        assert_eq!(state.action(), ClimateAction::Off);
        assert!(state.target_temperature().is_nan());
        assert!(state.current_temperature().is_nan());
        assert_eq!(state.custom_preset(), Some("night"));
        assert_eq!(state.preset(), None);
    }
}
