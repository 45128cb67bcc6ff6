// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Caller-issued control requests.

use serde::{Deserialize, Serialize};

use crate::types::ClimateMode;

/// A sparse set of desired field values for a [`Climate`](crate::Climate).
///
/// Absent fields are left alone. Present fields are processed in a fixed
/// order: mode, target temperature, custom preset.
///
/// # Examples
///
/// ```
/// use climate_bridge::{ClimateMode, ControlRequest};
///
/// let request = ControlRequest::new()
///     .with_mode(ClimateMode::Heat)
///     .with_custom_preset("away");
///
/// assert_eq!(request.mode, Some(ClimateMode::Heat));
/// assert_eq!(request.target_temperature, None);
/// assert!(!request.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlRequest {
    /// Requested operating mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ClimateMode>,
    /// Requested target temperature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_temperature: Option<f32>,
    /// Requested custom preset name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_preset: Option<String>,
}

impl ControlRequest {
    /// Creates an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a mode.
    #[must_use]
    pub fn with_mode(mut self, mode: ClimateMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Requests a target temperature.
    #[must_use]
    pub fn with_target_temperature(mut self, temperature: f32) -> Self {
        self.target_temperature = Some(temperature);
        self
    }

    /// Requests a custom preset.
    #[must_use]
    pub fn with_custom_preset(mut self, name: impl Into<String>) -> Self {
        self.custom_preset = Some(name.into());
        self
    }

    /// Returns `true` if the request carries no field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mode.is_none() && self.target_temperature.is_none() && self.custom_preset.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_request() {
        assert!(ControlRequest::new().is_empty());
        assert!(!ControlRequest::new().with_target_temperature(20.0).is_empty());
    }

    #[test]
    fn deserializes_sparse_json() {
        let request: ControlRequest =
            serde_json::from_str(r#"{"mode":"heat","target_temperature":22.5}"#).unwrap();
        assert_eq!(
            request,
            ControlRequest::new()
                .with_mode(ClimateMode::Heat)
                .with_target_temperature(22.5)
        );
    }

    #[test]
    fn serializes_only_present_fields() {
        let json = serde_json::to_string(&ControlRequest::new().with_custom_preset("away")).unwrap();
        assert_eq!(json, r#"{"custom_preset":"away"}"#);
    }
}
