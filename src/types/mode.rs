// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operating mode of the logical climate controller.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Represents the operating mode of a climate controller.
///
/// The bridge itself only ever produces [`ClimateMode::Off`] and
/// [`ClimateMode::Heat`] (see [`ClimateMode::SUPPORTED`]); the remaining
/// variants exist so callers can express any mode, and are accepted into
/// state without being forwarded to the power entity.
///
/// # Examples
///
/// ```
/// use climate_bridge::types::ClimateMode;
///
/// assert_eq!(ClimateMode::from(true), ClimateMode::Heat);
/// assert_eq!(ClimateMode::from(false), ClimateMode::Off);
/// assert_eq!("heat".parse::<ClimateMode>().unwrap(), ClimateMode::Heat);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClimateMode {
    /// The controller is switched off.
    #[default]
    Off,
    /// Heating and cooling towards a target range.
    HeatCool,
    /// Cooling only.
    Cool,
    /// Heating only.
    Heat,
    /// Fan only, no conditioning.
    FanOnly,
    /// Dehumidifying.
    Dry,
    /// Device-managed schedule.
    Auto,
}

impl ClimateMode {
    /// Modes this bridge can forward to a power entity.
    pub const SUPPORTED: [Self; 2] = [Self::Off, Self::Heat];

    /// Returns the lowercase name of the mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::HeatCool => "heat_cool",
            Self::Cool => "cool",
            Self::Heat => "heat",
            Self::FanOnly => "fan_only",
            Self::Dry => "dry",
            Self::Auto => "auto",
        }
    }

    /// Returns `true` if the mode is one of [`ClimateMode::SUPPORTED`].
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        matches!(self, Self::Off | Self::Heat)
    }
}

impl fmt::Display for ClimateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClimateMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "heat_cool" => Ok(Self::HeatCool),
            "cool" => Ok(Self::Cool),
            "heat" => Ok(Self::Heat),
            "fan_only" => Ok(Self::FanOnly),
            "dry" => Ok(Self::Dry),
            "auto" => Ok(Self::Auto),
            _ => Err(ValueError::InvalidMode(s.to_string())),
        }
    }
}

/// Maps a power entity state onto a mode: on heats, off is off.
impl From<bool> for ClimateMode {
    fn from(on: bool) -> Self {
        if on { Self::Heat } else { Self::Off }
    }
}
