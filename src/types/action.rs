// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! What the climate device is currently doing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// The current action of a climate device.
///
/// Unlike [`ClimateMode`](super::ClimateMode), which is what the user asked
/// for, the action reports what the device is actually doing right now. The
/// bridge only learns it through an [`ActionMap`](crate::ActionMap) lookup.
///
/// # Examples
///
/// ```
/// use climate_bridge::types::ClimateAction;
///
/// let action: ClimateAction = "heating".parse().unwrap();
/// assert_eq!(action, ClimateAction::Heating);
/// assert_eq!(action.to_string(), "heating");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClimateAction {
    /// The device is off.
    #[default]
    Off,
    /// Actively cooling.
    Cooling,
    /// Actively heating.
    Heating,
    /// On, but neither heating nor cooling.
    Idle,
    /// Dehumidifying.
    Drying,
    /// Fan running without conditioning.
    Fan,
}

impl ClimateAction {
    /// Returns the lowercase name of the action.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Cooling => "cooling",
            Self::Heating => "heating",
            Self::Idle => "idle",
            Self::Drying => "drying",
            Self::Fan => "fan",
        }
    }
}

impl fmt::Display for ClimateAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClimateAction {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "cooling" => Ok(Self::Cooling),
            "heating" => Ok(Self::Heating),
            "idle" => Ok(Self::Idle),
            "drying" => Ok(Self::Drying),
            "fan" => Ok(Self::Fan),
            _ => Err(ValueError::InvalidAction(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_from_str() {
        assert_eq!(
            "Heating".parse::<ClimateAction>().unwrap(),
            ClimateAction::Heating
        );
        assert_eq!("idle".parse::<ClimateAction>().unwrap(), ClimateAction::Idle);
        assert!(matches!(
            "boiling".parse::<ClimateAction>(),
            Err(ValueError::InvalidAction(_))
        ));
    }

    #[test]
    fn action_serde_round_trip_name() {
        let json = serde_json::to_string(&ClimateAction::Drying).unwrap();
        assert_eq!(json, "\"drying\"");
    }
}
