// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Built-in climate presets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// A built-in (non-custom) climate preset.
///
/// The bridge advertises none of these; they can only appear in restored
/// state. A built-in preset and a custom preset are never active together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClimatePreset {
    /// At home.
    Home,
    /// Away from home.
    Away,
    /// Temporary maximum output.
    Boost,
    /// Comfort temperature.
    Comfort,
    /// Energy saving.
    Eco,
    /// Night setback.
    Sleep,
    /// Activity profile.
    Activity,
}

impl ClimatePreset {
    /// Returns the lowercase name of the preset.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Away => "away",
            Self::Boost => "boost",
            Self::Comfort => "comfort",
            Self::Eco => "eco",
            Self::Sleep => "sleep",
            Self::Activity => "activity",
        }
    }
}

impl fmt::Display for ClimatePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClimatePreset {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "away" => Ok(Self::Away),
            "boost" => Ok(Self::Boost),
            "comfort" => Ok(Self::Comfort),
            "eco" => Ok(Self::Eco),
            "sleep" => Ok(Self::Sleep),
            "activity" => Ok(Self::Activity),
            _ => Err(ValueError::InvalidPreset(s.to_string())),
        }
    }
}
