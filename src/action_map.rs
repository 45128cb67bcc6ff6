// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Numeric action code to [`ClimateAction`] lookup.

use crate::error::ValueError;
use crate::types::ClimateAction;

/// Truncated readings in `CODE_MIN..CODE_END` convert to `i32` exactly.
const CODE_MIN: f32 = -2_147_483_648.0;
const CODE_END: f32 = 2_147_483_648.0;

/// Maps integer codes reported by an action sensor onto climate actions.
///
/// Codes are unique: duplicates are rejected when the map is built rather
/// than resolved by priority at lookup time.
///
/// # Examples
///
/// ```
/// use climate_bridge::{ActionMap, ClimateAction};
///
/// let map = ActionMap::new([(0, ClimateAction::Idle), (1, ClimateAction::Heating)]).unwrap();
///
/// assert_eq!(map.resolve(1.0), Some(ClimateAction::Heating));
/// assert_eq!(map.resolve(1.4), Some(ClimateAction::Heating));
/// assert_eq!(map.resolve(5.0), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionMap {
    entries: Vec<(i32, ClimateAction)>,
}

impl ActionMap {
    /// Creates an action map from `(code, action)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::DuplicateActionCode` if a code appears twice.
    pub fn new<I>(entries: I) -> Result<Self, ValueError>
    where
        I: IntoIterator<Item = (i32, ClimateAction)>,
    {
        let mut map = Self::default();
        for (code, action) in entries {
            map.insert(code, action)?;
        }
        Ok(map)
    }

    /// Adds a mapping.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::DuplicateActionCode` if `code` is already mapped.
    pub fn insert(&mut self, code: i32, action: ClimateAction) -> Result<(), ValueError> {
        if self.get(code).is_some() {
            return Err(ValueError::DuplicateActionCode(code));
        }
        self.entries.push((code, action));
        Ok(())
    }

    /// Returns the action mapped to an exact code.
    #[must_use]
    pub fn get(&self, code: i32) -> Option<ClimateAction> {
        self.entries
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, action)| *action)
    }

    /// Resolves a sensor reading to an action.
    ///
    /// The reading is truncated toward zero before lookup, so `1.9` resolves
    /// code `1` and `-0.5` resolves code `0`. Non-finite readings and readings
    /// outside the `i32` range never match.
    #[must_use]
    pub fn resolve(&self, reading: f32) -> Option<ClimateAction> {
        let truncated = reading.trunc();
        if !(CODE_MIN..CODE_END).contains(&truncated) {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        let code = truncated as i32;
        self.get(code)
    }

    /// Returns the number of mappings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(code, action)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, ClimateAction)> + '_ {
        self.entries.iter().copied()
    }
}
