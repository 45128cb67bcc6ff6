// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Compare-then-assign primitive shared by every climate field.
//!
//! Every mutation of [`ClimateState`](crate::ClimateState) goes through
//! [`apply`], so "notify only on a real change" holds uniformly for inbound
//! events and control requests alike.
//!
//! # Floating point
//!
//! Temperatures are compared by exact value, with no epsilon. A reading that
//! differs only by representation noise counts as a change. The one exception
//! is NaN: an unset temperature is NaN, and NaN compared with NaN is treated
//! as unchanged so that an unreported source cannot produce notifications.
//!
//! # Examples
//!
//! ```
//! use climate_bridge::gate;
//!
//! let mut target = 20.0_f32;
//! assert!(gate::apply(&mut target, 21.5));
//! assert!(!gate::apply(&mut target, 21.5));
//! assert_eq!(target, 21.5);
//! ```

use crate::types::{ClimateAction, ClimateMode, ClimatePreset};

/// A value that can be stored in a gated climate field.
pub trait GateValue {
    /// Returns `true` if `other` is the same value as `self`.
    fn same_as(&self, other: &Self) -> bool;
}

macro_rules! gate_by_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl GateValue for $ty {
                fn same_as(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

gate_by_eq!(
    bool,
    ClimateMode,
    ClimateAction,
    Option<String>,
    Option<ClimatePreset>,
);

impl GateValue for f32 {
    #[allow(clippy::float_cmp)]
    fn same_as(&self, other: &Self) -> bool {
        self == other || (self.is_nan() && other.is_nan())
    }
}

/// Assigns `new` to `field` if it differs from the current value.
///
/// Returns `true` if the field was changed. When the values are the same the
/// field is left untouched.
pub fn apply<T: GateValue>(field: &mut T, new: T) -> bool {
    if field.same_as(&new) {
        false
    } else {
        *field = new;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_reports_change_once() {
        let mut mode = ClimateMode::Off;
        assert!(apply(&mut mode, ClimateMode::Heat));
        assert_eq!(mode, ClimateMode::Heat);
        assert!(!apply(&mut mode, ClimateMode::Heat));
    }

    #[test]
    fn float_uses_exact_equality() {
        let mut temp = 21.0_f32;
        assert!(apply(&mut temp, 21.000_002));
        assert!(!apply(&mut temp, 21.000_002));
    }

    #[test]
    fn nan_is_unchanged_against_nan() {
        let mut temp = f32::NAN;
        assert!(!apply(&mut temp, f32::NAN));
        assert!(temp.is_nan());

        assert!(apply(&mut temp, 19.5));
        assert!(apply(&mut temp, f32::NAN));
        assert!(temp.is_nan());
    }

    #[test]
    fn optional_string_gate() {
        let mut preset: Option<String> = None;
        assert!(apply(&mut preset, Some("away".to_string())));
        assert!(!apply(&mut preset, Some("away".to_string())));
        assert!(apply(&mut preset, None));
        assert_eq!(preset, None);
    }
}
