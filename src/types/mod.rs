// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types of the logical climate controller.
//!
//! # Types
//!
//! - [`ClimateMode`] - Requested operating mode (only Off/Heat are forwarded)
//! - [`ClimateAction`] - What the device is currently doing
//! - [`ClimatePreset`] - Built-in presets, mutually exclusive with custom presets

mod action;
mod mode;
mod preset;

pub use action::ClimateAction;
pub use mode::ClimateMode;
pub use preset::ClimatePreset;
