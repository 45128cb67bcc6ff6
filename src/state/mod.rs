// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Climate state management types.
//!
//! [`ClimateState`] holds the current field values of the logical climate
//! controller, while [`ControlRequest`] is what a caller submits to change
//! them.

mod climate_state;
mod control_request;

pub use climate_state::ClimateState;
pub use control_request::ControlRequest;
