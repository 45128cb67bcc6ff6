// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Climate event types.

use serde::Serialize;

use crate::state::ClimateState;

/// Events broadcast by a [`Climate`](crate::Climate).
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub enum ClimateEvent {
    /// The climate state changed.
    ///
    /// Published once per notification, so a control request touching
    /// several fields still yields a single event.
    StateChanged {
        /// Name of the climate that changed.
        name: String,
        /// Snapshot of the state right after the change.
        state: ClimateState,
    },
}

impl ClimateEvent {
    /// Creates a state changed event.
    #[must_use]
    pub fn state_changed(name: impl Into<String>, state: ClimateState) -> Self {
        Self::StateChanged {
            name: name.into(),
            state,
        }
    }

    /// Returns the snapshot carried by the event.
    #[must_use]
    pub fn state(&self) -> &ClimateState {
        match self {
            Self::StateChanged { state, .. } => state,
        }
    }
}
