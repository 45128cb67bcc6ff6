// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Binary on/off entity.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::subscription::{BoolCallback, CallbackRegistry, SubscriptionId};

/// An on/off entity, used as the climate power control.
pub trait Switch: Send + Sync {
    /// Returns the last published state, or `None` if never published.
    fn state(&self) -> Option<bool>;

    /// Requests the switch to turn on.
    fn turn_on(&self);

    /// Requests the switch to turn off.
    fn turn_off(&self);

    /// Registers a callback fired whenever the switch publishes a state.
    fn add_on_state_callback(&self, callback: Arc<BoolCallback>) -> SubscriptionId;

    /// Removes a callback. Returns `true` if it was registered.
    fn remove_on_state_callback(&self, id: SubscriptionId) -> bool;
}

/// In-memory [`Switch`] that publishes every command it receives.
///
/// # Examples
///
/// ```
/// use climate_bridge::entity::{MemorySwitch, Switch};
///
/// let switch = MemorySwitch::new();
/// assert_eq!(switch.state(), None);
///
/// switch.turn_on();
/// assert_eq!(switch.state(), Some(true));
/// ```
#[derive(Debug, Default)]
pub struct MemorySwitch {
    state: RwLock<Option<bool>>,
    callbacks: CallbackRegistry<BoolCallback>,
}

impl MemorySwitch {
    /// Creates a switch with no published state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.callbacks.callback_count()
    }

    /// Stores `on` and fires every callback with it.
    pub fn publish_state(&self, on: bool) {
        *self.state.write() = Some(on);
        tracing::trace!(state = on, "Switch published state");
        self.callbacks.dispatch(on);
    }
}

impl Switch for MemorySwitch {
    fn state(&self) -> Option<bool> {
        *self.state.read()
    }

    fn turn_on(&self) {
        self.publish_state(true);
    }

    fn turn_off(&self) {
        self.publish_state(false);
    }

    fn add_on_state_callback(&self, callback: Arc<BoolCallback>) -> SubscriptionId {
        self.callbacks.subscribe(callback)
    }

    fn remove_on_state_callback(&self, id: SubscriptionId) -> bool {
        self.callbacks.unsubscribe(id)
    }
}
