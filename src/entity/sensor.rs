// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read-only numeric entity.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::subscription::{CallbackRegistry, FloatCallback, SubscriptionId};

/// A read-only numeric entity: current temperature or action code.
pub trait Sensor: Send + Sync {
    /// Returns the last published reading, or `None` if never published.
    fn state(&self) -> Option<f32>;

    /// Registers a callback fired whenever the sensor publishes a reading.
    fn add_on_state_callback(&self, callback: Arc<FloatCallback>) -> SubscriptionId;

    /// Removes a callback. Returns `true` if it was registered.
    fn remove_on_state_callback(&self, id: SubscriptionId) -> bool;
}

/// In-memory [`Sensor`] fed by [`MemorySensor::publish_state`].
#[derive(Debug, Default)]
pub struct MemorySensor {
    state: RwLock<Option<f32>>,
    callbacks: CallbackRegistry<FloatCallback>,
}

impl MemorySensor {
    /// Creates a sensor with no reading.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.callbacks.callback_count()
    }

    /// Stores `reading` and fires every callback with it.
    pub fn publish_state(&self, reading: f32) {
        *self.state.write() = Some(reading);
        tracing::trace!(reading, "Sensor published state");
        self.callbacks.dispatch(reading);
    }
}

impl Sensor for MemorySensor {
    fn state(&self) -> Option<f32> {
        *self.state.read()
    }

    fn add_on_state_callback(&self, callback: Arc<FloatCallback>) -> SubscriptionId {
        self.callbacks.subscribe(callback)
    }

    fn remove_on_state_callback(&self, id: SubscriptionId) -> bool {
        self.callbacks.unsubscribe(id)
    }
}
