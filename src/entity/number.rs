// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Writable numeric entity.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::subscription::{CallbackRegistry, FloatCallback, SubscriptionId};

/// A writable numeric entity, used as the target temperature source.
pub trait Number: Send + Sync {
    /// Returns the last published value, or `None` if never published.
    fn state(&self) -> Option<f32>;

    /// Requests a new value. The entity may clamp or reject it.
    fn set_value(&self, value: f32);

    /// Registers a callback fired whenever the number publishes a value.
    fn add_on_state_callback(&self, callback: Arc<FloatCallback>) -> SubscriptionId;

    /// Removes a callback. Returns `true` if it was registered.
    fn remove_on_state_callback(&self, id: SubscriptionId) -> bool;
}

/// In-memory [`Number`] with an optional clamping range.
///
/// # Examples
///
/// ```
/// use climate_bridge::entity::{MemoryNumber, Number};
///
/// let number = MemoryNumber::with_range(5.0, 30.0);
/// number.set_value(35.0);
/// assert_eq!(number.state(), Some(30.0));
/// ```
#[derive(Debug, Default)]
pub struct MemoryNumber {
    state: RwLock<Option<f32>>,
    range: Option<(f32, f32)>,
    callbacks: CallbackRegistry<FloatCallback>,
}

impl MemoryNumber {
    /// Creates an unbounded number with no published value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a number that clamps written values into `[min, max]`.
    #[must_use]
    pub fn with_range(min: f32, max: f32) -> Self {
        Self {
            range: Some((min.min(max), max.max(min))),
            ..Self::default()
        }
    }

    /// Returns the number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.callbacks.callback_count()
    }

    /// Stores `value` as-is and fires every callback with it.
    pub fn publish_state(&self, value: f32) {
        *self.state.write() = Some(value);
        tracing::trace!(value, "Number published state");
        self.callbacks.dispatch(value);
    }
}

impl Number for MemoryNumber {
    fn state(&self) -> Option<f32> {
        *self.state.read()
    }

    fn set_value(&self, value: f32) {
        let value = match self.range {
            Some((min, max)) if !value.is_nan() => value.clamp(min, max),
            _ => value,
        };
        self.publish_state(value);
    }

    fn add_on_state_callback(&self, callback: Arc<FloatCallback>) -> SubscriptionId {
        self.callbacks.subscribe(callback)
    }

    fn remove_on_state_callback(&self, id: SubscriptionId) -> bool {
        self.callbacks.unsubscribe(id)
    }
}
