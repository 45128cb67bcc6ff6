// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for state subscriptions.
//!
//! - [`SubscriptionId`] - Unique identifier for unsubscribing
//! - [`CallbackRegistry`] - Registry for storing and dispatching callbacks

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

/// Unique identifier for a subscription.
///
/// Returned when registering a callback and used to unsubscribe later. IDs
/// are unique within one registry's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Creates a new subscription ID with the given value.
    #[must_use]
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

/// Callback receiving a switch state.
pub type BoolCallback = dyn Fn(bool) + Send + Sync;

/// Callback receiving a numeric state.
pub type FloatCallback = dyn Fn(f32) + Send + Sync;

/// Callback receiving a selected option name and its index.
pub type OptionCallback = dyn Fn(&str, usize) + Send + Sync;

/// Callback receiving nothing; listeners re-read state themselves.
pub type NotifyCallback = dyn Fn() + Send + Sync;

/// Registry of callbacks of one signature.
///
/// Callbacks are stored behind `Arc` and dispatched in subscription order.
/// Dispatch works on a snapshot taken before any callback runs, so a callback
/// may subscribe, unsubscribe or trigger another dispatch on the same registry
/// without deadlocking.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicU32, Ordering};
///
/// use climate_bridge::subscription::{CallbackRegistry, NotifyCallback};
///
/// let registry: CallbackRegistry<NotifyCallback> = CallbackRegistry::new();
/// let count = Arc::new(AtomicU32::new(0));
/// let counter = count.clone();
///
/// let id = registry.subscribe(Arc::new(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// }));
/// registry.dispatch();
/// assert_eq!(count.load(Ordering::SeqCst), 1);
///
/// assert!(registry.unsubscribe(id));
/// registry.dispatch();
/// assert_eq!(count.load(Ordering::SeqCst), 1);
/// ```
pub struct CallbackRegistry<F: ?Sized> {
    /// Counter for generating unique subscription IDs.
    next_id: AtomicU64,
    callbacks: RwLock<BTreeMap<SubscriptionId, Arc<F>>>,
}

impl<F: ?Sized> CallbackRegistry<F> {
    /// Creates a new empty callback registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            callbacks: RwLock::new(BTreeMap::new()),
        }
    }

    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Registers a callback and returns its subscription ID.
    pub fn subscribe(&self, callback: Arc<F>) -> SubscriptionId {
        let id = self.next_id();
        self.callbacks.write().insert(id, callback);
        id
    }

    /// Unregisters a callback by its subscription ID.
    ///
    /// Returns `true` if a callback was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.callbacks.write().remove(&id).is_some()
    }

    /// Clears all callbacks.
    pub fn clear(&self) {
        self.callbacks.write().clear();
    }

    /// Returns the registered callbacks in subscription order.
    ///
    /// The internal lock is released before this returns.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Arc<F>> {
        self.callbacks.read().values().cloned().collect()
    }

    /// Returns the number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.callbacks.read().len()
    }

    /// Returns `true` if there are no registered callbacks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callback_count() == 0
    }
}

impl CallbackRegistry<BoolCallback> {
    /// Calls every callback with `value`.
    pub fn dispatch(&self, value: bool) {
        for callback in self.snapshot() {
            callback(value);
        }
    }
}

impl CallbackRegistry<FloatCallback> {
    /// Calls every callback with `value`.
    pub fn dispatch(&self, value: f32) {
        for callback in self.snapshot() {
            callback(value);
        }
    }
}

impl CallbackRegistry<OptionCallback> {
    /// Calls every callback with the selected option and its index.
    pub fn dispatch(&self, option: &str, index: usize) {
        for callback in self.snapshot() {
            callback(option, index);
        }
    }
}

impl CallbackRegistry<NotifyCallback> {
    /// Calls every callback.
    pub fn dispatch(&self) {
        for callback in self.snapshot() {
            callback();
        }
    }
}

impl<F: ?Sized> Default for CallbackRegistry<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ?Sized> std::fmt::Debug for CallbackRegistry<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("callback_count", &self.callback_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU32;

    #[test]
    fn subscription_id_display() {
        let id = SubscriptionId::new(42);
        assert_eq!(id.to_string(), "Sub(42)");
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn registry_new_is_empty() {
        let registry: CallbackRegistry<NotifyCallback> = CallbackRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.callback_count(), 0);
    }

    #[test]
    fn registry_bool_callback() {
        let registry: CallbackRegistry<BoolCallback> = CallbackRegistry::new();
        let received = Arc::new(RwLock::new(None::<bool>));
        let received_clone = received.clone();

        let id = registry.subscribe(Arc::new(move |on| {
            *received_clone.write() = Some(on);
        }));

        registry.dispatch(true);
        assert_eq!(*received.read(), Some(true));

        assert!(registry.unsubscribe(id));
        registry.dispatch(false);
        assert_eq!(*received.read(), Some(true));
    }

    #[test]
    fn registry_option_callback() {
        let registry: CallbackRegistry<OptionCallback> = CallbackRegistry::new();
        let received = Arc::new(RwLock::new(None::<(String, usize)>));
        let received_clone = received.clone();

        registry.subscribe(Arc::new(move |option: &str, index| {
            *received_clone.write() = Some((option.to_string(), index));
        }));

        registry.dispatch("eco", 2);
        assert_eq!(*received.read(), Some(("eco".to_string(), 2)));
    }

    #[test]
    fn registry_dispatches_in_subscription_order() {
        let registry: CallbackRegistry<FloatCallback> = CallbackRegistry::new();
        let order = Arc::new(RwLock::new(Vec::new()));

        for tag in 0..3 {
            let order = order.clone();
            registry.subscribe(Arc::new(move |_| order.write().push(tag)));
        }

        registry.dispatch(1.0);
        assert_eq!(*order.read(), vec![0, 1, 2]);
    }

    #[test]
    fn callback_may_unsubscribe_during_dispatch() {
        let registry: Arc<CallbackRegistry<NotifyCallback>> = Arc::new(CallbackRegistry::new());
        let counter = Arc::new(AtomicU32::new(0));

        let weak = Arc::downgrade(&registry);
        let counter_clone = counter.clone();
        registry.subscribe(Arc::new(move || {
            counter_clone.fetch_add(1, Ordering::SeqCst);
            if let Some(registry) = weak.upgrade() {
                registry.clear();
            }
        }));

        registry.dispatch();
        registry.dispatch();
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn registry_unsubscribe_nonexistent() {
        let registry: CallbackRegistry<NotifyCallback> = CallbackRegistry::new();
        assert!(!registry.unsubscribe(SubscriptionId::new(999)));
    }

    #[test]
    fn registry_unique_ids() {
        let registry: CallbackRegistry<NotifyCallback> = CallbackRegistry::new();
        let id1 = registry.subscribe(Arc::new(|| {}));
        let id2 = registry.subscribe(Arc::new(|| {}));
        assert_ne!(id1, id2);
    }

    #[test]
    fn registry_debug() {
        let registry: CallbackRegistry<BoolCallback> = CallbackRegistry::new();
        registry.subscribe(Arc::new(|_| {}));

        let debug = format!("{registry:?}");
        assert!(debug.contains("CallbackRegistry"));
        assert!(debug.contains("callback_count: 1"));
    }
}
