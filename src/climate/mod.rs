// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The logical climate controller.
//!
//! A [`Climate`] keeps its [`ClimateState`] consistent with a set of bound
//! entities, in both directions:
//!
//! - **Inbound**: each bound entity gets exactly one callback. A callback
//!   updates exactly one field and, if that field really changed, emits one
//!   notification.
//! - **Outbound**: [`Climate::control`] applies a [`ControlRequest`]. Every
//!   field that really changes is written to its bound entity once, and the
//!   whole request emits at most one notification.
//!
//! | Entity | Field | Inbound rule | Outbound write |
//! |---|---|---|---|
//! | power [`Switch`](crate::entity::Switch) | mode | on → Heat, off → Off | Off → `turn_off`, Heat → `turn_on` |
//! | target [`Number`](crate::entity::Number) | target temperature | identity | `set_value` |
//! | current [`Sensor`](crate::entity::Sensor) | current temperature | identity | none |
//! | action [`Sensor`](crate::entity::Sensor) | action | [`ActionMap::resolve`](crate::ActionMap::resolve) | none |
//! | preset [`Select`](crate::entity::Select) | custom preset | option name | `select_option` |
//!
//! # Re-entrancy
//!
//! Entity writes happen with no lock held, and may synchronously call back
//! into the climate. Each field of a control request is compared against its
//! value at the moment it is processed, never against a snapshot taken when
//! the request started.

mod bindings;
mod builder;

pub use builder::ClimateBuilder;

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::sync::broadcast;

use crate::capabilities::Capabilities;
use crate::event::{ClimateEvent, EventBus};
use crate::gate;
use crate::state::{ClimateState, ControlRequest};
use crate::subscription::{CallbackRegistry, NotifyCallback, SubscriptionId};
use crate::types::ClimateMode;

use bindings::{Bindings, Subscriptions};

/// A logical climate controller synchronized with external entities.
///
/// Cloning a `Climate` yields another handle to the same controller. Entity
/// callbacks are removed when the last handle is dropped.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicU32, Ordering};
///
/// use climate_bridge::{Climate, ClimateMode, ControlRequest};
/// use climate_bridge::entity::{MemorySwitch, Switch};
///
/// let power = Arc::new(MemorySwitch::new());
/// let climate = Climate::builder().with_power(power.clone()).build();
///
/// let notifications = Arc::new(AtomicU32::new(0));
/// let counter = notifications.clone();
/// climate.on_state_changed(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// // Inbound: the switch turning on puts the climate in heat mode
/// power.publish_state(true);
/// assert_eq!(climate.state().mode(), ClimateMode::Heat);
///
/// // Outbound: requesting Off turns the switch off
/// climate.control(&ControlRequest::new().with_mode(ClimateMode::Off));
/// assert_eq!(power.state(), Some(false));
///
/// assert_eq!(notifications.load(Ordering::SeqCst), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Climate {
    inner: Arc<Inner>,
}

impl Climate {
    /// Creates a builder.
    #[must_use]
    pub fn builder() -> ClimateBuilder {
        ClimateBuilder::new()
    }

    pub(crate) fn new(
        name: String,
        bindings: Bindings,
        initial_state: ClimateState,
        event_capacity: usize,
    ) -> Self {
        let inner = Arc::new(Inner {
            name,
            state: Mutex::new(initial_state),
            bindings,
            listeners: CallbackRegistry::new(),
            events: EventBus::with_capacity(event_capacity),
            subscriptions: Mutex::new(Subscriptions::default()),
        });
        inner.register();
        Self { inner }
    }

    /// Returns the climate name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> ClimateState {
        self.inner.state.lock().clone()
    }

    /// Derives the advertised capabilities from the current bindings.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        Capabilities::from_preset_select(self.inner.bindings.preset_select.as_deref())
    }

    /// Applies a control request.
    ///
    /// Fields are processed in order: mode, target temperature, custom preset.
    /// Each field that changes is written to its bound entity, if any. A
    /// single notification follows if at least one field changed.
    pub fn control(&self, request: &ControlRequest) {
        self.inner.control(request);
    }

    /// Pulls the current value of every bound entity through its inbound
    /// handler. Entities that never published a value are skipped.
    pub fn sync_from_bindings(&self) {
        let inner = &self.inner;
        let bindings = &inner.bindings;

        if let Some(on) = bindings.power.as_ref().and_then(|e| e.state()) {
            inner.on_power(on);
        }
        if let Some(value) = bindings.target_temperature.as_ref().and_then(|e| e.state()) {
            inner.on_target_temperature(value);
        }
        if let Some(value) = bindings.current_temperature.as_ref().and_then(|e| e.state()) {
            inner.on_current_temperature(value);
        }
        if let Some(reading) = bindings.action_source().and_then(|(e, _)| e.state()) {
            inner.on_action_code(reading);
        }
        if let Some(select) = &bindings.preset_select
            && let Some(option) = select.state()
            && let Some(index) = select.index_of(&option)
        {
            inner.on_preset_select(&option, index);
        }
    }

    /// Registers a listener called once per state change notification.
    ///
    /// Listeners receive no payload; they read [`Climate::state`] themselves.
    /// A listener that needs the climate should capture a [`WeakClimate`]
    /// from [`Climate::downgrade`]: a captured `Climate` keeps itself alive
    /// and its entity callbacks are then never released.
    pub fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.inner.listeners.subscribe(Arc::new(callback))
    }

    /// Removes a listener. Returns `true` if it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.listeners.unsubscribe(id)
    }

    /// Creates a handle that does not keep the climate alive.
    #[must_use]
    pub fn downgrade(&self) -> WeakClimate {
        WeakClimate {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Subscribes to the async event stream.
    #[must_use]
    pub fn subscribe_events(&self) -> broadcast::Receiver<ClimateEvent> {
        self.inner.events.subscribe()
    }
}

/// A non-owning handle to a [`Climate`], created by [`Climate::downgrade`].
#[derive(Debug, Clone)]
pub struct WeakClimate {
    inner: Weak<Inner>,
}

impl WeakClimate {
    /// Returns the climate if at least one [`Climate`] handle is still alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<Climate> {
        self.inner.upgrade().map(|inner| Climate { inner })
    }
}

struct Inner {
    name: String,
    state: Mutex<ClimateState>,
    bindings: Bindings,
    listeners: CallbackRegistry<NotifyCallback>,
    events: EventBus,
    subscriptions: Mutex<Subscriptions>,
}

impl Inner {
    /// Subscribes one callback per bound entity.
    fn register(self: &Arc<Self>) {
        let bindings = &self.bindings;
        let mut subscriptions = Subscriptions::default();

        if let Some(power) = &bindings.power {
            subscriptions.power = Some(power.add_on_state_callback(self.forward(Self::on_power)));
        }
        if let Some(number) = &bindings.target_temperature {
            subscriptions.target_temperature = Some(
                number.add_on_state_callback(self.forward(Self::on_target_temperature)),
            );
        }
        if let Some(sensor) = &bindings.current_temperature {
            subscriptions.current_temperature = Some(
                sensor.add_on_state_callback(self.forward(Self::on_current_temperature)),
            );
        }
        if let Some((sensor, _)) = bindings.action_source() {
            subscriptions.action_sensor =
                Some(sensor.add_on_state_callback(self.forward(Self::on_action_code)));
        }
        if let Some(select) = &bindings.preset_select {
            let weak = Arc::downgrade(self);
            subscriptions.preset_select = Some(select.add_on_state_callback(Arc::new(
                move |option: &str, index| {
                    if let Some(inner) = weak.upgrade() {
                        inner.on_preset_select(option, index);
                    }
                },
            )));
        }

        tracing::debug!(climate = %self.name, bindings = ?self.bindings, "Climate set up");
        *self.subscriptions.lock() = subscriptions;
    }

    /// Wraps a handler in a callback that does nothing once the climate is gone.
    fn forward<T: 'static>(
        self: &Arc<Self>,
        handler: fn(&Self, T),
    ) -> Arc<dyn Fn(T) + Send + Sync> {
        let weak = Arc::downgrade(self);
        Arc::new(move |value| {
            if let Some(inner) = weak.upgrade() {
                handler(&*inner, value);
            }
        })
    }

    /// Runs one gated update under the state lock and reports whether it
    /// changed anything. The lock is released before returning.
    fn gated(&self, field: &'static str, update: impl FnOnce(&mut ClimateState) -> bool) -> bool {
        let changed = {
            let mut state = self.state.lock();
            update(&mut *state)
        };
        if !changed {
            tracing::trace!(climate = %self.name, field, "Value unchanged, skipping");
        }
        changed
    }

    // =========================================================================
    // Inbound handlers
    // =========================================================================

    fn on_power(&self, on: bool) {
        let mode = ClimateMode::from(on);
        if self.gated("mode", |state| gate::apply(&mut state.mode, mode)) {
            tracing::debug!(climate = %self.name, %mode, "Power entity changed mode");
            self.publish_state();
        }
    }

    fn on_target_temperature(&self, value: f32) {
        if self.gated("target_temperature", |state| {
            gate::apply(&mut state.target_temperature, value)
        }) {
            tracing::debug!(climate = %self.name, value, "Target temperature changed");
            self.publish_state();
        }
    }

    fn on_current_temperature(&self, value: f32) {
        if self.gated("current_temperature", |state| {
            gate::apply(&mut state.current_temperature, value)
        }) {
            tracing::debug!(climate = %self.name, value, "Current temperature changed");
            self.publish_state();
        }
    }

    fn on_action_code(&self, reading: f32) {
        let Some((_, map)) = self.bindings.action_source() else {
            return;
        };
        let Some(action) = map.resolve(reading) else {
            tracing::trace!(climate = %self.name, reading, "Unmapped action code, ignoring");
            return;
        };
        if self.gated("action", |state| gate::apply(&mut state.action, action)) {
            tracing::debug!(climate = %self.name, %action, reading, "Action changed");
            self.publish_state();
        }
    }

    fn on_preset_select(&self, option: &str, index: usize) {
        if self.gated("custom_preset", |state| {
            gate::apply(&mut state.custom_preset, Some(option.to_string()))
        }) {
            tracing::debug!(climate = %self.name, option, index, "Custom preset changed");
            self.publish_state();
        }
    }

    // =========================================================================
    // Outbound
    // =========================================================================

    fn control(&self, request: &ControlRequest) {
        let mut changed = false;

        if let Some(mode) = request.mode
            && self.gated("mode", |state| gate::apply(&mut state.mode, mode))
        {
            changed = true;
            self.write_mode(mode);
        }

        if let Some(value) = request.target_temperature
            && self.gated("target_temperature", |state| {
                gate::apply(&mut state.target_temperature, value)
            })
        {
            changed = true;
            if let Some(number) = &self.bindings.target_temperature {
                tracing::debug!(climate = %self.name, value, "Writing target temperature");
                number.set_value(value);
            }
        }

        if let Some(name) = &request.custom_preset
            && self.gated("custom_preset", |state| {
                let changed = gate::apply(&mut state.custom_preset, Some(name.clone()));
                if changed {
                    gate::apply(&mut state.preset, None);
                }
                changed
            })
        {
            changed = true;
            self.write_custom_preset(name);
        }

        if changed {
            self.publish_state();
        } else {
            tracing::trace!(climate = %self.name, ?request, "Control request changed nothing");
        }
    }

    fn write_mode(&self, mode: ClimateMode) {
        let Some(power) = &self.bindings.power else {
            return;
        };
        match mode {
            ClimateMode::Off => {
                tracing::debug!(climate = %self.name, "Turning power off");
                power.turn_off();
            }
            ClimateMode::Heat => {
                tracing::debug!(climate = %self.name, "Turning power on");
                power.turn_on();
            }
            other => {
                tracing::warn!(
                    climate = %self.name,
                    mode = %other,
                    "Mode cannot be expressed by the power entity, not forwarding"
                );
            }
        }
    }

    fn write_custom_preset(&self, name: &str) {
        let Some(select) = &self.bindings.preset_select else {
            return;
        };
        if select.index_of(name).is_none() {
            tracing::warn!(
                climate = %self.name,
                preset = name,
                "Custom preset is not a selector option"
            );
        }
        tracing::debug!(climate = %self.name, preset = name, "Selecting custom preset");
        select.select_option(name);
    }

    /// Emits one state changed notification.
    fn publish_state(&self) {
        let snapshot = self.state.lock().clone();
        tracing::debug!(
            climate = %self.name,
            mode = %snapshot.mode,
            action = %snapshot.action,
            target_temperature = snapshot.target_temperature,
            current_temperature = snapshot.current_temperature,
            custom_preset = ?snapshot.custom_preset,
            "Publishing climate state"
        );
        // Before listeners: a re-entrant listener's event must follow this one.
        self.events
            .publish(ClimateEvent::state_changed(self.name.clone(), snapshot));
        self.listeners.dispatch();
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        std::mem::take(self.subscriptions.get_mut()).release(&self.bindings);
    }
}

impl std::fmt::Debug for Inner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Climate")
            .field("name", &self.name)
            .field("state", &*self.state.lock())
            .field("bindings", &self.bindings)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    use crate::action_map::ActionMap;
    use crate::entity::{MemoryNumber, MemorySelect, MemorySensor, MemorySwitch, Number};
    use crate::types::{ClimateAction, ClimatePreset};

    fn counter(climate: &Climate) -> Arc<AtomicU32> {
        let count = Arc::new(AtomicU32::new(0));
        let count_clone = count.clone();
        climate.on_state_changed(move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    #[test]
    fn power_callback_is_registered_once() {
        let power = Arc::new(MemorySwitch::new());
        let climate = Climate::builder().with_power(power.clone()).build();
        let count = counter(&climate);

        power.publish_state(true);
        power.publish_state(true);
        assert_eq!(climate.state().mode(), ClimateMode::Heat);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn action_sensor_without_map_is_not_registered() {
        let sensor = Arc::new(MemorySensor::new());
        let climate = Climate::builder().with_action_sensor(sensor.clone()).build();
        let count = counter(&climate);

        sensor.publish_state(1.0);
        assert_eq!(climate.state().action(), ClimateAction::Off);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn drop_releases_entity_callbacks() {
        let power = Arc::new(MemorySwitch::new());
        let sensor = Arc::new(MemorySensor::new());
        let climate = Climate::builder()
            .with_power(power.clone())
            .with_current_temperature(sensor.clone())
            .build();

        assert_eq!(power.callback_count(), 1);
        assert_eq!(sensor.callback_count(), 1);

        drop(climate);
        assert_eq!(power.callback_count(), 0);
        assert_eq!(sensor.callback_count(), 0);
    }

    #[test]
    fn control_clears_restored_builtin_preset() {
        let climate = Climate::builder()
            .restore_state(ClimateState::new().with_preset(ClimatePreset::Eco))
            .build();

        climate.control(&ControlRequest::new().with_custom_preset("night"));
        let state = climate.state();
        assert_eq!(state.custom_preset(), Some("night"));
        assert_eq!(state.preset(), None);
    }

    #[test]
    fn control_writes_target_temperature_once() {
        let number = Arc::new(MemoryNumber::new());
        let writes = Arc::new(AtomicU32::new(0));
        let writes_clone = writes.clone();
        number.add_on_state_callback(Arc::new(move |_| {
            writes_clone.fetch_add(1, Ordering::SeqCst);
        }));
        let climate = Climate::builder()
            .with_target_temperature(number.clone())
            .build();

        let request = ControlRequest::new().with_target_temperature(21.5);
        climate.control(&request);
        climate.control(&request);

        assert_eq!(writes.load(Ordering::SeqCst), 1);
        assert_eq!(climate.state().target_temperature(), 21.5);
    }

    #[test]
    fn sync_from_bindings_pulls_current_values() {
        let power = Arc::new(MemorySwitch::new());
        let sensor = Arc::new(MemorySensor::new());
        let action = Arc::new(MemorySensor::new());
        let select = Arc::new(MemorySelect::new(["comfort", "eco"]));

        power.publish_state(true);
        sensor.publish_state(18.5);
        action.publish_state(1.0);
        select.publish_index(1);

        let climate = Climate::builder()
            .with_power(power)
            .with_current_temperature(sensor)
            .with_action_sensor(action)
            .with_action_map(ActionMap::new([(1, ClimateAction::Heating)]).unwrap())
            .with_preset_select(select)
            .build();
        let count = counter(&climate);

        climate.sync_from_bindings();
        let state = climate.state();
        assert_eq!(state.mode(), ClimateMode::Heat);
        assert_eq!(state.current_temperature(), 18.5);
        assert_eq!(state.action(), ClimateAction::Heating);
        assert_eq!(state.custom_preset(), Some("eco"));
        assert_eq!(count.load(Ordering::SeqCst), 4);

        climate.sync_from_bindings();
        assert_eq!(count.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn weak_handle_does_not_keep_climate_alive() {
        let climate = Climate::builder().with_name("hall").build();
        let weak = climate.downgrade();
        assert_eq!(weak.upgrade().map(|c| c.name().to_string()).as_deref(), Some("hall"));

        drop(climate);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn debug_output_names_climate() {
        let climate = Climate::builder().with_name("hall").build();
        let debug = format!("{climate:?}");
        assert!(debug.contains("hall"));
        assert!(debug.contains("bindings"));
    }
}
