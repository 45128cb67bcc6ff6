// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Climate builder.

use std::sync::Arc;

use crate::action_map::ActionMap;
use crate::climate::Climate;
use crate::climate::bindings::Bindings;
use crate::config::{ClimateConfig, DEFAULT_NAME};
use crate::entity::{Number, Select, Sensor, Switch};
use crate::error::Result;
use crate::state::ClimateState;

/// Default capacity of the async event channel.
const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Builder for a [`Climate`].
///
/// Every binding is optional. Bindings cannot be changed once built.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use climate_bridge::{ActionMap, Climate, ClimateAction};
/// use climate_bridge::entity::{MemoryNumber, MemorySensor, MemorySwitch};
///
/// let climate = Climate::builder()
///     .with_name("living_room")
///     .with_power(Arc::new(MemorySwitch::new()))
///     .with_target_temperature(Arc::new(MemoryNumber::with_range(5.0, 30.0)))
///     .with_current_temperature(Arc::new(MemorySensor::new()))
///     .with_action_sensor(Arc::new(MemorySensor::new()))
///     .with_action_map(ActionMap::new([(0, ClimateAction::Idle), (1, ClimateAction::Heating)]).unwrap())
///     .build();
///
/// assert_eq!(climate.name(), "living_room");
/// ```
#[derive(Debug)]
pub struct ClimateBuilder {
    name: String,
    bindings: Bindings,
    initial_state: ClimateState,
    event_capacity: usize,
}

impl Default for ClimateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClimateBuilder {
    /// Creates a builder with no bindings and default state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            bindings: Bindings::default(),
            initial_state: ClimateState::new(),
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }

    /// Creates a builder from a configuration: name and action map.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`ClimateConfig::validate`].
    pub fn from_config(config: &ClimateConfig) -> Result<Self> {
        config.validate()?;
        let mut builder = Self::new().with_name(config.name.clone());
        if !config.action_map.is_empty() {
            builder = builder.with_action_map(config.action_map()?);
        }
        Ok(builder)
    }

    /// Sets the name used in logs and events.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Binds the power control. On maps to Heat, off maps to Off.
    #[must_use]
    pub fn with_power(mut self, power: Arc<dyn Switch>) -> Self {
        self.bindings.power = Some(power);
        self
    }

    /// Binds the target temperature source.
    #[must_use]
    pub fn with_target_temperature(mut self, number: Arc<dyn Number>) -> Self {
        self.bindings.target_temperature = Some(number);
        self
    }

    /// Binds the current temperature source.
    #[must_use]
    pub fn with_current_temperature(mut self, sensor: Arc<dyn Sensor>) -> Self {
        self.bindings.current_temperature = Some(sensor);
        self
    }

    /// Binds the action code source. Ignored unless an action map is also set.
    #[must_use]
    pub fn with_action_sensor(mut self, sensor: Arc<dyn Sensor>) -> Self {
        self.bindings.action_sensor = Some(sensor);
        self
    }

    /// Sets the map used to resolve action codes.
    #[must_use]
    pub fn with_action_map(mut self, map: ActionMap) -> Self {
        self.bindings.action_map = Some(map);
        self
    }

    /// Binds the custom preset selector.
    #[must_use]
    pub fn with_preset_select(mut self, select: Arc<dyn Select>) -> Self {
        self.bindings.preset_select = Some(select);
        self
    }

    /// Starts from a previously persisted state instead of the defaults.
    #[must_use]
    pub fn restore_state(mut self, state: ClimateState) -> Self {
        self.initial_state = state;
        self
    }

    /// Sets the capacity of the async event channel.
    ///
    /// Zero is raised to one.
    #[must_use]
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity.max(1);
        self
    }

    /// Builds the climate and subscribes to every bound entity.
    #[must_use]
    pub fn build(self) -> Climate {
        Climate::new(
            self.name,
            self.bindings,
            self.initial_state,
            self.event_capacity,
        )
    }
}
