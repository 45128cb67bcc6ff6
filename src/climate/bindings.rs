// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity bindings of a climate.

use std::sync::Arc;

use crate::action_map::ActionMap;
use crate::entity::{Number, Select, Sensor, Switch};
use crate::subscription::SubscriptionId;

/// Entities a climate is bound to. Any slot may be empty.
///
/// Fixed once the climate is built: an empty slot makes the matching inbound
/// and outbound paths inert for the climate's whole lifetime.
#[derive(Default)]
pub(crate) struct Bindings {
    pub(crate) power: Option<Arc<dyn Switch>>,
    pub(crate) target_temperature: Option<Arc<dyn Number>>,
    pub(crate) current_temperature: Option<Arc<dyn Sensor>>,
    pub(crate) action_sensor: Option<Arc<dyn Sensor>>,
    pub(crate) action_map: Option<ActionMap>,
    pub(crate) preset_select: Option<Arc<dyn Select>>,
}

impl Bindings {
    /// The action sensor only counts as bound together with a map.
    pub(crate) fn action_source(&self) -> Option<(&Arc<dyn Sensor>, &ActionMap)> {
        self.action_sensor.as_ref().zip(self.action_map.as_ref())
    }
}

impl std::fmt::Debug for Bindings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bindings")
            .field("power", &self.power.is_some())
            .field("target_temperature", &self.target_temperature.is_some())
            .field("current_temperature", &self.current_temperature.is_some())
            .field("action_sensor", &self.action_sensor.is_some())
            .field("action_map", &self.action_map)
            .field("preset_select", &self.preset_select.is_some())
            .finish()
    }
}

/// Callback subscriptions held on bound entities, one per slot at most.
#[derive(Debug, Default)]
pub(crate) struct Subscriptions {
    pub(crate) power: Option<SubscriptionId>,
    pub(crate) target_temperature: Option<SubscriptionId>,
    pub(crate) current_temperature: Option<SubscriptionId>,
    pub(crate) action_sensor: Option<SubscriptionId>,
    pub(crate) preset_select: Option<SubscriptionId>,
}

impl Subscriptions {
    /// Removes every callback from the entity it was registered on.
    pub(crate) fn release(self, bindings: &Bindings) {
        if let (Some(entity), Some(id)) = (&bindings.power, self.power) {
            entity.remove_on_state_callback(id);
        }
        if let (Some(entity), Some(id)) = (&bindings.target_temperature, self.target_temperature) {
            entity.remove_on_state_callback(id);
        }
        if let (Some(entity), Some(id)) = (&bindings.current_temperature, self.current_temperature)
        {
            entity.remove_on_state_callback(id);
        }
        if let (Some(entity), Some(id)) = (&bindings.action_sensor, self.action_sensor) {
            entity.remove_on_state_callback(id);
        }
        if let (Some(entity), Some(id)) = (&bindings.preset_select, self.preset_select) {
            entity.remove_on_state_callback(id);
        }
    }
}
