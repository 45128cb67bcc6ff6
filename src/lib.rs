// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Climate Bridge - keeps a logical climate controller in sync with the
//! independent entities that make up a heating device.
//!
//! A heat pump or boiler integration usually exposes its features as separate
//! entities: a power switch, a target temperature number, a few sensors, a
//! preset selector. This library presents them as one [`Climate`] with a mode,
//! target and current temperature, action and custom preset, and keeps both
//! sides consistent:
//!
//! - When an entity publishes a value, the matching climate field follows.
//! - When a caller submits a [`ControlRequest`], each field that actually
//!   changes is written to the entity that owns it.
//!
//! Unchanged values never cause a write or a notification, and a control
//! request that changes several fields notifies exactly once.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use climate_bridge::{ActionMap, Climate, ClimateAction, ClimateMode, ControlRequest};
//! use climate_bridge::entity::{MemoryNumber, MemorySelect, MemorySensor, MemorySwitch, Select};
//!
//! let power = Arc::new(MemorySwitch::new());
//! let target = Arc::new(MemoryNumber::with_range(5.0, 30.0));
//! let current = Arc::new(MemorySensor::new());
//! let action = Arc::new(MemorySensor::new());
//! let presets = Arc::new(MemorySelect::new(["comfort", "eco"]));
//!
//! let climate = Climate::builder()
//!     .with_name("floor_heating")
//!     .with_power(power.clone())
//!     .with_target_temperature(target.clone())
//!     .with_current_temperature(current.clone())
//!     .with_action_sensor(action.clone())
//!     .with_action_map(ActionMap::new([(0, ClimateAction::Idle), (1, ClimateAction::Heating)])?)
//!     .with_preset_select(presets.clone())
//!     .build();
//!
//! climate.on_state_changed(|| println!("climate changed"));
//!
//! // Entities drive the climate...
//! current.publish_state(19.5);
//! action.publish_state(1.0);
//! assert_eq!(climate.state().action(), ClimateAction::Heating);
//!
//! // ...and the climate drives the entities.
//! climate.control(
//!     &ControlRequest::new()
//!         .with_mode(ClimateMode::Heat)
//!         .with_target_temperature(21.0)
//!         .with_custom_preset("eco"),
//! );
//! assert_eq!(presets.state().as_deref(), Some("eco"));
//!
//! assert!(climate.capabilities().supports_custom_preset("comfort"));
//! # Ok::<(), climate_bridge::Error>(())
//! ```
//!
//! # Threading
//!
//! All callbacks run synchronously on the thread that published the value or
//! submitted the request. State is guarded internally so a [`Climate`] is
//! `Send + Sync`, but no lock is held while entities or listeners run.

mod action_map;
mod capabilities;
mod climate;
pub mod config;
pub mod entity;
pub mod error;
pub mod event;
pub mod gate;
pub mod state;
pub mod subscription;
pub mod types;

pub use action_map::ActionMap;
pub use capabilities::Capabilities;
pub use climate::{Climate, ClimateBuilder, WeakClimate};
pub use config::{ActionMapping, ClimateConfig};
pub use error::{ConfigError, Error, Result, ValueError};
pub use event::ClimateEvent;
pub use state::{ClimateState, ControlRequest};
pub use subscription::SubscriptionId;
pub use types::{ClimateAction, ClimateMode, ClimatePreset};
