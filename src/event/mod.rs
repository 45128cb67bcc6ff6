// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Async event stream for climate state changes.
//!
//! Synchronous listeners registered with
//! [`Climate::on_state_changed`](crate::Climate::on_state_changed) are the
//! primary notification path. The [`EventBus`] mirrors every notification to
//! tokio tasks, carrying a state snapshot so a late reader does not observe a
//! newer state than the one that triggered the event.

mod climate_event;
mod event_bus;

pub use climate_event::ClimateEvent;
pub use event_bus::EventBus;
