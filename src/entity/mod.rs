// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! External entities a [`Climate`](crate::Climate) can be bound to.
//!
//! Each trait is the narrow surface the climate bridge needs from one kind of
//! entity: read the current value, subscribe to "value changed" callbacks and,
//! where the bridge writes back, issue a command. How an entity persists its
//! value or talks to hardware is its own business.
//!
//! | Trait | Role | Writes issued by the bridge |
//! |---|---|---|
//! | [`Switch`] | power control | `turn_on`, `turn_off` |
//! | [`Number`] | target temperature | `set_value` |
//! | [`Sensor`] | current temperature, action code | none |
//! | [`Select`] | custom preset | `select_option` |
//!
//! The `Memory*` types are complete in-process implementations. They fire
//! their callbacks on every published value, changed or not.

mod number;
mod select;
mod sensor;
mod switch;

pub use number::{MemoryNumber, Number};
pub use select::{MemorySelect, Select};
pub use sensor::{MemorySensor, Sensor};
pub use switch::{MemorySwitch, Switch};
