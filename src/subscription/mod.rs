// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback-based subscription system.
//!
//! Entities use a [`CallbackRegistry`] to deliver "value changed" callbacks,
//! and [`Climate`](crate::Climate) uses one to deliver its "state changed"
//! notification. Delivery is synchronous, on the caller's thread.
//!
//! # Usage
//!
//! ```
//! use climate_bridge::Climate;
//!
//! let climate = Climate::builder().build();
//!
//! let sub_id = climate.on_state_changed(|| println!("climate changed"));
//!
//! // Later, unsubscribe
//! assert!(climate.unsubscribe(sub_id));
//! ```

mod callback;

pub use callback::{
    BoolCallback, CallbackRegistry, FloatCallback, NotifyCallback, OptionCallback,
    SubscriptionId,
};
