// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Named-option selector entity.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::subscription::{CallbackRegistry, OptionCallback, SubscriptionId};

/// A selector over a list of named options, used for custom presets.
pub trait Select: Send + Sync {
    /// Returns the currently selected option, or `None` if nothing is selected.
    fn state(&self) -> Option<String>;

    /// Returns the options this selector currently offers.
    fn options(&self) -> Vec<String>;

    /// Requests the option with the given name to be selected.
    fn select_option(&self, option: &str);

    /// Registers a callback fired with the option name and index whenever
    /// the selector publishes a selection.
    fn add_on_state_callback(&self, callback: Arc<OptionCallback>) -> SubscriptionId;

    /// Removes a callback. Returns `true` if it was registered.
    fn remove_on_state_callback(&self, id: SubscriptionId) -> bool;

    /// Returns the index of `option` in [`Select::options`].
    fn index_of(&self, option: &str) -> Option<usize> {
        self.options().iter().position(|o| o == option)
    }

    /// Returns the index of the selected option.
    fn active_index(&self) -> Option<usize> {
        self.state().and_then(|option| self.index_of(&option))
    }
}

/// In-memory [`Select`] that ignores requests for unknown options.
///
/// # Examples
///
/// ```
/// use climate_bridge::entity::{MemorySelect, Select};
///
/// let select = MemorySelect::new(["comfort", "eco"]);
/// select.select_option("eco");
/// assert_eq!(select.state().as_deref(), Some("eco"));
/// assert_eq!(select.active_index(), Some(1));
///
/// select.select_option("party");
/// assert_eq!(select.state().as_deref(), Some("eco"));
/// ```
#[derive(Debug, Default)]
pub struct MemorySelect {
    options: RwLock<Vec<String>>,
    state: RwLock<Option<String>>,
    callbacks: CallbackRegistry<OptionCallback>,
}

impl MemorySelect {
    /// Creates a selector offering `options`, with nothing selected.
    #[must_use]
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: RwLock::new(options.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Returns the number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.callbacks.callback_count()
    }

    /// Replaces the offered options. The current selection is kept as-is.
    pub fn set_options<I, S>(&self, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.options.write() = options.into_iter().map(Into::into).collect();
    }

    /// Selects the option at `index` and fires every callback.
    ///
    /// Does nothing if `index` is out of range.
    pub fn publish_index(&self, index: usize) {
        let Some(option) = self.options.read().get(index).cloned() else {
            tracing::warn!(index, "Select index out of range, ignoring");
            return;
        };
        *self.state.write() = Some(option.clone());
        tracing::trace!(option = %option, index, "Select published state");
        self.callbacks.dispatch(&option, index);
    }
}

impl Select for MemorySelect {
    fn state(&self) -> Option<String> {
        self.state.read().clone()
    }

    fn options(&self) -> Vec<String> {
        self.options.read().clone()
    }

    fn select_option(&self, option: &str) {
        match self.index_of(option) {
            Some(index) => self.publish_index(index),
            None => tracing::warn!(option = %option, "Unknown select option, ignoring"),
        }
    }

    fn add_on_state_callback(&self, callback: Arc<OptionCallback>) -> SubscriptionId {
        self.callbacks.subscribe(callback)
    }

    fn remove_on_state_callback(&self, id: SubscriptionId) -> bool {
        self.callbacks.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_known_option_fires_callback() {
        let select = MemorySelect::new(["comfort", "eco", "away"]);
        let received = Arc::new(RwLock::new(None::<(String, usize)>));
        let received_clone = received.clone();
        select.add_on_state_callback(Arc::new(move |option: &str, index| {
            *received_clone.write() = Some((option.to_string(), index));
        }));

        select.select_option("away");
        assert_eq!(*received.read(), Some(("away".to_string(), 2)));
        assert_eq!(select.active_index(), Some(2));
    }

    #[test]
    fn unknown_option_is_ignored() {
        let select = MemorySelect::new(["comfort"]);
        select.select_option("party");
        assert_eq!(select.state(), None);
    }

    #[test]
    fn set_options_replaces_list() {
        let select = MemorySelect::new(["a"]);
        select.set_options(["b", "c"]);
        assert_eq!(select.options(), vec!["b".to_string(), "c".to_string()]);
        assert_eq!(select.index_of("c"), Some(1));
    }

    #[test]
    fn publish_index_out_of_range() {
        let select = MemorySelect::new(["a"]);
        select.publish_index(4);
        assert_eq!(select.state(), None);
    }
}
