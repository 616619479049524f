// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for climate state subscriptions.
//!
//! - [`SubscriptionId`] - Unique identifier for unsubscribing
//! - [`CallbackRegistry`] - Registry for storing and dispatching callbacks

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::state::{ClimateState, StateChange};

/// Unique identifier for a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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

type StateWrittenCallback = Arc<dyn Fn(&ClimateState) + Send + Sync>;

type StateChangedCallback = Arc<dyn Fn(&StateChange) + Send + Sync>;

type AvailabilityCallback = Arc<dyn Fn(bool) + Send + Sync>;

/// Registry for climate entity callbacks.
///
/// Stands in for the host's "write state" hook: the adapter dispatches a
/// full [`ClimateState`] snapshot after every setter, plus the individual
/// [`StateChange`]s that led to it.
///
/// # Thread Safety
///
/// Uses `parking_lot::RwLock`, so callbacks may be registered from other
/// tasks while the adapter is running.
pub struct CallbackRegistry {
    next_id: AtomicU64,
    /// Full state snapshots, once per setter call.
    state_written_callbacks: RwLock<HashMap<SubscriptionId, StateWrittenCallback>>,
    /// Individual changes.
    state_changed_callbacks: RwLock<HashMap<SubscriptionId, StateChangedCallback>>,
    /// Availability flips.
    availability_callbacks: RwLock<HashMap<SubscriptionId, AvailabilityCallback>>,
}

impl CallbackRegistry {
    /// Creates a new empty callback registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            state_written_callbacks: RwLock::new(HashMap::new()),
            state_changed_callbacks: RwLock::new(HashMap::new()),
            availability_callbacks: RwLock::new(HashMap::new()),
        }
    }

    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    // =========================================================================
    // Registration methods
    // =========================================================================

    /// Registers a callback receiving the full state after each command.
    pub fn on_state_written<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&ClimateState) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.state_written_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for every individual state change.
    pub fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.state_changed_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for availability changes.
    pub fn on_availability_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.availability_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Unregisters a callback by its subscription ID.
    ///
    /// Returns `true` if a callback was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.state_written_callbacks.write().remove(&id).is_some()
            || self.state_changed_callbacks.write().remove(&id).is_some()
            || self.availability_callbacks.write().remove(&id).is_some()
    }

    // =========================================================================
    // Dispatch methods
    // =========================================================================

    /// Dispatches a state change.
    ///
    /// Availability changes also reach the availability callbacks.
    pub fn dispatch(&self, change: &StateChange) {
        {
            let callbacks = self.state_changed_callbacks.read();
            for callback in callbacks.values() {
                callback(change);
            }
        }

        if let StateChange::Availability(available) = change {
            let callbacks = self.availability_callbacks.read();
            for callback in callbacks.values() {
                callback(*available);
            }
        }
    }

    /// Dispatches a full state snapshot.
    pub fn dispatch_state_written(&self, state: &ClimateState) {
        let callbacks = self.state_written_callbacks.read();
        for callback in callbacks.values() {
            callback(state);
        }
    }

    /// Returns the total number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.state_written_callbacks.read().len()
            + self.state_changed_callbacks.read().len()
            + self.availability_callbacks.read().len()
    }

    /// Returns `true` if there are no registered callbacks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callback_count() == 0
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("callback_count", &self.callback_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HvacMode;
    use std::sync::atomic::AtomicU32;

    #[test]
    fn subscription_id_display() {
        let id = SubscriptionId::new(42);
        assert_eq!(id.to_string(), "Sub(42)");
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = CallbackRegistry::new();
        assert!(registry.is_empty());
    }

    #[test]
    fn registry_state_changed_callback() {
        let registry = CallbackRegistry::new();
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let id = registry.on_state_changed(move |_change| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        registry.dispatch(&StateChange::HvacMode(HvacMode::Cool));
        registry.dispatch(&StateChange::TargetTemperature(20.0));
        registry.dispatch(&StateChange::Availability(false));
        assert_eq!(counter.load(Ordering::SeqCst), 3);

        assert!(registry.unsubscribe(id));
        registry.dispatch(&StateChange::HvacMode(HvacMode::Heat));
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn registry_availability_callback_only_sees_availability() {
        let registry = CallbackRegistry::new();
        let received = Arc::new(RwLock::new(Vec::new()));
        let received_clone = received.clone();

        registry.on_availability_changed(move |available| {
            received_clone.write().push(available);
        });

        registry.dispatch(&StateChange::fan_mode("high"));
        registry.dispatch(&StateChange::Availability(false));

        assert_eq!(*received.read(), vec![false]);
    }

    #[test]
    fn registry_state_written_callback() {
        let registry = CallbackRegistry::new();
        let received = Arc::new(RwLock::new(None::<HvacMode>));
        let received_clone = received.clone();

        registry.on_state_written(move |state| {
            *received_clone.write() = Some(state.hvac_mode());
        });

        let mut state = ClimateState::new();
        state.set_hvac_mode(HvacMode::Dry);
        registry.dispatch_state_written(&state);

        assert_eq!(*received.read(), Some(HvacMode::Dry));
    }

    #[test]
    fn registry_unsubscribe_nonexistent() {
        let registry = CallbackRegistry::new();
        assert!(!registry.unsubscribe(SubscriptionId::new(999)));
    }

    #[test]
    fn registry_unique_ids() {
        let registry = CallbackRegistry::new();

        let id1 = registry.on_state_written(|_| {});
        let id2 = registry.on_state_changed(|_| {});
        let id3 = registry.on_availability_changed(|_| {});

        assert_ne!(id1, id2);
        assert_ne!(id2, id3);
        assert_eq!(registry.callback_count(), 3);

        assert!(registry.unsubscribe(id1));
        assert!(registry.unsubscribe(id2));
        assert!(registry.unsubscribe(id3));
        assert!(registry.is_empty());
    }

    #[test]
    fn registry_debug() {
        let registry = CallbackRegistry::new();
        registry.on_state_changed(|_| {});

        let debug = format!("{registry:?}");
        assert!(debug.contains("callback_count"));
    }
}
