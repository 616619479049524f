// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscribable trait for entities that report state to the host.

use crate::state::{ClimateState, StateChange};
use crate::subscription::SubscriptionId;

/// Trait for types that support state subscriptions.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use ir_climate::{ClimateConfig, FujitsuClimate, ProtocolError, QosLevel};
/// use ir_climate::protocol::Publisher;
/// use ir_climate::subscription::Subscribable;
///
/// struct Discard;
///
/// impl Publisher for Discard {
///     async fn publish(&self, _: &str, _: &str, _: QosLevel, _: bool) -> Result<(), ProtocolError> {
///         Ok(())
///     }
/// }
///
/// let climate = FujitsuClimate::new(ClimateConfig::new("AC", "ir/send"), Discard);
/// let id = climate.on_state_written(|state| {
///     println!("mode is now {}", state.hvac_mode());
/// });
/// assert!(climate.unsubscribe(id));
/// ```
pub trait Subscribable {
    /// Subscribes to full state snapshots, delivered after every command.
    fn on_state_written<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&ClimateState) + Send + Sync + 'static;

    /// Subscribes to individual state changes.
    fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static;

    /// Subscribes to availability changes.
    ///
    /// The callback receives `false` when a publish fails under
    /// [`PublishFailurePolicy::MarkUnavailable`](crate::config::PublishFailurePolicy::MarkUnavailable).
    fn on_availability_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(bool) + Send + Sync + 'static;

    /// Unsubscribes a callback by its subscription ID.
    ///
    /// Returns `true` if the subscription was found and removed.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
