// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Publishing commands onto the message bus.
//!
//! The climate adapter only needs one primitive from the bus: publish a
//! payload on a topic. [`Publisher`] captures it so the adapter can be
//! driven by the bundled [`MqttPublisher`] or by whatever client the host
//! already owns.

#[cfg(feature = "mqtt")]
mod mqtt;

#[cfg(feature = "mqtt")]
pub use mqtt::{MqttPublisher, MqttPublisherBuilder};

use std::sync::Arc;

use crate::error::ProtocolError;
use crate::types::QosLevel;

/// Trait for message-bus clients that can publish a command payload.
///
/// Timeouts and cancellation are whatever the implementation provides; the
/// adapter adds none of its own.
#[allow(async_fn_in_trait)]
pub trait Publisher {
    /// Publishes `payload` on `topic`.
    ///
    /// # Arguments
    ///
    /// * `topic` - Destination topic
    /// * `payload` - Message body
    /// * `qos` - Delivery guarantee
    /// * `retain` - Whether the broker keeps the message for new subscribers
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the message could not be handed to the bus.
    async fn publish(
        &self,
        topic: &str,
        payload: &str,
        qos: QosLevel,
        retain: bool,
    ) -> Result<(), ProtocolError>;
}

impl<P: Publisher + ?Sized> Publisher for Arc<P> {
    async fn publish(
        &self,
        topic: &str,
        payload: &str,
        qos: QosLevel,
        retain: bool,
    ) -> Result<(), ProtocolError> {
        (**self).publish(topic, payload, qos, retain).await
    }
}
