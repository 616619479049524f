// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MQTT publisher built on `rumqttc`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use rumqttc::{AsyncClient, EventLoop, MqttOptions};
use tokio::sync::oneshot;

use crate::error::ProtocolError;
use crate::protocol::Publisher;
use crate::types::QosLevel;

/// Global counter for generating unique client IDs.
static CLIENT_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A publish-only MQTT connection.
///
/// The connection is established by [`MqttPublisherBuilder::build`], which
/// waits for the broker's `CONNACK`. A background task drives the `rumqttc`
/// event loop; if it fails the publisher is marked disconnected and every
/// later publish returns an error. There is no reconnection.
///
/// `MqttPublisher` is cheaply cloneable and can be shared between several
/// climate entities.
///
/// # Examples
///
/// ```no_run
/// use ir_climate::protocol::{MqttPublisher, Publisher};
/// use ir_climate::types::QosLevel;
///
/// # async fn example() -> Result<(), ir_climate::ProtocolError> {
/// let publisher = MqttPublisher::builder()
///     .broker("mqtt://192.168.1.50:1883")
///     .credentials("user", "password")
///     .build()
///     .await?;
///
/// publisher
///     .publish("ir/blaster/send", "{}", QosLevel::AtLeastOnce, false)
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MqttPublisher {
    inner: Arc<MqttPublisherInner>,
}

struct MqttPublisherInner {
    client: AsyncClient,
    host: String,
    port: u16,
    connected: AtomicBool,
}

impl MqttPublisher {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> MqttPublisherBuilder {
        MqttPublisherBuilder::default()
    }

    /// Returns whether the broker connection is up.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.inner.connected.load(Ordering::Acquire)
    }

    /// Returns the broker host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.inner.host
    }

    /// Returns the broker port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.inner.port
    }

    /// Disconnects from the broker.
    ///
    /// # Errors
    ///
    /// Returns error if the disconnect request cannot be queued.
    pub async fn disconnect(&self) -> Result<(), ProtocolError> {
        tracing::info!(
            host = %self.inner.host,
            port = %self.inner.port,
            "Disconnecting from MQTT broker"
        );
        self.inner
            .client
            .disconnect()
            .await
            .map_err(ProtocolError::Mqtt)?;
        self.inner.connected.store(false, Ordering::Release);
        Ok(())
    }
}

impl Publisher for MqttPublisher {
    async fn publish(
        &self,
        topic: &str,
        payload: &str,
        qos: QosLevel,
        retain: bool,
    ) -> Result<(), ProtocolError> {
        if !self.is_connected() {
            return Err(ProtocolError::ConnectionFailed(format!(
                "not connected to {}:{}",
                self.inner.host, self.inner.port
            )));
        }

        tracing::debug!(topic = %topic, payload = %payload, %qos, retain, "Publishing MQTT message");

        self.inner
            .client
            .publish(topic, qos.into(), retain, payload.as_bytes().to_vec())
            .await
            .map_err(ProtocolError::Mqtt)
    }
}

impl std::fmt::Debug for MqttPublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MqttPublisher")
            .field("host", &self.inner.host)
            .field("port", &self.inner.port)
            .field("connected", &self.is_connected())
            .finish()
    }
}

/// Parses an MQTT URL into host and port.
fn parse_mqtt_url(url: &str) -> Result<(String, u16), ProtocolError> {
    let url = url
        .strip_prefix("mqtt://")
        .or_else(|| url.strip_prefix("tcp://"))
        .unwrap_or(url);

    let (host, port) = if let Some((h, p)) = url.rsplit_once(':') {
        let port = p
            .parse()
            .map_err(|_| ProtocolError::InvalidAddress(format!("Invalid port: {p}")))?;
        (h.to_string(), port)
    } else {
        (url.to_string(), 1883)
    };

    if host.is_empty() {
        return Err(ProtocolError::InvalidAddress(
            "MQTT broker host is required".to_string(),
        ));
    }

    Ok((host, port))
}

/// Drives the `rumqttc` event loop until the connection ends.
async fn handle_mqtt_events(
    mut event_loop: EventLoop,
    inner: Arc<MqttPublisherInner>,
    connack_tx: oneshot::Sender<()>,
) {
    use rumqttc::{Event, Packet};

    let mut connack_tx = Some(connack_tx);

    loop {
        match event_loop.poll().await {
            Ok(Event::Incoming(Packet::ConnAck(connack))) => {
                tracing::debug!(?connack, "MQTT connected");
                inner.connected.store(true, Ordering::Release);
                if let Some(tx) = connack_tx.take() {
                    let _ = tx.send(());
                }
            }
            Ok(Event::Incoming(Packet::PubAck(puback))) => {
                tracing::trace!(?puback, "MQTT publish acknowledged");
            }
            Ok(Event::Incoming(Packet::PubComp(pubcomp))) => {
                tracing::trace!(?pubcomp, "MQTT publish completed");
            }
            Ok(Event::Incoming(Packet::Disconnect)) => {
                tracing::info!("MQTT broker disconnected");
                inner.connected.store(false, Ordering::Release);
                break;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::error!(error = %e, "MQTT event loop error");
                inner.connected.store(false, Ordering::Release);
                break;
            }
        }
    }
}

/// Builder for an [`MqttPublisher`].
#[derive(Debug)]
pub struct MqttPublisherBuilder {
    broker: Option<String>,
    username: Option<String>,
    password: Option<String>,
    client_id: Option<String>,
    keep_alive: Duration,
    connection_timeout: Duration,
}

impl Default for MqttPublisherBuilder {
    fn default() -> Self {
        Self {
            broker: None,
            username: None,
            password: None,
            client_id: None,
            keep_alive: Duration::from_secs(30),
            connection_timeout: Duration::from_secs(10),
        }
    }
}

impl MqttPublisherBuilder {
    /// Sets the broker URL (`mqtt://host:port`, `tcp://host:port` or
    /// `host[:port]`; the port defaults to 1883).
    #[must_use]
    pub fn broker(mut self, broker: impl Into<String>) -> Self {
        self.broker = Some(broker.into());
        self
    }

    /// Sets authentication credentials for the broker.
    #[must_use]
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Sets a custom client ID.
    #[must_use]
    pub fn client_id(mut self, id: impl Into<String>) -> Self {
        self.client_id = Some(id.into());
        self
    }

    /// Sets the keep-alive interval (default: 30 seconds).
    #[must_use]
    pub fn keep_alive(mut self, duration: Duration) -> Self {
        self.keep_alive = duration;
        self
    }

    /// Sets how long to wait for the broker's `CONNACK` (default: 10 seconds).
    #[must_use]
    pub fn connection_timeout(mut self, duration: Duration) -> Self {
        self.connection_timeout = duration;
        self
    }

    /// Connects to the broker.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The broker URL is missing or invalid
    /// - The connection fails or times out
    pub async fn build(self) -> Result<MqttPublisher, ProtocolError> {
        let broker = self
            .broker
            .ok_or_else(|| ProtocolError::InvalidAddress("broker is required".to_string()))?;
        let (host, port) = parse_mqtt_url(&broker)?;

        let client_id = self.client_id.unwrap_or_else(|| {
            let counter = CLIENT_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
            format!("ir_climate_{}_{}", std::process::id(), counter)
        });

        let mut mqtt_options = MqttOptions::new(&client_id, &host, port);
        mqtt_options.set_keep_alive(self.keep_alive);
        mqtt_options.set_clean_session(true);

        if let (Some(username), Some(password)) = (self.username, self.password) {
            mqtt_options.set_credentials(username, password);
        }

        let (client, event_loop) = AsyncClient::new(mqtt_options, 10);

        let inner = Arc::new(MqttPublisherInner {
            client,
            host,
            port,
            connected: AtomicBool::new(false),
        });

        let (connack_tx, connack_rx) = oneshot::channel();
        let inner_clone = Arc::clone(&inner);
        tokio::spawn(async move {
            handle_mqtt_events(event_loop, inner_clone, connack_tx).await;
        });

        match tokio::time::timeout(self.connection_timeout, connack_rx).await {
            Ok(Ok(())) => {
                tracing::info!(
                    host = %inner.host,
                    port = %inner.port,
                    client_id = %client_id,
                    "Connected to MQTT broker"
                );
            }
            Ok(Err(_)) => {
                return Err(ProtocolError::ConnectionFailed(
                    "MQTT event loop terminated before CONNACK".to_string(),
                ));
            }
            Err(_) => {
                // Safe: connection timeouts never approach u64::MAX milliseconds
                #[allow(clippy::cast_possible_truncation)]
                let timeout_ms = self.connection_timeout.as_millis() as u64;
                return Err(ProtocolError::Timeout(timeout_ms));
            }
        }

        Ok(MqttPublisher { inner })
    }
}
