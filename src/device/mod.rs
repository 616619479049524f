// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The climate entity adapter.
//!
//! [`FujitsuClimate`] owns the last-commanded state of one air conditioner.
//! Each setter changes one field, publishes the whole state as a
//! [`ControlCommand`] and then reports the new state to subscribers.
//!
//! # Publish failures
//!
//! What happens when the publish fails depends on the configured
//! [`PublishFailurePolicy`]:
//!
//! - `MarkUnavailable`: the error is logged, the entity becomes unavailable
//!   and the setter returns `Ok(())`. The new value stays in the state.
//! - `Propagate`: the setter returns the error. The new value stays in the
//!   state but neither the change nor a snapshot is reported.

use crate::capabilities::ClimateCapabilities;
use crate::command::ControlCommand;
use crate::config::{ClimateConfig, PublishFailurePolicy};
use crate::error::{Error, ValueError};
use crate::platform::DOMAIN;
use crate::protocol::Publisher;
use crate::state::{ClimateState, StateChange};
use crate::subscription::{CallbackRegistry, Subscribable, SubscriptionId};
use crate::types::{HvacMode, QosLevel};

/// A Fujitsu air conditioner controlled through an MQTT infrared blaster.
///
/// The type parameter `P` is the publish primitive injected at construction.
///
/// # Examples
///
/// ```
/// use ir_climate::{ClimateConfig, FujitsuClimate, ProtocolError, QosLevel};
/// use ir_climate::protocol::Publisher;
/// use ir_climate::types::HvacMode;
///
/// struct Stdout;
///
/// impl Publisher for Stdout {
///     async fn publish(&self, topic: &str, payload: &str, _: QosLevel, _: bool) -> Result<(), ProtocolError> {
///         println!("{topic}: {payload}");
///         Ok(())
///     }
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> ir_climate::Result<()> {
/// let mut climate = FujitsuClimate::new(ClimateConfig::new("Office", "ir/office/send"), Stdout);
/// climate.set_hvac_mode(HvacMode::Cool).await?;
/// climate.set_temperature(Some(24.0)).await?;
/// assert_eq!(climate.command()?.power(), "On");
/// # Ok(())
/// # }
/// ```
pub struct FujitsuClimate<P: Publisher> {
    name: String,
    unique_id: String,
    topic: String,
    qos: QosLevel,
    retain: bool,
    failure_policy: PublishFailurePolicy,
    publisher: P,
    state: ClimateState,
    capabilities: ClimateCapabilities,
    callbacks: CallbackRegistry,
}

impl<P: Publisher> FujitsuClimate<P> {
    /// Creates an adapter with default state: off, 22 °C, fan auto, swing off.
    ///
    /// The configuration is taken as is; use
    /// [`setup_platform`](crate::platform::setup_platform) to validate it
    /// first.
    #[must_use]
    pub fn new(config: ClimateConfig, publisher: P) -> Self {
        let unique_id = format!("{DOMAIN}_{}", config.name);
        Self {
            name: config.name,
            unique_id,
            topic: config.topic,
            qos: config.qos,
            retain: config.retain,
            failure_policy: config.on_publish_failure,
            publisher,
            state: ClimateState::new(),
            capabilities: ClimateCapabilities::fujitsu_arrah2e(),
            callbacks: CallbackRegistry::new(),
        }
    }

    /// Returns the entity name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unique id (`ir_climate_<name>`).
    #[must_use]
    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    /// Returns the command topic.
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Returns the QoS level used for commands.
    #[must_use]
    pub fn qos(&self) -> QosLevel {
        self.qos
    }

    /// Returns whether commands are published with the retain flag.
    #[must_use]
    pub fn retain(&self) -> bool {
        self.retain
    }

    /// Returns the publish failure policy.
    #[must_use]
    pub fn failure_policy(&self) -> PublishFailurePolicy {
        self.failure_policy
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &ClimateState {
        &self.state
    }

    /// Returns `false` once a publish has failed under
    /// [`PublishFailurePolicy::MarkUnavailable`].
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.state.is_available()
    }

    /// Returns the entity capabilities.
    #[must_use]
    pub fn capabilities(&self) -> &ClimateCapabilities {
        &self.capabilities
    }

    /// Returns the callback registry.
    #[must_use]
    pub fn callbacks(&self) -> &CallbackRegistry {
        &self.callbacks
    }

    /// Returns the injected publisher.
    #[must_use]
    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Builds the command the current state maps to.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NonFiniteTemperature` if the target temperature
    /// is not a finite number.
    pub fn command(&self) -> Result<ControlCommand, ValueError> {
        ControlCommand::from_state(&self.state)
    }

    // ========== Setters ==========

    /// Sets the target temperature.
    ///
    /// `None` means the host sent no temperature: nothing changes and
    /// nothing is published.
    ///
    /// # Errors
    ///
    /// Returns error if publishing fails under
    /// [`PublishFailurePolicy::Propagate`].
    pub async fn set_temperature(&mut self, celsius: Option<f64>) -> Result<(), Error> {
        let Some(celsius) = celsius else {
            return Ok(());
        };
        self.update(StateChange::TargetTemperature(celsius)).await
    }

    /// Sets the HVAC mode.
    ///
    /// # Errors
    ///
    /// Returns error if publishing fails under
    /// [`PublishFailurePolicy::Propagate`].
    pub async fn set_hvac_mode(&mut self, mode: HvacMode) -> Result<(), Error> {
        self.update(StateChange::HvacMode(mode)).await
    }

    /// Sets the fan mode. Keys outside [`FAN_MODES`](crate::mapping::FAN_MODES)
    /// are stored and sent as `"Auto"`.
    ///
    /// # Errors
    ///
    /// Returns error if publishing fails under
    /// [`PublishFailurePolicy::Propagate`].
    pub async fn set_fan_mode(&mut self, mode: impl Into<String>) -> Result<(), Error> {
        self.update(StateChange::fan_mode(mode)).await
    }

    /// Sets the vertical swing position. The value is sent verbatim.
    ///
    /// # Errors
    ///
    /// Returns error if publishing fails under
    /// [`PublishFailurePolicy::Propagate`].
    pub async fn set_swing_mode(&mut self, mode: impl Into<String>) -> Result<(), Error> {
        self.update(StateChange::swing_mode(mode)).await
    }

    // ========== Internals ==========

    async fn update(&mut self, change: StateChange) -> Result<(), Error> {
        let changed = self.state.apply(&change);
        self.send_command().await?;
        if changed {
            self.callbacks.dispatch(&change);
        }
        self.callbacks.dispatch_state_written(&self.state);
        Ok(())
    }

    async fn send_command(&mut self) -> Result<(), Error> {
        let Err(err) = self.publish_state().await else {
            return Ok(());
        };

        match self.failure_policy {
            PublishFailurePolicy::MarkUnavailable => {
                tracing::error!(
                    entity = %self.unique_id,
                    topic = %self.topic,
                    error = %err,
                    "Failed to send MQTT command"
                );
                self.mark_unavailable();
                Ok(())
            }
            PublishFailurePolicy::Propagate => Err(err),
        }
    }

    async fn publish_state(&self) -> Result<(), Error> {
        let payload = self.command()?.to_json()?;
        self.publisher
            .publish(&self.topic, &payload, self.qos, self.retain)
            .await?;
        Ok(())
    }

    fn mark_unavailable(&mut self) {
        let change = StateChange::Availability(false);
        if self.state.apply(&change) {
            tracing::warn!(entity = %self.unique_id, "Climate entity marked unavailable");
            self.callbacks.dispatch(&change);
        }
    }
}

impl<P: Publisher> Subscribable for FujitsuClimate<P> {
    fn on_state_written<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&ClimateState) + Send + Sync + 'static,
    {
        self.callbacks.on_state_written(callback)
    }

    fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static,
    {
        self.callbacks.on_state_changed(callback)
    }

    fn on_availability_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks.on_availability_changed(callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.callbacks.unsubscribe(id)
    }
}

impl<P: Publisher> std::fmt::Debug for FujitsuClimate<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FujitsuClimate")
            .field("unique_id", &self.unique_id)
            .field("topic", &self.topic)
            .field("qos", &self.qos)
            .field("retain", &self.retain)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtocolError;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Debug, Clone, PartialEq)]
    struct Published {
        topic: String,
        payload: serde_json::Value,
        qos: QosLevel,
        retain: bool,
    }

    /// Records every publish; fails while `failing` is set.
    #[derive(Default)]
    struct RecordingPublisher {
        published: Mutex<Vec<Published>>,
        failing: std::sync::atomic::AtomicBool,
    }

    impl RecordingPublisher {
        fn failing() -> Self {
            let publisher = Self::default();
            publisher.failing.store(true, Ordering::SeqCst);
            publisher
        }

        fn last(&self) -> Published {
            self.published.lock().last().cloned().unwrap()
        }

        fn count(&self) -> usize {
            self.published.lock().len()
        }
    }

    impl Publisher for RecordingPublisher {
        async fn publish(
            &self,
            topic: &str,
            payload: &str,
            qos: QosLevel,
            retain: bool,
        ) -> Result<(), ProtocolError> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(ProtocolError::ConnectionFailed("broker down".to_string()));
            }
            self.published.lock().push(Published {
                topic: topic.to_string(),
                payload: serde_json::from_str(payload).unwrap(),
                qos,
                retain,
            });
            Ok(())
        }
    }

    fn living_room(publisher: RecordingPublisher) -> FujitsuClimate<Arc<RecordingPublisher>> {
        FujitsuClimate::new(
            ClimateConfig::new("Living Room", "ir/living/send"),
            Arc::new(publisher),
        )
    }

    #[test]
    fn identity_and_defaults() {
        let climate = living_room(RecordingPublisher::default());
        assert_eq!(climate.name(), "Living Room");
        assert_eq!(climate.unique_id(), "ir_climate_Living Room");
        assert_eq!(climate.topic(), "ir/living/send");
        assert_eq!(climate.qos(), QosLevel::ExactlyOnce);
        assert!(!climate.retain());
        assert_eq!(climate.state(), &ClimateState::default());
        assert!(climate.is_available());
    }

    #[tokio::test]
    async fn set_hvac_mode_publishes_full_payload() {
        let mut climate = living_room(RecordingPublisher::default());
        climate.set_hvac_mode(HvacMode::Heat).await.unwrap();

        let published = climate.publisher().last();
        assert_eq!(published.topic, "ir/living/send");
        assert_eq!(published.qos, QosLevel::ExactlyOnce);
        assert!(!published.retain);
        assert_eq!(
            published.payload,
            serde_json::json!({
                "Power": "On",
                "Vendor": "FUJITSU_AC",
                "Model": "ARRAH2E",
                "Command": "Control",
                "Mode": "Heat",
                "Celsius": "On",
                "Temp": 22,
                "FanSpeed": "Auto",
                "SwingV": "Off",
                "SwingH": "Off",
                "Quiet": "On",
            })
        );
    }

    #[tokio::test]
    async fn every_setter_publishes_once() {
        let mut climate = living_room(RecordingPublisher::default());

        climate.set_temperature(Some(25.7)).await.unwrap();
        climate.set_hvac_mode(HvacMode::Cool).await.unwrap();
        climate.set_fan_mode("medium").await.unwrap();
        climate.set_swing_mode("Top").await.unwrap();

        assert_eq!(climate.publisher().count(), 4);
        let payload = climate.publisher().last().payload;
        assert_eq!(payload["Temp"], 25);
        assert_eq!(payload["Mode"], "Cool");
        assert_eq!(payload["FanSpeed"], "2");
        assert_eq!(payload["SwingV"], "Top");
    }

    #[tokio::test]
    async fn power_follows_mode_after_each_setter() {
        let mut climate = living_room(RecordingPublisher::default());

        for mode in HvacMode::ALL {
            climate.set_hvac_mode(mode).await.unwrap();
            let expected = if mode == HvacMode::Off { "Off" } else { "On" };
            assert_eq!(climate.publisher().last().payload["Power"], expected);

            climate.set_fan_mode("high").await.unwrap();
            assert_eq!(climate.publisher().last().payload["Power"], expected);
        }
    }

    #[tokio::test]
    async fn set_temperature_none_is_noop() {
        let mut climate = living_room(RecordingPublisher::default());
        climate.set_temperature(None).await.unwrap();
        assert_eq!(climate.publisher().count(), 0);
    }

    #[tokio::test]
    async fn undeclared_fan_mode_is_stored_and_sent_as_auto() {
        let mut climate = living_room(RecordingPublisher::default());
        climate.set_fan_mode("turbo").await.unwrap();
        assert_eq!(climate.state().fan_mode(), "turbo");
        assert_eq!(climate.publisher().last().payload["FanSpeed"], "Auto");
    }

    #[tokio::test]
    async fn out_of_range_temperature_is_not_rejected() {
        let mut climate = living_room(RecordingPublisher::default());
        climate.set_temperature(Some(40.2)).await.unwrap();
        assert_eq!(climate.publisher().last().payload["Temp"], 40);
    }

    #[tokio::test]
    async fn publish_failure_marks_unavailable_without_error() {
        let mut climate = living_room(RecordingPublisher::failing());
        let flips = Arc::new(Mutex::new(Vec::new()));
        let flips_clone = flips.clone();
        climate.on_availability_changed(move |available| flips_clone.lock().push(available));

        let result = climate.set_hvac_mode(HvacMode::Cool).await;

        assert!(result.is_ok());
        assert!(!climate.is_available());
        assert_eq!(climate.state().hvac_mode(), HvacMode::Cool);
        assert_eq!(*flips.lock(), vec![false]);
    }

    #[tokio::test]
    async fn availability_flips_only_once() {
        let mut climate = living_room(RecordingPublisher::failing());
        let flips = Arc::new(AtomicU32::new(0));
        let flips_clone = flips.clone();
        climate.on_availability_changed(move |_| {
            flips_clone.fetch_add(1, Ordering::SeqCst);
        });

        climate.set_hvac_mode(HvacMode::Cool).await.unwrap();
        climate.set_fan_mode("low").await.unwrap();

        assert_eq!(flips.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unavailable_stays_unavailable_after_recovery() {
        let mut climate = living_room(RecordingPublisher::failing());
        climate.set_hvac_mode(HvacMode::Heat).await.unwrap();
        climate.publisher().failing.store(false, Ordering::SeqCst);

        climate.set_temperature(Some(21.0)).await.unwrap();

        assert_eq!(climate.publisher().count(), 1);
        assert!(!climate.is_available());
    }

    #[tokio::test]
    async fn propagate_policy_returns_error() {
        let config = ClimateConfig::new("AC", "ir/send")
            .with_failure_policy(PublishFailurePolicy::Propagate);
        let mut climate = FujitsuClimate::new(config, RecordingPublisher::failing());
        let written = Arc::new(AtomicU32::new(0));
        let written_clone = written.clone();
        climate.on_state_written(move |_| {
            written_clone.fetch_add(1, Ordering::SeqCst);
        });

        let result = climate.set_swing_mode("Mid").await;

        assert!(matches!(
            result,
            Err(Error::Protocol(ProtocolError::ConnectionFailed(_)))
        ));
        assert!(climate.is_available());
        assert_eq!(climate.state().swing_mode(), "Mid");
        assert_eq!(written.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn non_finite_temperature_is_a_publish_failure() {
        let mut climate = living_room(RecordingPublisher::default());
        climate.set_temperature(Some(f64::NAN)).await.unwrap();
        assert_eq!(climate.publisher().count(), 0);
        assert!(!climate.is_available());

        let config = ClimateConfig::new("AC", "ir/send")
            .with_failure_policy(PublishFailurePolicy::Propagate);
        let mut climate = FujitsuClimate::new(config, RecordingPublisher::default());
        let result = climate.set_temperature(Some(f64::INFINITY)).await;
        assert!(matches!(
            result,
            Err(Error::Value(ValueError::NonFiniteTemperature(_)))
        ));
    }

    #[tokio::test]
    async fn state_is_written_after_each_setter() {
        let mut climate = living_room(RecordingPublisher::default());
        let snapshots = Arc::new(Mutex::new(Vec::new()));
        let snapshots_clone = snapshots.clone();
        climate.on_state_written(move |state| {
            snapshots_clone.lock().push(state.clone());
        });

        climate.set_hvac_mode(HvacMode::Dry).await.unwrap();
        climate.set_temperature(Some(18.0)).await.unwrap();

        let snapshots = snapshots.lock();
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0].hvac_mode(), HvacMode::Dry);
        assert!((snapshots[1].target_temperature() - 18.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn unchanged_value_still_publishes() {
        let mut climate = living_room(RecordingPublisher::default());
        let changes = Arc::new(AtomicU32::new(0));
        let changes_clone = changes.clone();
        climate.on_state_changed(move |_| {
            changes_clone.fetch_add(1, Ordering::SeqCst);
        });

        climate.set_hvac_mode(HvacMode::Off).await.unwrap();

        assert_eq!(climate.publisher().count(), 1);
        assert_eq!(changes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn state_change_is_signalled_after_publish() {
        let mut climate = living_room(RecordingPublisher::default());
        let publisher = Arc::clone(climate.publisher());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        climate.on_state_changed(move |_| {
            seen_clone.lock().push(publisher.count());
        });

        climate.set_hvac_mode(HvacMode::Cool).await.unwrap();
        climate.set_fan_mode("low").await.unwrap();

        assert_eq!(*seen.lock(), vec![1, 2]);
    }

    #[tokio::test]
    async fn failed_setter_signals_no_change_under_propagate() {
        let config = ClimateConfig::new("AC", "ir/send")
            .with_failure_policy(PublishFailurePolicy::Propagate);
        let mut climate = FujitsuClimate::new(config, RecordingPublisher::failing());
        let changes = Arc::new(AtomicU32::new(0));
        let changes_clone = changes.clone();
        climate.on_state_changed(move |_| {
            changes_clone.fetch_add(1, Ordering::SeqCst);
        });

        let result = climate.set_hvac_mode(HvacMode::Heat).await;

        assert!(result.is_err());
        assert_eq!(changes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn retain_and_qos_come_from_config() {
        let config = ClimateConfig::new("AC", "ir/send")
            .with_qos(QosLevel::AtMostOnce)
            .with_retain(true);
        let mut climate = FujitsuClimate::new(config, RecordingPublisher::default());
        climate.set_fan_mode("low").await.unwrap();

        let published = climate.publisher().last();
        assert_eq!(published.qos, QosLevel::AtMostOnce);
        assert!(published.retain);
    }

    #[test]
    fn debug_output() {
        let climate = living_room(RecordingPublisher::default());
        let debug = format!("{climate:?}");
        assert!(debug.contains("FujitsuClimate"));
        assert!(debug.contains("ir_climate_Living Room"));
    }
}
