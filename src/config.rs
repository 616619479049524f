// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Platform configuration for a climate entity.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::types::QosLevel;

/// What the adapter does when publishing a command fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishFailurePolicy {
    /// Log the failure, mark the entity unavailable and report success to
    /// the caller.
    #[default]
    MarkUnavailable,
    /// Return the failure to the caller and leave availability untouched.
    Propagate,
}

/// Configuration for one climate entity.
///
/// # Examples
///
/// ```
/// use ir_climate::config::ClimateConfig;
/// use ir_climate::types::QosLevel;
///
/// let config = ClimateConfig::new("Living Room AC", "ir/blaster/living/send");
/// assert_eq!(config.qos, QosLevel::ExactlyOnce);
/// assert!(!config.retain);
///
/// let config: ClimateConfig = serde_json::from_str(
///     r#"{"name": "Bedroom AC", "topic": "ir/bedroom/send", "qos": 1, "retain": true}"#,
/// ).unwrap();
/// assert_eq!(config.qos, QosLevel::AtLeastOnce);
/// assert!(config.retain);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClimateConfig {
    /// Entity name, also used to derive the unique id.
    pub name: String,
    /// Topic the blaster listens on.
    pub topic: String,
    /// Delivery guarantee for published commands.
    #[serde(default)]
    pub qos: QosLevel,
    /// Whether the broker should retain the last command.
    #[serde(default)]
    pub retain: bool,
    /// Behavior on publish failure.
    #[serde(default)]
    pub on_publish_failure: PublishFailurePolicy,
}

impl ClimateConfig {
    /// Creates a configuration with default QoS (2) and no retain.
    #[must_use]
    pub fn new(name: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            topic: topic.into(),
            qos: QosLevel::default(),
            retain: false,
            on_publish_failure: PublishFailurePolicy::default(),
        }
    }

    /// Sets the QoS level.
    #[must_use]
    pub fn with_qos(mut self, qos: QosLevel) -> Self {
        self.qos = qos;
        self
    }

    /// Sets the retain flag.
    #[must_use]
    pub fn with_retain(mut self, retain: bool) -> Self {
        self.retain = retain;
        self
    }

    /// Sets the publish failure policy.
    #[must_use]
    pub fn with_failure_policy(mut self, policy: PublishFailurePolicy) -> Self {
        self.on_publish_failure = policy;
        self
    }

    /// Checks that the required fields are present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` if `name` or `topic` is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::MissingField("name"));
        }
        if self.topic.trim().is_empty() {
            return Err(ConfigError::MissingField("topic"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_minimal_json() {
        let config: ClimateConfig =
            serde_json::from_str(r#"{"name": "AC", "topic": "ir/send"}"#).unwrap();
        assert_eq!(config.qos, QosLevel::ExactlyOnce);
        assert!(!config.retain);
        assert_eq!(config.on_publish_failure, PublishFailurePolicy::MarkUnavailable);
    }

    #[test]
    fn rejects_invalid_qos() {
        let result =
            serde_json::from_str::<ClimateConfig>(r#"{"name": "AC", "topic": "t", "qos": 3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_missing_topic() {
        let result = serde_json::from_str::<ClimateConfig>(r#"{"name": "AC"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn parses_failure_policy() {
        let config: ClimateConfig = serde_json::from_str(
            r#"{"name": "AC", "topic": "t", "on_publish_failure": "propagate"}"#,
        )
        .unwrap();
        assert_eq!(config.on_publish_failure, PublishFailurePolicy::Propagate);
    }

    #[test]
    fn validate_blank_fields() {
        assert_eq!(
            ClimateConfig::new(" ", "t").validate(),
            Err(ConfigError::MissingField("name"))
        );
        assert_eq!(
            ClimateConfig::new("AC", "").validate(),
            Err(ConfigError::MissingField("topic"))
        );
        assert!(ClimateConfig::new("AC", "t").validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let config = ClimateConfig::new("AC", "t")
            .with_qos(QosLevel::AtMostOnce)
            .with_retain(true)
            .with_failure_policy(PublishFailurePolicy::Propagate);
        assert_eq!(config.qos.value(), 0);
        assert!(config.retain);
        assert_eq!(config.on_publish_failure, PublishFailurePolicy::Propagate);
    }
}
