// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MQTT quality-of-service level.

use std::fmt;

use crate::error::ValueError;

/// Message delivery guarantee for published commands.
///
/// Defaults to [`QosLevel::ExactlyOnce`] (level 2).
///
/// # Examples
///
/// ```
/// use ir_climate::types::QosLevel;
///
/// let qos = QosLevel::try_from(1).unwrap();
/// assert_eq!(qos, QosLevel::AtLeastOnce);
/// assert_eq!(qos.value(), 1);
///
/// assert!(QosLevel::try_from(3).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum QosLevel {
    /// Level 0.
    AtMostOnce,
    /// Level 1.
    AtLeastOnce,
    /// Level 2.
    #[default]
    ExactlyOnce,
}

impl QosLevel {
    /// Returns the numeric level.
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self {
            Self::AtMostOnce => 0,
            Self::AtLeastOnce => 1,
            Self::ExactlyOnce => 2,
        }
    }
}

impl TryFrom<u8> for QosLevel {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::AtMostOnce),
            1 => Ok(Self::AtLeastOnce),
            2 => Ok(Self::ExactlyOnce),
            other => Err(ValueError::InvalidQos(other)),
        }
    }
}

impl From<QosLevel> for u8 {
    fn from(qos: QosLevel) -> Self {
        qos.value()
    }
}

#[cfg(feature = "mqtt")]
impl From<QosLevel> for rumqttc::QoS {
    fn from(qos: QosLevel) -> Self {
        match qos {
            QosLevel::AtMostOnce => Self::AtMostOnce,
            QosLevel::AtLeastOnce => Self::AtLeastOnce,
            QosLevel::ExactlyOnce => Self::ExactlyOnce,
        }
    }
}

impl fmt::Display for QosLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_exactly_once() {
        assert_eq!(QosLevel::default().value(), 2);
    }

    #[test]
    fn try_from_valid_levels() {
        for level in 0..=2 {
            assert_eq!(QosLevel::try_from(level).unwrap().value(), level);
        }
    }

    #[test]
    fn try_from_invalid_level() {
        assert_eq!(QosLevel::try_from(5), Err(ValueError::InvalidQos(5)));
    }

    #[test]
    fn deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<QosLevel>("1").is_ok());
        assert!(serde_json::from_str::<QosLevel>("3").is_err());
    }

    #[cfg(feature = "mqtt")]
    #[test]
    fn converts_to_rumqttc_qos() {
        assert_eq!(
            rumqttc::QoS::from(QosLevel::AtLeastOnce),
            rumqttc::QoS::AtLeastOnce
        );
    }
}
