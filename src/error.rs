// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `ir_climate` library.
//!
//! This module provides the error hierarchy for value validation, protocol
//! communication, configuration and payload encoding.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while publishing a command.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The platform configuration is invalid.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The command payload could not be encoded.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A QoS level outside 0, 1, 2 was provided.
    #[error("invalid QoS level {0}, expected 0, 1 or 2")]
    InvalidQos(u8),

    /// An unknown HVAC mode string was provided.
    #[error("invalid HVAC mode: {0}")]
    InvalidHvacMode(String),

    /// The target temperature cannot be converted to an integer.
    #[error("temperature {0} is not a finite number")]
    NonFiniteTemperature(f64),
}

/// Errors related to publishing over the message bus.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// MQTT client request failed.
    #[cfg(feature = "mqtt")]
    #[error("MQTT error: {0}")]
    Mqtt(#[from] rumqttc::ClientError),

    /// Connection to the broker failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Invalid broker URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to the platform configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required field is missing or empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Two entities would share the same unique id.
    #[error("duplicate unique id: {0}")]
    DuplicateUniqueId(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
