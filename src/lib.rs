// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `ir_climate` - Control a Fujitsu air conditioner through an MQTT
//! infrared blaster.
//!
//! The blaster listens on an MQTT topic for JSON commands and replays them
//! as infrared frames. It sends nothing back, so this library keeps the last
//! commanded state itself and republishes the complete state after every
//! change.
//!
//! # Overview
//!
//! - [`mapping`]: lookup tables from climate concepts to vendor tokens
//! - [`ControlCommand`]: the JSON payload
//! - [`FujitsuClimate`]: the stateful adapter with the four setters
//! - [`Publisher`]: the publish primitive the adapter is built on, with
//!   [`MqttPublisher`] as the bundled implementation (feature `mqtt`)
//!
//! # Quick Start
//!
//! ```no_run
//! use ir_climate::{ClimateConfig, MqttPublisher, platform};
//! use ir_climate::types::HvacMode;
//!
//! #[tokio::main]
//! async fn main() -> ir_climate::Result<()> {
//!     let publisher = MqttPublisher::builder()
//!         .broker("mqtt://192.168.1.50:1883")
//!         .build()
//!         .await?;
//!
//!     let config = ClimateConfig::new("Living Room AC", "ir/living/send");
//!     let mut climate = platform::setup_platform(config, publisher)?;
//!
//!     climate.set_hvac_mode(HvacMode::Heat).await?;
//!     climate.set_temperature(Some(23.0)).await?;
//!     climate.set_fan_mode("low").await?;
//!     climate.set_swing_mode("Mid").await?;
//!
//!     if !climate.is_available() {
//!         eprintln!("blaster unreachable");
//!     }
//!     Ok(())
//! }
//! ```

mod capabilities;
pub mod command;
pub mod config;
mod device;
pub mod error;
pub mod mapping;
pub mod platform;
pub mod protocol;
pub mod state;
pub mod subscription;
pub mod types;

pub use capabilities::{ClimateCapabilities, TemperatureUnit};
pub use command::ControlCommand;
pub use config::{ClimateConfig, PublishFailurePolicy};
pub use device::FujitsuClimate;
pub use error::{ConfigError, Error, ProtocolError, Result, ValueError};
pub use protocol::Publisher;
#[cfg(feature = "mqtt")]
pub use protocol::{MqttPublisher, MqttPublisherBuilder};
pub use state::{ClimateState, StateChange};
pub use subscription::{CallbackRegistry, Subscribable, SubscriptionId};
pub use types::{FanMode, HvacMode, QosLevel, SwingMode};
