// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for climate control.
//!
//! # Types
//!
//! - [`HvacMode`] - Operating mode of the air conditioner
//! - [`FanMode`] - Fan speed keys exposed to the host
//! - [`SwingMode`] - Vertical vane positions
//! - [`QosLevel`] - MQTT delivery guarantee (0-2)

mod fan_mode;
mod hvac_mode;
mod qos;
mod swing_mode;

pub use fan_mode::FanMode;
pub use hvac_mode::HvacMode;
pub use qos::QosLevel;
pub use swing_mode::SwingMode;
