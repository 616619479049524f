// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `Control` command.

use serde::Serialize;

use crate::error::ValueError;
use crate::mapping::{fan_speed_token, mode_token};
use crate::state::ClimateState;

/// Vendor identifier expected by the blaster's IR protocol table.
pub const VENDOR: &str = "FUJITSU_AC";

/// Remote model emulated by the blaster.
pub const MODEL: &str = "ARRAH2E";

/// Command name for a full state update.
pub const COMMAND: &str = "Control";

const fn on_off(value: bool) -> &'static str {
    if value { "On" } else { "Off" }
}

/// Full-state control command for a Fujitsu unit.
///
/// Field order matches the order the blaster documents; `serde` keeps it.
///
/// # Examples
///
/// ```
/// use ir_climate::command::ControlCommand;
/// use ir_climate::state::ClimateState;
///
/// let cmd = ControlCommand::from_state(&ClimateState::default()).unwrap();
/// assert_eq!(cmd.power(), "Off");
/// assert_eq!(cmd.temp(), 22);
/// assert_eq!(cmd.fan_speed(), "Auto");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlCommand {
    #[serde(rename = "Power")]
    power: &'static str,
    #[serde(rename = "Vendor")]
    vendor: &'static str,
    #[serde(rename = "Model")]
    model: &'static str,
    #[serde(rename = "Command")]
    command: &'static str,
    #[serde(rename = "Mode")]
    mode: &'static str,
    #[serde(rename = "Celsius")]
    celsius: &'static str,
    #[serde(rename = "Temp")]
    temp: i32,
    #[serde(rename = "FanSpeed")]
    fan_speed: &'static str,
    #[serde(rename = "SwingV")]
    swing_v: String,
    #[serde(rename = "SwingH")]
    swing_h: &'static str,
    #[serde(rename = "Quiet")]
    quiet: &'static str,
}

impl ControlCommand {
    /// Builds the command for the given climate state.
    ///
    /// The target temperature is truncated toward zero. Temperatures outside
    /// the `i32` range saturate.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NonFiniteTemperature` if the target temperature
    /// is NaN or infinite.
    pub fn from_state(state: &ClimateState) -> Result<Self, ValueError> {
        let target = state.target_temperature();
        if !target.is_finite() {
            return Err(ValueError::NonFiniteTemperature(target));
        }

        // Float-to-int `as` saturates; truncation is the documented behavior
        #[allow(clippy::cast_possible_truncation)]
        let temp = target.trunc() as i32;

        Ok(Self {
            power: on_off(!state.hvac_mode().is_off()),
            vendor: VENDOR,
            model: MODEL,
            command: COMMAND,
            mode: mode_token(state.hvac_mode()),
            celsius: "On",
            temp,
            fan_speed: fan_speed_token(state.fan_mode()),
            swing_v: state.swing_mode().to_string(),
            swing_h: "Off",
            quiet: on_off(state.quiet()),
        })
    }

    /// Returns the `Power` field (`"On"` or `"Off"`).
    #[must_use]
    pub fn power(&self) -> &str {
        self.power
    }

    /// Returns the vendor `Mode` token.
    #[must_use]
    pub fn mode(&self) -> &str {
        self.mode
    }

    /// Returns the integer target temperature.
    #[must_use]
    pub fn temp(&self) -> i32 {
        self.temp
    }

    /// Returns the vendor `FanSpeed` token.
    #[must_use]
    pub fn fan_speed(&self) -> &str {
        self.fan_speed
    }

    /// Returns the vertical swing token.
    #[must_use]
    pub fn swing_v(&self) -> &str {
        &self.swing_v
    }

    /// Returns the `Quiet` field.
    #[must_use]
    pub fn quiet(&self) -> &str {
        self.quiet
    }

    /// Serializes the command to the JSON text published on the bus.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
