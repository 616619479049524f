// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Climate state tracking.

use crate::types::{FanMode, HvacMode, SwingMode};

use super::StateChange;

/// Default target temperature in degrees Celsius.
pub const DEFAULT_TARGET_TEMPERATURE: f64 = 22.0;

/// In-memory state of the air conditioner as last commanded.
///
/// The blaster gives no feedback, so this is the only record of what the
/// unit was told to do. Fan and swing modes are kept as strings: the host
/// is trusted to constrain its inputs and values outside the declared sets
/// are stored as given.
///
/// # Examples
///
/// ```
/// use ir_climate::state::ClimateState;
/// use ir_climate::types::HvacMode;
///
/// let mut state = ClimateState::default();
/// assert_eq!(state.hvac_mode(), HvacMode::Off);
/// assert_eq!(state.target_temperature(), 22.0);
///
/// state.set_hvac_mode(HvacMode::Cool);
/// assert_eq!(state.hvac_mode(), HvacMode::Cool);
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ClimateState {
    hvac_mode: HvacMode,
    target_temperature: f64,
    /// Never measured; the blaster has no sensor.
    current_temperature: Option<f64>,
    fan_mode: String,
    swing_mode: String,
    /// Always on for this unit.
    quiet: bool,
    available: bool,
}

impl Default for ClimateState {
    fn default() -> Self {
        Self {
            hvac_mode: HvacMode::Off,
            target_temperature: DEFAULT_TARGET_TEMPERATURE,
            current_temperature: None,
            fan_mode: FanMode::Auto.to_string(),
            swing_mode: SwingMode::Off.to_string(),
            quiet: true,
            available: true,
        }
    }
}

impl ClimateState {
    /// Creates a state with the power-on defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the HVAC mode.
    #[must_use]
    pub fn hvac_mode(&self) -> HvacMode {
        self.hvac_mode
    }

    /// Sets the HVAC mode.
    pub fn set_hvac_mode(&mut self, mode: HvacMode) {
        self.hvac_mode = mode;
    }

    /// Gets the target temperature in degrees Celsius.
    #[must_use]
    pub fn target_temperature(&self) -> f64 {
        self.target_temperature
    }

    /// Sets the target temperature. No range check is applied.
    pub fn set_target_temperature(&mut self, celsius: f64) {
        self.target_temperature = celsius;
    }

    /// Gets the current room temperature. Always `None`.
    #[must_use]
    pub fn current_temperature(&self) -> Option<f64> {
        self.current_temperature
    }

    /// Gets the fan mode key.
    #[must_use]
    pub fn fan_mode(&self) -> &str {
        &self.fan_mode
    }

    /// Sets the fan mode key.
    pub fn set_fan_mode(&mut self, mode: impl Into<String>) {
        self.fan_mode = mode.into();
    }

    /// Returns `true` if the fan mode is one of the declared keys.
    ///
    /// Undeclared keys are sent as [`DEFAULT_TOKEN`](crate::mapping::DEFAULT_TOKEN).
    #[must_use]
    pub fn has_declared_fan_mode(&self) -> bool {
        FanMode::from_key(&self.fan_mode).is_some()
    }

    /// Gets the vertical swing position.
    #[must_use]
    pub fn swing_mode(&self) -> &str {
        &self.swing_mode
    }

    /// Sets the vertical swing position.
    pub fn set_swing_mode(&mut self, mode: impl Into<String>) {
        self.swing_mode = mode.into();
    }

    /// Gets the quiet flag.
    #[must_use]
    pub fn quiet(&self) -> bool {
        self.quiet
    }

    /// Returns whether the last publish succeeded.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Applies a state change.
    ///
    /// Returns `true` if the state actually changed.
    #[allow(clippy::float_cmp)] // exact equality is the intent
    pub fn apply(&mut self, change: &StateChange) -> bool {
        match change {
            StateChange::HvacMode(mode) => {
                let changed = self.hvac_mode != *mode;
                self.hvac_mode = *mode;
                changed
            }
            StateChange::TargetTemperature(celsius) => {
                let changed = self.target_temperature != *celsius;
                self.target_temperature = *celsius;
                changed
            }
            StateChange::FanMode(mode) => {
                let changed = self.fan_mode != *mode;
                self.fan_mode.clone_from(mode);
                changed
            }
            StateChange::SwingMode(mode) => {
                let changed = self.swing_mode != *mode;
                self.swing_mode.clone_from(mode);
                changed
            }
            StateChange::Availability(available) => {
                let changed = self.available != *available;
                self.available = *available;
                changed
            }
        }
    }
}
