// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Climate entity capabilities.
//!
//! Describes what the host should offer in its UI for this entity: which
//! features are supported, which modes may be selected and the allowed
//! temperature range. The adapter itself does not enforce any of it.

use crate::mapping::{FAN_MODES, SWING_MODES};
use crate::types::HvacMode;

/// Unit used for all temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum TemperatureUnit {
    /// Degrees Celsius.
    Celsius,
}

/// Capabilities of the climate entity.
///
/// # Examples
///
/// ```
/// use ir_climate::ClimateCapabilities;
/// use ir_climate::types::HvacMode;
///
/// let caps = ClimateCapabilities::default();
/// assert!(caps.supports_swing_mode());
/// assert!(caps.supports_hvac_mode(HvacMode::Dry));
/// assert_eq!(caps.min_temp, 16.0);
/// assert_eq!(caps.max_temp, 30.0);
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
// Independent feature flags mirroring the host's feature bitmask.
#[allow(clippy::struct_excessive_bools)]
pub struct ClimateCapabilities {
    /// Supports setting a target temperature.
    pub target_temperature: bool,

    /// Supports selecting a fan mode.
    pub fan_mode: bool,

    /// Supports selecting a swing mode.
    pub swing_mode: bool,

    /// HVAC modes offered to the user.
    pub hvac_modes: Vec<HvacMode>,

    /// Fan mode keys offered to the user.
    pub fan_modes: Vec<&'static str>,

    /// Swing positions offered to the user.
    pub swing_modes: Vec<&'static str>,

    /// Temperature unit.
    pub temperature_unit: TemperatureUnit,

    /// Display precision in degrees.
    pub precision: f64,

    /// Lowest selectable target temperature.
    pub min_temp: f64,

    /// Highest selectable target temperature.
    pub max_temp: f64,

    /// Target temperature step.
    pub target_temperature_step: f64,
}

impl Default for ClimateCapabilities {
    fn default() -> Self {
        Self::fujitsu_arrah2e()
    }
}

impl ClimateCapabilities {
    /// Capabilities of a Fujitsu unit driven by the ARRAH2E remote protocol.
    #[must_use]
    pub fn fujitsu_arrah2e() -> Self {
        Self {
            target_temperature: true,
            fan_mode: true,
            swing_mode: true,
            hvac_modes: HvacMode::ALL.to_vec(),
            fan_modes: FAN_MODES.to_vec(),
            swing_modes: SWING_MODES.to_vec(),
            temperature_unit: TemperatureUnit::Celsius,
            precision: 1.0,
            min_temp: 16.0,
            max_temp: 30.0,
            target_temperature_step: 1.0,
        }
    }

    /// Returns whether target temperature control is supported.
    #[must_use]
    pub fn supports_target_temperature(&self) -> bool {
        self.target_temperature
    }

    /// Returns whether fan mode selection is supported.
    #[must_use]
    pub fn supports_fan_mode(&self) -> bool {
        self.fan_mode
    }

    /// Returns whether swing mode selection is supported.
    #[must_use]
    pub fn supports_swing_mode(&self) -> bool {
        self.swing_mode
    }

    /// Returns whether the given HVAC mode is offered.
    #[must_use]
    pub fn supports_hvac_mode(&self, mode: HvacMode) -> bool {
        self.hvac_modes.contains(&mode)
    }
}
