// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HVAC operating modes.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Operating mode of a climate device.
///
/// The string form is the host-facing key (`"off"`, `"fan_only"`, ...).
/// The vendor token sent to the blaster lives in [`crate::mapping`].
///
/// # Examples
///
/// ```
/// use ir_climate::types::HvacMode;
///
/// assert_eq!(HvacMode::FanOnly.as_str(), "fan_only");
/// assert_eq!("heat".parse::<HvacMode>().unwrap(), HvacMode::Heat);
/// assert!(HvacMode::Off.is_off());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HvacMode {
    /// The unit is powered off.
    #[default]
    Off,
    /// Cooling.
    Cool,
    /// Heating.
    Heat,
    /// Fan only, no heating or cooling.
    FanOnly,
    /// The unit chooses between heating and cooling.
    Auto,
    /// Dehumidifying.
    Dry,
}

impl HvacMode {
    /// All modes, in the order the entity advertises them.
    pub const ALL: [Self; 6] = [
        Self::Off,
        Self::Cool,
        Self::Heat,
        Self::Auto,
        Self::Dry,
        Self::FanOnly,
    ];

    /// Returns the host-facing key for this mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Cool => "cool",
            Self::Heat => "heat",
            Self::FanOnly => "fan_only",
            Self::Auto => "auto",
            Self::Dry => "dry",
        }
    }

    /// Returns `true` if this mode powers the unit off.
    #[must_use]
    pub const fn is_off(&self) -> bool {
        matches!(self, Self::Off)
    }
}

impl fmt::Display for HvacMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HvacMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "cool" => Ok(Self::Cool),
            "heat" => Ok(Self::Heat),
            "fan_only" => Ok(Self::FanOnly),
            "auto" => Ok(Self::Auto),
            "dry" => Ok(Self::Dry),
            _ => Err(ValueError::InvalidHvacMode(s.to_string())),
        }
    }
}
