// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan speed keys.

use std::fmt;

/// Fan speed setting as exposed to the host.
///
/// The adapter stores fan modes as plain strings so that keys outside this
/// set still reach the payload (as the `"Auto"` fallback). This enum names
/// the declared keys.
///
/// # Examples
///
/// ```
/// use ir_climate::types::FanMode;
///
/// assert_eq!(FanMode::Medium.as_str(), "medium");
/// assert_eq!(String::from(FanMode::Low), "low");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FanMode {
    /// Let the unit pick the fan speed.
    #[default]
    Auto,
    /// Speed 1.
    Low,
    /// Speed 2.
    Medium,
    /// Speed 3.
    High,
}

impl FanMode {
    /// All declared fan modes.
    pub const ALL: [Self; 4] = [Self::Auto, Self::Low, Self::Medium, Self::High];

    /// Returns the host-facing key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Looks up a declared fan mode by key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == key)
    }
}

impl fmt::Display for FanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<FanMode> for String {
    fn from(mode: FanMode) -> Self {
        mode.as_str().to_string()
    }
}
