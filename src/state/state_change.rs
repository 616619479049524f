// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! Each setter on the adapter produces one [`StateChange`], which is applied
//! to the [`ClimateState`](super::ClimateState) and dispatched to state
//! subscribers. A failed publish produces an additional
//! [`StateChange::Availability`].
//!
//! # Examples
//!
//! ```
//! use ir_climate::state::{ClimateState, StateChange};
//! use ir_climate::types::{FanMode, HvacMode};
//!
//! let mut state = ClimateState::default();
//! state.apply(&StateChange::HvacMode(HvacMode::Dry));
//! state.apply(&StateChange::fan_mode(FanMode::Low));
//!
//! assert_eq!(state.hvac_mode(), HvacMode::Dry);
//! assert_eq!(state.fan_mode(), "low");
//! ```

use crate::types::HvacMode;

/// A change to the climate state.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum StateChange {
    /// HVAC mode changed.
    HvacMode(HvacMode),

    /// Target temperature changed (degrees Celsius).
    TargetTemperature(f64),

    /// Fan mode key changed.
    FanMode(String),

    /// Vertical swing position changed.
    SwingMode(String),

    /// Availability changed after a publish attempt.
    Availability(bool),
}

impl StateChange {
    /// Creates a fan mode change.
    #[must_use]
    pub fn fan_mode(mode: impl Into<String>) -> Self {
        Self::FanMode(mode.into())
    }

    /// Creates a swing mode change.
    #[must_use]
    pub fn swing_mode(mode: impl Into<String>) -> Self {
        Self::SwingMode(mode.into())
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SwingMode;

    #[test]
    fn constructors_accept_typed_modes() {
        assert_eq!(
            StateChange::swing_mode(SwingMode::Top),
            StateChange::SwingMode("Top".to_string())
        );
    }
}
