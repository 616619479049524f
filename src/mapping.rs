// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lookup tables from climate concepts to Fujitsu vendor tokens.
//!
//! | HVAC mode | Token | | Fan key | Token |
//! |-----------|-------|-|---------|-------|
//! | off       | Off   | | auto    | Auto  |
//! | cool      | Cool  | | low     | 1     |
//! | heat      | Heat  | | medium  | 2     |
//! | fan_only  | Fan   | | high    | 3     |
//! | auto      | Auto  | |         |       |
//! | dry       | Dry   | |         |       |
//!
//! Lookups by string key never fail: an unmapped key yields
//! [`DEFAULT_TOKEN`].
//!
//! # Examples
//!
//! ```
//! use ir_climate::mapping::{fan_speed_token, mode_token};
//! use ir_climate::types::HvacMode;
//!
//! assert_eq!(mode_token(HvacMode::Heat), "Heat");
//! assert_eq!(fan_speed_token("medium"), "2");
//! assert_eq!(fan_speed_token("turbo"), "Auto");
//! ```

use crate::types::{FanMode, HvacMode, SwingMode};

/// Token used when a key has no entry in a table.
pub const DEFAULT_TOKEN: &str = "Auto";

/// HVAC mode to vendor `Mode` token.
pub const MODE_MAPPING: [(HvacMode, &str); 6] = [
    (HvacMode::Off, "Off"),
    (HvacMode::Cool, "Cool"),
    (HvacMode::Heat, "Heat"),
    (HvacMode::FanOnly, "Fan"),
    (HvacMode::Auto, "Auto"),
    (HvacMode::Dry, "Dry"),
];

/// Fan key to vendor `FanSpeed` token.
pub const FAN_MAPPING: [(&str, &str); 4] = [
    (FanMode::Auto.as_str(), "Auto"),
    (FanMode::Low.as_str(), "1"),
    (FanMode::Medium.as_str(), "2"),
    (FanMode::High.as_str(), "3"),
];

/// Declared fan mode keys, in table order.
pub const FAN_MODES: [&str; 4] = [
    FAN_MAPPING[0].0,
    FAN_MAPPING[1].0,
    FAN_MAPPING[2].0,
    FAN_MAPPING[3].0,
];

/// Declared swing positions. Each is also its own `SwingV` token.
pub const SWING_MODES: [&str; 5] = [
    SwingMode::Auto.as_str(),
    SwingMode::Off.as_str(),
    SwingMode::Bottom.as_str(),
    SwingMode::Mid.as_str(),
    SwingMode::Top.as_str(),
];

/// Returns the vendor token for an HVAC mode.
#[must_use]
pub fn mode_token(mode: HvacMode) -> &'static str {
    MODE_MAPPING
        .iter()
        .find(|(m, _)| *m == mode)
        .map_or(DEFAULT_TOKEN, |&(_, token)| token)
}

/// Returns the vendor token for a host mode key such as `"fan_only"`.
///
/// Unknown keys map to [`DEFAULT_TOKEN`].
#[must_use]
pub fn mode_token_for_key(key: &str) -> &'static str {
    HvacMode::ALL
        .into_iter()
        .find(|mode| mode.as_str() == key)
        .map_or(DEFAULT_TOKEN, mode_token)
}

/// Reverse lookup from a vendor `Mode` token to the HVAC mode.
///
/// Only exact tokens match. Nothing in this crate parses inbound device
/// messages, so this is provided for callers that do.
#[must_use]
pub fn mode_from_token(token: &str) -> Option<HvacMode> {
    MODE_MAPPING
        .iter()
        .find(|(_, t)| *t == token)
        .map(|(mode, _)| *mode)
}

/// Returns the vendor `FanSpeed` token for a fan key.
///
/// Unknown keys map to [`DEFAULT_TOKEN`].
#[must_use]
pub fn fan_speed_token(key: &str) -> &'static str {
    FAN_MAPPING
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(DEFAULT_TOKEN, |&(_, token)| token)
}
