// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vertical swing positions.

use std::fmt;

/// Vertical vane position.
///
/// The string form is both the host-facing key and the `SwingV` token; the
/// blaster accepts it verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SwingMode {
    /// Vane oscillates.
    Auto,
    /// Vane fixed, swing disabled.
    #[default]
    Off,
    /// Vane pointing down.
    Bottom,
    /// Vane in the middle position.
    Mid,
    /// Vane pointing up.
    Top,
}

impl SwingMode {
    /// All declared swing modes.
    pub const ALL: [Self; 5] = [Self::Auto, Self::Off, Self::Bottom, Self::Mid, Self::Top];

    /// Returns the key, which doubles as the vendor token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Off => "Off",
            Self::Bottom => "Bottom",
            Self::Mid => "Mid",
            Self::Top => "Top",
        }
    }
}

impl fmt::Display for SwingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SwingMode> for String {
    fn from(mode: SwingMode) -> Self {
        mode.as_str().to_string()
    }
}
