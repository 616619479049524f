// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Climate state management types.
//!
//! [`ClimateState`] holds what the unit was last told to do;
//! [`StateChange`] represents one mutation of it.

mod climate_state;
mod state_change;

pub use climate_state::{ClimateState, DEFAULT_TARGET_TEMPERATURE};
pub use state_change::StateChange;
