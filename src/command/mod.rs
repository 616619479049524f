// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command payloads understood by the infrared blaster firmware.
//!
//! The blaster accepts a single JSON object per message describing the full
//! desired state of the unit. There is no incremental form: every change to
//! the adapter state produces a complete [`ControlCommand`].
//!
//! # Wire format
//!
//! ```text
//! {"Power":"On","Vendor":"FUJITSU_AC","Model":"ARRAH2E","Command":"Control",
//!  "Mode":"Heat","Celsius":"On","Temp":22,"FanSpeed":"2","SwingV":"Off",
//!  "SwingH":"Off","Quiet":"On"}
//! ```

mod control;

pub use control::{COMMAND, ControlCommand, MODEL, VENDOR};
