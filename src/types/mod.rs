// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types shared by the output devices.
//!
//! # Types
//!
//! - [`OutputState`] - Logical On/Off condition of an output
//! - [`Level`] - Electrical level of a pin
//! - [`ActiveLevel`] - Which level means "on" for a given device

mod level;
mod power;

pub use level::{ActiveLevel, Level};
pub use power::OutputState;
