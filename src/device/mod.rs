// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Output devices.
//!
//! The three device types are independent: each one owns its own change
//! trackers and, for the physical ones, its own channel.
//!
//! - [`Relay`] - Output mirrors a commanded boolean
//! - [`Thermostat`] - Output follows a measurement through a hysteresis band
//! - [`VirtualRelay`] - Debounced flags with no hardware

mod output;
mod relay;
mod thermostat;
mod virtual_relay;

pub use relay::Relay;
pub use thermostat::Thermostat;
pub use virtual_relay::VirtualRelay;
