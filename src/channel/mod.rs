// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hardware boundary for output devices.
//!
//! Devices never touch registers or timing. Everything they need from the
//! host is captured by [`OutputChannel`]: configure a pin as an output once,
//! drive it, and read back the level it is actually at.
//!
//! # Implementations
//!
//! - [`SimulatedPin`] - In-memory pin for host builds and tests
//! - [`HalPin`] - Adapter for an `embedded-hal` pin that is both output and
//!   input (feature `hal`)
//! - [`SensedPin`] - Adapter for an `embedded-hal` output with a separate
//!   feedback input (feature `hal`)

#[cfg(feature = "hal")]
mod hal;
mod simulated;

#[cfg(feature = "hal")]
pub use hal::{HalPin, SensedPin};
pub use simulated::SimulatedPin;

use crate::types::Level;

/// A single digital output owned by one device.
///
/// Operations are treated as infallible. A channel is exclusively owned by
/// the device it is moved into; two devices must never share a pin.
///
/// # Examples
///
/// ```
/// use climate_outputs::channel::{OutputChannel, SimulatedPin};
/// use climate_outputs::types::Level;
///
/// let mut pin = SimulatedPin::new();
/// pin.configure_output();
/// pin.set_level(Level::High);
/// assert_eq!(pin.read_level(), Level::High);
/// ```
pub trait OutputChannel {
    /// Puts the pin in output mode. Called once, when the device is built.
    ///
    /// The default does nothing, which suits pin types that are already
    /// outputs by construction.
    fn configure_output(&mut self) {}

    /// Drives the pin to the given level.
    fn set_level(&mut self, level: Level);

    /// Samples the level the pin is currently at.
    fn read_level(&mut self) -> Level;
}

impl<C: OutputChannel + ?Sized> OutputChannel for &mut C {
    fn configure_output(&mut self) {
        (**self).configure_output();
    }

    fn set_level(&mut self, level: Level) {
        (**self).set_level(level);
    }

    fn read_level(&mut self) -> Level {
        (**self).read_level()
    }
}
