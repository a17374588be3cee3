// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `embedded-hal` adapters.
//!
//! Read-back always goes through [`InputPin::is_high`], which samples the
//! electrical level. The output latch (`StatefulOutputPin::is_set_high`)
//! only reflects what was last written, so it is never used here.

use std::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

use crate::types::Level;

use super::OutputChannel;

fn write<P>(pin: &mut P, level: Level)
where
    P: OutputPin + ErrorType<Error = Infallible>,
{
    let Ok(()) = match level {
        Level::High => pin.set_high(),
        Level::Low => pin.set_low(),
    };
}

fn sense<P>(pin: &mut P) -> Level
where
    P: InputPin + ErrorType<Error = Infallible>,
{
    let Ok(high) = pin.is_high();
    Level::from(high)
}

/// Wraps a pin that can be driven and sampled, such as a flex or
/// open-drain GPIO, as an [`OutputChannel`].
///
/// Only pins whose error type is [`Infallible`] are accepted, which covers
/// the on-chip GPIO of most HALs.
#[derive(Debug)]
pub struct HalPin<P>(P);

impl<P> HalPin<P> {
    /// Wraps a pin that is already in output mode with its input buffer
    /// enabled.
    #[must_use]
    pub fn new(pin: P) -> Self {
        Self(pin)
    }

    /// Returns a reference to the wrapped pin.
    #[must_use]
    pub fn inner(&self) -> &P {
        &self.0
    }

    /// Releases the wrapped pin.
    #[must_use]
    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<P> OutputChannel for HalPin<P>
where
    P: OutputPin + InputPin + ErrorType<Error = Infallible>,
{
    // The pin type already guarantees output mode.
    fn configure_output(&mut self) {}

    fn set_level(&mut self, level: Level) {
        write(&mut self.0, level);
    }

    fn read_level(&mut self) -> Level {
        sense(&mut self.0)
    }
}

/// An output pin paired with a feedback input wired to the load.
///
/// Use this when the driven pin cannot be sampled, or when the state that
/// matters is further down the line (a relay contact, a current sense
/// comparator). The feedback is expected at the same level as the output:
/// high when the output is driven high and the load follows.
#[derive(Debug)]
pub struct SensedPin<O, I> {
    output: O,
    feedback: I,
}

impl<O, I> SensedPin<O, I> {
    /// Pairs an output with its feedback input.
    #[must_use]
    pub fn new(output: O, feedback: I) -> Self {
        Self { output, feedback }
    }

    /// The driven pin.
    #[must_use]
    pub fn output(&self) -> &O {
        &self.output
    }

    /// The feedback pin.
    #[must_use]
    pub fn feedback(&self) -> &I {
        &self.feedback
    }

    /// Releases both pins.
    #[must_use]
    pub fn into_inner(self) -> (O, I) {
        (self.output, self.feedback)
    }
}

impl<O, I> OutputChannel for SensedPin<O, I>
where
    O: OutputPin + ErrorType<Error = Infallible>,
    I: InputPin + ErrorType<Error = Infallible>,
{
    fn configure_output(&mut self) {}

    fn set_level(&mut self, level: Level) {
        write(&mut self.output, level);
    }

    fn read_level(&mut self) -> Level {
        sense(&mut self.feedback)
    }
}
