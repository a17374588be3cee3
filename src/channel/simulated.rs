// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory output channel.

use crate::types::Level;

use super::OutputChannel;

/// A pin that lives in memory.
///
/// Reads return the last driven level unless a read-back override is set,
/// which models a stuck contact or a miswired feedback line.
///
/// # Examples
///
/// ```
/// use climate_outputs::channel::{OutputChannel, SimulatedPin};
/// use climate_outputs::types::Level;
///
/// let mut pin = SimulatedPin::new();
/// pin.set_level(Level::High);
///
/// // The relay contact is welded shut
/// pin.force_readback(Some(Level::Low));
/// assert_eq!(pin.level(), Level::High);
/// assert_eq!(pin.read_level(), Level::Low);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulatedPin {
    level: Level,
    configured: bool,
    writes: usize,
    forced: Option<Level>,
}

impl SimulatedPin {
    /// Creates an unconfigured pin resting low.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an unconfigured pin resting at the given level.
    #[must_use]
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    /// Level last driven onto the pin.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns `true` once [`OutputChannel::configure_output`] has run.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Number of [`OutputChannel::set_level`] calls so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Overrides what [`OutputChannel::read_level`] returns.
    ///
    /// `None` restores normal read-back of the driven level.
    pub fn force_readback(&mut self, level: Option<Level>) {
        self.forced = level;
    }
}

impl OutputChannel for SimulatedPin {
    fn configure_output(&mut self) {
        self.configured = true;
    }

    fn set_level(&mut self, level: Level) {
        self.level = level;
        self.writes += 1;
    }

    fn read_level(&mut self) -> Level {
        self.forced.unwrap_or(self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pin_rests_low_and_unconfigured() {
        let pin = SimulatedPin::new();
        assert_eq!(pin.level(), Level::Low);
        assert!(!pin.is_configured());
        assert_eq!(pin.writes(), 0);
    }

    #[test]
    fn set_level_counts_writes() {
        let mut pin = SimulatedPin::with_level(Level::High);
        pin.set_level(Level::Low);
        pin.set_level(Level::Low);
        assert_eq!(pin.level(), Level::Low);
        assert_eq!(pin.writes(), 2);
    }

    #[test]
    fn forced_readback_masks_driven_level() {
        let mut pin = SimulatedPin::new();
        pin.set_level(Level::High);
        pin.force_readback(Some(Level::Low));
        assert_eq!(pin.read_level(), Level::Low);

        pin.force_readback(None);
        assert_eq!(pin.read_level(), Level::High);
    }
}
