// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Electrical levels and output polarity.

use std::fmt;
use std::ops::Not;

use serde::{Deserialize, Serialize};

/// Electrical level of a digital pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Pin driven or read low.
    #[default]
    Low,
    /// Pin driven or read high.
    High,
}

impl Level {
    /// Returns `true` for [`Level::High`].
    #[must_use]
    pub const fn is_high(self) -> bool {
        matches!(self, Self::High)
    }
}

impl Not for Level {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Self::High } else { Self::Low }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Output polarity: which electrical level means "on".
///
/// Relay boards commonly switch on a low signal, so the mapping is fixed
/// per device at construction.
///
/// # Examples
///
/// ```
/// use climate_outputs::types::{ActiveLevel, Level};
///
/// assert_eq!(ActiveLevel::Low.level_for(true), Level::Low);
/// assert!(ActiveLevel::Low.is_on(Level::Low));
/// assert!(!ActiveLevel::High.is_on(Level::Low));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveLevel {
    /// Logical on drives the pin high.
    #[default]
    High,
    /// Logical on drives the pin low.
    Low,
}

impl ActiveLevel {
    /// Electrical level that represents the given logical state.
    #[must_use]
    pub const fn level_for(self, on: bool) -> Level {
        match (self, on) {
            (Self::High, true) | (Self::Low, false) => Level::High,
            (Self::High, false) | (Self::Low, true) => Level::Low,
        }
    }

    /// Logical state represented by an electrical level.
    #[must_use]
    pub const fn is_on(self, level: Level) -> bool {
        match self {
            Self::High => level.is_high(),
            Self::Low => !level.is_high(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_negation() {
        assert_eq!(!Level::Low, Level::High);
        assert_eq!(!Level::High, Level::Low);
    }

    #[test]
    fn active_high_mapping() {
        assert_eq!(ActiveLevel::High.level_for(true), Level::High);
        assert_eq!(ActiveLevel::High.level_for(false), Level::Low);
        assert!(ActiveLevel::High.is_on(Level::High));
        assert!(!ActiveLevel::High.is_on(Level::Low));
    }

    #[test]
    fn active_low_mapping() {
        assert_eq!(ActiveLevel::Low.level_for(true), Level::Low);
        assert_eq!(ActiveLevel::Low.level_for(false), Level::High);
        assert!(ActiveLevel::Low.is_on(Level::Low));
        assert!(!ActiveLevel::Low.is_on(Level::High));
    }

    #[test]
    fn mapping_round_trips_for_both_polarities() {
        for active in [ActiveLevel::High, ActiveLevel::Low] {
            for on in [true, false] {
                assert_eq!(active.is_on(active.level_for(on)), on);
            }
        }
    }

    #[test]
    fn active_level_deserializes_lowercase() {
        let active: ActiveLevel = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(active, ActiveLevel::Low);
    }
}
