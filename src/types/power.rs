// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Logical output state of a device.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Represents the logical condition of an output.
///
/// This is what the device reports after mapping the electrical level
/// through its [`ActiveLevel`](super::ActiveLevel).
///
/// # Examples
///
/// ```
/// use climate_outputs::types::OutputState;
///
/// assert_eq!(OutputState::On.as_str(), "ON");
/// assert_eq!(OutputState::from(false), OutputState::Off);
/// assert!(OutputState::On.is_on());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OutputState {
    /// Output is off.
    #[default]
    Off,
    /// Output is on.
    On,
}

impl OutputState {
    /// Returns the string representation used when publishing state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::On => "ON",
        }
    }

    /// Returns `true` if the output is on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for OutputState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "OFF" | "0" | "FALSE" => Ok(Self::Off),
            "ON" | "1" | "TRUE" => Ok(Self::On),
            _ => Err(ValueError::InvalidOutputState(s.to_string())),
        }
    }
}

impl From<bool> for OutputState {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

impl From<OutputState> for bool {
    fn from(value: OutputState) -> Self {
        value.is_on()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_state_as_str() {
        assert_eq!(OutputState::Off.as_str(), "OFF");
        assert_eq!(OutputState::On.as_str(), "ON");
        assert_eq!(OutputState::On.to_string(), "ON");
    }

    #[test]
    fn output_state_from_str() {
        assert_eq!("ON".parse::<OutputState>().unwrap(), OutputState::On);
        assert_eq!("off".parse::<OutputState>().unwrap(), OutputState::Off);
        assert_eq!("1".parse::<OutputState>().unwrap(), OutputState::On);
        assert_eq!("0".parse::<OutputState>().unwrap(), OutputState::Off);
        assert_eq!("true".parse::<OutputState>().unwrap(), OutputState::On);
        assert_eq!("False".parse::<OutputState>().unwrap(), OutputState::Off);
    }

    #[test]
    fn output_state_from_str_invalid() {
        let result = "toggle".parse::<OutputState>();
        assert!(matches!(
            result.unwrap_err(),
            ValueError::InvalidOutputState(_)
        ));
    }

    #[test]
    fn output_state_bool_conversions() {
        assert_eq!(OutputState::from(true), OutputState::On);
        assert_eq!(OutputState::from(false), OutputState::Off);
        assert!(bool::from(OutputState::On));
        assert!(!bool::from(OutputState::default()));
    }

    #[test]
    fn output_state_serde() {
        assert_eq!(serde_json::to_string(&OutputState::On).unwrap(), "\"ON\"");
        let state: OutputState = serde_json::from_str("\"OFF\"").unwrap();
        assert_eq!(state, OutputState::Off);
    }
}
