// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hysteresis decisions.
//!
//! A control pass looks only at the two edges of a band. Crossing the
//! engage edge turns the output on, crossing the release edge turns it off,
//! and anywhere in between the output keeps whatever condition it already
//! has. That last rule is what stops an output from chattering around a
//! single setpoint, so nothing here ever derives the output from scratch.
//!
//! When both edges match at once, which only happens with degenerate
//! settings (negative deadband, `min >= max`), the edge evaluated second
//! wins. The order is fixed per mode and documented on [`ControlMode`].
//!
//! # Examples
//!
//! ```
//! use climate_outputs::control::{Action, ControlInputs, ControlMode, decide};
//!
//! let mut inputs = ControlInputs {
//!     current: 4.5,
//!     min: 5.0,
//!     max: 10.0,
//!     hyst: 2.0,
//!     command: false,
//!     cooler: false,
//! };
//! assert_eq!(decide(ControlMode::Min, &inputs), Action::Engage);
//!
//! inputs.current = 6.0;
//! assert_eq!(decide(ControlMode::Min, &inputs), Action::Hold);
//! ```

use std::fmt;

/// What a control pass does to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Drive the output on.
    Engage,
    /// Drive the output off.
    Release,
    /// Leave the output as it is.
    Hold,
}

impl Action {
    /// Target output state, or `None` for [`Action::Hold`].
    #[must_use]
    pub const fn target(self) -> Option<bool> {
        match self {
            Self::Engage => Some(true),
            Self::Release => Some(false),
            Self::Hold => None,
        }
    }
}

/// The three control strategies a thermostat offers.
///
/// The caller picks one per pass; a thermostat never chooses on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlMode {
    /// Heating band above `min`, only while the command is `false`.
    ///
    /// Engage at `current <= min`, then release at `current >= min + hyst`.
    Min,
    /// Band below `max`, only while the command is `true`.
    ///
    /// Heater: engage at `current <= max - hyst`, then release at
    /// `current >= max`. Cooler: release at `current <= max - hyst`, then
    /// engage at `current >= max`.
    Max,
    /// Both setpoints as hard bounds while the command is `true`.
    ///
    /// Heater: release at `current >= max`, then engage at `current <= min`.
    /// Cooler: engage at `current >= max`, then release at `current <= min`.
    /// With the command `false` a heater behaves as [`ControlMode::Min`] and
    /// a cooler is released.
    MinMax,
}

impl fmt::Display for ControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Min => write!(f, "min"),
            Self::Max => write!(f, "max"),
            Self::MinMax => write!(f, "min-max"),
        }
    }
}

/// Everything a control pass reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlInputs {
    /// Live measurement.
    pub current: f32,
    /// Lower setpoint.
    pub min: f32,
    /// Upper setpoint.
    pub max: f32,
    /// Deadband.
    pub hyst: f32,
    /// `false` selects minimum mode, `true` maximum mode.
    pub command: bool,
    /// Reaching `max` turns the output on instead of off.
    pub cooler: bool,
}

/// Decides what a single control pass does.
#[must_use]
pub fn decide(mode: ControlMode, inputs: &ControlInputs) -> Action {
    match mode {
        ControlMode::Min => min_band(inputs),
        ControlMode::Max => max_band(inputs),
        ControlMode::MinMax => min_max_band(inputs),
    }
}

fn min_band(i: &ControlInputs) -> Action {
    if i.command {
        return Action::Hold;
    }
    settle(
        (i.current <= i.min).then_some(Action::Engage),
        (i.current >= i.min + i.hyst).then_some(Action::Release),
    )
}

fn max_band(i: &ControlInputs) -> Action {
    if !i.command {
        return Action::Hold;
    }
    let low = i.current <= i.max - i.hyst;
    let high = i.current >= i.max;
    if i.cooler {
        settle(
            low.then_some(Action::Release),
            high.then_some(Action::Engage),
        )
    } else {
        settle(
            low.then_some(Action::Engage),
            high.then_some(Action::Release),
        )
    }
}

fn min_max_band(i: &ControlInputs) -> Action {
    if !i.command {
        return if i.cooler {
            Action::Release
        } else {
            min_band(i)
        };
    }
    let high = i.current >= i.max;
    let low = i.current <= i.min;
    if i.cooler {
        settle(
            high.then_some(Action::Engage),
            low.then_some(Action::Release),
        )
    } else {
        settle(
            high.then_some(Action::Release),
            low.then_some(Action::Engage),
        )
    }
}

// Second edge overrides the first.
fn settle(first: Option<Action>, second: Option<Action>) -> Action {
    second.or(first).unwrap_or(Action::Hold)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(current: f32, command: bool, cooler: bool) -> ControlInputs {
        ControlInputs {
            current,
            min: 5.0,
            max: 10.0,
            hyst: 2.0,
            command,
            cooler,
        }
    }

    #[test]
    fn min_band_edges() {
        assert_eq!(decide(ControlMode::Min, &inputs(5.0, false, false)), Action::Engage);
        assert_eq!(decide(ControlMode::Min, &inputs(4.0, false, false)), Action::Engage);
        assert_eq!(decide(ControlMode::Min, &inputs(6.9, false, false)), Action::Hold);
        assert_eq!(decide(ControlMode::Min, &inputs(7.0, false, false)), Action::Release);
    }

    #[test]
    fn min_band_is_guarded_by_command() {
        for current in [0.0, 5.0, 6.0, 7.0, 50.0] {
            assert_eq!(decide(ControlMode::Min, &inputs(current, true, false)), Action::Hold);
        }
    }

    #[test]
    fn max_band_heater_edges() {
        assert_eq!(decide(ControlMode::Max, &inputs(8.0, true, false)), Action::Engage);
        assert_eq!(decide(ControlMode::Max, &inputs(9.0, true, false)), Action::Hold);
        assert_eq!(decide(ControlMode::Max, &inputs(10.0, true, false)), Action::Release);
    }

    #[test]
    fn max_band_cooler_edges() {
        assert_eq!(decide(ControlMode::Max, &inputs(8.0, true, true)), Action::Release);
        assert_eq!(decide(ControlMode::Max, &inputs(9.0, true, true)), Action::Hold);
        assert_eq!(decide(ControlMode::Max, &inputs(10.0, true, true)), Action::Engage);
    }

    #[test]
    fn max_band_is_guarded_by_command() {
        for cooler in [false, true] {
            for current in [0.0, 8.0, 10.0, 50.0] {
                assert_eq!(decide(ControlMode::Max, &inputs(current, false, cooler)), Action::Hold);
            }
        }
    }

    #[test]
    fn min_max_uses_hard_bounds_without_deadband() {
        // Heater
        assert_eq!(decide(ControlMode::MinMax, &inputs(5.0, true, false)), Action::Engage);
        assert_eq!(decide(ControlMode::MinMax, &inputs(6.0, true, false)), Action::Hold);
        assert_eq!(decide(ControlMode::MinMax, &inputs(9.9, true, false)), Action::Hold);
        assert_eq!(decide(ControlMode::MinMax, &inputs(10.0, true, false)), Action::Release);
        // Cooler
        assert_eq!(decide(ControlMode::MinMax, &inputs(10.0, true, true)), Action::Engage);
        assert_eq!(decide(ControlMode::MinMax, &inputs(8.0, true, true)), Action::Hold);
        assert_eq!(decide(ControlMode::MinMax, &inputs(5.0, true, true)), Action::Release);
    }

    #[test]
    fn min_max_without_command() {
        // Heater falls back to the minimum band
        assert_eq!(decide(ControlMode::MinMax, &inputs(5.0, false, false)), Action::Engage);
        assert_eq!(decide(ControlMode::MinMax, &inputs(6.0, false, false)), Action::Hold);
        assert_eq!(decide(ControlMode::MinMax, &inputs(7.0, false, false)), Action::Release);
        // Cooler is always released
        for current in [0.0, 5.0, 10.0, 50.0] {
            assert_eq!(decide(ControlMode::MinMax, &inputs(current, false, true)), Action::Release);
        }
    }

    #[test]
    fn overlapping_edges_resolve_in_evaluation_order() {
        let mut degenerate = inputs(5.0, false, false);
        degenerate.hyst = -1.0;
        // current <= min and current >= min + hyst: release evaluated last
        assert_eq!(decide(ControlMode::Min, &degenerate), Action::Release);

        let inverted = ControlInputs {
            current: 7.0,
            min: 8.0,
            max: 6.0,
            hyst: 2.0,
            command: true,
            cooler: false,
        };
        // Heater: engage at min evaluated last
        assert_eq!(decide(ControlMode::MinMax, &inverted), Action::Engage);
        // Cooler: release at min evaluated last
        let cooler = ControlInputs {
            cooler: true,
            ..inverted
        };
        assert_eq!(decide(ControlMode::MinMax, &cooler), Action::Release);
    }

    #[test]
    fn action_targets() {
        assert_eq!(Action::Engage.target(), Some(true));
        assert_eq!(Action::Release.target(), Some(false));
        assert_eq!(Action::Hold.target(), None);
    }

    #[test]
    fn mode_display() {
        assert_eq!(ControlMode::MinMax.to_string(), "min-max");
    }
}
