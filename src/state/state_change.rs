// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! A [`StateChange`] names one tracked field whose change query reported
//! `true`, together with the value that became the new baseline. Devices
//! produce them from [`ChangeSource::poll_changes`](super::ChangeSource);
//! callers typically publish them.
//!
//! # Change Types
//!
//! - [`StateChange::Command`] - Operating command flipped
//! - [`StateChange::State`] - Observed output condition flipped
//! - [`StateChange::Current`] - Measurement moved by at least the accuracy
//! - [`StateChange::Min`], [`StateChange::Max`] - Setpoint edits
//! - [`StateChange::Hysteresis`] - Deadband edit
//!
//! # Examples
//!
//! ```
//! use climate_outputs::state::StateChange;
//! use climate_outputs::types::OutputState;
//!
//! let change = StateChange::State(OutputState::On);
//! assert!(change.is_state());
//!
//! let json = serde_json::to_string(&change).unwrap();
//! assert_eq!(json, r#"{"field":"state","value":"ON"}"#);
//! ```

use serde::{Deserialize, Serialize};

use crate::types::OutputState;

/// A change reported by a device's change queries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum StateChange {
    /// The command flag changed.
    Command(bool),

    /// The observed output condition changed.
    State(OutputState),

    /// The measurement moved significantly.
    Current(f32),

    /// The lower setpoint moved significantly.
    Min(f32),

    /// The upper setpoint moved significantly.
    Max(f32),

    /// The deadband moved significantly.
    Hysteresis(f32),
}

impl StateChange {
    /// Returns `true` if this is an output state change.
    #[must_use]
    pub fn is_state(&self) -> bool {
        matches!(self, Self::State(_))
    }

    /// Returns `true` if this is a command change.
    #[must_use]
    pub fn is_command(&self) -> bool {
        matches!(self, Self::Command(_))
    }

    /// Returns `true` if this is a setpoint or deadband edit.
    #[must_use]
    pub fn is_setpoint(&self) -> bool {
        matches!(self, Self::Min(_) | Self::Max(_) | Self::Hysteresis(_))
    }

    /// Name of the field, as used in the serialized form.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Command(_) => "command",
            Self::State(_) => "state",
            Self::Current(_) => "current",
            Self::Min(_) => "min",
            Self::Max(_) => "max",
            Self::Hysteresis(_) => "hysteresis",
        }
    }
}
