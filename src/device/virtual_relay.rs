// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Software-only relay.

use crate::state::{ChangeSource, ChangeTracker, StateChange, policy};
use crate::types::OutputState;

/// A relay with no hardware behind it.
///
/// Both the command and the state are plain caller-set flags. It exists so
/// derived conditions (an alarm, a "heating requested" flag) can be polled
/// through the same debounced change queries as real outputs.
///
/// # Examples
///
/// ```
/// use climate_outputs::VirtualRelay;
///
/// let mut frost_alarm = VirtualRelay::new().with_label("frost");
/// assert!(!frost_alarm.state_changed());
///
/// frost_alarm.set_state(true);
/// assert!(frost_alarm.state_changed());
/// assert!(!frost_alarm.state_changed());
/// ```
#[derive(Debug, Clone)]
pub struct VirtualRelay {
    label: String,
    command: bool,
    state: bool,
    command_seen: ChangeTracker<bool>,
    state_seen: ChangeTracker<bool>,
}

impl Default for VirtualRelay {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualRelay {
    /// Creates a relay with command and state both `false`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            label: "virtual".to_string(),
            command: false,
            state: false,
            command_seen: ChangeTracker::new(false, policy::COMMAND),
            state_seen: ChangeTracker::new(false, policy::STATE),
        }
    }

    /// Replaces the label used in logs.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the command.
    pub fn set_command(&mut self, command: bool) {
        self.command = command;
    }

    /// Current command.
    #[must_use]
    pub fn command(&self) -> bool {
        self.command
    }

    /// Sets the state.
    pub fn set_state(&mut self, state: bool) {
        self.state = state;
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> bool {
        self.state
    }

    /// Current state as an [`OutputState`].
    #[must_use]
    pub fn output_state(&self) -> OutputState {
        OutputState::from(self.state)
    }

    /// Reports whether the command changed since the last report.
    pub fn command_changed(&mut self) -> bool {
        let changed = self.command_seen.changed(self.command);
        if changed {
            tracing::trace!(device = %self.label, command = self.command, "Command changed");
        }
        changed
    }

    /// Reports whether the state changed since the last report.
    pub fn state_changed(&mut self) -> bool {
        let changed = self.state_seen.changed(self.state);
        if changed {
            tracing::trace!(device = %self.label, state = self.state, "State changed");
        }
        changed
    }
}

impl ChangeSource for VirtualRelay {
    fn label(&self) -> &str {
        &self.label
    }

    fn poll_changes(&mut self) -> Vec<StateChange> {
        let mut changes = Vec::new();
        if self.command_changed() {
            changes.push(StateChange::Command(self.command));
        }
        if self.state_changed() {
            changes.push(StateChange::State(self.output_state()));
        }
        changes
    }
}
