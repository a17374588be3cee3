// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plain on/off relay.

use crate::channel::OutputChannel;
use crate::config::RelaySettings;
use crate::state::{ChangeSource, ChangeTracker, StateChange, policy};
use crate::types::{ActiveLevel, OutputState};

use super::output::Output;

/// A relay whose output mirrors a commanded boolean.
///
/// Setting the command does no I/O; [`run`](Self::run) applies it. The
/// observed state is always a read-back of the channel, so a relay that
/// failed to switch reports what the pin is really doing.
///
/// # Examples
///
/// ```
/// use climate_outputs::Relay;
/// use climate_outputs::channel::SimulatedPin;
/// use climate_outputs::types::ActiveLevel;
///
/// let mut pump = Relay::new(SimulatedPin::new(), ActiveLevel::High);
/// assert!(!pump.state());
///
/// pump.set_command(true);
/// assert!(pump.command_changed());
/// pump.run();
///
/// assert!(pump.state_changed());
/// assert!(pump.state());
/// assert!(!pump.state_changed());
/// ```
#[derive(Debug)]
pub struct Relay<C> {
    output: Output<C>,
    label: String,
    command: bool,
    command_seen: ChangeTracker<bool>,
    state_seen: ChangeTracker<bool>,
}

impl<C: OutputChannel> Relay<C> {
    /// Takes ownership of the channel and drives it off.
    #[must_use]
    pub fn new(channel: C, active: ActiveLevel) -> Self {
        Self::with_settings(channel, &RelaySettings::default().with_active(active))
    }

    /// Builds a relay from settings.
    #[must_use]
    pub fn with_settings(channel: C, settings: &RelaySettings) -> Self {
        let output = Output::attach(channel, settings.active);
        let state = output.last_sample();
        tracing::info!(device = %settings.label, active = ?settings.active, "Relay ready");
        Self {
            output,
            label: settings.label.clone(),
            command: false,
            command_seen: ChangeTracker::new(false, policy::COMMAND),
            state_seen: ChangeTracker::new(state, policy::STATE),
        }
    }

    /// Replaces the label used in logs.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the command. No output is driven until [`run`](Self::run).
    pub fn set_command(&mut self, command: bool) {
        self.command = command;
    }

    /// Current command.
    #[must_use]
    pub fn command(&self) -> bool {
        self.command
    }

    /// Drives the output to match the command.
    pub fn run(&mut self) {
        self.drive(self.command);
    }

    /// Drives the output on.
    pub fn on(&mut self) {
        self.drive(true);
    }

    /// Drives the output off.
    pub fn off(&mut self) {
        self.drive(false);
    }

    fn drive(&mut self, on: bool) {
        if self.output.drive(on) {
            tracing::debug!(device = %self.label, on, "Relay switched");
        }
    }

    /// Samples the channel and returns whether the output is on.
    pub fn state(&mut self) -> bool {
        self.output.sample()
    }

    /// Result of the most recent sample, without touching the channel.
    #[must_use]
    pub fn last_state(&self) -> bool {
        self.output.last_sample()
    }

    /// Samples the channel and returns the output as an [`OutputState`].
    pub fn output_state(&mut self) -> OutputState {
        OutputState::from(self.state())
    }

    /// Reports whether the command changed since the last report.
    pub fn command_changed(&mut self) -> bool {
        let changed = self.command_seen.changed(self.command);
        if changed {
            tracing::trace!(device = %self.label, command = self.command, "Command changed");
        }
        changed
    }

    /// Samples the channel and reports whether the state changed since the
    /// last report.
    pub fn state_changed(&mut self) -> bool {
        let state = self.state();
        let changed = self.state_seen.changed(state);
        if changed {
            tracing::trace!(device = %self.label, state, "State changed");
        }
        changed
    }

    /// Output polarity.
    #[must_use]
    pub fn active_level(&self) -> ActiveLevel {
        self.output.active()
    }

    /// The owned channel.
    #[must_use]
    pub fn channel(&self) -> &C {
        self.output.channel()
    }

    /// The owned channel, mutably.
    pub fn channel_mut(&mut self) -> &mut C {
        self.output.channel_mut()
    }
}

impl<C: OutputChannel> ChangeSource for Relay<C> {
    fn label(&self) -> &str {
        &self.label
    }

    fn poll_changes(&mut self) -> Vec<StateChange> {
        let mut changes = Vec::new();
        if self.command_changed() {
            changes.push(StateChange::Command(self.command));
        }
        if self.state_changed() {
            changes.push(StateChange::State(OutputState::from(self.last_state())));
        }
        changes
    }
}
