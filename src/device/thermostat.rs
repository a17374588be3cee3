// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hysteresis thermostat and cooler.

use std::fmt;

use crate::channel::OutputChannel;
use crate::config::ThermostatSettings;
use crate::control::{Action, ControlInputs, ControlMode, decide};
use crate::error::ValueError;
use crate::state::{ChangeSource, ChangeTracker, StateChange, policy};
use crate::types::{ActiveLevel, OutputState};

use super::output::Output;

/// An output switched by a measurement crossing the edges of a band.
///
/// The caller feeds a measurement with [`set_current`](Self::set_current),
/// picks a control strategy by calling one of [`run_min`](Self::run_min),
/// [`run_max`](Self::run_max) or [`run_min_max`](Self::run_min_max), then
/// polls the change queries to learn what to publish. Setpoints and the
/// deadband can be edited at any time and are read on every pass; they are
/// not checked against each other here (see
/// [`ThermostatSettings::validate`]).
///
/// The command selects the band: `false` is the minimum (heating) band,
/// `true` the maximum band. A cooler engages when the measurement reaches
/// `max` instead of releasing there.
///
/// # Examples
///
/// ```
/// use climate_outputs::Thermostat;
/// use climate_outputs::channel::SimulatedPin;
/// use climate_outputs::types::ActiveLevel;
///
/// // Defaults: min 5, max 10, hyst 2, heater
/// let mut heater = Thermostat::new(SimulatedPin::new(), ActiveLevel::High);
///
/// heater.set_current(4.0);
/// heater.run_min();
/// assert!(heater.state());
///
/// // Inside the deadband the output holds
/// heater.set_current(6.5);
/// heater.run_min();
/// assert!(heater.state());
///
/// heater.set_current(7.0);
/// heater.run_min();
/// assert!(!heater.state());
/// ```
#[derive(Debug)]
pub struct Thermostat<C> {
    output: Output<C>,
    label: String,
    command: bool,
    cooler: bool,
    current: f32,
    min: f32,
    max: f32,
    hyst: f32,
    accuracy: f32,
    command_seen: ChangeTracker<bool>,
    state_seen: ChangeTracker<bool>,
    current_seen: ChangeTracker<f32>,
    min_seen: ChangeTracker<f32>,
    max_seen: ChangeTracker<f32>,
    hyst_seen: ChangeTracker<f32>,
}

impl<C: OutputChannel> Thermostat<C> {
    /// Takes ownership of the channel with the default heater band.
    #[must_use]
    pub fn new(channel: C, active: ActiveLevel) -> Self {
        Self::build(
            channel,
            &ThermostatSettings::default().with_active(active),
        )
    }

    /// Builds a thermostat from validated settings.
    ///
    /// # Errors
    ///
    /// Returns the [`ValueError`] from [`ThermostatSettings::validate`].
    pub fn with_settings(channel: C, settings: &ThermostatSettings) -> Result<Self, ValueError> {
        settings.validate()?;
        Ok(Self::build(channel, settings))
    }

    fn build(channel: C, settings: &ThermostatSettings) -> Self {
        let output = Output::attach(channel, settings.active);
        let state = output.last_sample();
        let accuracy = settings.accuracy;
        tracing::info!(
            device = %settings.label,
            active = ?settings.active,
            min = settings.min,
            max = settings.max,
            hyst = settings.hyst,
            cooler = settings.cooler,
            "Thermostat ready"
        );
        Self {
            output,
            label: settings.label.clone(),
            command: false,
            cooler: settings.cooler,
            current: 0.0,
            min: settings.min,
            max: settings.max,
            hyst: settings.hyst,
            accuracy,
            command_seen: ChangeTracker::new(false, policy::COMMAND),
            state_seen: ChangeTracker::new(state, policy::STATE),
            current_seen: ChangeTracker::new(0.0, policy::measurement(accuracy)),
            min_seen: ChangeTracker::new(settings.min, policy::min(accuracy)),
            max_seen: ChangeTracker::new(settings.max, policy::max(accuracy)),
            hyst_seen: ChangeTracker::new(settings.hyst, policy::hysteresis(accuracy)),
        }
    }

    /// Replaces the label used in logs.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    // ========== Inputs ==========

    /// Feeds a new measurement.
    pub fn set_current(&mut self, current: f32) {
        self.current = current;
    }

    /// Last fed measurement.
    #[must_use]
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Sets the lower setpoint.
    pub fn set_min(&mut self, min: f32) {
        self.min = min;
    }

    /// Lower setpoint.
    #[must_use]
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Sets the upper setpoint.
    pub fn set_max(&mut self, max: f32) {
        self.max = max;
    }

    /// Upper setpoint.
    #[must_use]
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Sets the deadband.
    pub fn set_hyst(&mut self, hyst: f32) {
        self.hyst = hyst;
    }

    /// Deadband.
    #[must_use]
    pub fn hyst(&self) -> f32 {
        self.hyst
    }

    /// Sets the command: `false` for the minimum band, `true` for the
    /// maximum band.
    pub fn set_command(&mut self, command: bool) {
        self.command = command;
    }

    /// Current command.
    #[must_use]
    pub fn command(&self) -> bool {
        self.command
    }

    /// Switches between heater and cooler polarity.
    ///
    /// The output is not touched. The new polarity applies from the next
    /// control pass, and the output keeps its condition until that pass
    /// reaches one of the new band edges.
    pub fn set_cooler(&mut self, cooler: bool) {
        if self.cooler != cooler {
            tracing::debug!(device = %self.label, cooler, "Polarity changed");
        }
        self.cooler = cooler;
    }

    /// Returns `true` for cooler polarity.
    #[must_use]
    pub fn is_cooler(&self) -> bool {
        self.cooler
    }

    /// Change-detection threshold for the numeric fields.
    #[must_use]
    pub fn accuracy(&self) -> f32 {
        self.accuracy
    }

    /// Replaces the change-detection threshold. Snapshots are kept.
    pub fn set_accuracy(&mut self, accuracy: f32) {
        self.accuracy = accuracy;
        self.current_seen.set_policy(policy::measurement(accuracy));
        self.min_seen.set_policy(policy::min(accuracy));
        self.max_seen.set_policy(policy::max(accuracy));
        self.hyst_seen.set_policy(policy::hysteresis(accuracy));
    }

    /// Everything the next control pass will read.
    #[must_use]
    pub fn inputs(&self) -> ControlInputs {
        ControlInputs {
            current: self.current,
            min: self.min,
            max: self.max,
            hyst: self.hyst,
            command: self.command,
            cooler: self.cooler,
        }
    }

    /// Current configuration as settings.
    #[must_use]
    pub fn settings(&self) -> ThermostatSettings {
        ThermostatSettings {
            label: self.label.clone(),
            active: self.output.active(),
            min: self.min,
            max: self.max,
            hyst: self.hyst,
            cooler: self.cooler,
            accuracy: self.accuracy,
        }
    }

    // ========== Control ==========

    /// Heating band above `min`. Does nothing while the command is `true`.
    pub fn run_min(&mut self) -> Action {
        self.run(ControlMode::Min)
    }

    /// Band below `max`. Does nothing while the command is `false`.
    pub fn run_max(&mut self) -> Action {
        self.run(ControlMode::Max)
    }

    /// Both setpoints as hard bounds while the command is `true`; the
    /// minimum band (heater) or off (cooler) otherwise.
    pub fn run_min_max(&mut self) -> Action {
        self.run(ControlMode::MinMax)
    }

    /// Runs one control pass in the given mode and applies the result.
    pub fn run(&mut self, mode: ControlMode) -> Action {
        let action = decide(mode, &self.inputs());
        tracing::trace!(
            device = %self.label,
            mode = %mode,
            current = self.current,
            ?action,
            "Control pass"
        );
        if let Some(on) = action.target() {
            self.drive(on);
        }
        action
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
            tracing::debug!(device = %self.label, on, current = self.current, "Output switched");
        }
    }

    // ========== Observed state ==========

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

    // ========== Change queries ==========

    /// Reports whether the command changed since the last report.
    pub fn command_changed(&mut self) -> bool {
        let changed = self.command_seen.changed(self.command);
        self.trace_change(changed, "command", self.command);
        changed
    }

    /// Samples the channel and reports whether the state changed since the
    /// last report.
    pub fn state_changed(&mut self) -> bool {
        let state = self.state();
        let changed = self.state_seen.changed(state);
        self.trace_change(changed, "state", state);
        changed
    }

    /// Reports whether the measurement moved by at least the accuracy.
    pub fn current_changed(&mut self) -> bool {
        let changed = self.current_seen.changed(self.current);
        self.trace_change(changed, "current", self.current);
        changed
    }

    /// Reports whether the lower setpoint moved by more than the accuracy.
    pub fn min_changed(&mut self) -> bool {
        let changed = self.min_seen.changed(self.min);
        self.trace_change(changed, "min", self.min);
        changed
    }

    /// Reports whether the upper setpoint moved by at least the accuracy.
    pub fn max_changed(&mut self) -> bool {
        let changed = self.max_seen.changed(self.max);
        self.trace_change(changed, "max", self.max);
        changed
    }

    /// Reports whether the deadband moved by at least the accuracy.
    pub fn hyst_changed(&mut self) -> bool {
        let changed = self.hyst_seen.changed(self.hyst);
        self.trace_change(changed, "hyst", self.hyst);
        changed
    }

    fn trace_change(&self, changed: bool, field: &'static str, value: impl fmt::Debug) {
        if changed {
            tracing::trace!(device = %self.label, field, value = ?value, "Field changed");
        }
    }
}

impl<C: OutputChannel> ChangeSource for Thermostat<C> {
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
        if self.current_changed() {
            changes.push(StateChange::Current(self.current));
        }
        if self.min_changed() {
            changes.push(StateChange::Min(self.min));
        }
        if self.max_changed() {
            changes.push(StateChange::Max(self.max));
        }
        if self.hyst_changed() {
            changes.push(StateChange::Hysteresis(self.hyst));
        }
        changes
    }
}
