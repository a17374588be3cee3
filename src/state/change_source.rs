// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polling interface shared by all devices.

use super::StateChange;

/// A device whose tracked fields can be polled in one call.
///
/// Polling runs every change query the device has, in a fixed order, so it
/// consumes the pending changes exactly like calling each query by hand.
///
/// # Examples
///
/// ```
/// use climate_outputs::VirtualRelay;
/// use climate_outputs::state::{ChangeSource, StateChange};
/// use climate_outputs::types::OutputState;
///
/// let mut alarm = VirtualRelay::new();
/// alarm.set_state(true);
///
/// assert_eq!(alarm.poll_changes(), vec![StateChange::State(OutputState::On)]);
/// assert!(alarm.poll_changes().is_empty());
/// ```
pub trait ChangeSource {
    /// Label used in logs and published reports.
    fn label(&self) -> &str;

    /// Runs every change query and collects the ones that fired.
    fn poll_changes(&mut self) -> Vec<StateChange>;
}
