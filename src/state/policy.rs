// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-field comparison policies.
//!
//! | field       | policy                 |
//! |-------------|------------------------|
//! | command     | exact                  |
//! | state       | exact                  |
//! | measurement | `>=` accuracy          |
//! | min         | `>` accuracy           |
//! | max         | `>=` accuracy          |
//! | hysteresis  | `>=` accuracy          |
//!
//! The lower setpoint is the only numeric field compared strictly: an edit of
//! exactly the accuracy is reported for `max` but not for `min`.

use super::ChangePolicy;

/// Default significance threshold for numeric fields.
pub const ACCURACY: f32 = 0.49;

/// Policy for the command flag.
pub const COMMAND: ChangePolicy = ChangePolicy::Exact;

/// Policy for the observed output state.
pub const STATE: ChangePolicy = ChangePolicy::Exact;

/// Policy for the live measurement.
#[must_use]
pub const fn measurement(accuracy: f32) -> ChangePolicy {
    ChangePolicy::AtLeast(accuracy)
}

/// Policy for the lower setpoint.
#[must_use]
pub const fn min(accuracy: f32) -> ChangePolicy {
    ChangePolicy::Exceeds(accuracy)
}

/// Policy for the upper setpoint.
#[must_use]
pub const fn max(accuracy: f32) -> ChangePolicy {
    ChangePolicy::AtLeast(accuracy)
}

/// Policy for the deadband.
#[must_use]
pub const fn hysteresis(accuracy: f32) -> ChangePolicy {
    ChangePolicy::AtLeast(accuracy)
}
