// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Change detection for device fields.
//!
//! Every tracked field of a device owns a [`ChangeTracker`] configured with
//! the field's [`ChangePolicy`] from the [`policy`] table. Change queries are
//! destructive: a query that reports `true` moves the baseline, so the next
//! query with the same value reports `false`.
//!
//! # Examples
//!
//! ```
//! use climate_outputs::state::{ChangeTracker, policy};
//!
//! let mut setpoint = ChangeTracker::new(5.0_f32, policy::min(policy::ACCURACY));
//! assert!(!setpoint.changed(5.25));
//! assert!(setpoint.changed(6.0));
//! assert!(!setpoint.changed(6.0));
//! ```

mod change_source;
pub mod policy;
mod state_change;
mod tracker;

pub use change_source::ChangeSource;
pub use state_change::StateChange;
pub use tracker::{ChangePolicy, ChangeTracker, Significant};
