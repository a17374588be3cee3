// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Debounced change detection for a single field.

/// How far a value must move from its snapshot to count as a change.
///
/// # Examples
///
/// ```
/// use climate_outputs::state::ChangePolicy;
///
/// assert!(ChangePolicy::AtLeast(0.5).is_significant(0.5));
/// assert!(!ChangePolicy::Exceeds(0.5).is_significant(0.5));
/// assert!(ChangePolicy::Exact.is_significant(1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChangePolicy {
    /// Any difference counts.
    Exact,
    /// The distance must be strictly greater than the threshold.
    Exceeds(f32),
    /// The distance must be greater than or equal to the threshold.
    ///
    /// A zero threshold makes every query report a change.
    AtLeast(f32),
}

impl ChangePolicy {
    /// Returns `true` if a move of `distance` counts as a change.
    ///
    /// A NaN distance is never significant.
    #[must_use]
    pub fn is_significant(self, distance: f32) -> bool {
        match self {
            Self::Exact => distance > 0.0,
            Self::Exceeds(threshold) => distance > threshold,
            Self::AtLeast(threshold) => distance >= threshold,
        }
    }
}

/// Values a [`ChangeTracker`] can compare.
pub trait Significant: Copy {
    /// Non-negative distance between two values.
    fn distance(&self, other: &Self) -> f32;
}

impl Significant for bool {
    fn distance(&self, other: &Self) -> f32 {
        if self == other { 0.0 } else { 1.0 }
    }
}

impl Significant for f32 {
    fn distance(&self, other: &Self) -> f32 {
        (self - other).abs()
    }
}

/// Remembers the last reported value of a field.
///
/// [`changed`](Self::changed) compares a live value against the snapshot and,
/// when the move is significant under the tracker's [`ChangePolicy`], adopts
/// the live value as the new snapshot. Comparisons are always against the
/// last reported baseline, so slow drift is reported once it has accumulated
/// past the threshold.
///
/// # Examples
///
/// ```
/// use climate_outputs::state::{ChangePolicy, ChangeTracker};
///
/// let mut temp = ChangeTracker::new(20.0_f32, ChangePolicy::AtLeast(0.5));
///
/// assert!(!temp.changed(20.25));
/// assert!(temp.changed(20.5));
/// // Same value again: already reported
/// assert!(!temp.changed(20.5));
/// assert_eq!(temp.snapshot(), 20.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangeTracker<T> {
    snapshot: T,
    policy: ChangePolicy,
}

impl<T: Significant> ChangeTracker<T> {
    /// Creates a tracker whose baseline is `initial`.
    #[must_use]
    pub fn new(initial: T, policy: ChangePolicy) -> Self {
        Self {
            snapshot: initial,
            policy,
        }
    }

    /// Reports whether `current` moved significantly since the snapshot.
    ///
    /// On `true` the snapshot becomes `current`; on `false` nothing changes.
    pub fn changed(&mut self, current: T) -> bool {
        if self
            .policy
            .is_significant(current.distance(&self.snapshot))
        {
            self.snapshot = current;
            true
        } else {
            false
        }
    }

    /// Replaces the baseline without reporting a change.
    pub fn reset(&mut self, value: T) {
        self.snapshot = value;
    }

    /// Last reported value.
    #[must_use]
    pub fn snapshot(&self) -> T {
        self.snapshot
    }

    /// Active comparison policy.
    #[must_use]
    pub fn policy(&self) -> ChangePolicy {
        self.policy
    }

    /// Swaps the comparison policy, keeping the snapshot.
    pub fn set_policy(&mut self, policy: ChangePolicy) {
        self.policy = policy;
    }
}
