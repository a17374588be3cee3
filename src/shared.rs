// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cross-thread access to a device.
//!
//! Devices are plain single-owner structs and their change snapshots assume
//! one writer. When a measurement task and a publishing task live on
//! different threads, wrap the device in a [`SharedDevice`] so every access
//! goes through one lock.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::state::{ChangeSource, StateChange};

/// A device behind a shared mutex.
///
/// Cloning the handle shares the same device.
///
/// # Examples
///
/// ```
/// use climate_outputs::{SharedDevice, VirtualRelay};
///
/// let alarm = SharedDevice::new(VirtualRelay::new());
/// let writer = alarm.clone();
///
/// std::thread::spawn(move || writer.with(|relay| relay.set_state(true)))
///     .join()
///     .unwrap();
///
/// assert_eq!(alarm.poll_changes().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SharedDevice<D> {
    inner: Arc<Mutex<D>>,
}

impl<D> Clone for SharedDevice<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D> SharedDevice<D> {
    /// Wraps a device.
    #[must_use]
    pub fn new(device: D) -> Self {
        Self {
            inner: Arc::new(Mutex::new(device)),
        }
    }

    /// Locks the device for the lifetime of the guard.
    pub fn lock(&self) -> MutexGuard<'_, D> {
        self.inner.lock()
    }

    /// Runs `f` with the device locked.
    pub fn with<R>(&self, f: impl FnOnce(&mut D) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Unwraps the device if this is the last handle.
    ///
    /// # Errors
    ///
    /// Returns the handle unchanged if other clones are still alive.
    pub fn try_into_inner(self) -> Result<D, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<D: ChangeSource> SharedDevice<D> {
    /// Locks the device and polls its changes.
    pub fn poll_changes(&self) -> Vec<StateChange> {
        self.inner.lock().poll_changes()
    }
}
