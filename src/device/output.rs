// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polarity-aware wrapper around an output channel.

use crate::channel::OutputChannel;
use crate::types::ActiveLevel;

/// One physical output with its polarity and last read-back.
#[derive(Debug)]
pub(crate) struct Output<C> {
    channel: C,
    active: ActiveLevel,
    state: bool,
    driven: Option<bool>,
}

impl<C: OutputChannel> Output<C> {
    /// Configures the channel, drives it off and samples it once.
    pub(crate) fn attach(mut channel: C, active: ActiveLevel) -> Self {
        channel.configure_output();
        channel.set_level(active.level_for(false));
        let state = active.is_on(channel.read_level());
        Self {
            channel,
            active,
            state,
            driven: Some(false),
        }
    }

    /// Drives the logical state. Returns `true` if it differs from the
    /// previously driven one.
    pub(crate) fn drive(&mut self, on: bool) -> bool {
        self.channel.set_level(self.active.level_for(on));
        self.driven.replace(on) != Some(on)
    }

    /// Re-reads the channel and caches the logical state.
    pub(crate) fn sample(&mut self) -> bool {
        self.state = self.active.is_on(self.channel.read_level());
        self.state
    }

    pub(crate) fn last_sample(&self) -> bool {
        self.state
    }

    pub(crate) fn active(&self) -> ActiveLevel {
        self.active
    }

    pub(crate) fn channel(&self) -> &C {
        &self.channel
    }

    pub(crate) fn channel_mut(&mut self) -> &mut C {
        &mut self.channel
    }
}
