// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `climate_outputs` - Output devices for climate-control nodes.
//!
//! This library drives the outputs of a small climate controller: relays,
//! thermostats and coolers switched by a hysteresis band, and software-only
//! relays used as debounced flags. Every device exposes change queries that
//! report a field once per significant move, so a polling loop can decide
//! what to publish.
//!
//! # Supported Features
//!
//! - **Relays**: Output mirrors a commanded boolean, with read-back
//! - **Thermostats**: Minimum, maximum and min/max bands, heater or cooler
//! - **Virtual relays**: Same change queries, no hardware
//! - **Change detection**: Per-field thresholds, serializable change reports
//! - **GPIO**: `embedded-hal` pins read back from the pad or a feedback
//!   line, or an in-memory pin
//!
//! # Quick Start
//!
//! ```
//! use climate_outputs::channel::SimulatedPin;
//! use climate_outputs::config::ThermostatSettings;
//! use climate_outputs::state::ChangeSource;
//! use climate_outputs::Thermostat;
//!
//! # fn main() -> climate_outputs::Result<()> {
//! let settings = ThermostatSettings::from_json(r#"{ "label": "cellar", "min": 4.0 }"#)?;
//! let mut cellar = Thermostat::with_settings(SimulatedPin::new(), &settings)?;
//!
//! // One tick of the application loop
//! cellar.set_current(3.5);
//! cellar.run_min();
//!
//! for change in cellar.poll_changes() {
//!     println!("{}: {}", change.field(), serde_json::to_string(&change).unwrap());
//! }
//! assert!(cellar.state());
//! # Ok(())
//! # }
//! ```
//!
//! # Polling Model
//!
//! Nothing here blocks or spawns. The caller sets inputs, runs a control
//! pass, then polls. Change queries are destructive: once a query reports
//! `true`, asking again without a new move reports `false`.

pub mod channel;
pub mod config;
pub mod control;
mod device;
pub mod error;
mod shared;
pub mod state;
pub mod types;

pub use device::{Relay, Thermostat, VirtualRelay};
pub use error::{ConfigError, Error, Result, ValueError};
pub use shared::SharedDevice;
