// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Construction-time device settings.
//!
//! Settings carry everything about a device except the pin itself: its
//! label, its polarity and, for thermostats, the initial band. They
//! deserialize from JSON with every field optional.
//!
//! # Examples
//!
//! ```
//! use climate_outputs::config::ThermostatSettings;
//! use climate_outputs::types::ActiveLevel;
//!
//! let settings = ThermostatSettings::from_json(
//!     r#"{ "label": "cellar", "active": "low", "min": 3.0, "max": 8.0 }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(settings.label, "cellar");
//! assert_eq!(settings.active, ActiveLevel::Low);
//! assert_eq!(settings.hyst, 2.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ValueError};
use crate::state::policy::ACCURACY;
use crate::types::ActiveLevel;

/// Settings for a [`Relay`](crate::Relay).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RelaySettings {
    /// Label used in logs.
    pub label: String,
    /// Which pin level means "on".
    pub active: ActiveLevel,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            label: "relay".to_string(),
            active: ActiveLevel::High,
        }
    }
}

impl RelaySettings {
    /// Creates active-high settings with the given label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Sets the output polarity.
    #[must_use]
    pub fn with_active(mut self, active: ActiveLevel) -> Self {
        self.active = active;
        self
    }

    /// Parses settings from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document is malformed or has
    /// unknown fields.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Settings for a [`Thermostat`](crate::Thermostat).
///
/// Defaults describe a heater with a 5..10 band, a 2 degree deadband and the
/// standard change-detection [`ACCURACY`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThermostatSettings {
    /// Label used in logs.
    pub label: String,
    /// Which pin level means "on".
    pub active: ActiveLevel,
    /// Initial lower setpoint.
    pub min: f32,
    /// Initial upper setpoint.
    pub max: f32,
    /// Initial deadband.
    pub hyst: f32,
    /// Whether the output cools rather than heats.
    pub cooler: bool,
    /// Change-detection threshold for the numeric fields.
    pub accuracy: f32,
}

impl Default for ThermostatSettings {
    fn default() -> Self {
        Self {
            label: "thermostat".to_string(),
            active: ActiveLevel::High,
            min: 5.0,
            max: 10.0,
            hyst: 2.0,
            cooler: false,
            accuracy: ACCURACY,
        }
    }
}

impl ThermostatSettings {
    /// Creates default heater settings with the given label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Creates default cooler settings with the given label.
    #[must_use]
    pub fn cooler(label: impl Into<String>) -> Self {
        Self {
            cooler: true,
            ..Self::new(label)
        }
    }

    /// Sets the output polarity.
    #[must_use]
    pub fn with_active(mut self, active: ActiveLevel) -> Self {
        self.active = active;
        self
    }

    /// Sets both setpoints.
    #[must_use]
    pub fn with_setpoints(mut self, min: f32, max: f32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Sets the deadband.
    #[must_use]
    pub fn with_hysteresis(mut self, hyst: f32) -> Self {
        self.hyst = hyst;
        self
    }

    /// Sets the change-detection threshold.
    #[must_use]
    pub fn with_accuracy(mut self, accuracy: f32) -> Self {
        self.accuracy = accuracy;
        self
    }

    /// Checks that the settings describe a usable band.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] if a number is not finite, `min` is not
    /// below `max`, the deadband is negative or the accuracy is not
    /// positive.
    pub fn validate(&self) -> Result<(), ValueError> {
        for (field, value) in [
            ("min", self.min),
            ("max", self.max),
            ("hyst", self.hyst),
            ("accuracy", self.accuracy),
        ] {
            if !value.is_finite() {
                return Err(ValueError::NonFinite { field, value });
            }
        }
        if self.min >= self.max {
            return Err(ValueError::InvertedSetpoints {
                min: self.min,
                max: self.max,
            });
        }
        if self.hyst < 0.0 {
            return Err(ValueError::NegativeHysteresis(self.hyst));
        }
        if self.accuracy <= 0.0 {
            return Err(ValueError::NonPositiveAccuracy(self.accuracy));
        }
        Ok(())
    }

    /// Parses and validates settings from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document is malformed and
    /// [`ConfigError::Value`] if it fails [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }
}
