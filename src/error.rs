// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `climate_outputs` library.
//!
//! Driving an output never fails: the devices treat the GPIO layer as total.
//! The fallible surface is configuration, where settings are parsed and
//! checked before a device is built from them.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A value failed validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Settings could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A numeric setting is NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending setting.
        field: &'static str,
        /// The value that was provided.
        value: f32,
    },

    /// The lower setpoint is not below the upper one.
    #[error("min setpoint {min} must be below max setpoint {max}")]
    InvertedSetpoints {
        /// Lower setpoint.
        min: f32,
        /// Upper setpoint.
        max: f32,
    },

    /// The deadband is negative.
    #[error("hysteresis {0} must not be negative")]
    NegativeHysteresis(f32),

    /// The change-detection threshold is zero or negative.
    #[error("accuracy {0} must be positive")]
    NonPositiveAccuracy(f32),

    /// An invalid output state string was provided.
    #[error("invalid output state: {0}")]
    InvalidOutputState(String),
}

/// Errors related to loading device settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings parsed but are not usable.
    #[error("invalid settings: {0}")]
    Value(#[from] ValueError),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
