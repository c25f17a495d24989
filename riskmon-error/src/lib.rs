// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the riskmon sensor simulation engine
//!
//! Almost every operation in riskmon is total: advancing a reading, classifying it
//! and appending it to a history window cannot fail. The variants below cover the
//! few boundaries that can: looking a sensor up, building thresholds from untrusted
//! numbers, and loading configuration.
//!
//! # Examples
//!
//! ```
//! use riskmon_error::{Result, RiskmonError};
//!
//! fn lookup(id: &str) -> Result<()> {
//!     Err(RiskmonError::sensor_not_found(id))
//! }
//!
//! assert!(lookup("S999").unwrap_err().is_not_found());
//! ```

/// Root error type for all riskmon operations
#[derive(Debug, thiserror::Error)]
pub enum RiskmonError {
    /// A sensor identifier is absent from the store
    ///
    /// Surfaced to the user as the "Sensor Not Found" view.
    #[error("Sensor not found: {id}")]
    SensorNotFound {
        /// The identifier that was looked up
        id: String,
    },

    /// A sensor with the same identifier is already registered
    #[error("Duplicate sensor: {id}")]
    DuplicateSensor {
        /// The identifier that collided
        id: String,
    },

    /// A threshold pair violates `danger > warning >= 0`
    #[error("Invalid thresholds: warning {warning}, danger {danger} (requires danger > warning >= 0)")]
    InvalidThresholds {
        /// Requested warning boundary
        warning: f64,
        /// Requested danger boundary
        danger: f64,
    },

    /// A configuration value is out of range or could not be parsed
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the offending value
        message: String,
    },

    /// A configuration file could not be read
    #[error("Failed to read configuration {path}: {source}")]
    ConfigIo {
        /// Path that was read
        path: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The tracing subscriber could not be installed
    #[error("Failed to initialise logging: {message}")]
    Logging {
        /// Reason reported by the subscriber
        message: String,
    },
}

impl RiskmonError {
    /// Create a sensor-not-found error for the given identifier
    pub fn sensor_not_found(id: impl Into<String>) -> Self {
        Self::SensorNotFound { id: id.into() }
    }

    /// Create a duplicate-sensor error for the given identifier
    pub fn duplicate_sensor(id: impl Into<String>) -> Self {
        Self::DuplicateSensor { id: id.into() }
    }

    /// Create an invalid configuration error with the given message
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a logging initialisation error
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }

    /// Check if this error is the terminal "sensor not found" state
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::SensorNotFound { .. })
    }

    /// Check if this error originates from configuration loading
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfig { .. } | Self::ConfigIo { .. } | Self::InvalidThresholds { .. }
        )
    }
}

/// Specialized Result type for riskmon operations
pub type Result<T> = std::result::Result<T, RiskmonError>;
