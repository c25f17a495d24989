// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Engine configuration.
//!
//! Every key is optional; a missing key keeps its default. An example file:
//!
//! ```toml
//! dashboard_interval_ms = 3000
//! detail_interval_ms = 2000
//! rng_seed = 7
//!
//! [[sensors]]
//! id = "T100"
//! name = "Boiler Probe"
//! kind = "temperature"
//! reading = 64.0
//! thresholds = { warning = 80.0, danger = 95.0 }
//! ```

use crate::catalog;
use riskmon_core::{Coordinates, Sensor, SensorKind, Thresholds};
use riskmon_error::{Result, RiskmonError};
use riskmon_source::SeedParams;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

/// Definition of a sensor supplied through configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SensorConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: String,
    pub kind: SensorKind,
    pub unit: Option<String>,
    pub reading: f64,
    pub average_24h: Option<f64>,
    pub thresholds: Thresholds,
    pub last_update: Option<String>,
    pub coordinates: Option<Coordinates>,
}

impl SensorConfig {
    pub fn to_sensor(&self) -> Sensor {
        let mut sensor = Sensor::new(
            self.id.as_str(),
            self.name.as_str(),
            self.kind,
            self.reading,
            self.thresholds,
        )
        .with_location(self.location.as_str());

        if let Some(unit) = &self.unit {
            sensor = sensor.with_unit(unit.as_str());
        }
        if let Some(average) = self.average_24h {
            sensor = sensor.with_average_24h(average);
        }
        if let Some(label) = &self.last_update {
            sensor = sensor.with_last_update(label.as_str());
        }
        if let Some(coordinates) = self.coordinates {
            sensor = sensor.with_coordinates(coordinates);
        }
        sensor
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Reading timer of the multi-sensor dashboard.
    pub dashboard_interval_ms: u64,
    /// Reading timer of a detail view.
    pub detail_interval_ms: u64,
    /// History-append timer of a detail view.
    pub history_interval_ms: u64,
    pub history_window: usize,
    pub seed_spacing_ms: i64,
    pub seed_jitter: f64,
    pub alert_log_capacity: usize,
    /// Seed for every random draw; OS entropy when absent.
    pub rng_seed: Option<u64>,
    pub log_filter: String,
    /// Replaces the built-in catalog when present.
    pub sensors: Option<Vec<SensorConfig>>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dashboard_interval_ms: 3_000,
            detail_interval_ms: 2_000,
            history_interval_ms: 2_000,
            history_window: 30,
            seed_spacing_ms: 60_000,
            seed_jitter: 2.0,
            alert_log_capacity: 50,
            rng_seed: None,
            log_filter: "info".to_string(),
            sensors: None,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`RiskmonError::InvalidConfig`] for malformed TOML, invalid
    /// thresholds or out-of-range values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| RiskmonError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`RiskmonError::ConfigIo`] when the file cannot be read, then
    /// anything [`from_toml_str`](Self::from_toml_str) returns.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| RiskmonError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Check every value is usable by the engine.
    ///
    /// # Errors
    ///
    /// Returns [`RiskmonError::InvalidConfig`] naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("dashboard_interval_ms", self.dashboard_interval_ms),
            ("detail_interval_ms", self.detail_interval_ms),
            ("history_interval_ms", self.history_interval_ms),
        ] {
            if value == 0 {
                return Err(RiskmonError::invalid_config(format!("{key} must be positive")));
            }
        }
        if self.seed_spacing_ms <= 0 {
            return Err(RiskmonError::invalid_config("seed_spacing_ms must be positive"));
        }
        if self.history_window == 0 {
            return Err(RiskmonError::invalid_config("history_window must be at least 1"));
        }
        if self.alert_log_capacity == 0 {
            return Err(RiskmonError::invalid_config("alert_log_capacity must be at least 1"));
        }
        if !self.seed_jitter.is_finite() || self.seed_jitter < 0.0 {
            return Err(RiskmonError::invalid_config(
                "seed_jitter must be a non-negative number",
            ));
        }

        if let Some(sensors) = &self.sensors {
            let mut seen = HashSet::new();
            for sensor in sensors {
                if sensor.id.trim().is_empty() {
                    return Err(RiskmonError::invalid_config("sensor id must not be empty"));
                }
                if !seen.insert(sensor.id.as_str()) {
                    return Err(RiskmonError::invalid_config(format!(
                        "sensor id {} is defined twice",
                        sensor.id
                    )));
                }
                if !sensor.reading.is_finite() {
                    return Err(RiskmonError::invalid_config(format!(
                        "sensor {} has a non-finite reading",
                        sensor.id
                    )));
                }
            }
        }
        Ok(())
    }

    pub const fn dashboard_interval(&self) -> Duration {
        Duration::from_millis(self.dashboard_interval_ms)
    }

    pub const fn detail_interval(&self) -> Duration {
        Duration::from_millis(self.detail_interval_ms)
    }

    pub const fn history_interval(&self) -> Duration {
        Duration::from_millis(self.history_interval_ms)
    }

    pub const fn seed_params(&self) -> SeedParams {
        SeedParams {
            points: self.history_window,
            spacing_ms: self.seed_spacing_ms,
            jitter: self.seed_jitter,
        }
    }

    /// True when the built-in catalog is in use.
    pub const fn uses_catalog(&self) -> bool {
        self.sensors.is_none()
    }

    /// Sensors the engine starts with.
    ///
    /// # Errors
    ///
    /// Propagates catalog construction failures.
    pub fn build_sensors(&self) -> Result<Vec<Sensor>> {
        match &self.sensors {
            Some(sensors) => Ok(sensors.iter().map(SensorConfig::to_sensor).collect()),
            None => catalog::default_sensors(),
        }
    }
}
