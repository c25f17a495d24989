// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sensor model.
//!
//! A [`Sensor`] carries its current reading together with the status tier
//! derived from it. The tier has no setter: it is recomputed whenever a new
//! reading is applied, so the two can never disagree.

use crate::{SensorId, StatusTier, Thresholds};
use serde::{Deserialize, Serialize};

/// Label stamped on a sensor by every simulated update.
pub const JUST_NOW: &str = "Just now";

/// Physical quantity a sensor measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    Temperature,
    Pressure,
    Vibration,
    Chemical,
}

impl SensorKind {
    /// Unit label used when a sensor definition omits one.
    pub const fn default_unit(self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::Pressure => "bar",
            Self::Vibration => "g",
            Self::Chemical => "ppm",
        }
    }

    /// Short description of the measured quantity.
    pub const fn quantity(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Pressure => "Pressure",
            Self::Vibration => "Vibration",
            Self::Chemical => "Chemical concentration",
        }
    }
}

/// Latitude/longitude of a sensor on the facility map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Outcome of applying a reading to a sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingChange {
    pub previous_value: f64,
    pub value: f64,
    pub previous_status: StatusTier,
    pub status: StatusTier,
}

impl ReadingChange {
    pub fn tier_changed(&self) -> bool {
        self.previous_status != self.status
    }

    /// True when the tier rose into `Warning` or `Danger`.
    pub fn escalated(&self) -> bool {
        self.status > self.previous_status
    }
}

/// A simulated sensor and its latest reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sensor {
    id: SensorId,
    name: String,
    location: String,
    kind: SensorKind,
    unit: String,
    reading: f64,
    status: StatusTier,
    last_update: String,
    average_24h: f64,
    thresholds: Thresholds,
    coordinates: Coordinates,
}

impl Sensor {
    /// Create a sensor seeded with `reading`; the status is classified from it.
    pub fn new(
        id: impl Into<SensorId>,
        name: impl Into<String>,
        kind: SensorKind,
        reading: f64,
        thresholds: Thresholds,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: String::new(),
            kind,
            unit: kind.default_unit().to_string(),
            reading,
            status: thresholds.classify(reading),
            last_update: JUST_NOW.to_string(),
            average_24h: reading,
            thresholds,
            coordinates: Coordinates::new(0.0, 0.0),
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    #[must_use]
    pub fn with_last_update(mut self, label: impl Into<String>) -> Self {
        self.last_update = label.into();
        self
    }

    #[must_use]
    pub fn with_average_24h(mut self, average: f64) -> Self {
        self.average_24h = average;
        self
    }

    #[must_use]
    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = coordinates;
        self
    }

    /// Replace the reading, reclassify it and stamp the last-update label.
    pub fn apply_reading(&mut self, value: f64, label: impl Into<String>) -> ReadingChange {
        let previous_value = self.reading;
        let previous_status = self.status;

        self.reading = value;
        self.status = self.thresholds.classify(value);
        self.last_update = label.into();

        ReadingChange {
            previous_value,
            value,
            previous_status,
            status: self.status,
        }
    }

    pub fn id(&self) -> &SensorId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub const fn kind(&self) -> SensorKind {
        self.kind
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub const fn reading(&self) -> f64 {
        self.reading
    }

    pub const fn status(&self) -> StatusTier {
        self.status
    }

    pub fn last_update(&self) -> &str {
        &self.last_update
    }

    pub const fn average_24h(&self) -> f64 {
        self.average_24h
    }

    pub const fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub const fn coordinates(&self) -> Coordinates {
        self.coordinates
    }
}
