// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Built-in facility: four sensors and the alert history they start with.

use riskmon_core::{Alert, Coordinates, Sensor, SensorKind, Severity, Thresholds};
use riskmon_error::Result;

struct Entry {
    id: &'static str,
    name: &'static str,
    location: &'static str,
    kind: SensorKind,
    reading: f64,
    average_24h: f64,
    warning: f64,
    danger: f64,
    last_update: &'static str,
    coordinates: (f64, f64),
}

const SENSORS: [Entry; 4] = [
    Entry {
        id: "S001",
        name: "Temperature Sensor Alpha",
        location: "Building A - Floor 1",
        kind: SensorKind::Temperature,
        reading: 22.5,
        average_24h: 21.8,
        warning: 25.0,
        danger: 30.0,
        last_update: "2 mins ago",
        coordinates: (40.7589, -73.9851),
    },
    Entry {
        id: "S002",
        name: "Pressure Monitor Beta",
        location: "Building B - Floor 3",
        kind: SensorKind::Pressure,
        reading: 1.2,
        average_24h: 1.15,
        warning: 1.5,
        danger: 2.0,
        last_update: "1 min ago",
        coordinates: (40.7614, -73.9776),
    },
    Entry {
        id: "S003",
        name: "Vibration Detector Gamma",
        location: "Building C - Basement",
        kind: SensorKind::Vibration,
        reading: 0.8,
        average_24h: 0.3,
        warning: 0.5,
        danger: 0.7,
        last_update: "30 secs ago",
        coordinates: (40.7505, -73.9934),
    },
    Entry {
        id: "S004",
        name: "Chemical Sensor Delta",
        location: "Building A - Floor 2",
        kind: SensorKind::Chemical,
        reading: 15.3,
        average_24h: 12.1,
        warning: 15.0,
        danger: 20.0,
        last_update: "5 mins ago",
        coordinates: (40.7549, -73.9840),
    },
];

/// The built-in sensors, S001 through S004.
///
/// # Errors
///
/// Only fails if a built-in threshold pair were invalid.
pub fn default_sensors() -> Result<Vec<Sensor>> {
    SENSORS
        .iter()
        .map(|entry| {
            let thresholds = Thresholds::new(entry.warning, entry.danger)?;
            let (latitude, longitude) = entry.coordinates;
            Ok(
                Sensor::new(entry.id, entry.name, entry.kind, entry.reading, thresholds)
                    .with_location(entry.location)
                    .with_last_update(entry.last_update)
                    .with_average_24h(entry.average_24h)
                    .with_coordinates(Coordinates::new(latitude, longitude)),
            )
        })
        .collect()
}

/// Alert history shipped with the built-in sensors, newest first.
pub fn default_alerts() -> Vec<Alert> {
    vec![
        Alert::new(
            "A001",
            "S003",
            "Vibration levels exceeded threshold (0.8 > 0.5)",
            "2024-01-15 14:32:15",
            Severity::Danger,
        ),
        Alert::new(
            "A002",
            "S004",
            "Chemical concentration approaching warning level",
            "2024-01-15 14:15:42",
            Severity::Warning,
        ),
        Alert::new(
            "A003",
            "S003",
            "Abnormal vibration pattern detected",
            "2024-01-15 13:58:21",
            Severity::Danger,
        ),
        Alert::new(
            "A004",
            "S002",
            "Pressure reading fluctuation detected",
            "2024-01-15 13:45:07",
            Severity::Warning,
        ),
        Alert::new(
            "A005",
            "S001",
            "Temperature spike resolved",
            "2024-01-15 13:22:33",
            Severity::Warning,
        ),
    ]
}
