// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use riskmon_core::{
    Coordinates, ReadingHistory, ReadingPoint, Sensor, SensorKind, Thresholds, HISTORY_CAPACITY,
};

/// Valid threshold pair; panics on invalid input.
pub fn thresholds(warning: f64, danger: f64) -> Thresholds {
    Thresholds::new(warning, danger).expect("fixture thresholds must be valid")
}

pub fn temperature_alpha() -> Sensor {
    Sensor::new(
        "S001",
        "Temperature Sensor Alpha",
        SensorKind::Temperature,
        22.5,
        thresholds(25.0, 30.0),
    )
    .with_location("Building A - Floor 1")
    .with_last_update("2 mins ago")
    .with_average_24h(21.8)
    .with_coordinates(Coordinates::new(40.7589, -73.9851))
}

pub fn pressure_beta() -> Sensor {
    Sensor::new(
        "S002",
        "Pressure Monitor Beta",
        SensorKind::Pressure,
        1.2,
        thresholds(1.5, 2.0),
    )
    .with_location("Building B - Floor 3")
    .with_last_update("1 min ago")
    .with_average_24h(1.15)
    .with_coordinates(Coordinates::new(40.7614, -73.9776))
}

pub fn vibration_gamma() -> Sensor {
    Sensor::new(
        "S003",
        "Vibration Detector Gamma",
        SensorKind::Vibration,
        0.8,
        thresholds(0.5, 0.7),
    )
    .with_location("Building C - Basement")
    .with_last_update("30 secs ago")
    .with_average_24h(0.3)
    .with_coordinates(Coordinates::new(40.7505, -73.9934))
}

pub fn chemical_delta() -> Sensor {
    Sensor::new(
        "S004",
        "Chemical Sensor Delta",
        SensorKind::Chemical,
        15.3,
        thresholds(15.0, 20.0),
    )
    .with_location("Building A - Floor 2")
    .with_last_update("5 mins ago")
    .with_average_24h(12.1)
    .with_coordinates(Coordinates::new(40.7549, -73.9840))
}

/// S001 through S004, in identifier order.
pub fn catalog_sensors() -> Vec<Sensor> {
    vec![
        temperature_alpha(),
        pressure_beta(),
        vibration_gamma(),
        chemical_delta(),
    ]
}

/// A full default-capacity history starting at `start_ms`, values `0.0, 1.0, ...`.
pub fn full_history(start_ms: i64, spacing_ms: i64) -> ReadingHistory {
    let points = (0..HISTORY_CAPACITY as i64)
        .map(|i| ReadingPoint::new(start_ms + i * spacing_ms, i as f64));
    ReadingHistory::from_points(points, HISTORY_CAPACITY)
}
