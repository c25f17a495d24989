// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Facility map markers.

use riskmon_core::{Coordinates, Sensor, SensorId, StatusTier};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Primary,
    Amber,
    Red,
}

/// Visual style of a status marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarkerStyle {
    pub color: MarkerColor,
    pub pulsing: bool,
}

impl From<StatusTier> for MarkerStyle {
    fn from(tier: StatusTier) -> Self {
        match tier {
            StatusTier::Safe => Self {
                color: MarkerColor::Primary,
                pulsing: false,
            },
            StatusTier::Warning => Self {
                color: MarkerColor::Amber,
                pulsing: false,
            },
            StatusTier::Danger => Self {
                color: MarkerColor::Red,
                pulsing: true,
            },
        }
    }
}

/// Position on the mock map, in percent of its height and width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapPosition {
    pub top_pct: f64,
    pub left_pct: f64,
}

const LAYOUT: [MapPosition; 4] = [
    MapPosition {
        top_pct: 25.0,
        left_pct: 20.0,
    },
    MapPosition {
        top_pct: 35.0,
        left_pct: 60.0,
    },
    MapPosition {
        top_pct: 65.0,
        left_pct: 30.0,
    },
    MapPosition {
        top_pct: 45.0,
        left_pct: 75.0,
    },
];

/// Layout slot of the `index`-th sensor; slots repeat past the fourth.
pub const fn position_for(index: usize) -> MapPosition {
    LAYOUT[index % LAYOUT.len()]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub sensor_id: SensorId,
    pub name: String,
    pub status: StatusTier,
    pub status_label: &'static str,
    pub style: MarkerStyle,
    pub position: MapPosition,
    pub coordinates: Coordinates,
}

/// One marker per sensor, in the given order.
pub fn markers(sensors: &[Sensor]) -> Vec<MapMarker> {
    sensors
        .iter()
        .enumerate()
        .map(|(index, sensor)| MapMarker {
            sensor_id: sensor.id().clone(),
            name: sensor.name().to_string(),
            status: sensor.status(),
            status_label: sensor.status().label(),
            style: MarkerStyle::from(sensor.status()),
            position: position_for(index),
            coordinates: sensor.coordinates(),
        })
        .collect()
}
