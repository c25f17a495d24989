// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use riskmon_core::SensorId;

/// Producer of successive sensor readings.
///
/// `current` is the reading the store holds for `sensor_id`. Simulated sources
/// step from it; feeds backed by real hardware are free to ignore it.
pub trait ReadingSource: Send + 'static {
    fn next_reading(&mut self, sensor_id: &SensorId, current: f64) -> f64;
}

impl<S: ReadingSource + ?Sized> ReadingSource for Box<S> {
    fn next_reading(&mut self, sensor_id: &SensorId, current: f64) -> f64 {
        (**self).next_reading(sensor_id, current)
    }
}
