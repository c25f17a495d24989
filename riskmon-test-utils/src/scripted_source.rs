// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use riskmon_core::SensorId;
use riskmon_source::ReadingSource;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

/// Replays scripted readings per sensor.
///
/// Once a sensor's script is exhausted the current reading is returned
/// unchanged. Every request is recorded and can be inspected through a
/// clone, which shares the call log.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    scripts: HashMap<SensorId, VecDeque<f64>>,
    calls: Arc<Mutex<Vec<SensorId>>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_script(mut self, sensor_id: &str, readings: impl IntoIterator<Item = f64>) -> Self {
        self.scripts
            .entry(SensorId::new(sensor_id))
            .or_default()
            .extend(readings);
        self
    }

    /// Sensor ids requested so far, in call order.
    pub fn calls(&self) -> Vec<SensorId> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self, sensor_id: &str) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|id| id.as_str() == sensor_id)
            .count()
    }
}

impl ReadingSource for ScriptedSource {
    fn next_reading(&mut self, sensor_id: &SensorId, current: f64) -> f64 {
        self.calls.lock().push(sensor_id.clone());
        self.scripts
            .get_mut(sensor_id)
            .and_then(VecDeque::pop_front)
            .unwrap_or(current)
    }
}
