// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! In-memory sensor store.

use parking_lot::{Mutex, RwLock};
use riskmon_core::{Alert, AlertLog, Sensor, SensorId, Severity};
use riskmon_error::{Result, RiskmonError};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Shared handle to every sensor of a session and the alert history.
///
/// Clones refer to the same state. Sensors are keyed and iterated by id.
/// All mutation goes through [`update`](Self::update), which holds the write
/// lock for the whole closure, so two updates of one sensor never interleave.
#[derive(Clone, Debug)]
pub struct SensorStore {
    sensors: Arc<RwLock<BTreeMap<SensorId, Sensor>>>,
    alerts: Arc<Mutex<AlertLog>>,
}

impl SensorStore {
    pub fn new(alerts: AlertLog) -> Self {
        Self {
            sensors: Arc::new(RwLock::new(BTreeMap::new())),
            alerts: Arc::new(Mutex::new(alerts)),
        }
    }

    /// Build a store holding `sensors`.
    ///
    /// # Errors
    ///
    /// Returns [`RiskmonError::DuplicateSensor`] if two sensors share an id.
    pub fn with_sensors(sensors: impl IntoIterator<Item = Sensor>, alerts: AlertLog) -> Result<Self> {
        let store = Self::new(alerts);
        for sensor in sensors {
            store.insert(sensor)?;
        }
        Ok(store)
    }

    /// Register a sensor.
    ///
    /// # Errors
    ///
    /// Returns [`RiskmonError::DuplicateSensor`] if the id is already taken.
    pub fn insert(&self, sensor: Sensor) -> Result<()> {
        let mut sensors = self.sensors.write();
        if sensors.contains_key(sensor.id()) {
            return Err(RiskmonError::duplicate_sensor(sensor.id().as_str()));
        }
        sensors.insert(sensor.id().clone(), sensor);
        Ok(())
    }

    /// Copy of the sensor registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RiskmonError::SensorNotFound`] for unknown ids.
    pub fn get(&self, id: &str) -> Result<Sensor> {
        self.sensors
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| RiskmonError::sensor_not_found(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sensors.read().contains_key(id)
    }

    pub fn ids(&self) -> Vec<SensorId> {
        self.sensors.read().keys().cloned().collect()
    }

    /// Copies of every sensor, in id order.
    pub fn snapshot(&self) -> Vec<Sensor> {
        self.sensors.read().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.sensors.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensors.read().is_empty()
    }

    /// Run `f` on the sensor under `id` while holding the write lock.
    ///
    /// # Errors
    ///
    /// Returns [`RiskmonError::SensorNotFound`] for unknown ids.
    pub fn update<R>(&self, id: &str, f: impl FnOnce(&mut Sensor) -> R) -> Result<R> {
        let mut sensors = self.sensors.write();
        let sensor = sensors
            .get_mut(id)
            .ok_or_else(|| RiskmonError::sensor_not_found(id))?;
        Ok(f(sensor))
    }

    /// Append an alert to the history and return a copy of it.
    pub fn record_alert(
        &self,
        sensor_id: SensorId,
        message: impl Into<String>,
        timestamp: impl Into<String>,
        severity: Severity,
    ) -> Alert {
        self.alerts
            .lock()
            .record(sensor_id, message, timestamp, severity)
            .clone()
    }

    /// Alert history, newest first.
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.lock().to_vec()
    }

    pub fn alerts_for(&self, sensor_id: &SensorId) -> Vec<Alert> {
        self.alerts.lock().for_sensor(sensor_id).cloned().collect()
    }
}
