// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Multi-sensor dashboard session.

use crate::engine::Engine;
use crate::map::{self, MapMarker};
use crate::system_status::SystemStatus;
use riskmon_core::{Alert, Sensor, SensorId, StatusTier};
use riskmon_exec::PeriodicTask;
use riskmon_runtime::impls::tokio::TokioTimer;
use riskmon_runtime::Timer;
use serde::Serialize;
use tracing::info;

/// Summary card of one sensor in the dashboard grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorCard {
    pub id: SensorId,
    pub name: String,
    pub location: String,
    pub reading: f64,
    /// Reading with one decimal, as shown on the card.
    pub reading_display: String,
    pub unit: String,
    pub last_update: String,
    pub status: StatusTier,
    pub link: String,
}

impl From<&Sensor> for SensorCard {
    fn from(sensor: &Sensor) -> Self {
        Self {
            id: sensor.id().clone(),
            name: sensor.name().to_string(),
            location: sensor.location().to_string(),
            reading: sensor.reading(),
            reading_display: format!("{:.1}", sensor.reading()),
            unit: sensor.unit().to_string(),
            last_update: sensor.last_update().to_string(),
            status: sensor.status(),
            link: format!("/sensor/{}", sensor.id()),
        }
    }
}

/// Point-in-time copy of everything the dashboard shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub system_status: SystemStatus,
    pub system_label: &'static str,
    pub sensors: Vec<SensorCard>,
    pub markers: Vec<MapMarker>,
    /// Alert history, newest first; `None` while the panel is hidden.
    pub alerts: Option<Vec<Alert>>,
}

/// A running dashboard: every sensor advances once per dashboard interval.
///
/// The alert panel starts hidden. Dropping the session cancels its reading task.
#[derive(Debug)]
pub struct DashboardSession<T: Timer = TokioTimer> {
    engine: Engine<T>,
    show_alert_history: bool,
    task: PeriodicTask,
}

impl<T: Timer> DashboardSession<T> {
    /// Register the reading task and return the session.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn start(engine: Engine<T>) -> Self {
        let interval = engine.config().dashboard_interval();
        let ticker = engine.clone();
        let task = PeriodicTask::spawn(
            "dashboard-readings",
            interval,
            engine.timer().clone(),
            move || {
                ticker.update_all();
            },
        );

        info!(
            sensors = engine.store().len(),
            interval_ms = interval.as_millis() as u64,
            "dashboard session started"
        );

        Self {
            engine,
            show_alert_history: false,
            task,
        }
    }

    pub fn view(&self) -> DashboardView {
        let sensors = self.engine.store().snapshot();
        let system_status = SystemStatus::from_sensors(&sensors);

        DashboardView {
            system_status,
            system_label: system_status.label(),
            markers: map::markers(&sensors),
            sensors: sensors.iter().map(SensorCard::from).collect(),
            alerts: self
                .show_alert_history
                .then(|| self.engine.store().alerts()),
        }
    }

    /// Flip the alert panel and return the new visibility.
    pub fn toggle_alert_history(&mut self) -> bool {
        self.show_alert_history = !self.show_alert_history;
        self.show_alert_history
    }

    pub const fn shows_alert_history(&self) -> bool {
        self.show_alert_history
    }

    pub fn engine(&self) -> &Engine<T> {
        &self.engine
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_cancelled()
    }

    /// Cancel the reading task and wait for it to exit.
    pub async fn stop(self) {
        self.task.stop().await;
        info!("dashboard session stopped");
    }
}
