// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Single-sensor detail view.
//!
//! Opening a detail view seeds a retroactive history, then runs two tasks:
//! one advances the sensor's reading, the other appends the current reading
//! to the history window. Both stop when the session is dropped or stopped.

use crate::engine::Engine;
use parking_lot::Mutex;
use riskmon_core::{Alert, ReadingHistory, ReadingPoint, Sensor, SensorId, StatusTier};
use riskmon_error::Result;
use riskmon_exec::PeriodicTask;
use riskmon_runtime::impls::tokio::TokioTimer;
use riskmon_runtime::{format_clock_time, Timer};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const NOT_FOUND_TITLE: &str = "Sensor Not Found";
pub const DASHBOARD_LINK: &str = "/dashboard";

/// Terminal view shown for an unknown sensor id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFoundView {
    pub sensor_id: String,
    pub title: &'static str,
    pub message: String,
    pub back_link: &'static str,
    pub back_label: &'static str,
}

impl NotFoundView {
    pub fn new(sensor_id: impl Into<String>) -> Self {
        let sensor_id = sensor_id.into();
        Self {
            message: format!("No sensor is registered under {sensor_id}."),
            sensor_id,
            title: NOT_FOUND_TITLE,
            back_link: DASHBOARD_LINK,
            back_label: "Back to Dashboard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    /// `HH:MM` axis label.
    pub time: String,
    pub value: f64,
    pub timestamp_ms: i64,
}

/// Line chart of a sensor's history with its two threshold reference lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub sensor_id: SensorId,
    pub unit: String,
    pub points: Vec<ChartPoint>,
    pub warning_line: f64,
    pub danger_line: f64,
    /// Tier of the current reading; colours the line.
    pub line_tier: StatusTier,
}

impl ChartSeries {
    pub fn from_history(sensor: &Sensor, history: &ReadingHistory) -> Self {
        Self {
            sensor_id: sensor.id().clone(),
            unit: sensor.unit().to_string(),
            points: history
                .iter()
                .map(|point| ChartPoint {
                    time: format_clock_time(point.timestamp_ms),
                    value: point.value,
                    timestamp_ms: point.timestamp_ms,
                })
                .collect(),
            warning_line: sensor.thresholds().warning(),
            danger_line: sensor.thresholds().danger(),
            line_tier: sensor.status(),
        }
    }
}

/// Point-in-time copy of a detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub sensor: Sensor,
    /// Current reading with two decimals and the unit.
    pub reading_display: String,
    pub average_display: String,
    pub chart: ChartSeries,
    /// Alerts of this sensor, newest first.
    pub alerts: Vec<Alert>,
}

/// Outcome of opening a detail view.
#[derive(Debug)]
pub enum DetailPage<T: Timer = TokioTimer> {
    Live(DetailSession<T>),
    NotFound(NotFoundView),
}

impl<T: Timer> DetailPage<T> {
    /// Open the detail view of `id`, or the not-found view when it is unknown.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn open(engine: &Engine<T>, id: &str) -> Self {
        match DetailSession::open(engine.clone(), id) {
            Ok(session) => Self::Live(session),
            Err(_) => Self::NotFound(NotFoundView::new(id)),
        }
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn into_session(self) -> Option<DetailSession<T>> {
        match self {
            Self::Live(session) => Some(session),
            Self::NotFound(_) => None,
        }
    }
}

/// A running detail view of one sensor.
#[derive(Debug)]
pub struct DetailSession<T: Timer = TokioTimer> {
    engine: Engine<T>,
    sensor_id: SensorId,
    history: Arc<Mutex<ReadingHistory>>,
    reading_task: PeriodicTask,
    history_task: PeriodicTask,
}

impl<T: Timer> DetailSession<T> {
    /// Seed the history of `id` and register its reading and history tasks.
    ///
    /// # Errors
    ///
    /// Returns [`RiskmonError::SensorNotFound`](riskmon_error::RiskmonError::SensorNotFound)
    /// for unknown ids; no task is registered in that case.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn open(engine: Engine<T>, id: &str) -> Result<Self> {
        let sensor = engine.lookup(id)?;
        let sensor_id = sensor.id().clone();
        let history = Arc::new(Mutex::new(engine.seed_history(sensor.reading())));

        let reading_task = {
            let engine = engine.clone();
            let sensor_id = sensor_id.clone();
            PeriodicTask::spawn(
                format!("detail-readings-{sensor_id}"),
                engine.config().detail_interval(),
                engine.timer().clone(),
                move || {
                    if let Err(error) = engine.update_sensor(sensor_id.as_str()) {
                        warn!(sensor = %sensor_id, %error, "skipping reading update");
                    }
                },
            )
        };

        let history_task = {
            let engine = engine.clone();
            let sensor_id = sensor_id.clone();
            let history = history.clone();
            PeriodicTask::spawn(
                format!("detail-history-{sensor_id}"),
                engine.config().history_interval(),
                engine.timer().clone(),
                move || match engine.lookup(sensor_id.as_str()) {
                    Ok(sensor) => {
                        let point = ReadingPoint::new(engine.now_millis(), sensor.reading());
                        let mut history = history.lock();
                        history.push(point);
                        debug!(sensor = %sensor_id, value = point.value, len = history.len(), "history appended");
                    }
                    Err(error) => warn!(sensor = %sensor_id, %error, "skipping history append"),
                },
            )
        };

        info!(sensor = %sensor_id, "detail session started");

        Ok(Self {
            engine,
            sensor_id,
            history,
            reading_task,
            history_task,
        })
    }

    pub fn sensor_id(&self) -> &SensorId {
        &self.sensor_id
    }

    /// Copy of the current history window.
    pub fn history(&self) -> ReadingHistory {
        self.history.lock().clone()
    }

    /// Current state of the view.
    ///
    /// # Errors
    ///
    /// Returns [`RiskmonError::SensorNotFound`](riskmon_error::RiskmonError::SensorNotFound)
    /// if the sensor left the store after the session opened.
    pub fn snapshot(&self) -> Result<DetailView> {
        let sensor = self.engine.lookup(self.sensor_id.as_str())?;
        let chart = ChartSeries::from_history(&sensor, &self.history.lock());

        Ok(DetailView {
            reading_display: format!("{:.2} {}", sensor.reading(), sensor.unit()),
            average_display: format!("{:.2} {}", sensor.average_24h(), sensor.unit()),
            alerts: self.engine.store().alerts_for(&self.sensor_id),
            chart,
            sensor,
        })
    }

    pub fn engine(&self) -> &Engine<T> {
        &self.engine
    }

    pub fn is_running(&self) -> bool {
        !self.reading_task.is_cancelled() && !self.history_task.is_cancelled()
    }

    /// Cancel both tasks and wait for them to exit.
    pub async fn stop(self) {
        self.reading_task.stop().await;
        self.history_task.stop().await;
        info!(sensor = %self.sensor_id, "detail session stopped");
    }
}
