// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The simulation engine.
//!
//! One reading update is: ask the source for the next value, apply it to the
//! sensor (which reclassifies it), and record an alert if the tier rose.
//! Sessions call [`Engine::update_sensor`] from their periodic tasks.

use crate::catalog;
use crate::config::EngineConfig;
use crate::dashboard::DashboardSession;
use crate::detail::DetailPage;
use crate::store::SensorStore;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use riskmon_core::{
    Alert, AlertLog, ReadingChange, ReadingHistory, Sensor, SensorId, Severity, JUST_NOW,
};
use riskmon_error::Result;
use riskmon_runtime::impls::system::SystemClock;
use riskmon_runtime::impls::tokio::TokioTimer;
use riskmon_runtime::{format_datetime, Clock, Timer};
use riskmon_source::{seed_history, RandomWalkSource, ReadingSource};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Reading source shared by every task of an engine.
pub type SharedSource = Arc<Mutex<dyn ReadingSource>>;

/// Result of one reading update.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingUpdate {
    pub sensor_id: SensorId,
    pub change: ReadingChange,
    /// Alert recorded because the tier rose, if any.
    pub alert: Option<Alert>,
}

/// Owns the store, the reading source and the time sources of a simulation.
///
/// Clones are cheap and share all state.
#[derive(Clone)]
pub struct Engine<T: Timer = TokioTimer> {
    store: SensorStore,
    source: SharedSource,
    clock: Arc<dyn Clock>,
    timer: T,
    seeder: Arc<Mutex<StdRng>>,
    config: Arc<EngineConfig>,
}

impl<T: Timer> fmt::Debug for Engine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("store", &self.store)
            .field("clock", &self.clock)
            .field("timer", &self.timer)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Engine<TokioTimer> {
    /// Build an engine on the Tokio runtime with the random-walk source.
    ///
    /// # Errors
    ///
    /// Returns configuration errors from [`EngineConfig::validate`] and
    /// duplicate-sensor errors from the store.
    pub fn from_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        let seed_alerts = if config.uses_catalog() {
            catalog::default_alerts()
        } else {
            Vec::new()
        };
        let alerts = AlertLog::with_seed(config.alert_log_capacity, seed_alerts);
        let store = SensorStore::with_sensors(config.build_sensors()?, alerts)?;

        let source = match config.rng_seed {
            Some(seed) => RandomWalkSource::from_seed(seed),
            None => RandomWalkSource::from_os_rng(),
        };

        Ok(Self::new(store, source, SystemClock, TokioTimer, config))
    }
}

impl<T: Timer> Engine<T> {
    pub fn new<S, C>(store: SensorStore, source: S, clock: C, timer: T, config: EngineConfig) -> Self
    where
        S: ReadingSource,
        C: Clock + 'static,
    {
        let seeder = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_os_rng(),
        };

        Self {
            store,
            source: Arc::new(Mutex::new(source)),
            clock: Arc::new(clock),
            timer,
            seeder: Arc::new(Mutex::new(seeder)),
            config: Arc::new(config),
        }
    }

    pub fn store(&self) -> &SensorStore {
        &self.store
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn now_millis(&self) -> i64 {
        self.clock.now_millis()
    }

    /// Look a sensor up by id.
    ///
    /// # Errors
    ///
    /// Returns [`RiskmonError::SensorNotFound`](riskmon_error::RiskmonError::SensorNotFound)
    /// for unknown ids.
    pub fn lookup(&self, id: &str) -> Result<Sensor> {
        self.store.get(id)
    }

    /// Advance one sensor by one reading.
    ///
    /// # Errors
    ///
    /// Returns [`RiskmonError::SensorNotFound`](riskmon_error::RiskmonError::SensorNotFound)
    /// for unknown ids.
    pub fn update_sensor(&self, id: &str) -> Result<ReadingUpdate> {
        let (sensor_id, change, alert_message) = self.store.update(id, |sensor| {
            let next = self
                .source
                .lock()
                .next_reading(sensor.id(), sensor.reading());
            let change = sensor.apply_reading(next, JUST_NOW);
            let message = change.escalated().then(|| escalation_message(sensor, &change));
            (sensor.id().clone(), change, message)
        })?;

        debug!(
            sensor = %sensor_id,
            value = change.value,
            status = %change.status,
            "reading updated"
        );

        if change.tier_changed() {
            info!(
                sensor = %sensor_id,
                from = %change.previous_status,
                to = %change.status,
                "status tier changed"
            );
        }

        let alert = match (alert_message, Severity::from_tier(change.status)) {
            (Some(message), Some(severity)) => Some(self.store.record_alert(
                sensor_id.clone(),
                message,
                format_datetime(self.clock.now_millis()),
                severity,
            )),
            _ => None,
        };

        Ok(ReadingUpdate {
            sensor_id,
            change,
            alert,
        })
    }

    /// Advance every sensor by one reading, in id order.
    ///
    /// Sensors removed between listing and updating are skipped with a warning.
    pub fn update_all(&self) -> Vec<ReadingUpdate> {
        self.store
            .ids()
            .iter()
            .filter_map(|id| match self.update_sensor(id.as_str()) {
                Ok(update) => Some(update),
                Err(error) => {
                    warn!(sensor = %id, %error, "skipping reading update");
                    None
                }
            })
            .collect()
    }

    /// Retroactive history ending now around `current`.
    pub fn seed_history(&self, current: f64) -> ReadingHistory {
        let now = self.clock.now_millis();
        seed_history(current, now, self.config.seed_params(), &mut *self.seeder.lock())
    }

    /// Start the multi-sensor dashboard view.
    pub fn dashboard(&self) -> DashboardSession<T> {
        DashboardSession::start(self.clone())
    }

    /// Open the detail view of one sensor, or the not-found view.
    pub fn open_detail(&self, id: &str) -> DetailPage<T> {
        DetailPage::open(self, id)
    }
}

fn escalation_message(sensor: &Sensor, change: &ReadingChange) -> String {
    let boundary = sensor
        .thresholds()
        .boundary(change.status)
        .unwrap_or_default();

    format!(
        "{} reading {:.2} {unit} reached {} threshold ({boundary} {unit})",
        sensor.kind().quantity(),
        change.value,
        change.status,
        unit = sensor.unit(),
    )
}
