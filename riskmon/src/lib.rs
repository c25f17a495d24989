// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # riskmon
//!
//! Simulated real-time sensor monitoring.
//!
//! Sensors live in an explicitly owned [`SensorStore`]. An [`Engine`] advances
//! their readings through a pluggable [`ReadingSource`], reclassifies each new
//! reading into a [`StatusTier`] and records an alert whenever a sensor
//! escalates. Views are sessions: a [`DashboardSession`] refreshes every
//! sensor on one timer, a [`DetailSession`] refreshes one sensor and grows a
//! sliding history window on two more. Dropping a session cancels its timers.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use riskmon::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> riskmon::Result<()> {
//!     let engine = Engine::from_config(EngineConfig::default())?;
//!
//!     let dashboard = engine.dashboard();
//!     tokio::time::sleep(std::time::Duration::from_secs(10)).await;
//!     println!("{:?}", dashboard.view().system_status);
//!
//!     match engine.open_detail("S003") {
//!         DetailPage::Live(detail) => println!("{} points", detail.history().len()),
//!         DetailPage::NotFound(view) => println!("{}", view.title),
//!     }
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod detail;
pub mod engine;
pub mod logging;
pub mod map;
pub mod store;
pub mod system_status;

pub use config::{EngineConfig, SensorConfig};
pub use dashboard::{DashboardSession, DashboardView, SensorCard};
pub use detail::{ChartPoint, ChartSeries, DetailPage, DetailSession, DetailView, NotFoundView};
pub use engine::{Engine, ReadingUpdate, SharedSource};
pub use map::{MapMarker, MapPosition, MarkerColor, MarkerStyle};
pub use store::SensorStore;
pub use system_status::SystemStatus;

pub use riskmon_core::{
    classify, Alert, AlertLog, ReadingHistory, ReadingPoint, Sensor, SensorId, SensorKind,
    Severity, StatusTier, Thresholds,
};
pub use riskmon_error::{Result, RiskmonError};
pub use riskmon_source::{RandomWalkSource, ReadingSource};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        DashboardSession, DetailPage, DetailSession, Engine, EngineConfig, SensorStore,
        StatusTier, SystemStatus,
    };
    pub use riskmon_source::ReadingSource;
}
