// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core types for riskmon: sensors, threshold classification and the
//! bounded reading history that feeds detail charts.

pub mod alert;
pub mod reading_history;
pub mod reading_point;
pub mod sensor;
pub mod sensor_id;
pub mod status_tier;
pub mod thresholds;

pub use self::alert::{Alert, AlertLog, Severity};
pub use self::reading_history::{ReadingHistory, HISTORY_CAPACITY};
pub use self::reading_point::ReadingPoint;
pub use self::sensor::{Coordinates, ReadingChange, Sensor, SensorKind, JUST_NOW};
pub use self::sensor_id::SensorId;
pub use self::status_tier::StatusTier;
pub use self::thresholds::{classify, Thresholds};
