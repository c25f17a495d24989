// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use riskmon_core::{Sensor, StatusTier};
use serde::Serialize;

/// Facility-wide status: high risk as soon as one sensor is in danger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemStatus {
    Stable,
    HighRisk,
}

impl SystemStatus {
    pub fn from_tiers(tiers: impl IntoIterator<Item = StatusTier>) -> Self {
        if tiers.into_iter().any(|tier| tier == StatusTier::Danger) {
            Self::HighRisk
        } else {
            Self::Stable
        }
    }

    pub fn from_sensors<'a>(sensors: impl IntoIterator<Item = &'a Sensor>) -> Self {
        Self::from_tiers(sensors.into_iter().map(Sensor::status))
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Stable => "STABLE",
            Self::HighRisk => "HIGH-RISK",
        }
    }
}
