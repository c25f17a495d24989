// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Alert history.

use crate::{SensorId, StatusTier};
use serde::Serialize;
use std::collections::VecDeque;

/// Severity of an alert; only alerting tiers produce one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Danger,
}

impl Severity {
    pub const fn from_tier(tier: StatusTier) -> Option<Self> {
        match tier {
            StatusTier::Safe => None,
            StatusTier::Warning => Some(Self::Warning),
            StatusTier::Danger => Some(Self::Danger),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Warning => "WARNING",
            Self::Danger => "DANGER",
        }
    }
}

/// A single entry of the alert history panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub id: String,
    pub sensor_id: SensorId,
    pub message: String,
    pub timestamp: String,
    pub severity: Severity,
}

impl Alert {
    pub fn new(
        id: impl Into<String>,
        sensor_id: impl Into<SensorId>,
        message: impl Into<String>,
        timestamp: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            id: id.into(),
            sensor_id: sensor_id.into(),
            message: message.into(),
            timestamp: timestamp.into(),
            severity,
        }
    }
}

/// Bounded alert history, newest first.
///
/// Recorded alerts receive sequential identifiers (`A006`, `A007`, ...)
/// continuing after the highest identifier among the seeded entries.
#[derive(Debug, Clone)]
pub struct AlertLog {
    entries: VecDeque<Alert>,
    capacity: usize,
    next_seq: u32,
}

impl AlertLog {
    pub fn new(capacity: usize) -> Self {
        Self::with_seed(capacity, Vec::new())
    }

    /// Build a log from `seed`, which is ordered newest first like the log itself.
    pub fn with_seed(capacity: usize, seed: Vec<Alert>) -> Self {
        let capacity = capacity.max(1);
        let next_seq = seed
            .iter()
            .filter_map(|alert| alert.id.strip_prefix('A')?.parse::<u32>().ok())
            .max()
            .map_or(1, |highest| highest + 1);

        let mut entries: VecDeque<Alert> = seed.into();
        entries.truncate(capacity);

        Self {
            entries,
            capacity,
            next_seq,
        }
    }

    /// Record a new alert at the front, dropping the oldest past capacity.
    pub fn record(
        &mut self,
        sensor_id: SensorId,
        message: impl Into<String>,
        timestamp: impl Into<String>,
        severity: Severity,
    ) -> &Alert {
        let id = format!("A{:03}", self.next_seq);
        self.next_seq += 1;

        self.entries
            .push_front(Alert::new(id, sensor_id, message, timestamp, severity));
        self.entries.truncate(self.capacity);

        &self.entries[0]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<&Alert> {
        self.entries.front()
    }

    /// Alerts, newest first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Alert> + '_ {
        self.entries.iter()
    }

    pub fn for_sensor<'a>(&'a self, sensor_id: &'a SensorId) -> impl Iterator<Item = &'a Alert> + 'a {
        self.entries
            .iter()
            .filter(move |alert| &alert.sensor_id == sensor_id)
    }

    pub fn to_vec(&self) -> Vec<Alert> {
        self.entries.iter().cloned().collect()
    }
}
