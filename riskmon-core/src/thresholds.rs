// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Threshold pairs and reading classification.

use crate::StatusTier;
use riskmon_error::{Result, RiskmonError};
use serde::{Deserialize, Serialize};

/// The `{warning, danger}` boundaries of a sensor.
///
/// Construction enforces `danger > warning >= 0` with both values finite, so
/// every `Thresholds` in the system can be classified against without checks.
///
/// # Example
///
/// ```
/// use riskmon_core::{StatusTier, Thresholds};
///
/// let thresholds = Thresholds::new(0.5, 0.7).unwrap();
/// assert_eq!(thresholds.classify(0.8), StatusTier::Danger);
/// assert!(Thresholds::new(2.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawThresholds", into = "RawThresholds")]
pub struct Thresholds {
    warning: f64,
    danger: f64,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawThresholds {
    warning: f64,
    danger: f64,
}

impl Thresholds {
    /// Build a threshold pair.
    ///
    /// # Errors
    ///
    /// Returns [`RiskmonError::InvalidThresholds`] unless both values are finite
    /// and `danger > warning >= 0`.
    pub fn new(warning: f64, danger: f64) -> Result<Self> {
        let valid = warning.is_finite() && danger.is_finite() && warning >= 0.0 && danger > warning;
        if !valid {
            return Err(RiskmonError::InvalidThresholds { warning, danger });
        }
        Ok(Self { warning, danger })
    }

    pub const fn warning(&self) -> f64 {
        self.warning
    }

    pub const fn danger(&self) -> f64 {
        self.danger
    }

    /// Classify `value` against this pair; see [`classify`].
    pub fn classify(&self, value: f64) -> StatusTier {
        classify(value, self)
    }

    /// The boundary a tier starts at, `None` for [`StatusTier::Safe`].
    pub const fn boundary(&self, tier: StatusTier) -> Option<f64> {
        match tier {
            StatusTier::Safe => None,
            StatusTier::Warning => Some(self.warning),
            StatusTier::Danger => Some(self.danger),
        }
    }
}

impl TryFrom<RawThresholds> for Thresholds {
    type Error = RiskmonError;

    fn try_from(raw: RawThresholds) -> Result<Self> {
        Self::new(raw.warning, raw.danger)
    }
}

impl From<Thresholds> for RawThresholds {
    fn from(thresholds: Thresholds) -> Self {
        Self {
            warning: thresholds.warning,
            danger: thresholds.danger,
        }
    }
}

/// Classify a reading into a status tier.
///
/// `Danger` when `value >= danger`, else `Warning` when `value >= warning`,
/// else `Safe`. Boundaries are inclusive. The function is total: a NaN reading
/// reaches no boundary and classifies as `Safe`.
pub fn classify(value: f64, thresholds: &Thresholds) -> StatusTier {
    if value >= thresholds.danger {
        StatusTier::Danger
    } else if value >= thresholds.warning {
        StatusTier::Warning
    } else {
        StatusTier::Safe
    }
}
