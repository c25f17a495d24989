// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Retroactive history for freshly opened charts.

use rand::Rng;
use riskmon_core::{ReadingHistory, ReadingPoint, HISTORY_CAPACITY};

/// Shape of a synthesized history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedParams {
    /// Number of points, also the capacity of the returned window.
    pub points: usize,
    /// Distance between consecutive points.
    pub spacing_ms: i64,
    /// Half-width of the noise added around the current value.
    pub jitter: f64,
}

impl Default for SeedParams {
    fn default() -> Self {
        Self {
            points: HISTORY_CAPACITY,
            spacing_ms: 60_000,
            jitter: 2.0,
        }
    }
}

/// Synthesize `params.points` readings ending at `now_ms`.
///
/// Point `i` (oldest first) sits at `now_ms - (points - 1 - i) * spacing_ms`
/// with value `current + uniform(-jitter, jitter)`, clamped to `>= 0`.
pub fn seed_history<R: Rng>(
    current: f64,
    now_ms: i64,
    params: SeedParams,
    rng: &mut R,
) -> ReadingHistory {
    let mut history = ReadingHistory::with_capacity(params.points);

    for back in (0..params.points).rev() {
        let offset = i64::try_from(back).unwrap_or(i64::MAX);
        let timestamp_ms = now_ms.saturating_sub(offset.saturating_mul(params.spacing_ms));
        let noise = (rng.random::<f64>() - 0.5) * 2.0 * params.jitter;
        history.push(ReadingPoint::new(timestamp_ms, (current + noise).max(0.0)));
    }

    history
}
