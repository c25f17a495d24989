// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bounded random walk.
//!
//! Each step adds `delta = (u - 0.5) * 2` with `u` uniform on `[0, 1)`, so
//! `delta` lies in `[-1, +1)`, then clamps the result at zero. Nothing bounds
//! the walk from above.

use crate::ReadingSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use riskmon_core::SensorId;
use tracing::trace;

/// Largest absolute change a single step can make.
pub const MAX_STEP: f64 = 1.0;

/// Step `previous` using the unit draw `unit` (expected in `[0, 1)`).
///
/// The result is never negative, even for a NaN input.
///
/// ```
/// use riskmon_source::advance_with;
///
/// assert_eq!(advance_with(10.0, 0.5), 10.0);
/// assert_eq!(advance_with(10.0, 0.75), 10.5);
/// assert_eq!(advance_with(0.25, 0.0), 0.0);
/// ```
pub fn advance_with(previous: f64, unit: f64) -> f64 {
    let delta = (unit - 0.5) * 2.0 * MAX_STEP;
    (previous + delta).max(0.0)
}

/// Step `previous` with a fresh draw from `rng`.
pub fn advance<R: Rng>(previous: f64, rng: &mut R) -> f64 {
    advance_with(previous, rng.random::<f64>())
}

/// Simulated feed that walks every sensor independently from its current reading.
#[derive(Debug, Clone)]
pub struct RandomWalkSource<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomWalkSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomWalkSource<StdRng> {
    /// Deterministic walk, reproducible for a given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Walk seeded from operating-system entropy.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng + Send + 'static> ReadingSource for RandomWalkSource<R> {
    fn next_reading(&mut self, sensor_id: &SensorId, current: f64) -> f64 {
        let next = advance(current, &mut self.rng);
        trace!(sensor = %sensor_id, current, next, "random walk step");
        next
    }
}
