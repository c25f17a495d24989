// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rand::rngs::StdRng;
use rand::SeedableRng;
use riskmon_core::SensorId;
use riskmon_source::{advance, advance_with, RandomWalkSource, ReadingSource, MAX_STEP};

#[test]
fn test_advance_with_draw_extremes() {
    assert_eq!(advance_with(5.0, 0.0), 4.0);
    assert_eq!(advance_with(5.0, 0.5), 5.0);
    assert!(advance_with(5.0, 0.999_999) < 6.0);
}

#[test]
fn test_advance_clamps_at_zero() {
    assert_eq!(advance_with(0.0, 0.0), 0.0);
    assert_eq!(advance_with(0.3, 0.1), 0.0);
    assert_eq!(advance_with(-4.0, 0.9), 0.0);
    assert_eq!(advance_with(f64::NAN, 0.5), 0.0);
}

#[test]
fn test_non_negative_for_non_negative_inputs() {
    let mut rng = StdRng::seed_from_u64(7);
    for start in [0.0, 0.1, 0.5, 0.99, 1.0, 22.5] {
        let mut value = start;
        for _ in 0..2_000 {
            value = advance(value, &mut rng);
            assert!(value >= 0.0, "walk from {start} went negative");
        }
    }
}

#[test]
fn test_step_is_bounded_over_ten_thousand_draws() {
    let mut rng = StdRng::seed_from_u64(42);
    let previous = 100.0;

    for _ in 0..10_000 {
        let next = advance(previous, &mut rng);
        assert!((next - previous).abs() <= MAX_STEP);
    }
}

#[test]
fn test_walk_is_unbounded_above() {
    let mut value = 0.0;
    for _ in 0..50 {
        value = advance_with(value, 0.999);
    }
    assert!(value > 49.0);
}

#[test]
fn test_seeded_source_is_reproducible() {
    let id = SensorId::new("S001");
    let mut a = RandomWalkSource::from_seed(1234);
    let mut b = RandomWalkSource::from_seed(1234);

    let mut va = 22.5;
    let mut vb = 22.5;
    for _ in 0..100 {
        va = a.next_reading(&id, va);
        vb = b.next_reading(&id, vb);
        assert_eq!(va, vb);
    }
}

#[test]
fn test_boxed_source_delegates() {
    let id = SensorId::new("S002");
    let mut source: Box<dyn ReadingSource> = Box::new(RandomWalkSource::from_seed(9));
    let next = source.next_reading(&id, 1.2);

    assert!((next - 1.2).abs() <= MAX_STEP);
    assert!(next >= 0.0);
}
