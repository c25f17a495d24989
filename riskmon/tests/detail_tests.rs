// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use riskmon::catalog::default_alerts;
use riskmon::{
    AlertLog, DetailPage, DetailSession, Engine, EngineConfig, SensorStore, StatusTier,
};
use riskmon_runtime::impls::tokio::TokioTimer;
use riskmon_test_utils::fixtures::catalog_sensors;
use riskmon_test_utils::helpers::sleep_ticks;
use riskmon_test_utils::{ManualClock, ScriptedSource};
use std::time::Duration;
use tokio::time::sleep;

// 2024-01-15 14:32:15 UTC
const NOW_MS: i64 = 1_705_329_135_000;
const HISTORY_PERIOD: Duration = Duration::from_millis(2_000);

/// Readings advance every 5 s so history ticks never race a reading tick.
fn engine_with(source: ScriptedSource, clock: ManualClock) -> anyhow::Result<Engine> {
    let alerts = AlertLog::with_seed(50, default_alerts());
    let store = SensorStore::with_sensors(catalog_sensors(), alerts)?;
    let config = EngineConfig {
        detail_interval_ms: 5_000,
        rng_seed: Some(3),
        ..EngineConfig::default()
    };
    Ok(Engine::new(store, source, clock, TokioTimer, config))
}

fn open(engine: &Engine, id: &str) -> DetailSession {
    engine
        .open_detail(id)
        .into_session()
        .expect("sensor should exist")
}

#[tokio::test(start_paused = true)]
async fn test_unknown_sensor_opens_not_found_view() -> anyhow::Result<()> {
    // Arrange
    let source = ScriptedSource::new();
    let engine = engine_with(source.clone(), ManualClock::at(NOW_MS))?;

    // Act
    let page = engine.open_detail("S999");

    // Assert
    let DetailPage::NotFound(view) = page else {
        panic!("expected the not-found view");
    };
    assert_eq!(view.sensor_id, "S999");
    assert_eq!(view.title, "Sensor Not Found");
    assert_eq!(view.back_link, "/dashboard");

    sleep(Duration::from_secs(30)).await;
    assert!(source.calls().is_empty());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_history_is_seeded_with_thirty_points() -> anyhow::Result<()> {
    let engine = engine_with(ScriptedSource::new(), ManualClock::at(NOW_MS))?;

    let history = open(&engine, "S003").history();

    assert_eq!(history.len(), 30);
    assert_eq!(history.latest().map(|p| p.timestamp_ms), Some(NOW_MS));
    assert_eq!(
        history.first().map(|p| p.timestamp_ms),
        Some(NOW_MS - 29 * 60_000)
    );
    let stamps: Vec<i64> = history.iter().map(|p| p.timestamp_ms).collect();
    assert!(stamps.windows(2).all(|w| w[1] - w[0] == 60_000));
    assert!(history.iter().all(|p| (0.0..=2.8).contains(&p.value)));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_history_tick_appends_current_reading_and_evicts_oldest() -> anyhow::Result<()> {
    // Arrange
    let clock = ManualClock::at(NOW_MS);
    let engine = engine_with(ScriptedSource::new(), clock.clone())?;
    let session = open(&engine, "S003");
    let seeded = session.history();
    clock.advance_ms(2_000);

    // Act
    sleep_ticks(HISTORY_PERIOD, 1).await;

    // Assert
    let history = session.history();
    assert_eq!(history.len(), 30);
    assert_eq!(history.first(), seeded.iter().nth(1));
    let latest = history.latest().copied().expect("history is never empty");
    assert_eq!(latest.timestamp_ms, NOW_MS + 2_000);
    assert_eq!(latest.value, 0.8);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_history_never_exceeds_window() -> anyhow::Result<()> {
    let engine = engine_with(ScriptedSource::new(), ManualClock::at(NOW_MS))?;
    let session = open(&engine, "S001");

    for _ in 0..40 {
        sleep_ticks(HISTORY_PERIOD, 1).await;
        assert!(session.history().len() <= 30);
    }

    assert_eq!(session.history().len(), 30);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_reading_task_advances_only_the_open_sensor() -> anyhow::Result<()> {
    let source = ScriptedSource::new().with_script("S003", [0.4]);
    let engine = engine_with(source.clone(), ManualClock::at(NOW_MS))?;
    let _session = open(&engine, "S003");

    sleep_ticks(Duration::from_millis(5_000), 1).await;

    assert_eq!(source.call_count("S003"), 1);
    assert_eq!(source.calls().len(), 1);
    assert_eq!(engine.lookup("S003")?.status(), StatusTier::Safe);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_default_periods_fire_both_tasks_every_two_seconds() -> anyhow::Result<()> {
    // Arrange
    let clock = ManualClock::at(NOW_MS);
    let source = ScriptedSource::new();
    let alerts = AlertLog::with_seed(50, default_alerts());
    let store = SensorStore::with_sensors(catalog_sensors(), alerts)?;
    let engine = Engine::new(store, source.clone(), clock.clone(), TokioTimer, EngineConfig::default());
    let session = open(&engine, "S003");
    let seeded = session.history();

    // Act
    clock.advance_ms(2_000);
    sleep_ticks(HISTORY_PERIOD, 1).await;
    let after_first = session.history();
    clock.advance_ms(2_000);
    sleep(HISTORY_PERIOD).await;
    let after_second = session.history();

    // Assert
    assert_eq!(source.call_count("S003"), 2);
    assert_eq!(source.calls().len(), 2);

    assert_eq!(after_first.len(), 30);
    assert_eq!(after_first.first(), seeded.iter().nth(1));
    assert_eq!(after_first.latest().map(|p| p.timestamp_ms), Some(NOW_MS + 2_000));

    let stamps: Vec<i64> = after_second.iter().rev().take(3).map(|p| p.timestamp_ms).collect();
    assert_eq!(stamps, vec![NOW_MS + 4_000, NOW_MS + 2_000, NOW_MS]);
    assert_eq!(after_second.first(), seeded.iter().nth(2));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_snapshot_formats_values_and_chart() -> anyhow::Result<()> {
    let engine = engine_with(ScriptedSource::new(), ManualClock::at(NOW_MS))?;
    let session = open(&engine, "S003");

    let view = session.snapshot()?;

    assert_eq!(view.reading_display, "0.80 g");
    assert_eq!(view.average_display, "0.30 g");
    assert_eq!(view.chart.points.len(), 30);
    assert_eq!(view.chart.warning_line, 0.5);
    assert_eq!(view.chart.danger_line, 0.7);
    assert_eq!(view.chart.line_tier, StatusTier::Danger);
    assert_eq!(view.chart.points.last().map(|p| p.time.as_str()), Some("14:32"));
    assert_eq!(view.chart.points[0].time, "14:03");
    let alert_ids: Vec<&str> = view.alerts.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(alert_ids, vec!["A001", "A003"]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_drop_cancels_both_tasks() -> anyhow::Result<()> {
    // Arrange
    let source = ScriptedSource::new();
    let engine = engine_with(source.clone(), ManualClock::at(NOW_MS))?;
    let session = open(&engine, "S002");
    let history = session.history();
    sleep_ticks(Duration::from_millis(5_000), 1).await;
    assert_eq!(source.calls().len(), 1);

    // Act
    drop(session);
    sleep(Duration::from_secs(60)).await;

    // Assert
    assert_eq!(source.calls().len(), 1);
    assert_eq!(history.len(), 30);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_stop_ends_session() -> anyhow::Result<()> {
    let source = ScriptedSource::new();
    let engine = engine_with(source.clone(), ManualClock::at(NOW_MS))?;
    let session = open(&engine, "S004");
    assert!(session.is_running());

    tokio::time::timeout(Duration::from_secs(1), session.stop()).await?;
    sleep(Duration::from_secs(30)).await;

    assert!(source.calls().is_empty());
    Ok(())
}
