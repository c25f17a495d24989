// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use riskmon_exec::{CancellationToken, PeriodicTask};
use riskmon_runtime::impls::tokio::TokioTimer;
use riskmon_test_utils::helpers::settle;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

fn counting_task(name: &str, period_ms: u64) -> (PeriodicTask, Arc<AtomicU32>) {
    let ticks = Arc::new(AtomicU32::new(0));
    let counter = ticks.clone();
    let task = PeriodicTask::spawn(name, Duration::from_millis(period_ms), TokioTimer, move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (task, ticks)
}

#[tokio::test(start_paused = true)]
async fn test_ticks_once_per_period() {
    // Arrange
    let (task, ticks) = counting_task("reading", 2_000);

    // Act
    sleep(Duration::from_millis(1_900)).await;
    let before_first = ticks.load(Ordering::SeqCst);
    sleep(Duration::from_millis(4_200)).await;

    // Assert
    assert_eq!(before_first, 0);
    assert_eq!(ticks.load(Ordering::SeqCst), 3);
    assert_eq!(task.period(), Duration::from_millis(2_000));
    assert_eq!(task.name(), "reading");
}

#[tokio::test(start_paused = true)]
async fn test_cancel_stops_ticking() {
    // Arrange
    let (task, ticks) = counting_task("dashboard", 3_000);
    sleep(Duration::from_millis(6_100)).await;
    assert_eq!(ticks.load(Ordering::SeqCst), 2);

    // Act
    task.cancel();
    sleep(Duration::from_millis(30_000)).await;

    // Assert
    assert_eq!(ticks.load(Ordering::SeqCst), 2);
    assert!(task.is_cancelled());
}

#[tokio::test(start_paused = true)]
async fn test_drop_cancels_task() {
    // Arrange
    let (task, ticks) = counting_task("history", 2_000);
    sleep(Duration::from_millis(2_100)).await;

    // Act
    drop(task);
    sleep(Duration::from_millis(20_000)).await;

    // Assert
    assert_eq!(ticks.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_teardown_happens_exactly_once() {
    let (task, _ticks) = counting_task("once", 2_000);
    settle().await;

    assert!(!task.is_cancelled());
    assert!(task.cancel());
    assert!(!task.cancel());
    assert!(!task.cancel());
}

#[tokio::test(start_paused = true)]
async fn test_parent_token_cancels_child_tasks() {
    // Arrange
    let parent = CancellationToken::new();
    let ticks = Arc::new(AtomicU32::new(0));
    let first = ticks.clone();
    let second = ticks.clone();
    let a = PeriodicTask::spawn_with_token(
        "a",
        Duration::from_millis(1_000),
        TokioTimer,
        parent.clone(),
        move || {
            first.fetch_add(1, Ordering::SeqCst);
        },
    );
    let _b = PeriodicTask::spawn_with_token(
        "b",
        Duration::from_millis(1_000),
        TokioTimer,
        parent.clone(),
        move || {
            second.fetch_add(1, Ordering::SeqCst);
        },
    );
    sleep(Duration::from_millis(1_500)).await;
    assert_eq!(ticks.load(Ordering::SeqCst), 2);

    // Act
    parent.cancel();
    sleep(Duration::from_millis(10_000)).await;

    // Assert
    assert_eq!(ticks.load(Ordering::SeqCst), 2);
    assert!(a.is_cancelled());
}

#[tokio::test(start_paused = true)]
async fn test_stop_waits_for_loop_exit() -> anyhow::Result<()> {
    let (task, ticks) = counting_task("stop", 500);
    sleep(Duration::from_millis(1_200)).await;

    tokio::time::timeout(Duration::from_secs(1), task.stop()).await?;

    sleep(Duration::from_millis(5_000)).await;
    assert_eq!(ticks.load(Ordering::SeqCst), 2);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_zero_period_is_clamped() {
    let (task, ticks) = counting_task("fast", 0);
    assert_eq!(task.period(), Duration::from_millis(1));

    sleep(Duration::from_millis(10)).await;
    task.cancel();

    let observed = ticks.load(Ordering::SeqCst);
    assert!((1..=11).contains(&observed), "observed {observed} ticks");
}
