// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use riskmon_runtime::impls::tokio::TokioTimer;
use riskmon_runtime::Timer;
use std::time::Duration;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_tokio_timer_sleeps_for_duration() {
    let timer = TokioTimer;
    let start = Instant::now();

    timer.sleep_future(Duration::from_millis(2_000)).await;

    assert!(start.elapsed() >= Duration::from_millis(2_000));
    assert!(start.elapsed() < Duration::from_millis(2_100));
}
