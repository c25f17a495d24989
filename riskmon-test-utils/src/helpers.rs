// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;
use tokio::task::yield_now;
use tokio::time::sleep;

/// Yield enough times for freshly spawned tasks to reach their first await.
pub async fn settle() {
    for _ in 0..16 {
        yield_now().await;
    }
}

/// Sleep through `ticks` whole periods plus a small margin.
///
/// Under a paused clock this lands just after the `ticks`-th firing of a task
/// registered with `period` at the current instant.
pub async fn sleep_ticks(period: Duration, ticks: u32) {
    sleep(period * ticks + Duration::from_millis(50)).await;
}
