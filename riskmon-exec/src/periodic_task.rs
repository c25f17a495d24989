// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Periodic task registration with exactly-once teardown.
//!
//! A [`PeriodicTask`] replaces an implicit repeating timer: registering one
//! spawns a background task that sleeps for the period and then runs the tick
//! closure, forever, until the returned handle is cancelled. Ticks run to
//! completion; cancellation is only observed between ticks.

use core::sync::atomic::{AtomicBool, Ordering};
use core::time::Duration;
use riskmon_runtime::Timer;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Shortest period a task may be registered with.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Handle to a registered periodic task.
///
/// The task is cancelled when the handle is dropped or when [`cancel`](Self::cancel)
/// is called, whichever comes first. Teardown happens exactly once: later calls
/// and the eventual drop are no-ops.
///
/// # Example
///
/// ```rust
/// use riskmon_exec::PeriodicTask;
/// use riskmon_runtime::impls::tokio::TokioTimer;
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() {
/// let ticks = Arc::new(AtomicU32::new(0));
/// let counter = ticks.clone();
///
/// let task = PeriodicTask::spawn("counter", Duration::from_millis(10), TokioTimer, move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// tokio::time::sleep(Duration::from_millis(35)).await;
/// assert!(task.cancel());
/// assert!(!task.cancel());
/// # }
/// ```
#[derive(Debug)]
pub struct PeriodicTask {
    name: String,
    period: Duration,
    cancel: CancellationToken,
    torn_down: AtomicBool,
    handle: Option<JoinHandle<()>>,
}

impl PeriodicTask {
    /// Register `tick` to run every `period` on the Tokio runtime.
    ///
    /// The first tick fires one full period after registration. Periods below
    /// one millisecond are raised to one millisecond.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn spawn<T, F>(name: impl Into<String>, period: Duration, timer: T, tick: F) -> Self
    where
        T: Timer,
        F: FnMut() + Send + 'static,
    {
        Self::spawn_with_token(name, period, timer, CancellationToken::new(), tick)
    }

    /// Like [`spawn`](Self::spawn), with the task also stopping when `parent` is cancelled.
    pub fn spawn_with_token<T, F>(
        name: impl Into<String>,
        period: Duration,
        timer: T,
        parent: CancellationToken,
        mut tick: F,
    ) -> Self
    where
        T: Timer,
        F: FnMut() + Send + 'static,
    {
        let name = name.into();
        let period = period.max(MIN_PERIOD);
        let cancel = parent.child_token();
        let token = cancel.clone();
        let task_name = name.clone();

        let handle = tokio::spawn(async move {
            debug!(task = %task_name, period_ms = period.as_millis() as u64, "periodic task started");
            let mut ticks: u64 = 0;

            loop {
                tokio::select! {
                    biased;
                    () = token.cancelled() => break,
                    () = timer.sleep_future(period) => {
                        ticks += 1;
                        tick();
                    }
                }
            }

            debug!(task = %task_name, ticks, "periodic task stopped");
        });

        Self {
            name,
            period,
            cancel,
            torn_down: AtomicBool::new(false),
            handle: Some(handle),
        }
    }

    /// Cancel the task.
    ///
    /// Returns `true` for the call that performed the teardown and `false`
    /// for every later call. The task stops before its next tick.
    pub fn cancel(&self) -> bool {
        if self.torn_down.swap(true, Ordering::AcqRel) {
            return false;
        }

        self.cancel.cancel();
        info!(task = %self.name, "periodic task cancelled");
        true
    }

    /// Cancel the task and wait until its loop has exited.
    pub async fn stop(mut self) {
        self.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.torn_down.load(Ordering::Acquire) || self.cancel.is_cancelled()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn period(&self) -> Duration {
        self.period
    }
}

impl Drop for PeriodicTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
