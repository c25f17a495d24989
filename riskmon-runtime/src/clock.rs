// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::DateTime;
use core::fmt::Debug;

/// Wall-clock source in milliseconds since the Unix epoch.
pub trait Clock: Send + Sync + Debug {
    fn now_millis(&self) -> i64;
}

/// `HH:MM` (24 hour, UTC) label for a chart axis.
///
/// Timestamps outside chrono's representable range yield `--:--`.
pub fn format_clock_time(timestamp_ms: i64) -> String {
    DateTime::from_timestamp_millis(timestamp_ms)
        .map_or_else(|| "--:--".to_string(), |t| t.format("%H:%M").to_string())
}

/// `YYYY-MM-DD HH:MM:SS` (UTC) label for alert entries.
pub fn format_datetime(timestamp_ms: i64) -> String {
    DateTime::from_timestamp_millis(timestamp_ms).map_or_else(
        || "--------- --:--:--".to_string(),
        |t| t.format("%Y-%m-%d %H:%M:%S").to_string(),
    )
}
