// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for riskmon.
//!
//! - [`fixtures`] builds the four reference sensors and ready-made histories.
//! - [`ScriptedSource`] is a [`ReadingSource`](riskmon_source::ReadingSource)
//!   that replays a fixed list of readings, so tier transitions can be driven
//!   deterministically.
//! - [`ManualClock`] is a wall clock that only moves when told to.
//! - [`helpers`] holds async helpers for paused-time tests.

pub mod fixtures;
pub mod helpers;
pub mod manual_clock;
pub mod scripted_source;

pub use manual_clock::ManualClock;
pub use scripted_source::ScriptedSource;
