// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Time sources for the simulation.
//!
//! Two separate concerns live here: a [`Timer`] that drives periodic tasks on
//! the async runtime, and a [`Clock`] that stamps readings with wall-clock
//! milliseconds. Keeping them apart lets tests pause the runtime clock while
//! controlling the timestamps written into histories.

pub mod clock;
pub mod impls;
pub mod timer;

pub use self::clock::{format_clock_time, format_datetime, Clock};
pub use self::timer::Timer;
