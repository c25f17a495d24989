// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Reading sources.
//!
//! The engine asks a [`ReadingSource`] for the next value of a sensor and does
//! not care where it comes from. [`RandomWalkSource`] is the simulated feed;
//! a real ingestion adapter would implement the same trait.

pub mod random_walk;
pub mod reading_source;
pub mod seed;

pub use self::random_walk::{advance, advance_with, RandomWalkSource, MAX_STEP};
pub use self::reading_source::ReadingSource;
pub use self::seed::{seed_history, SeedParams};
