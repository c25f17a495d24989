// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sliding window of recent readings.

use crate::ReadingPoint;
use std::collections::VecDeque;

/// Default number of points retained by a [`ReadingHistory`].
pub const HISTORY_CAPACITY: usize = 30;

/// Ordered, most-recent-last window of [`ReadingPoint`]s.
///
/// Appending past capacity evicts from the front, so the window never holds
/// more than `capacity` points and the point just appended is always the last
/// one retained.
///
/// # Example
///
/// ```
/// use riskmon_core::{ReadingHistory, ReadingPoint};
///
/// let mut history = ReadingHistory::with_capacity(2);
/// history.push(ReadingPoint::new(1, 1.0));
/// history.push(ReadingPoint::new(2, 2.0));
/// history.push(ReadingPoint::new(3, 3.0));
///
/// let values: Vec<f64> = history.iter().map(|p| p.value).collect();
/// assert_eq!(values, vec![2.0, 3.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingHistory {
    points: VecDeque<ReadingPoint>,
    capacity: usize,
}

impl ReadingHistory {
    /// Create an empty window holding [`HISTORY_CAPACITY`] points.
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// Create an empty window holding `capacity` points.
    ///
    /// A capacity of zero is raised to one so the latest point is always kept.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Build a window from existing points, keeping only the most recent `capacity`.
    pub fn from_points(points: impl IntoIterator<Item = ReadingPoint>, capacity: usize) -> Self {
        let mut history = Self::with_capacity(capacity);
        for point in points {
            history.push(point);
        }
        history
    }

    /// Append `point` at the end and evict from the front past capacity.
    pub fn push(&mut self, point: ReadingPoint) {
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    /// Owned form of [`push`](Self::push).
    #[must_use]
    pub fn append(mut self, point: ReadingPoint) -> Self {
        self.push(point);
        self
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn first(&self) -> Option<&ReadingPoint> {
        self.points.front()
    }

    pub fn latest(&self) -> Option<&ReadingPoint> {
        self.points.back()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ReadingPoint> + ExactSizeIterator + '_ {
        self.points.iter()
    }

    pub fn to_vec(&self) -> Vec<ReadingPoint> {
        self.points.iter().copied().collect()
    }
}

impl Default for ReadingHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<ReadingPoint> for ReadingHistory {
    fn extend<I: IntoIterator<Item = ReadingPoint>>(&mut self, iter: I) {
        for point in iter {
            self.push(point);
        }
    }
}
