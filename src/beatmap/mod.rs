//! Beatmap model: the immutable, time-ordered schedule of note events.
//!
//! This module provides:
//! - [`BeatEvent`]: one scheduled note (time, lane, display hint)
//! - [`Beatmap`]: validated event sequence with a fixed lane count
//! - [`generate`]: tempo, pattern, and burst chart generators

pub mod generate;

use serde::Serialize;

use crate::error::EngineError;

/// Number of lanes in the reference playfield (keys d/f/j/k).
pub const DEFAULT_LANE_COUNT: usize = 4;

/// Silent offset before the first generated beat, in milliseconds.
pub const LEAD_IN_MS: f64 = 2000.0;

/// A scheduled note event. Immutable once the beatmap is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeatEvent {
    /// Unique id within the beatmap.
    pub id: u32,
    /// Scheduled judgement time in milliseconds.
    pub time_ms: f64,
    /// Lane index in `[0, lane_count)`.
    pub lane: usize,
    /// Display hint shown alongside the note.
    pub hint: String,
}

/// Ordered, immutable sequence of beat events over a fixed number of lanes.
///
/// Invariants, enforced at construction: `time_ms` is non-decreasing and every
/// lane index is below `lane_count`.
#[derive(Debug, Clone, Serialize)]
pub struct Beatmap {
    events: Vec<BeatEvent>,
    lane_count: usize,
}

impl Beatmap {
    /// Build a beatmap from externally supplied events, validating the
    /// ordering and lane-range invariants.
    pub fn from_events(events: Vec<BeatEvent>, lane_count: usize) -> Result<Self, EngineError> {
        validate(&events, lane_count)?;
        Ok(Self { events, lane_count })
    }

    /// Build a beatmap from bare `(time_ms, lane)` pairs, assigning ids in
    /// order and leaving hints empty.
    pub fn from_pairs(pairs: &[(f64, usize)], lane_count: usize) -> Result<Self, EngineError> {
        let events = pairs
            .iter()
            .enumerate()
            .map(|(i, &(time_ms, lane))| BeatEvent {
                id: i as u32,
                time_ms,
                lane,
                hint: String::new(),
            })
            .collect();
        Self::from_events(events, lane_count)
    }

    /// Constructor for the built-in generators, whose output is ordered by
    /// construction.
    pub(crate) fn from_generated(events: Vec<BeatEvent>, lane_count: usize) -> Self {
        debug_assert!(validate(&events, lane_count).is_ok());
        Self { events, lane_count }
    }

    pub fn events(&self) -> &[BeatEvent] {
        &self.events
    }

    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Scheduled time of the last event, if any.
    pub fn last_time_ms(&self) -> Option<f64> {
        self.events.last().map(|e| e.time_ms)
    }
}

fn validate(events: &[BeatEvent], lane_count: usize) -> Result<(), EngineError> {
    let mut prev_time = f64::NEG_INFINITY;
    for (index, event) in events.iter().enumerate() {
        if event.time_ms < prev_time {
            return Err(EngineError::UnsortedBeatmap { index });
        }
        if event.lane >= lane_count {
            return Err(EngineError::LaneOutOfRange {
                index,
                lane: event.lane,
                lane_count,
            });
        }
        prev_time = event.time_ms;
    }
    Ok(())
}
