//! Results persistence seam.
//!
//! The engine makes a single best-effort submission at session end. Failure
//! is surfaced as a non-blocking notice and never retried; the displayed
//! results stay valid either way.

mod http;

pub use http::HttpResultsSink;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Immutable final results of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub final_score: u32,
    pub max_combo: u32,
    pub accuracy: f64,
    pub hit_count: u32,
    pub miss_count: u32,
    pub typed_correct: u32,
    pub typed_missed: u32,
    pub words_typed: u32,
    pub wpm: f64,
}

/// Destination for the final summary (leaderboard backend, local store).
pub trait ResultsSink {
    fn submit(&mut self, summary: &SessionSummary) -> Result<()>;
}

/// In-memory sink recording submissions, for tests and offline runs.
#[derive(Debug, Default)]
pub struct MemorySink {
    submissions: Vec<SessionSummary>,
    fail_next: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next submission fail, to exercise the notice path.
    pub fn fail_next(&mut self) {
        self.fail_next = true;
    }

    pub fn submissions(&self) -> &[SessionSummary] {
        &self.submissions
    }
}

impl ResultsSink for MemorySink {
    fn submit(&mut self, summary: &SessionSummary) -> Result<()> {
        if self.fail_next {
            self.fail_next = false;
            anyhow::bail!("sink rejected submission");
        }
        self.submissions.push(summary.clone());
        Ok(())
    }
}
