//! Append-only judgement record for replay and debugging.

use super::judge::{Judgement, Quality};

/// Records every judgement in emit order. Never consulted by scoring.
#[derive(Debug, Default)]
pub struct JudgementHistory {
    entries: Vec<Judgement>,
}

impl JudgementHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorder pre-sized for a known note count.
    pub fn with_capacity(note_count: usize) -> Self {
        Self {
            entries: Vec::with_capacity(note_count),
        }
    }

    pub fn record(&mut self, judgement: Judgement) {
        self.entries.push(judgement);
    }

    pub fn entries(&self) -> &[Judgement] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Per-quality counts, indexed by [`Quality::index`].
    pub fn quality_counts(&self) -> [u32; 3] {
        let mut counts = [0u32; 3];
        for judgement in &self.entries {
            counts[judgement.quality.index()] += 1;
        }
        counts
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
