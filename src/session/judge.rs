use crate::config::EngineConfig;

use super::scheduler::{ActiveNote, NoteState};

/// Hit quality of a judged note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    Perfect,
    Good,
    Miss,
}

impl Quality {
    /// Returns true if this quality continues combo.
    pub fn continues_combo(self) -> bool {
        matches!(self, Self::Perfect | Self::Good)
    }

    /// Returns the index for this quality (for array indexing).
    pub fn index(self) -> usize {
        match self {
            Self::Perfect => 0,
            Self::Good => 1,
            Self::Miss => 2,
        }
    }
}

/// Result of a single judgement. Produced exactly once per note: either from
/// a key press landing inside the hit window, or from the scheduler's expiry
/// path when no press arrives.
#[derive(Debug, Clone)]
pub struct Judgement {
    pub note_id: u32,
    pub lane: usize,
    pub quality: Quality,
    /// Press (or expiry) time minus scheduled time.
    pub delta_ms: f64,
    /// Clock snapshot the judgement was made at.
    pub time_ms: f64,
}

/// Judge timing windows in milliseconds.
///
/// Boundaries are strict: a delta of exactly `perfect_ms` classifies as Good,
/// exactly `hit_ms` matches nothing.
#[derive(Debug, Clone)]
pub struct JudgeWindow {
    pub perfect_ms: f64,
    pub hit_ms: f64,
}

impl JudgeWindow {
    /// Reference windows: perfect 50ms, hit 150ms.
    pub fn base() -> Self {
        Self {
            perfect_ms: 50.0,
            hit_ms: 150.0,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            perfect_ms: config.perfect_window_ms,
            hit_ms: config.hit_window_ms,
        }
    }

    /// Classify an absolute timing distance. `None` means the press matches
    /// nothing; the note stays pending and expires via the scheduler.
    pub fn classify(&self, diff_abs: f64) -> Option<Quality> {
        if diff_abs < self.perfect_ms {
            Some(Quality::Perfect)
        } else if diff_abs < self.hit_ms {
            Some(Quality::Good)
        } else {
            None
        }
    }
}

impl Default for JudgeWindow {
    fn default() -> Self {
        Self::base()
    }
}

/// Judges key presses against the pending active-note set.
#[derive(Debug, Clone)]
pub struct Judge {
    window: JudgeWindow,
}

impl Judge {
    pub fn new(window: JudgeWindow) -> Self {
        Self { window }
    }

    pub fn window(&self) -> &JudgeWindow {
        &self.window
    }

    /// Judge a key press at `press_ms` against the notes in `lane`.
    ///
    /// Selects the pending note minimizing `|press_ms - time_ms|`, tie broken
    /// toward the earlier scheduled time. If the minimal distance is inside
    /// the hit window the note transitions to `Judged`, is removed from the
    /// active set, and the judgement is returned. A press matching nothing is
    /// a no-op: the note expires later through the scheduler's miss path.
    pub fn judge_press(
        &self,
        lane: usize,
        press_ms: f64,
        active: &mut Vec<ActiveNote>,
    ) -> Option<Judgement> {
        let mut best_match: Option<(usize, f64)> = None;

        // Active notes are admitted in schedule order, so the first note at a
        // given distance is the earlier one and the strict `<` keeps it.
        for (index, note) in active.iter().enumerate() {
            if note.lane != lane {
                continue;
            }
            debug_assert_eq!(note.state, NoteState::Pending);

            let diff_abs = (press_ms - note.time_ms).abs();
            if best_match.is_none_or(|(_, best)| diff_abs < best) {
                best_match = Some((index, diff_abs));
            }
        }

        let (index, diff_abs) = best_match?;
        let quality = self.window.classify(diff_abs)?;

        // Select first, then remove: the set is never mutated mid-scan.
        let mut note = active.remove(index);
        note.state = NoteState::Judged;

        Some(Judgement {
            note_id: note.event_id,
            lane,
            quality,
            delta_ms: press_ms - note.time_ms,
            time_ms: press_ms,
        })
    }
}

impl Default for Judge {
    fn default() -> Self {
        Self::new(JudgeWindow::base())
    }
}
