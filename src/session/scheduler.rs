use std::collections::HashSet;

use tracing::debug;

use crate::beatmap::Beatmap;
use crate::config::EngineConfig;

use super::judge::{Judgement, Quality};

/// Lifecycle of an active note. `Judged` and `Expired` are terminal: the note
/// leaves the active set immediately on either transition and is never revived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteState {
    /// Instantiated, awaiting a key press or expiry.
    Pending,
    /// Matched by a key press inside the hit window.
    Judged,
    /// Hit window elapsed with no matching press.
    Expired,
}

/// Live instance of a beat event, owned exclusively by the scheduler.
#[derive(Debug, Clone)]
pub struct ActiveNote {
    pub event_id: u32,
    pub lane: usize,
    pub time_ms: f64,
    pub hint: String,
    pub state: NoteState,
}

/// Instantiates beat events entering the look-ahead window and expires
/// pending notes whose hit window has lapsed.
///
/// A monotonic cursor walks the time-sorted events, so already-instantiated
/// prefixes are never rescanned; the seen-set keeps instantiation at-most-once
/// even across seeks.
pub struct NoteScheduler {
    events: Vec<ScheduledEvent>,
    cursor: usize,
    seen: HashSet<u32>,
    active: Vec<ActiveNote>,
    look_ahead_ms: f64,
    late_admit_ms: f64,
    expire_after_ms: f64,
}

#[derive(Debug, Clone)]
struct ScheduledEvent {
    id: u32,
    time_ms: f64,
    lane: usize,
    hint: String,
}

impl NoteScheduler {
    pub fn new(beatmap: &Beatmap, config: &EngineConfig) -> Self {
        let events = beatmap
            .events()
            .iter()
            .map(|e| ScheduledEvent {
                id: e.id,
                time_ms: e.time_ms,
                lane: e.lane,
                hint: e.hint.clone(),
            })
            .collect();

        Self {
            events,
            cursor: 0,
            seen: HashSet::new(),
            active: Vec::new(),
            look_ahead_ms: config.look_ahead_ms,
            late_admit_ms: config.late_admit_ms,
            expire_after_ms: config.fall_ms + config.expire_grace_ms,
        }
    }

    /// Instantiate every event whose scheduled time has entered the
    /// look-ahead window at snapshot `t`.
    ///
    /// Events the cursor passes that already fell out of the late-admit bound
    /// (a large tick gap or seek) are resolved directly as misses, keeping
    /// exactly one judgement per event.
    pub fn admit(&mut self, t: f64) -> Vec<Judgement> {
        let mut skipped = Vec::new();

        while self.cursor < self.events.len() {
            let event = &self.events[self.cursor];
            if event.time_ms > t + self.look_ahead_ms {
                break;
            }
            self.cursor += 1;

            if !self.seen.insert(event.id) {
                continue;
            }

            if event.time_ms < t - self.late_admit_ms {
                debug!(
                    event_id = event.id,
                    time_ms = event.time_ms,
                    "event past late-admit bound, resolving as miss"
                );
                skipped.push(Judgement {
                    note_id: event.id,
                    lane: event.lane,
                    quality: Quality::Miss,
                    delta_ms: t - event.time_ms,
                    time_ms: t,
                });
                continue;
            }

            debug!(event_id = event.id, time_ms = event.time_ms, "note admitted");
            self.active.push(ActiveNote {
                event_id: event.id,
                lane: event.lane,
                time_ms: event.time_ms,
                hint: event.hint.clone(),
                state: NoteState::Pending,
            });
        }

        skipped
    }

    /// Expire every pending note whose hit window lapsed before snapshot `t`,
    /// emitting a miss per note.
    pub fn expire(&mut self, t: f64) -> Vec<Judgement> {
        let expire_after_ms = self.expire_after_ms;
        let mut misses = Vec::new();

        // Collect indices first, then drain back-to-front: the scan never
        // mutates the set it is iterating.
        let lapsed: Vec<usize> = self
            .active
            .iter()
            .enumerate()
            .filter(|(_, note)| t - note.time_ms > expire_after_ms)
            .map(|(index, _)| index)
            .collect();

        for index in lapsed.into_iter().rev() {
            let mut note = self.active.remove(index);
            note.state = NoteState::Expired;
            debug!(event_id = note.event_id, time_ms = note.time_ms, "note expired");
            misses.push(Judgement {
                note_id: note.event_id,
                lane: note.lane,
                quality: Quality::Miss,
                delta_ms: t - note.time_ms,
                time_ms: t,
            });
        }

        // Emit in schedule order, not removal order.
        misses.reverse();
        misses
    }

    /// Pending notes, in schedule order.
    pub fn active(&self) -> &[ActiveNote] {
        &self.active
    }

    /// Mutable access for the judgement path.
    pub fn active_mut(&mut self) -> &mut Vec<ActiveNote> {
        &mut self.active
    }

    /// Whether every event has been instantiated and resolved.
    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.events.len() && self.active.is_empty()
    }

    /// Forget all progress, as when restarting a session.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.seen.clear();
        self.active.clear();
    }
}
