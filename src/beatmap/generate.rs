//! Built-in chart generators.
//!
//! All generators start after the [`LEAD_IN_MS`] silence and produce events
//! that already satisfy the beatmap invariants.

use super::{BeatEvent, Beatmap, LEAD_IN_MS};

/// Milliseconds between burst groups.
const BURST_SPACING_MS: f64 = 3000.0;

/// Notes per burst group.
const BURST_LENGTH: usize = 8;

/// Milliseconds between notes within a burst.
const BURST_STEP_MS: f64 = 150.0;

/// Generate a steady chart at `60000/bpm` ms intervals, cycling lanes
/// round-robin from lane 0.
///
/// Degenerate input (non-positive bpm, duration not past the lead-in) yields
/// an empty beatmap rather than an error.
pub fn from_tempo(bpm: f64, duration_ms: f64, lane_count: usize) -> Beatmap {
    let mut events = Vec::new();
    if bpm > 0.0 && lane_count > 0 {
        let beat_ms = 60_000.0 / bpm;
        let mut time_ms = LEAD_IN_MS;
        let mut index = 0usize;
        while time_ms < duration_ms {
            events.push(BeatEvent {
                id: index as u32,
                time_ms,
                lane: index % lane_count,
                hint: format!("Beat {}", index + 1),
            });
            time_ms += beat_ms;
            index += 1;
        }
    }
    Beatmap::from_generated(events, lane_count.max(1))
}

/// Generate the four-phase test chart: alternating taps, quad taps, rapid
/// fire, then a slow stretch. Lane indices fold into `lane_count`.
pub fn pattern(lane_count: usize) -> Beatmap {
    let lane_count = lane_count.max(1);
    let mut events = Vec::new();
    let mut id = 0u32;
    let mut push = |events: &mut Vec<BeatEvent>, time_ms: f64, lane: usize, hint: &str| {
        events.push(BeatEvent {
            id,
            time_ms,
            lane: lane % lane_count,
            hint: hint.to_string(),
        });
        id += 1;
    };

    // Phase 1: alternating outer lanes.
    for i in 0..4 {
        let lane = if i % 2 == 0 { 0 } else { 3 };
        push(&mut events, LEAD_IN_MS + i as f64 * 500.0, lane, "Pattern 1");
    }

    // Phase 2: two quad taps sweeping every lane.
    for rep in 0..2 {
        let base = 6000.0 + rep as f64 * 2000.0;
        for lane in 0..4 {
            push(&mut events, base + lane as f64 * 400.0, lane, "Quad tap");
        }
    }

    // Phase 3: rapid fire.
    for i in 0..8 {
        push(&mut events, 10_000.0 + i as f64 * 200.0, i % 4, "Rapid");
    }

    // Phase 4: slow stretch.
    for (i, lane) in [0usize, 2, 3, 1].into_iter().enumerate() {
        push(&mut events, 14_000.0 + i as f64 * 1500.0, lane, "Slow");
    }

    Beatmap::from_generated(events, lane_count)
}

/// Generate `burst_count` bursts of eight rapid notes each, one burst every
/// three seconds after the lead-in.
pub fn bursts(burst_count: usize, lane_count: usize) -> Beatmap {
    let lane_count = lane_count.max(1);
    let mut events = Vec::new();
    let mut id = 0u32;
    for burst in 0..burst_count {
        let start_ms = LEAD_IN_MS + burst as f64 * BURST_SPACING_MS;
        for i in 0..BURST_LENGTH {
            events.push(BeatEvent {
                id,
                time_ms: start_ms + i as f64 * BURST_STEP_MS,
                lane: i % lane_count,
                hint: format!("Burst {}", burst + 1),
            });
            id += 1;
        }
    }
    Beatmap::from_generated(events, lane_count)
}
