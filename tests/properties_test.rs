//! Property tests for beatmap invariants and judgement aggregation.

use proptest::prelude::*;

use notebeat::beatmap::{Beatmap, generate};
use notebeat::config::EngineConfig;
use notebeat::session::{Judge, JudgeWindow, NoteScheduler, Quality, ScoreBoard};

// proptest assertions return early with a TestCaseError, so the helper
// mirrors that shape.
fn assert_beatmap_invariants(beatmap: &Beatmap) -> Result<(), TestCaseError> {
    for pair in beatmap.events().windows(2) {
        prop_assert!(pair[0].time_ms <= pair[1].time_ms);
    }
    for event in beatmap.events() {
        prop_assert!(event.lane < beatmap.lane_count());
    }
    Ok(())
}

proptest! {
    /// Every tempo chart is time-ordered with in-range lanes.
    #[test]
    fn tempo_charts_uphold_invariants(
        bpm in 30.0f64..300.0,
        duration_ms in 0.0f64..120_000.0,
        lane_count in 1usize..8,
    ) {
        let beatmap = generate::from_tempo(bpm, duration_ms, lane_count);
        assert_beatmap_invariants(&beatmap)?;
    }

    /// Burst charts uphold the same invariants.
    #[test]
    fn burst_charts_uphold_invariants(
        burst_count in 0usize..20,
        lane_count in 1usize..8,
    ) {
        let beatmap = generate::bursts(burst_count, lane_count);
        assert_beatmap_invariants(&beatmap)?;
    }

    /// Accuracy always equals hits over judged notes, or 100 with none.
    #[test]
    fn accuracy_recomputes_from_counters(
        qualities in prop::collection::vec(0u8..3, 0..200),
    ) {
        let mut board = ScoreBoard::default();
        for q in qualities {
            board.apply(match q {
                0 => Quality::Perfect,
                1 => Quality::Good,
                _ => Quality::Miss,
            });
        }

        let total = board.hit_count + board.miss_count;
        let expected = if total == 0 {
            100.0
        } else {
            board.hit_count as f64 / total as f64 * 100.0
        };
        prop_assert_eq!(board.accuracy(), expected);
    }

    /// A press sequence judges each note at most once, and every judgement
    /// lands inside the hit window.
    #[test]
    fn no_note_is_judged_twice(
        press_offsets in prop::collection::vec(-400.0f64..400.0, 0..30),
    ) {
        let beatmap = generate::from_tempo(240.0, 10_000.0, 4);
        let mut scheduler = NoteScheduler::new(&beatmap, &EngineConfig::default());
        let judge = Judge::new(JudgeWindow::base());

        // Admit everything up front, then fire presses around the midpoint.
        scheduler.admit(2_500.0);
        let mut judged_ids = std::collections::HashSet::new();
        for offset in press_offsets {
            let press_ms = 2_500.0 + offset;
            if let Some(judgement) = judge.judge_press(0, press_ms, scheduler.active_mut()) {
                prop_assert!(judged_ids.insert(judgement.note_id));
                prop_assert!((judgement.delta_ms).abs() < 150.0);
            }
        }
    }

    /// Judgements and expiries together resolve each event exactly once.
    #[test]
    fn every_event_resolves_exactly_once(hit_share in 0.0f64..1.0) {
        let beatmap = generate::from_tempo(120.0, 20_000.0, 4);
        let total = beatmap.len();
        let mut scheduler = NoteScheduler::new(&beatmap, &EngineConfig::default());
        let judge = Judge::new(JudgeWindow::base());
        let mut board = ScoreBoard::default();

        let hit_until = (total as f64 * hit_share) as usize;
        let events: Vec<(f64, usize)> = beatmap
            .events()
            .iter()
            .map(|e| (e.time_ms, e.lane))
            .collect();

        let mut t = 0.0;
        for (index, (time_ms, lane)) in events.iter().enumerate() {
            t = *time_ms;
            for judgement in scheduler.admit(t) {
                board.apply(judgement.quality);
            }
            for judgement in scheduler.expire(t) {
                board.apply(judgement.quality);
            }
            if index < hit_until
                && let Some(judgement) = judge.judge_press(*lane, t, scheduler.active_mut())
            {
                board.apply(judgement.quality);
            }
        }

        // Flush the stragglers.
        t += 10_000.0;
        for judgement in scheduler.admit(t) {
            board.apply(judgement.quality);
        }
        for judgement in scheduler.expire(t) {
            board.apply(judgement.quality);
        }

        prop_assert!(scheduler.is_exhausted());
        prop_assert_eq!((board.hit_count + board.miss_count) as usize, total);
    }
}
