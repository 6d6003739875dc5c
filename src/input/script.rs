//! Scripted key presses for autoplay-style simulation.

use rand::Rng;

use crate::beatmap::Beatmap;

use super::bindings::KeyBindings;

/// One pre-scripted key press.
#[derive(Debug, Clone)]
pub struct KeyPress {
    pub time_ms: f64,
    pub key: String,
}

/// Time-ordered press script consumed with a monotonic cursor.
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    presses: Vec<KeyPress>,
    cursor: usize,
}

impl ScriptedKeys {
    /// Create a script, sorting the presses by time.
    pub fn new(mut presses: Vec<KeyPress>) -> Self {
        presses.sort_by(|a, b| a.time_ms.total_cmp(&b.time_ms));
        Self { presses, cursor: 0 }
    }

    /// Drain every press scheduled at or before `now_ms`, in order.
    pub fn poll_up_to(&mut self, now_ms: f64) -> Vec<KeyPress> {
        let start = self.cursor;
        while self.cursor < self.presses.len() && self.presses[self.cursor].time_ms <= now_ms {
            self.cursor += 1;
        }
        self.presses[start..self.cursor].to_vec()
    }

    /// Presses not yet polled.
    pub fn remaining(&self) -> usize {
        self.presses.len() - self.cursor
    }
}

/// Script a press for every beatmap event through its bound key, jittered
/// uniformly within `±jitter_ms`, skipping events with probability
/// `drop_rate` to simulate an imperfect player.
pub fn presses_for_beatmap(
    beatmap: &Beatmap,
    bindings: &KeyBindings,
    jitter_ms: f64,
    drop_rate: f64,
    rng: &mut impl Rng,
) -> Vec<KeyPress> {
    let mut presses = Vec::with_capacity(beatmap.len());
    for event in beatmap.events() {
        if drop_rate > 0.0 && rng.gen_bool(drop_rate.clamp(0.0, 1.0)) {
            continue;
        }
        let Some(key) = bindings.key_for(event.lane) else {
            continue;
        };
        let offset = if jitter_ms > 0.0 {
            rng.gen_range(-jitter_ms..=jitter_ms)
        } else {
            0.0
        };
        presses.push(KeyPress {
            time_ms: (event.time_ms + offset).max(0.0),
            key: key.to_string(),
        });
    }
    presses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beatmap::generate;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn press(time_ms: f64, key: &str) -> KeyPress {
        KeyPress {
            time_ms,
            key: key.to_string(),
        }
    }

    #[test]
    fn poll_drains_in_time_order() {
        let mut script = ScriptedKeys::new(vec![
            press(300.0, "j"),
            press(100.0, "d"),
            press(200.0, "f"),
        ]);

        let first = script.poll_up_to(150.0);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].key, "d");

        let rest = script.poll_up_to(1000.0);
        assert_eq!(rest.len(), 2);
        assert_eq!(rest[0].key, "f");
        assert_eq!(rest[1].key, "j");
        assert_eq!(script.remaining(), 0);
    }

    #[test]
    fn poll_never_replays_a_press() {
        let mut script = ScriptedKeys::new(vec![press(100.0, "d")]);
        assert_eq!(script.poll_up_to(100.0).len(), 1);
        assert_eq!(script.poll_up_to(100.0).len(), 0);
        assert_eq!(script.poll_up_to(5000.0).len(), 0);
    }

    #[test]
    fn scripted_presses_track_beatmap_lanes() {
        let beatmap = generate::from_tempo(120.0, 10_000.0, 4);
        let bindings = KeyBindings::default();
        let mut rng = SmallRng::seed_from_u64(42);

        let presses = presses_for_beatmap(&beatmap, &bindings, 0.0, 0.0, &mut rng);
        assert_eq!(presses.len(), beatmap.len());
        for (press, event) in presses.iter().zip(beatmap.events()) {
            assert_eq!(press.time_ms, event.time_ms);
            assert_eq!(bindings.lane_for(&press.key), Some(event.lane));
        }
    }

    #[test]
    fn drop_rate_skips_a_share_of_presses() {
        let beatmap = generate::from_tempo(240.0, 60_000.0, 4);
        let bindings = KeyBindings::default();
        let mut rng = SmallRng::seed_from_u64(42);

        let presses = presses_for_beatmap(&beatmap, &bindings, 0.0, 0.5, &mut rng);
        assert!(presses.len() < beatmap.len());
        assert!(!presses.is_empty());
    }

    #[test]
    fn jitter_stays_within_bounds() {
        let beatmap = generate::from_tempo(120.0, 30_000.0, 4);
        let bindings = KeyBindings::default();
        let mut rng = SmallRng::seed_from_u64(7);

        let presses = presses_for_beatmap(&beatmap, &bindings, 40.0, 0.0, &mut rng);
        for (press, event) in presses.iter().zip(beatmap.events()) {
            assert!((press.time_ms - event.time_ms).abs() <= 40.0);
        }
    }
}
