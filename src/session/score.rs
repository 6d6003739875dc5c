use crate::config::EngineConfig;

use super::judge::Quality;

/// Score, combo, and hit/miss counters, folded from judgements.
///
/// This reducer is the only mutation path for the counters: every judgement,
/// hit or miss, goes through [`ScoreBoard::apply`].
#[derive(Debug, Clone)]
pub struct ScoreBoard {
    pub score: u32,
    pub combo: u32,
    pub max_combo: u32,
    pub hit_count: u32,
    pub miss_count: u32,
    perfect_points: u32,
    good_points: u32,
}

impl ScoreBoard {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            score: 0,
            combo: 0,
            max_combo: 0,
            hit_count: 0,
            miss_count: 0,
            perfect_points: config.perfect_points,
            good_points: config.good_points,
        }
    }

    pub fn apply(&mut self, quality: Quality) {
        match quality {
            Quality::Perfect => {
                self.score += self.perfect_points;
                self.combo += 1;
                self.hit_count += 1;
            }
            Quality::Good => {
                self.score += self.good_points;
                self.combo += 1;
                self.hit_count += 1;
            }
            Quality::Miss => {
                self.combo = 0;
                self.miss_count += 1;
            }
        }

        self.max_combo = self.max_combo.max(self.combo);
    }

    /// Hit percentage over all judged notes. 100 before anything is judged.
    pub fn accuracy(&self) -> f64 {
        let total = self.hit_count + self.miss_count;
        if total == 0 {
            return 100.0;
        }
        (self.hit_count as f64 / total as f64) * 100.0
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.combo = 0;
        self.max_combo = 0;
        self.hit_count = 0;
        self.miss_count = 0;
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
