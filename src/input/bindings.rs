use serde::{Deserialize, Serialize};

/// Keyboard keys bound to lanes, compared case-insensitively against the raw
/// key identifiers the host delivers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyBindings {
    /// Lane keys indexed by lane.
    pub lanes: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            lanes: vec![
                "d".to_string(),
                "f".to_string(),
                "j".to_string(),
                "k".to_string(),
            ],
        }
    }
}

impl KeyBindings {
    /// Number of bound lanes.
    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    /// Map a raw key identifier to its lane. Unbound keys return `None` and
    /// are ignored by the judgement path.
    pub fn lane_for(&self, key: &str) -> Option<usize> {
        self.lanes
            .iter()
            .position(|bound| bound.eq_ignore_ascii_case(key))
    }

    /// Key bound to a lane, for input scripting.
    pub fn key_for(&self, lane: usize) -> Option<&str> {
        self.lanes.get(lane).map(String::as_str)
    }
}
