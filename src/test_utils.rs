//! Shared test fixtures for building sessions and simulating play.

use crate::audio::{GameClock, VirtualTransport};
use crate::beatmap::Beatmap;
use crate::config::EngineConfig;
use crate::input::KeyBindings;
use crate::session::{GameSession, Judgement, SessionConfig};

/// Typing text used by session fixtures; starts with the lane-0 key.
pub const TEST_TEXT: &str = "dfjk dfjk";

/// Session on a manually-advanced transport, from bare `(time_ms, lane)`
/// pairs. Returns the session and the transport handle driving its clock.
pub fn headless_session(pairs: &[(f64, usize)]) -> (GameSession, VirtualTransport) {
    headless_session_with_text(pairs, TEST_TEXT)
}

/// Same as [`headless_session`] with an explicit typing text.
pub fn headless_session_with_text(
    pairs: &[(f64, usize)],
    text: &str,
) -> (GameSession, VirtualTransport) {
    let (clock, handle) = GameClock::headless(60_000.0);
    let session = GameSession::new(
        clock,
        SessionConfig {
            beatmap: Beatmap::from_pairs(pairs, 4).unwrap(),
            text: text.to_string(),
            engine: EngineConfig::default(),
            bindings: KeyBindings::default(),
        },
    );
    (session, handle)
}

/// Press a key and return the judgement, if any.
pub fn press_key(session: &mut GameSession, key: &str) -> Option<Judgement> {
    session.key_down(key)
}
