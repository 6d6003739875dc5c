use thiserror::Error;

/// Failure conditions of the engine. None of these are fatal: every variant
/// degrades to a safe session phase (`Ready` or `Ended`).
#[derive(Debug, Error)]
pub enum EngineError {
    /// Audio playback could not start (autoplay policy, missing source).
    /// The session stays in `Ready`; the caller may retry after a user gesture.
    #[error("playback blocked: audio transport refused to start")]
    PlaybackBlocked,

    /// An externally supplied beatmap was not sorted by scheduled time.
    #[error("beatmap event {index} is earlier than its predecessor")]
    UnsortedBeatmap { index: usize },

    /// An externally supplied beatmap referenced a lane outside the playfield.
    #[error("beatmap event {index} has lane {lane}, expected < {lane_count}")]
    LaneOutOfRange {
        index: usize,
        lane: usize,
        lane_count: usize,
    },

    /// The results sink rejected the final summary. The session results stay
    /// valid and displayed; the failure is only surfaced as a notice.
    #[error("failed to submit session results")]
    Persistence {
        #[source]
        source: anyhow::Error,
    },
}
