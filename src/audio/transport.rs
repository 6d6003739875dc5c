use std::cell::RefCell;
use std::rc::Rc;

use crate::error::EngineError;

/// Abstraction over the audio element driving playback.
/// Implementations: host adapters (production), VirtualTransport (headless/testing).
///
/// Positions are reported in seconds, matching the collaborator contract; the
/// game clock converts to milliseconds.
pub trait AudioTransport {
    /// Start or resume playback. Calling while already playing is a no-op.
    /// Fails with [`EngineError::PlaybackBlocked`] when the host refuses to
    /// start (autoplay policy, missing source).
    fn play(&mut self) -> Result<(), EngineError>;

    /// Pause playback. Calling while already paused is a no-op.
    fn pause(&mut self);

    /// Rewind to the beginning without changing the play/pause state.
    fn seek_to_start(&mut self);

    /// Current playback position in seconds.
    fn position_secs(&self) -> f64;

    /// Total duration in seconds, if metadata is loaded.
    fn duration_secs(&self) -> Option<f64>;

    /// Whether playback has reached the end of the source.
    fn is_ended(&self) -> bool;
}

#[derive(Debug)]
struct TransportState {
    position_ms: f64,
    duration_ms: Option<f64>,
    playing: bool,
    blocked: bool,
}

/// Manually-advanced transport for deterministic headless runs.
///
/// Cloning yields a handle to the same underlying state, so a host or test can
/// keep driving the transport after handing a clone to the game clock.
#[derive(Debug, Clone)]
pub struct VirtualTransport {
    state: Rc<RefCell<TransportState>>,
}

impl VirtualTransport {
    /// Create a transport with a fixed duration in milliseconds.
    pub fn new(duration_ms: f64) -> Self {
        Self::with_duration(Some(duration_ms))
    }

    /// Create a transport with no known duration. It never ends on its own.
    pub fn unbounded() -> Self {
        Self::with_duration(None)
    }

    fn with_duration(duration_ms: Option<f64>) -> Self {
        Self {
            state: Rc::new(RefCell::new(TransportState {
                position_ms: 0.0,
                duration_ms,
                playing: false,
                blocked: false,
            })),
        }
    }

    /// Simulate the host refusing to start playback (no user gesture yet).
    /// While blocked, `play()` fails and the transport stays paused.
    pub fn set_blocked(&self, blocked: bool) {
        self.state.borrow_mut().blocked = blocked;
    }

    /// Advance the position. Only moves while playing, like a real transport;
    /// the position saturates at the duration.
    pub fn advance_ms(&self, delta_ms: f64) {
        let mut state = self.state.borrow_mut();
        if !state.playing {
            return;
        }
        state.position_ms += delta_ms;
        if let Some(duration) = state.duration_ms
            && state.position_ms >= duration
        {
            state.position_ms = duration;
        }
    }

    /// Force the position, playing or not.
    pub fn set_position_ms(&self, position_ms: f64) {
        self.state.borrow_mut().position_ms = position_ms;
    }

    /// Whether the transport is currently playing.
    pub fn is_playing(&self) -> bool {
        self.state.borrow().playing
    }
}

impl AudioTransport for VirtualTransport {
    fn play(&mut self) -> Result<(), EngineError> {
        let mut state = self.state.borrow_mut();
        if state.blocked {
            return Err(EngineError::PlaybackBlocked);
        }
        state.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.state.borrow_mut().playing = false;
    }

    fn seek_to_start(&mut self) {
        self.state.borrow_mut().position_ms = 0.0;
    }

    fn position_secs(&self) -> f64 {
        self.state.borrow().position_ms / 1000.0
    }

    fn duration_secs(&self) -> Option<f64> {
        self.state.borrow().duration_ms.map(|ms| ms / 1000.0)
    }

    fn is_ended(&self) -> bool {
        let state = self.state.borrow();
        match state.duration_ms {
            Some(duration) => state.position_ms >= duration,
            None => false,
        }
    }
}
