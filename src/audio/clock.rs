use crate::error::EngineError;

use super::transport::{AudioTransport, VirtualTransport};

/// Millisecond game clock derived from the audio transport position.
///
/// The transport is the sole time source while playing; the clock owns it and
/// converts its second-based position to the milliseconds the engine uses.
pub struct GameClock {
    transport: Box<dyn AudioTransport>,
}

impl GameClock {
    pub fn new(transport: Box<dyn AudioTransport>) -> Self {
        Self { transport }
    }

    /// Clock backed by a manually-advanced transport, for headless runs.
    /// Returns the clock and a handle for driving the transport.
    pub fn headless(duration_ms: f64) -> (Self, VirtualTransport) {
        let transport = VirtualTransport::new(duration_ms);
        let handle = transport.clone();
        (Self::new(Box::new(transport)), handle)
    }

    /// Current playback position in milliseconds.
    pub fn now_ms(&self) -> f64 {
        self.transport.position_secs() * 1000.0
    }

    /// Source duration in milliseconds, if metadata is loaded.
    pub fn duration_ms(&self) -> Option<f64> {
        self.transport.duration_secs().map(|secs| secs * 1000.0)
    }

    /// Start or resume the transport. Recoverable failure: the caller keeps
    /// the session in `Ready` on [`EngineError::PlaybackBlocked`].
    pub fn play(&mut self) -> Result<(), EngineError> {
        self.transport.play()
    }

    /// Pause the transport. Idempotent.
    pub fn pause(&mut self) {
        self.transport.pause();
    }

    /// Rewind to the beginning, as when restarting a session.
    pub fn rewind(&mut self) {
        self.transport.seek_to_start();
    }

    /// Whether the transport reports end of source.
    pub fn is_ended(&self) -> bool {
        self.transport.is_ended()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_converts_seconds_to_milliseconds() {
        let (mut clock, handle) = GameClock::headless(60_000.0);
        clock.play().unwrap();

        handle.advance_ms(2_345.0);
        assert_eq!(clock.now_ms(), 2_345.0);
        assert_eq!(clock.duration_ms(), Some(60_000.0));
    }

    #[test]
    fn clock_reports_end_of_source() {
        let (mut clock, handle) = GameClock::headless(1_000.0);
        clock.play().unwrap();
        handle.advance_ms(1_500.0);
        assert!(clock.is_ended());
    }

    #[test]
    fn rewind_returns_clock_to_zero() {
        let (mut clock, handle) = GameClock::headless(60_000.0);
        clock.play().unwrap();
        handle.advance_ms(5_000.0);
        clock.rewind();
        assert_eq!(clock.now_ms(), 0.0);
    }

    #[test]
    fn blocked_transport_surfaces_through_clock() {
        let transport = VirtualTransport::new(60_000.0);
        transport.set_blocked(true);
        let mut clock = GameClock::new(Box::new(transport));
        assert!(matches!(clock.play(), Err(EngineError::PlaybackBlocked)));
    }
}
