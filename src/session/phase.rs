/// Session phase state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the player to start; also where playback-blocked lands.
    Ready,
    /// Active play: the scheduler ticks and key events are judged.
    Playing,
    /// Transport paused mid-session; state frozen.
    Paused,
    /// Session over; the results summary is available.
    Ended,
}

/// Phase transition command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseCommand {
    Start,
    Pause,
    Resume,
    End,
}

/// The single phase-transition function. Commands that do not apply to the
/// current phase leave it unchanged, which makes pause/resume idempotent.
pub fn transition(phase: Phase, command: PhaseCommand) -> Phase {
    match (phase, command) {
        (Phase::Ready | Phase::Ended, PhaseCommand::Start) => Phase::Playing,
        (Phase::Playing, PhaseCommand::Pause) => Phase::Paused,
        (Phase::Paused, PhaseCommand::Resume) => Phase::Playing,
        (Phase::Playing | Phase::Paused, PhaseCommand::End) => Phase::Ended,
        (phase, _) => phase,
    }
}
