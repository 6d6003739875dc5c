//! Game session: the state machine tying clock, scheduler, judgement,
//! scoring, and typing together.
//!
//! This module provides:
//! - [`GameSession`]: host-facing orchestrator driven by `tick`/`key_down`
//! - [`NoteScheduler`] / [`ActiveNote`]: look-ahead admission and expiry
//! - [`Judge`] / [`Judgement`] / [`Quality`]: timing-window classification
//! - [`ScoreBoard`]: single-reducer score/combo/accuracy aggregation
//! - [`TypingTracker`]: study-text advance riding the same key stream
//! - [`JudgementHistory`]: append-only record for replay/debugging

mod history;
mod judge;
mod phase;
mod scheduler;
mod score;
mod typing;

pub use history::JudgementHistory;
pub use judge::{Judge, JudgeWindow, Judgement, Quality};
pub use phase::{Phase, PhaseCommand, transition};
pub use scheduler::{ActiveNote, NoteScheduler, NoteState};
pub use score::ScoreBoard;
pub use typing::TypingTracker;

use tracing::{info, warn};

use crate::audio::GameClock;
use crate::beatmap::Beatmap;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::input::KeyBindings;
use crate::persist::{ResultsSink, SessionSummary};

/// Callback invoked once with the final summary when a session ends.
pub type CompletionCallback = Box<dyn FnMut(&SessionSummary)>;

/// Configuration for creating a session.
pub struct SessionConfig {
    pub beatmap: Beatmap,
    pub text: String,
    pub engine: EngineConfig,
    pub bindings: KeyBindings,
}

/// Read-only view of one active note for the presentation layer.
#[derive(Debug, Clone)]
pub struct NoteView {
    pub lane: usize,
    pub time_ms: f64,
    pub hint: String,
    /// Fall progress in `[0, 1]`: 0 at spawn height, 1 at the judgement line.
    pub progress: f64,
}

/// Read-only snapshot of the session for rendering. Passive: taking one
/// never mutates the session.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub time_ms: f64,
    pub score: u32,
    pub combo: u32,
    pub max_combo: u32,
    pub accuracy: f64,
    pub notes: Vec<NoteView>,
    pub typing_cursor: usize,
    pub expected_char: Option<char>,
}

/// One game session over a beatmap and a study text.
///
/// Single-threaded and cooperative: the host's per-frame callback drives
/// [`GameSession::tick`], key events arrive through [`GameSession::key_down`],
/// and both are guarded to `Playing` so a paused or ended session ignores
/// stray callbacks.
pub struct GameSession {
    clock: GameClock,
    beatmap: Beatmap,
    scheduler: NoteScheduler,
    judge: Judge,
    score: ScoreBoard,
    typing: TypingTracker,
    history: JudgementHistory,
    bindings: KeyBindings,
    engine: EngineConfig,
    text: String,
    phase: Phase,
    sink: Option<Box<dyn ResultsSink>>,
    on_complete: Option<CompletionCallback>,
    summary: Option<SessionSummary>,
    persist_notice: Option<EngineError>,
}

impl GameSession {
    pub fn new(clock: GameClock, config: SessionConfig) -> Self {
        let scheduler = NoteScheduler::new(&config.beatmap, &config.engine);
        let history = JudgementHistory::with_capacity(config.beatmap.len());

        Self {
            clock,
            scheduler,
            judge: Judge::new(JudgeWindow::from_config(&config.engine)),
            score: ScoreBoard::new(&config.engine),
            typing: TypingTracker::new(config.text.clone()),
            history,
            bindings: config.bindings,
            engine: config.engine,
            text: config.text,
            beatmap: config.beatmap,
            phase: Phase::Ready,
            sink: None,
            on_complete: None,
            summary: None,
            persist_notice: None,
        }
    }

    /// Attach the results sink the summary is submitted to at session end.
    pub fn set_sink(&mut self, sink: Box<dyn ResultsSink>) {
        self.sink = Some(sink);
    }

    /// Attach a completion callback, invoked once per session end.
    pub fn set_on_complete(&mut self, callback: CompletionCallback) {
        self.on_complete = Some(callback);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Final results, available once the session has ended.
    pub fn summary(&self) -> Option<&SessionSummary> {
        self.summary.as_ref()
    }

    /// Non-blocking notice from a failed results submission, if any.
    pub fn persistence_notice(&self) -> Option<&EngineError> {
        self.persist_notice.as_ref()
    }

    /// Start a session from `Ready`, or restart from `Ended` with a full
    /// reset. On [`EngineError::PlaybackBlocked`] the phase stays `Ready`;
    /// the host retries after an explicit user action.
    pub fn start(&mut self) -> Result<(), EngineError> {
        if !matches!(self.phase, Phase::Ready | Phase::Ended) {
            return Ok(());
        }

        if self.phase == Phase::Ended {
            self.scheduler.reset();
            self.score.reset();
            self.typing.reset(self.text.clone());
            self.history.clear();
            self.summary = None;
            self.persist_notice = None;
            self.clock.rewind();
            self.phase = Phase::Ready;
        }

        self.clock.play()?;
        self.phase = transition(self.phase, PhaseCommand::Start);
        info!(notes = self.beatmap.len(), "session started");
        Ok(())
    }

    /// Pause playback. Idempotent; a no-op outside `Playing`.
    pub fn pause(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        self.clock.pause();
        self.phase = transition(self.phase, PhaseCommand::Pause);
        info!("session paused");
    }

    /// Resume from `Paused`. A blocked transport keeps the session paused.
    pub fn resume(&mut self) -> Result<(), EngineError> {
        if self.phase != Phase::Paused {
            return Ok(());
        }
        self.clock.play()?;
        self.phase = transition(self.phase, PhaseCommand::Resume);
        info!("session resumed");
        Ok(())
    }

    /// End the session manually.
    pub fn end(&mut self) {
        if matches!(self.phase, Phase::Playing | Phase::Paused) {
            self.finish();
        }
    }

    /// One cooperative poll: admit newly eligible notes, expire lapsed ones,
    /// then check for natural end. A no-op outside `Playing`.
    ///
    /// All phases of the tick share one clock snapshot, so a note can never
    /// be both expired and hit by events attributed to the same tick.
    pub fn tick(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }

        let t = self.clock.now_ms();
        for judgement in self.scheduler.admit(t) {
            self.score.apply(judgement.quality);
            self.history.record(judgement);
        }
        for judgement in self.scheduler.expire(t) {
            self.score.apply(judgement.quality);
            self.history.record(judgement);
        }

        // Natural end: the transport ran out, or there was nothing to play.
        if self.clock.is_ended() || self.beatmap.is_empty() {
            self.finish();
        }
    }

    /// Process one key-down event at the current clock snapshot.
    ///
    /// Unmapped keys are ignored for judgement but still feed the typing
    /// tracker; a press that lands a note is never a typing miss. A no-op
    /// outside `Playing`.
    pub fn key_down(&mut self, key: &str) -> Option<Judgement> {
        if self.phase != Phase::Playing {
            return None;
        }

        let t = self.clock.now_ms();
        let judgement = self
            .bindings
            .lane_for(key)
            .and_then(|lane| self.judge.judge_press(lane, t, self.scheduler.active_mut()));

        self.typing.feed(key, judgement.is_some());

        if let Some(judgement) = &judgement {
            self.score.apply(judgement.quality);
            self.history.record(judgement.clone());
        }

        judgement
    }

    /// Presentation view of the current state.
    pub fn snapshot(&self) -> SessionSnapshot {
        let t = self.clock.now_ms();
        let fall_ms = self.engine.fall_ms;
        let notes = self
            .scheduler
            .active()
            .iter()
            .map(|note| NoteView {
                lane: note.lane,
                time_ms: note.time_ms,
                hint: note.hint.clone(),
                progress: ((t - (note.time_ms - fall_ms)) / fall_ms).clamp(0.0, 1.0),
            })
            .collect();

        SessionSnapshot {
            phase: self.phase,
            time_ms: t,
            score: self.score.score,
            combo: self.score.combo,
            max_combo: self.score.max_combo,
            accuracy: self.score.accuracy(),
            notes,
            typing_cursor: self.typing.cursor(),
            expected_char: self.typing.expected_char(),
        }
    }

    /// Judgement record of the session so far.
    pub fn history(&self) -> &JudgementHistory {
        &self.history
    }

    fn finish(&mut self) {
        self.clock.pause();
        let elapsed_ms = self.clock.now_ms();
        self.phase = transition(self.phase, PhaseCommand::End);

        let summary = SessionSummary {
            final_score: self.score.score,
            max_combo: self.score.max_combo,
            accuracy: self.score.accuracy(),
            hit_count: self.score.hit_count,
            miss_count: self.score.miss_count,
            typed_correct: self.typing.typed_correct,
            typed_missed: self.typing.typed_missed,
            words_typed: self.typing.words_typed(),
            wpm: self.typing.wpm(elapsed_ms),
        };
        info!(
            score = summary.final_score,
            accuracy = summary.accuracy,
            max_combo = summary.max_combo,
            "session ended"
        );

        if let Some(callback) = &mut self.on_complete {
            callback(&summary);
        }

        // Single best-effort submission; failure never invalidates results.
        if let Some(sink) = &mut self.sink
            && let Err(source) = sink.submit(&summary)
        {
            warn!(error = %source, "failed to submit session results");
            self.persist_notice = Some(EngineError::Persistence { source });
        }

        self.summary = Some(summary);
    }
}
