use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;

use notebeat::audio::GameClock;
use notebeat::beatmap::{Beatmap, DEFAULT_LANE_COUNT, generate};
use notebeat::config::SessionOptions;
use notebeat::input::{ScriptedKeys, presses_for_beatmap};
use notebeat::persist::HttpResultsSink;
use notebeat::session::{GameSession, Phase, SessionConfig};
use notebeat::text;
use notebeat::util::logging::init_logging;

/// Simulated frame interval for the headless loop.
const FRAME_MS: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Generator {
    /// Steady beats at the given bpm.
    Tempo,
    /// Four-phase test chart.
    Pattern,
    /// Rapid eight-note bursts.
    Bursts,
}

/// Run a headless rhythm-typing session with a scripted player.
#[derive(Parser, Debug)]
#[command(name = "notebeat", version, about)]
struct Args {
    /// Chart generator to use.
    #[arg(long, value_enum, default_value_t = Generator::Tempo)]
    generator: Generator,

    /// Beats per minute for the tempo generator.
    #[arg(long, default_value_t = 120.0)]
    bpm: f64,

    /// Song duration in seconds for the tempo generator.
    #[arg(long, default_value_t = 30.0)]
    duration_secs: f64,

    /// Burst count for the burst generator.
    #[arg(long, default_value_t = 8)]
    bursts: usize,

    /// Study text index; random when omitted.
    #[arg(long)]
    text_index: Option<usize>,

    /// Seed for the scripted player and text selection.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Timing jitter of the scripted player in milliseconds.
    #[arg(long, default_value_t = 40.0)]
    jitter_ms: f64,

    /// Probability the scripted player drops a note entirely.
    #[arg(long, default_value_t = 0.1)]
    drop_rate: f64,

    /// Post the final summary to this URL.
    #[arg(long, env = "NOTEBEAT_RESULTS_URL")]
    results_url: Option<String>,

    /// Write logs to this directory in addition to stderr.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Show debug logs.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_dir.as_deref(), args.verbose)?;

    let options = SessionOptions::load()?;
    let mut rng = StdRng::seed_from_u64(args.seed);

    let beatmap = match args.generator {
        Generator::Tempo => {
            generate::from_tempo(args.bpm, args.duration_secs * 1000.0, DEFAULT_LANE_COUNT)
        }
        Generator::Pattern => generate::pattern(DEFAULT_LANE_COUNT),
        Generator::Bursts => generate::bursts(args.bursts, DEFAULT_LANE_COUNT),
    };
    let study_text = match args.text_index {
        Some(index) => text::by_index(index),
        None => text::random(&mut rng),
    };

    let presses = presses_for_beatmap(
        &beatmap,
        &options.bindings,
        args.jitter_ms,
        args.drop_rate,
        &mut rng,
    );
    let mut script = ScriptedKeys::new(presses);

    // Leave room for the last note to fall and expire before the song ends.
    let duration_ms = beatmap.last_time_ms().unwrap_or(0.0)
        + options.engine.fall_ms
        + options.engine.expire_grace_ms
        + 1000.0;
    let (clock, transport) = GameClock::headless(duration_ms);

    let mut session = GameSession::new(
        clock,
        SessionConfig {
            beatmap,
            text: study_text.to_string(),
            engine: options.engine.clone(),
            bindings: options.bindings.clone(),
        },
    );
    if let Some(url) = args.results_url.clone().or(options.results_url.clone()) {
        session.set_sink(Box::new(HttpResultsSink::new(url)?));
    }

    session.start()?;
    let mut now_ms = 0.0;
    while session.phase() == Phase::Playing {
        transport.advance_ms(FRAME_MS);
        now_ms += FRAME_MS;
        session.tick();
        for press in script.poll_up_to(now_ms) {
            session.key_down(&press.key);
        }
    }

    if let Some(notice) = session.persistence_notice() {
        eprintln!("warning: {notice}");
    }
    if let Some(summary) = session.summary() {
        println!("{}", serde_json::to_string_pretty(summary)?);
    }

    Ok(())
}
