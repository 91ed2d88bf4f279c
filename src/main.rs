//! Sharpshot entry point
//!
//! No window here: the native binary runs the core headless with the
//! autoplay bot standing in for a player, logging each round.
//!
//! Environment:
//! - `SHARPSHOT_TUNING`: path to a JSON tuning file
//! - `SHARPSHOT_SEED`: RNG seed (defaults to 0x5EED)
//! - `SHARPSHOT_ROUNDS`: rounds to play before quitting (default 3)

use std::path::PathBuf;

use sharpshot::clock::SyntheticClock;
use sharpshot::sim::{Autoplay, Command, RoundSummary, Session, Snapshot};
use sharpshot::{FrameDriver, Presentation, Tuning, hud};

/// Simulated frame rate for the headless run
const HEADLESS_HZ: f64 = 120.0;
/// Hard stop for endless tunings (10 simulated minutes)
const MAX_FRAMES: u64 = 120 * 600;

/// Headless front end: bot input, log output
struct Headless {
    bot: Autoplay,
    rounds_left: u32,
}

impl Presentation for Headless {
    fn poll(&mut self, snapshot: &Snapshot, now: f64) -> Vec<Command> {
        if self.rounds_left == 0 {
            return vec![Command::Quit];
        }
        self.bot.commands(snapshot, now)
    }

    fn render(&mut self, _snapshot: &Snapshot, _now: f64) {}

    fn round_over(&mut self, summary: &RoundSummary) {
        self.rounds_left = self.rounds_left.saturating_sub(1);
        if summary.new_best {
            log::info!("New best score: {}", summary.best_score);
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Ignoring unparseable {}={:?}", key, raw);
            default
        }),
        Err(_) => default,
    }
}

fn main() {
    env_logger::init();
    log::info!("Sharpshot (headless) starting...");

    let tuning_path = std::env::var_os("SHARPSHOT_TUNING").map(PathBuf::from);
    let tuning = Tuning::load_or_default(tuning_path.as_deref());
    let seed = env_parse("SHARPSHOT_SEED", 0x5EED_u64);
    let rounds = env_parse("SHARPSHOT_ROUNDS", 3_u32);

    let session = match Session::new(tuning, seed) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Invalid tuning: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("Seed: {}, rounds: {}", seed, rounds);

    let mut driver = FrameDriver::new(session, SyntheticClock::at_hz(HEADLESS_HZ));
    let mut ui = Headless {
        bot: Autoplay::default(),
        rounds_left: rounds,
    };
    driver.run(&mut ui, Some(MAX_FRAMES));

    let snapshot = driver.snapshot();
    println!("{}", hud::hud_items(snapshot).join("  "));
    println!("Best: {}", snapshot.best_score);
}
