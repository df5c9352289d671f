//! Scripted-day demo: one simulated service day at a diner.
//!
//! Drives the scheduler at a fixed 0.5 s frame cadence through a daytime
//! window with a pause in the middle (the player opening the menu), prints
//! every spawned group via `tracing`, and summarizes at day end.
//!
//! Run with `RUST_LOG=debug cargo run -p diner` for the arm/session lines.

use cg_core::SimTime;
use cg_prefs::{MemoryPreferences, keys};
use cg_spawner::{RecordingFactory, SimEnvironment, SpawnScheduler, TickInputs};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Frame length in seconds.
const DT: f64 = 0.5;

// ── Scripted environment ──────────────────────────────────────────────────────

/// A day script: daytime window, one pause interval, and a queue that fills
/// while groups wait and drains at a fixed service rate.
struct DinerDay {
    now:          SimTime,
    day_ends:     f64,
    pause_starts: f64,
    pause_ends:   f64,
    queued:       u32,
    frame:        u64,
}

impl DinerDay {
    fn new() -> Self {
        Self {
            now:          SimTime::ZERO,
            day_ends:     180.0,
            pause_starts: 60.0,
            pause_ends:   90.0,
            queued:       0,
            frame:        0,
        }
    }

    fn advance(&mut self) {
        self.now = self.now.offset(DT);
        self.frame += 1;
        // Seat one queued group every 8 frames (4 s) while unpaused.
        if !self.is_paused() && self.queued > 0 && self.frame % 8 == 0 {
            self.queued -= 1;
        }
    }
}

impl SimEnvironment for DinerDay {
    fn is_daytime(&self) -> bool {
        self.now.secs() < self.day_ends
    }

    fn is_practice_mode(&self) -> bool {
        false
    }

    fn is_paused(&self) -> bool {
        (self.pause_starts..self.pause_ends).contains(&self.now.secs())
    }

    fn now(&self) -> SimTime {
        self.now
    }

    fn queue_occupancy(&self) -> u32 {
        self.queued
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut prefs = MemoryPreferences::new();
    for (key, value) in [
        (keys::SPAWNER_ACTIVE, 1),
        (keys::SPAWN_INTERVAL_DECISECONDS, 40), // one group every 4 s
        (keys::MIN_GROUP_SIZE, 1),
        (keys::MAX_GROUP_SIZE, 4),
        (keys::MAX_QUEUE_LENGTH, 5),
        (keys::TOTAL_GROUP_CAP, 25),
    ] {
        if let Err(err) = prefs.set(key, value) {
            eprintln!("bad preference: {err}");
            return;
        }
    }

    let mut env = DinerDay::new();
    let mut sched = SpawnScheduler::new(prefs, RecordingFactory::new(), 0xD1CE);

    while env.is_daytime() {
        if let Some(request) = sched.tick_env(&env) {
            env.queued += 1;
            info!(
                t = %env.now(),
                size = request.size,
                is_cat = request.is_cat,
                queued = env.queued,
                "group arrived"
            );
        }
        env.advance();
    }
    // The nighttime tick that ends the session.
    let spawned_today = sched.groups_spawned_today();
    sched.tick(&TickInputs::night(env.now()));

    info!(
        frames = env.frame,
        groups = spawned_today,
        still_queued = env.queued,
        "day over"
    );
}
