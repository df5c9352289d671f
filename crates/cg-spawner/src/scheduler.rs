//! The `SpawnScheduler` state machine.
//!
//! # Tick algorithm
//!
//! ```text
//! ① nighttime            → drop session, None
//! ② no session           → snapshot settings, fresh counters
//! ③ effective mode       → configured mode, forced Disabled once quota hit
//! ④ mode gate            → Disabled: de-init, None
//!                          PracticeOnly outside practice: None, untouched
//! ⑤ first pass           → resolve factory once, arm timer
//! ⑥ paused               → freeze remaining interval (first paused tick only)
//! ⑦ just resumed         → rearm from frozen remainder, no same-tick spawn
//! ⑧ admission            → factory available? queue below cap?
//! ⑨ timer                → due yet?
//! ⑩ fire                 → count, draw model + size, rearm, emit request
//! ```
//!
//! All timing is absolute against the host's monotonic clock, so the pause
//! freeze must capture the *remaining* interval — rearming from `now` after
//! a resume would otherwise silently stretch the countdown by however long
//! the pause lasted.

use cg_core::{SimTime, SpawnRng};
use cg_prefs::{Preferences, SchedulerSettings, SpawnerMode};
use tracing::{debug, info, warn};

use crate::{CustomerSelector, GroupFactory, SimEnvironment, SpawnRequest, TickInputs};

// ── SessionState ──────────────────────────────────────────────────────────────

/// Mutable scheduler state for one daytime session.
///
/// Created lazily on the first daytime tick, dropped when daytime ends —
/// nothing leaks into the next day.
#[derive(Clone, Debug)]
pub struct SessionState {
    /// Settings snapshot taken at session start; never refreshed mid-session.
    pub settings: SchedulerSettings,

    /// Absolute time of the next allowed spawn.
    pub next_spawn_time: SimTime,

    /// Remaining interval seconds frozen at pause time; 0 when not frozen.
    pub pending_interval: f64,

    pub groups_spawned: u32,

    /// Whether factory resolution and timer arming have run this session.
    pub initialized: bool,

    /// Latched result of factory resolution.  `false` means the scheduler is
    /// a no-op for the rest of the session.
    pub factory_available: bool,
}

impl SessionState {
    fn new(settings: SchedulerSettings) -> Self {
        Self {
            settings,
            next_spawn_time:   SimTime::ZERO,
            pending_interval:  0.0,
            groups_spawned:    0,
            initialized:       false,
            factory_available: false,
        }
    }
}

// ── SpawnScheduler ────────────────────────────────────────────────────────────

/// Decides once per simulation frame whether to admit a new customer group.
///
/// Owns its collaborators explicitly: the preference store (read once per
/// session), the group factory (resolved once per session), and a single
/// seeded RNG — there is no ambient global state anywhere in the decision
/// path.
pub struct SpawnScheduler<P: Preferences, F: GroupFactory> {
    prefs:   P,
    factory: F,
    rng:     SpawnRng,
    session: Option<SessionState>,
}

impl<P: Preferences, F: GroupFactory> SpawnScheduler<P, F> {
    pub fn new(prefs: P, factory: F, seed: u64) -> Self {
        Self {
            prefs,
            factory,
            rng: SpawnRng::new(seed),
            session: None,
        }
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Evaluate one simulation frame.
    ///
    /// Returns the request that was handed to the factory this tick, or
    /// `None`.  Never blocks, never errors: every abnormal condition is a
    /// "no spawn this tick".
    pub fn tick(&mut self, input: &TickInputs) -> Option<SpawnRequest> {
        if !input.is_daytime {
            if self.session.take().is_some() {
                debug!("daytime over; session state dropped");
            }
            return None;
        }

        let prefs = &self.prefs;
        let session = self
            .session
            .get_or_insert_with(|| SessionState::new(SchedulerSettings::snapshot(prefs)));

        // Quota exhaustion overrides the configured mode for this tick
        // without mutating the stored setting.
        let mut mode = session.settings.mode;
        if session.settings.quota_reached(session.groups_spawned) {
            mode = SpawnerMode::Disabled;
        }
        match mode {
            SpawnerMode::Disabled => {
                session.initialized = false;
                return None;
            }
            // Outside practice mode the feature doesn't count time at all:
            // no init, no timer movement, no freeze bookkeeping.
            SpawnerMode::PracticeOnly if !input.is_practice_mode => return None,
            _ => {}
        }

        let now = input.now;

        if !session.initialized {
            session.factory_available = match self.factory.resolve() {
                Ok(()) => true,
                Err(err) => {
                    warn!(%err, "group factory unavailable; spawner idle for this session");
                    false
                }
            };
            session.next_spawn_time = now.offset(session.settings.spawn_interval_secs);
            session.initialized = true;
            if session.factory_available {
                debug!(
                    interval_secs = session.settings.spawn_interval_secs,
                    "spawner armed"
                );
            }
        }

        if input.is_paused {
            // Snapshot the remaining countdown exactly once per freeze;
            // consecutive paused ticks must not re-snapshot (the remainder
            // would creep toward zero as `now` keeps advancing).
            if session.pending_interval == 0.0 {
                session.pending_interval = (session.next_spawn_time - now)
                    .clamp(0.0, session.settings.spawn_interval_secs);
            }
            return None;
        }

        if session.pending_interval > 0.0 {
            // First unpaused tick after a freeze: the remainder must elapse
            // before anything fires — no catch-up spawn on the resume tick.
            session.next_spawn_time = now.offset(session.pending_interval);
            session.pending_interval = 0.0;
            return None;
        }

        if !session.factory_available {
            return None;
        }
        if session.settings.queue_full(input.queue_occupancy) {
            return None;
        }
        if now < session.next_spawn_time {
            return None;
        }

        // Fire.
        session.groups_spawned += 1;
        let is_cat = match session.settings.fixed_customer_model {
            Some(fixed) => fixed,
            None => self.rng.gen_bool(0.5),
        };
        session.next_spawn_time = now.offset(session.settings.spawn_interval_secs);

        let (min, max) = session.settings.group_size_bounds();
        let request = SpawnRequest {
            size:          self.rng.gen_range(min..=max),
            customer_type: match session.settings.customer_type {
                Some(id) => CustomerSelector::Registered(id),
                None => CustomerSelector::Generic,
            },
            is_cat,
        };

        info!(
            group = session.groups_spawned,
            cap = session.settings.total_group_cap,
            size = request.size,
            customer_type = %request.customer_type,
            "spawning customer group"
        );

        if let Err(err) = self.factory.spawn(&request) {
            // Same degradation as a failed resolve: idle out the session.
            warn!(%err, "group factory rejected spawn; spawner idle for this session");
            session.factory_available = false;
            return None;
        }
        Some(request)
    }

    /// Sample `env` and evaluate one frame.
    pub fn tick_env<E: SimEnvironment>(&mut self, env: &E) -> Option<SpawnRequest> {
        self.tick(&env.sample())
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// The active session, if daytime has started.
    pub fn session(&self) -> Option<&SessionState> {
        self.session.as_ref()
    }

    /// Groups spawned in the current session (0 with no session).
    pub fn groups_spawned_today(&self) -> u32 {
        self.session.as_ref().map_or(0, |s| s.groups_spawned)
    }

    /// The preference store, for hosts that expose it to a settings UI.
    /// Edits only take effect at the next session snapshot.
    pub fn prefs_mut(&mut self) -> &mut P {
        &mut self.prefs
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }
}
