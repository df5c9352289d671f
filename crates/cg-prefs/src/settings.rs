//! Per-session settings snapshot.
//!
//! # Decode rules
//!
//! | Key                           | Decoded as                                        |
//! |-------------------------------|---------------------------------------------------|
//! | `spawner_active`              | -1 → Disabled, 0 → PracticeOnly, 1 → Enabled      |
//! | `spawn_interval_deciseconds`  | `max(5) / 10.0` seconds (floor 0.5 s)             |
//! | `min/max_group_size`          | stored raw; clamped at use by `group_size_bounds` |
//! | `max_queue_length`            | `< 1` = uncapped                                  |
//! | `total_group_cap`             | `< 0` = uncapped                                  |
//! | `fixed_model_flag`            | -1 → None, 0 → Some(false), 1 → Some(true)        |
//! | `customer_type_id`            | absent or negative → generic fallback             |
//!
//! The uncapped sentinel is `-1` throughout.  Missing catalogued keys fall
//! back to catalog defaults; nothing here ever returns an error — a snapshot
//! taken from an adversarial store is still safe to evaluate.

use cg_core::CustomerTypeId;

use crate::{Preferences, catalog, keys};

// ── SpawnerMode ───────────────────────────────────────────────────────────────

/// Configured activity of the spawner.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpawnerMode {
    Disabled,
    /// Spawn only while the host is in practice mode.
    PracticeOnly,
    Enabled,
}

impl SpawnerMode {
    /// Decode the `spawner_active` tri-state.  Unknown values disable.
    pub fn from_flag(flag: i64) -> Self {
        match flag {
            0 => SpawnerMode::PracticeOnly,
            1 => SpawnerMode::Enabled,
            _ => SpawnerMode::Disabled,
        }
    }
}

// ── SchedulerSettings ─────────────────────────────────────────────────────────

/// Immutable configuration snapshot for one daytime session.
///
/// Taken via [`SchedulerSettings::snapshot`] when a session starts and held
/// fixed until the session ends; the scheduler never reads preferences live.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchedulerSettings {
    pub mode: SpawnerMode,

    /// Seconds between spawns.  Always ≥ 0.5.
    pub spawn_interval_secs: f64,

    /// Raw configured size bounds.  May be inverted or non-positive; use
    /// [`group_size_bounds`][Self::group_size_bounds] for the draw range.
    pub min_group_size: i64,
    pub max_group_size: i64,

    /// Queue-occupancy cap; values `< 1` mean uncapped.
    pub max_queue_length: i64,

    /// Per-session spawn cap; `< 0` means uncapped.
    pub total_group_cap: i64,

    /// `Some(is_cat)` forces every group onto one customer model;
    /// `None` flips a fair coin per group.
    pub fixed_customer_model: Option<bool>,

    /// Registry customer type, when one was discovered at startup.
    /// `None` means "spawn the host's generic type".
    pub customer_type: Option<CustomerTypeId>,
}

impl SchedulerSettings {
    /// Read one settings snapshot from `prefs`.
    pub fn snapshot<P: Preferences + ?Sized>(prefs: &P) -> Self {
        let get = |key: &str| {
            prefs
                .get_int(key)
                .or_else(|| catalog::default_for(key))
                .unwrap_or(-1)
        };

        let deciseconds = get(keys::SPAWN_INTERVAL_DECISECONDS).max(5);
        let customer_type = prefs
            .get_int(keys::CUSTOMER_TYPE_ID)
            .and_then(|v| u32::try_from(v).ok())
            .map(CustomerTypeId);

        Self {
            mode:                 SpawnerMode::from_flag(get(keys::SPAWNER_ACTIVE)),
            spawn_interval_secs:  deciseconds as f64 / 10.0,
            min_group_size:       get(keys::MIN_GROUP_SIZE),
            max_group_size:       get(keys::MAX_GROUP_SIZE),
            max_queue_length:     get(keys::MAX_QUEUE_LENGTH),
            total_group_cap:      get(keys::TOTAL_GROUP_CAP),
            fixed_customer_model: match get(keys::FIXED_MODEL_FLAG) {
                0 => Some(false),
                1 => Some(true),
                _ => None,
            },
            customer_type,
        }
    }

    /// Has a non-negative cap been reached by `spawned` groups?
    #[inline]
    pub fn quota_reached(&self, spawned: u32) -> bool {
        self.total_group_cap >= 0 && i64::from(spawned) >= self.total_group_cap
    }

    /// Should a spawn be withheld at `occupancy` queued groups?
    #[inline]
    pub fn queue_full(&self, occupancy: u32) -> bool {
        self.max_queue_length >= 1 && i64::from(occupancy) >= self.max_queue_length
    }

    /// Inclusive group-size draw bounds, valid under any configuration.
    ///
    /// `max` is raised to at least 1, then `min` is clamped into `[1, max]`,
    /// so the range is never empty even when the stored bounds are inverted
    /// or non-positive.
    pub fn group_size_bounds(&self) -> (u32, u32) {
        let max = self.max_group_size.clamp(1, i64::from(u32::MAX));
        let min = self.min_group_size.clamp(1, max);
        (min as u32, max as u32)
    }
}
