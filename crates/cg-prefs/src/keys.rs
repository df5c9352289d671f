//! Preference key constants.
//!
//! All values are stored as integers in the host's preference system; the
//! decode rules (tri-state flags, decisecond intervals, `-1` = uncapped
//! sentinels) live in [`settings`][crate::settings].

/// Spawner activity: -1 disabled, 0 practice-mode only, 1 enabled.
pub const SPAWNER_ACTIVE: &str = "spawner_active";

/// Interval between group spawns, in deciseconds (30 = 3.0 s).
pub const SPAWN_INTERVAL_DECISECONDS: &str = "spawn_interval_deciseconds";

/// Smallest group size to draw (inclusive).
pub const MIN_GROUP_SIZE: &str = "min_group_size";

/// Largest group size to draw (inclusive).
pub const MAX_GROUP_SIZE: &str = "max_group_size";

/// Withhold spawns while the queue holds this many groups; -1 = uncapped.
pub const MAX_QUEUE_LENGTH: &str = "max_queue_length";

/// Stop spawning for the day after this many groups; -1 = uncapped.
pub const TOTAL_GROUP_CAP: &str = "total_group_cap";

/// Customer model: -1 randomize per group, 0 standard, 1 cat.
pub const FIXED_MODEL_FLAG: &str = "fixed_model_flag";

/// Registry id of the customer type to spawn.
///
/// Only present when a customer-type registry was discovered at startup; when
/// the key is absent the scheduler falls back to the host's generic type.
/// Deliberately not in [`CATALOG`][crate::CATALOG] — it has no default.
pub const CUSTOMER_TYPE_ID: &str = "customer_type_id";
