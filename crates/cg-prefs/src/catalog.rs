//! Declarative option catalog.
//!
//! One `OptionSpec` per registered tunable: the menu label, the default, and
//! the valid range the host UI offers.  The catalog is data, not behavior —
//! [`MemoryPreferences`][crate::MemoryPreferences] seeds itself from the
//! defaults, and hosts can render a settings menu straight from the table.

use crate::keys;

/// Metadata for one integer preference.
#[derive(Clone, Debug)]
pub struct OptionSpec {
    pub key:     &'static str,
    pub label:   &'static str,
    pub default: i64,
    /// Smallest offered value (`-1` where that is the "uncapped"/"random" sentinel).
    pub min:     i64,
    pub max:     i64,
    pub step:    i64,
}

/// Every registered tunable, in menu order.
pub const CATALOG: &[OptionSpec] = &[
    OptionSpec {
        key:     keys::SPAWNER_ACTIVE,
        label:   "Spawner Active",
        default: -1,
        min:     -1,
        max:     1,
        step:    1,
    },
    OptionSpec {
        key:     keys::SPAWN_INTERVAL_DECISECONDS,
        label:   "Spawn Interval (seconds)",
        default: 30,
        min:     5,
        max:     100,
        step:    1,
    },
    OptionSpec {
        key:     keys::MIN_GROUP_SIZE,
        label:   "Min Group Size",
        default: 1,
        min:     1,
        max:     80,
        step:    1,
    },
    OptionSpec {
        key:     keys::MAX_GROUP_SIZE,
        label:   "Max Group Size",
        default: 2,
        min:     1,
        max:     80,
        step:    1,
    },
    OptionSpec {
        key:     keys::MAX_QUEUE_LENGTH,
        label:   "Max Queue Length",
        default: -1,
        min:     -1,
        max:     1000,
        step:    5,
    },
    OptionSpec {
        key:     keys::TOTAL_GROUP_CAP,
        label:   "Number of Groups Limit",
        default: 50,
        min:     -1,
        max:     1000,
        step:    5,
    },
    OptionSpec {
        key:     keys::FIXED_MODEL_FLAG,
        label:   "Customer Model",
        default: -1,
        min:     -1,
        max:     1,
        step:    1,
    },
];

/// Look up the spec for `key`, if it is a catalogued option.
pub fn spec(key: &str) -> Option<&'static OptionSpec> {
    CATALOG.iter().find(|s| s.key == key)
}

/// The catalogued default for `key`.
pub fn default_for(key: &str) -> Option<i64> {
    spec(key).map(|s| s.default)
}
