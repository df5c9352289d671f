//! The `Preferences` collaborator boundary and an in-memory implementation.

use std::collections::HashMap;

use crate::{PrefError, PrefResult, catalog, keys};

/// Read access to the host's integer preference store.
///
/// `None` means the key is absent from the store entirely — distinct from
/// any integer value.  The only key that is legitimately absent is
/// [`keys::CUSTOMER_TYPE_ID`] (it exists only when a customer-type registry
/// was discovered at startup); all catalogued keys are expected to resolve.
pub trait Preferences {
    fn get_int(&self, key: &str) -> Option<i64>;
}

// ── MemoryPreferences ─────────────────────────────────────────────────────────

/// `HashMap`-backed preference store, pre-seeded with catalog defaults.
///
/// Used by tests and the demo; a real host adapts its own preference system
/// to [`Preferences`] instead.
#[derive(Clone, Debug)]
pub struct MemoryPreferences {
    values: HashMap<&'static str, i64>,
}

impl MemoryPreferences {
    /// A store holding every catalogued option at its default value.
    pub fn new() -> Self {
        let values = catalog::CATALOG.iter().map(|s| (s.key, s.default)).collect();
        Self { values }
    }

    /// A store with no keys at all.  Settings decoded from this fall back to
    /// catalog defaults everywhere.
    pub fn empty() -> Self {
        Self { values: HashMap::new() }
    }

    /// Set `key` to `value`.
    ///
    /// Rejects keys that are neither catalogued nor
    /// [`keys::CUSTOMER_TYPE_ID`] — a typo'd key would otherwise silently
    /// never be read back.
    pub fn set(&mut self, key: &str, value: i64) -> PrefResult<()> {
        let known = catalog::spec(key).map(|s| s.key).or_else(|| {
            (key == keys::CUSTOMER_TYPE_ID).then_some(keys::CUSTOMER_TYPE_ID)
        });
        match known {
            Some(k) => {
                self.values.insert(k, value);
                Ok(())
            }
            None => Err(PrefError::UnknownKey(key.to_owned())),
        }
    }
}

impl Default for MemoryPreferences {
    fn default() -> Self {
        Self::new()
    }
}

impl Preferences for MemoryPreferences {
    fn get_int(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }
}
