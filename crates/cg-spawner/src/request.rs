//! What the scheduler emits when a spawn fires.

use std::fmt;

use cg_core::CustomerTypeId;

/// Which customer type the factory should instantiate.
///
/// `Registered` carries a registry id discovered at startup; `Generic` is the
/// always-available fallback when no registry was found (or the configured id
/// was invalid).  Making the fallback an explicit variant keeps the branch in
/// data rather than in dynamic type inspection.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CustomerSelector {
    Registered(CustomerTypeId),
    Generic,
}

impl fmt::Display for CustomerSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerSelector::Registered(id) => write!(f, "registered({})", id.0),
            CustomerSelector::Generic => write!(f, "generic"),
        }
    }
}

/// A single admitted customer-group arrival, ready for instantiation.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnRequest {
    /// Group member count.  Always ≥ 1 and within the (clamped) configured
    /// bounds, inclusive on both ends.
    pub size:          u32,
    pub customer_type: CustomerSelector,
    /// Visual/behavioral model variant for the whole group.
    pub is_cat:        bool,
}
