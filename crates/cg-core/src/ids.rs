//! Strongly typed identifier for host customer types.

use std::fmt;

/// Identifier of a customer type in the host's type registry.
///
/// The inner integer is `pub` for direct interop with host APIs that deal in
/// raw registry ids; prefer [`CustomerTypeId::index`] when indexing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomerTypeId(pub u32);

impl CustomerTypeId {
    /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
    pub const INVALID: CustomerTypeId = CustomerTypeId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for CustomerTypeId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for CustomerTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomerTypeId({})", self.0)
    }
}
