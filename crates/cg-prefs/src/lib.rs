//! `cg-prefs` — the configuration side of the spawn scheduler.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`keys`]     | String constants, one per tunable                     |
//! | [`catalog`]  | `OptionSpec` table: label, default, valid range       |
//! | [`store`]    | `Preferences` trait, `MemoryPreferences`              |
//! | [`settings`] | `SpawnerMode`, `SchedulerSettings` snapshot decode    |
//! | [`error`]    | `PrefError`, `PrefResult<T>`                          |
//!
//! # Snapshot model (summary)
//!
//! The scheduler never reads preferences live.  At the start of each daytime
//! session it takes one [`SchedulerSettings::snapshot`] from a
//! [`Preferences`] implementation and holds it fixed until the session ends;
//! edits made mid-day only affect the next session.  Out-of-range values are
//! clamped at decode or at use — a snapshot is always safe to evaluate.

pub mod catalog;
pub mod error;
pub mod keys;
pub mod settings;
pub mod store;

#[cfg(test)]
mod tests;

pub use catalog::{CATALOG, OptionSpec};
pub use error::{PrefError, PrefResult};
pub use settings::{SchedulerSettings, SpawnerMode};
pub use store::{MemoryPreferences, Preferences};
