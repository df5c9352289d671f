//! `cg-core` — foundational types for the customer-group spawn scheduler.
//!
//! This crate is a dependency of every other `cg-*` crate.  It intentionally
//! has no `cg-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                   |
//! |----------|--------------------------------------------|
//! | [`ids`]  | `CustomerTypeId`                           |
//! | [`time`] | `SimTime` (float simulation seconds)       |
//! | [`rng`]  | `SpawnRng` (seeded, scheduler-owned)       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::CustomerTypeId;
pub use rng::SpawnRng;
pub use time::SimTime;
