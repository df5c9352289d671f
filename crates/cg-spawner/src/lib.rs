//! `cg-spawner` — the per-tick customer-group spawn scheduler.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`env`]       | `TickInputs`, `SimEnvironment`                        |
//! | [`request`]   | `SpawnRequest`, `CustomerSelector`                    |
//! | [`factory`]   | `GroupFactory` trait, `RecordingFactory`              |
//! | [`scheduler`] | `SpawnScheduler`, `SessionState`                      |
//! | [`error`]     | `SpawnError`, `SpawnResult<T>`                        |
//!
//! # State machine (summary)
//!
//! ```text
//! NoSession --(daytime begins)--> Uninitialized
//! Uninitialized --(resolve factory)--> Armed
//! Armed --(paused)--> Frozen --(resumed)--> Armed
//! Armed --(timer due & admission passes)--> Armed  (fires, rearms)
//! Armed --(quota exhausted)--> Disabled
//! any --(daytime ends)--> NoSession
//! ```
//!
//! The host calls [`SpawnScheduler::tick`] exactly once per simulation frame.
//! The call never blocks, performs no I/O, and degrades to "no spawn this
//! tick" on every abnormal input — a missed group is acceptable here, an
//! unhandled error is not.

pub mod env;
pub mod error;
pub mod factory;
pub mod request;
pub mod scheduler;


pub use env::{SimEnvironment, TickInputs};
pub use error::{SpawnError, SpawnResult};
pub use factory::{GroupFactory, RecordingFactory};
pub use request::{CustomerSelector, SpawnRequest};
pub use scheduler::{SessionState, SpawnScheduler};
