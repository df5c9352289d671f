//! The group-creation collaborator boundary.

use crate::{SpawnError, SpawnRequest, SpawnResult};

/// Host-side group instantiation.
///
/// [`resolve`][Self::resolve] is called once per session, at arm time; a
/// failure there is latched and the scheduler stays idle for the rest of the
/// session — it is never retried tick-by-tick.  [`spawn`][Self::spawn]
/// materializes one admitted request.
pub trait GroupFactory {
    /// Locate the host's group-creation machinery.
    fn resolve(&mut self) -> SpawnResult<()>;

    /// Instantiate one customer group.
    fn spawn(&mut self, request: &SpawnRequest) -> SpawnResult<()>;
}

// ── RecordingFactory ──────────────────────────────────────────────────────────

/// A [`GroupFactory`] that records every request it receives.
///
/// Useful in tests and demos; a real host adapts its entity-creation system
/// instead.
pub struct RecordingFactory {
    /// When `false`, `resolve` fails — simulating a missing host system.
    pub resolvable: bool,
    pub spawned:    Vec<SpawnRequest>,
}

impl RecordingFactory {
    pub fn new() -> Self {
        Self { resolvable: true, spawned: Vec::new() }
    }

    /// A factory whose resolution fails for the whole session.
    pub fn unavailable() -> Self {
        Self { resolvable: false, spawned: Vec::new() }
    }
}

impl Default for RecordingFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupFactory for RecordingFactory {
    fn resolve(&mut self) -> SpawnResult<()> {
        if self.resolvable {
            Ok(())
        } else {
            Err(SpawnError::FactoryUnavailable(
                "no group-creation system registered".to_owned(),
            ))
        }
    }

    fn spawn(&mut self, request: &SpawnRequest) -> SpawnResult<()> {
        self.spawned.push(*request);
        Ok(())
    }
}
