use thiserror::Error;

/// The scheduler's only failure mode.
///
/// Out-of-range configuration is never an error — it is clamped at decode or
/// at use.  A factory that cannot be resolved degrades the session to a
/// no-op rather than propagating upward.
#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("group factory unavailable: {0}")]
    FactoryUnavailable(String),
}

pub type SpawnResult<T> = Result<T, SpawnError>;
