use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrefError {
    #[error("unknown preference key: {0}")]
    UnknownKey(String),
}

pub type PrefResult<T> = Result<T, PrefError>;
