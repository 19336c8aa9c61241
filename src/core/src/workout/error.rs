use thiserror::Error;

/// Why a submitted workout was rejected.
///
/// Both variants are recoverable at the request boundary; nothing is written
/// when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WorkoutError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("field `{0}` must be a whole number")]
    InvalidType(&'static str),
}

pub type WorkoutResult<T> = Result<T, WorkoutError>;
