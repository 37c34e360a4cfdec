use thiserror::Error;

use crate::workout::WorkoutId;

/// Rejected workout input. The messages are shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkoutError {
    #[error("must give valid data: Positive Numbers accepted")]
    InvalidRunning,
    #[error("must give valid data: Positive Numbers accepted, except for elevation")]
    InvalidCycling,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("no location selected on the map")]
    NoLocation,
    #[error("no workout ids left")]
    IdsExhausted,
    #[error(transparent)]
    Invalid(#[from] WorkoutError),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Failure to turn a persisted blob back into workouts.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("malformed workout list: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid workout {id}: {source}")]
    InvalidRecord {
        id: WorkoutId,
        #[source]
        source: WorkoutError,
    },
    #[error("duplicate workout id {0}")]
    DuplicateId(WorkoutId),
    #[error("workout id {0} out of range")]
    IdOutOfRange(WorkoutId),
}
