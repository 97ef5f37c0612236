//! Error taxonomy
//!
//! Every failure is surfaced unchanged to the caller; the engine never
//! retries and never swallows an error.

use thiserror::Error;

/// Failures from a random draw source
#[derive(Debug, Error)]
pub enum RandomError {
    /// The draw did not complete within the source's deadline
    #[error("random draw timed out")]
    Timeout,

    /// The source could not be reached or answered with a failure
    #[error("random draw transport failure: {0}")]
    Transport(String),

    /// The source answered, but the body does not parse as a number
    #[error("random draw returned malformed value: {0:?}")]
    MalformedResponse(String),
}

/// Failures from an outcome recorder
#[derive(Debug, Error)]
pub enum RecordError {
    /// No boxer with the referenced id exists
    #[error("boxer with id {0} not found")]
    NotFound(i64),

    /// The backing store failed for any other reason
    #[error("outcome recording failed: {0}")]
    Backend(String),
}

/// Failures surfaced by the `Ring` engine
#[derive(Debug, Error)]
pub enum RingError {
    /// Value passed to `enter_ring` does not satisfy the boxer shape
    #[error("invalid boxer: {0}")]
    InvalidBoxer(String),

    /// The ring already holds two boxers
    #[error("ring is full, cannot add more boxers")]
    RingFull,

    /// A read was attempted while the ring is empty
    #[error("ring is empty")]
    RingEmpty,

    /// A fight was attempted with fewer than two boxers
    #[error("there must be two boxers to start a fight")]
    FightNotReady,

    #[error(transparent)]
    Random(#[from] RandomError),

    #[error(transparent)]
    Record(#[from] RecordError),
}
