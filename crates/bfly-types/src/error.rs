use thiserror::Error;

/// Why an incoming payload was rejected.
///
/// The reason is meant for logs. HTTP callers only ever see a generic
/// message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("payload does not match the expected shape: {0}")]
    Shape(String),

    #[error("rating must be an integer between 0 and 5, got {0}")]
    RatingNotWhole(String),

    #[error("rating must be a number between 0 and 5")]
    RatingOutOfRange,
}
