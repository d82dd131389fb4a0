//! Errors raised by the strict PTO entry points.

/// Error type for the `try_*` PTO calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PtoError {
    /// A date string was not a valid `YYYY-MM-DD` date.
    #[error("invalid date '{input}': {source}")]
    InvalidDate {
        /// The rejected input.
        input: String,
        /// The underlying parse failure.
        source: chrono::ParseError,
    },
}

impl PtoError {
    pub fn invalid_date(input: &str, source: chrono::ParseError) -> PtoError {
        PtoError::InvalidDate { input: input.to_owned(), source }
    }
}
