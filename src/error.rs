//! Error types for posterior comparisons.

/// Error returned when a comparison cannot be computed.
///
/// All validation happens before any sampling, so an error always means that
/// no posterior samples were drawn.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A parameter is out of range (negative rope width, negative prior
    /// strength, non-finite observation, ...).
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Input is neither a vector of differences nor a two-column table of pairs.
    #[error("invalid input shape: expected differences or two columns, got {found}")]
    InvalidShape {
        /// Description of the shape that was supplied.
        found: String,
    },

    /// A component that needs at least one element received none.
    #[error("empty input: {what} must not be empty")]
    EmptyInput {
        /// What was empty (observations, posterior samples, ...).
        what: &'static str,
    },
}

impl Error {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Reject negative or non-finite values for a parameter that must be `>= 0`.
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::invalid_argument(name, format!("must be finite, got {value}")));
    }
    if value < 0.0 {
        return Err(Error::invalid_argument(name, format!("must be non-negative, got {value}")));
    }
    Ok(())
}
