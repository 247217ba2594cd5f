//! Witness Generation Errors
//!
//! Every failure in the commit / assemble / render pipeline surfaces as a
//! typed [`WitnessError`]. Nothing is retried: the pipeline is deterministic,
//! so the same input always fails the same way.

use thiserror::Error;

use crate::core::board::Outcome;
use crate::core::hash::Digest32;

/// Errors produced while committing to a board or assembling witnesses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WitnessError {
    /// Board or shot has the wrong shape, or a value is out of range.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Hash backend could not be initialized.
    #[error("commitment primitive unavailable: {0}")]
    PrimitiveUnavailable(String),

    /// Supplied commitment does not match the board.
    #[error("commitment mismatch: supplied {supplied}, board commits to {computed}")]
    CommitmentMismatch {
        /// Commitment passed in by the caller.
        supplied: Digest32,
        /// Commitment recomputed from the board.
        computed: Digest32,
    },

    /// Supplied outcome does not match the board at the shot coordinate.
    #[error("outcome mismatch: supplied {supplied:?}, board yields {actual:?}")]
    OutcomeMismatch {
        /// Outcome passed in by the caller.
        supplied: Outcome,
        /// Outcome computed from the board.
        actual: Outcome,
    },

    /// A witness field cannot be rendered in (or parsed from) the document format.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl WitnessError {
    /// Shorthand for [`WitnessError::InvalidInput`].
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<toml::ser::Error> for WitnessError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for WitnessError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
