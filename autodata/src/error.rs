//! Adapter error types using thiserror 2.0.
//!
//! Contract violations are reported by the adapter itself; resolution
//! failures from the fixture pass through unchanged.

use autodata_specimen::SpecimenError;
use thiserror::Error;

/// Errors raised while generating data sources.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AutoDataError {
    /// A required argument was absent
    #[error("Value cannot be null: {0}")]
    ArgumentNull(&'static str),

    /// An argument was present but unusable
    #[error("Invalid argument: {0}")]
    Argument(String),

    /// An internal invariant did not hold
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Fixture customization or resolution failed
    #[error(transparent)]
    Specimen(#[from] SpecimenError),
}

/// Result type for adapter operations.
pub type AutoDataResult<T> = Result<T, AutoDataError>;

impl AutoDataError {
    /// Check if this error reports a caller contract violation.
    ///
    /// # Examples
    ///
    /// ```
    /// use autodata::AutoDataError;
    ///
    /// let err = AutoDataError::ArgumentNull("parameter_infos");
    /// assert!(err.is_contract_violation());
    ///
    /// let err = AutoDataError::invalid_state("specimen type mismatch");
    /// assert!(!err.is_contract_violation());
    /// ```
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        match self {
            Self::ArgumentNull(_) | Self::Argument(_) => true,
            Self::Specimen(err) => err.is_argument_error(),
            Self::InvalidState(_) => false,
        }
    }

    /// Create an invalid argument error.
    #[must_use]
    pub fn argument(msg: impl Into<String>) -> Self {
        Self::Argument(msg.into())
    }

    /// Create an invalid state error.
    #[must_use]
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }
}
