//! Engine error types using thiserror 2.0.

use thiserror::Error;

/// Errors raised while customizing a fixture or resolving specimens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecimenError {
    /// A required argument was absent
    #[error("Value cannot be null: {name}")]
    ArgumentNull {
        /// Name of the absent argument
        name: &'static str,
    },

    /// The value generator rejected the request
    #[error("Failed to generate specimen of type {type_name}: {reason}")]
    Generation {
        /// Requested type
        type_name: &'static str,
        /// Generator-provided reason
        reason: String,
    },

    /// No registered constructor could be selected
    #[error("No constructor could be selected for {type_name}")]
    NoConstructor {
        /// Requested type
        type_name: &'static str,
    },

    /// The requested type graph is recursive
    #[error("Recursion detected while constructing {}", .path.join(" -> "))]
    Recursion {
        /// Construction path, outermost first, ending with the repeated type
        path: Vec<&'static str>,
    },
}

/// Result type for engine operations.
pub type SpecimenResult<T> = Result<T, SpecimenError>;

impl SpecimenError {
    /// Check if this error reports a caller contract violation rather than a
    /// resolution failure.
    #[must_use]
    pub const fn is_argument_error(&self) -> bool {
        matches!(self, Self::ArgumentNull { .. })
    }

    /// Create an absent-argument error.
    #[must_use]
    pub const fn argument_null(name: &'static str) -> Self {
        Self::ArgumentNull { name }
    }

    /// Create a generation error.
    #[must_use]
    pub fn generation(type_name: &'static str, reason: impl Into<String>) -> Self {
        Self::Generation {
            type_name,
            reason: reason.into(),
        }
    }

    /// Create a no-constructor error.
    #[must_use]
    pub const fn no_constructor(type_name: &'static str) -> Self {
        Self::NoConstructor { type_name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpecimenError::argument_null("parameter");
        assert_eq!(err.to_string(), "Value cannot be null: parameter");

        let err = SpecimenError::Recursion {
            path: vec!["Node", "Node"],
        };
        assert_eq!(
            err.to_string(),
            "Recursion detected while constructing Node -> Node"
        );
    }

    #[test]
    fn test_argument_errors() {
        assert!(SpecimenError::argument_null("parameter").is_argument_error());
        assert!(!SpecimenError::no_constructor("Basket").is_argument_error());
        assert!(!SpecimenError::generation("i32", "rejected").is_argument_error());
    }
}
