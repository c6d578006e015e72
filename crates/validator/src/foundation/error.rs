//! Error types for definition, configuration and raising validation.

use thiserror::Error;

use super::problem::Problem;

// ============================================================================
// DEFINITION ERRORS
// ============================================================================

/// A validator, field or model definition that cannot be built.
///
/// These are programmer errors surfaced at construction time, so that a
/// successfully built validator never fails at validation time.
#[derive(Debug, Clone, Error)]
pub enum DefinitionError {
    /// `sequence_of` was given something other than one element validator.
    #[error("a sequence validator takes exactly one element validator, got {count}")]
    SequenceArity { count: usize },

    /// A tuple validator with no positions.
    #[error("a tuple validator needs at least one position")]
    EmptyTuple,

    /// The same key appears twice in one mapping validator.
    #[error("mapping validator declares key '{key}' more than once")]
    DuplicateKey { key: String },

    /// The same field name appears twice in one model declaration.
    #[error("model '{model}' declares field '{field}' more than once")]
    DuplicateField { model: String, field: String },

    /// The same parent appears twice in one model's parent list.
    #[error("model '{model}' lists parent '{parent}' more than once")]
    DuplicateParent { model: String, parent: String },

    /// The parents of a model have no consistent ancestor order.
    #[error("cannot order the ancestors of model '{model}' consistently")]
    InconsistentHierarchy { model: String },

    /// A string pattern failed to compile.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

// ============================================================================
// VALIDATION FAILURE
// ============================================================================

/// Raised by the `ensure_valid` helpers and scope checks when a value has
/// problems.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {problems}")]
pub struct ValidationFailure {
    problems: Problem,
}

impl ValidationFailure {
    pub fn new(problems: Problem) -> Self {
        Self { problems }
    }

    /// The problem tree that caused the failure.
    #[must_use]
    pub fn problems(&self) -> &Problem {
        &self.problems
    }

    #[must_use]
    pub fn into_problems(self) -> Problem {
        self.problems
    }
}

impl From<Problem> for ValidationFailure {
    fn from(problems: Problem) -> Self {
        Self::new(problems)
    }
}

// ============================================================================
// CONFIG ERRORS
// ============================================================================

/// Rejected engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid engine configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("max_depth must be at least 1")]
    InvalidMaxDepth,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Issue;
    use std::error::Error as _;

    #[test]
    fn test_failure_display_renders_problem_json() {
        let failure = ValidationFailure::new(Issue::missing().into());
        assert_eq!(failure.to_string(), r#"validation failed: "missing""#);
        assert_eq!(failure.problems().code(), Some("missing"));
    }

    #[test]
    fn test_invalid_pattern_keeps_source() {
        let source = regex::Regex::new("(").unwrap_err();
        let error = DefinitionError::InvalidPattern {
            pattern: "(".to_owned(),
            source,
        };
        assert!(error.to_string().starts_with("invalid pattern '('"));
        assert!(error.source().is_some());
    }
}
