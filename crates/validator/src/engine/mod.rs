//! Validation engine
//!
//! The engine walks a [`Validator`] tree alongside a [`Value`] and collects
//! problems into a tree of the same shape. Dispatch is on the validator
//! node:
//!
//! - **Leaf**: the predicate's result, as is
//! - **Mapping**: every declared key is checked, absent keys as null;
//!   undeclared keys are ignored
//! - **Sequence**: every element, keyed by position
//! - **Tuple**: length first; a wrong length stops there, otherwise every
//!   position with its own validator
//! - **Guarded**: null is `missing` (or accepted when optional), anything
//!   else goes to the inner validator at the same depth
//!
//! A composite node whose children all pass yields `None`, never an empty
//! tree.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use stencil_value::{NULL, Value, ValueKind};

use crate::foundation::{ConfigError, Issue, Problem, ValidationFailure};

pub mod config;
pub mod validator;

pub use config::{DEFAULT_MAX_DEPTH, EngineConfig};
pub use validator::{IntoValidator, Validator};

// ============================================================================
// ENGINE
// ============================================================================

/// Runs validator trees against values.
///
/// Stateless apart from its configuration, so one engine can serve any
/// number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the configuration is rejected by
    /// [`EngineConfig::validate`].
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validates `value` against `validator`.
    ///
    /// Returns `None` when the value conforms.
    #[must_use]
    pub fn validate(&self, value: &Value, validator: &Validator) -> Option<Problem> {
        self.walk(value, validator, 0)
    }

    /// Like [`Engine::validate`], but returns the problems as an error.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationFailure`] carrying the problem tree.
    pub fn ensure_valid(&self, value: &Value, validator: &Validator) -> Result<(), ValidationFailure> {
        match self.validate(value, validator) {
            Some(problems) => Err(ValidationFailure::new(problems)),
            None => Ok(()),
        }
    }

    /// Checks declared keys against an arbitrary keyed source.
    ///
    /// `lookup` returns the value stored under a key, or [`NULL`] when there
    /// is none. This is how model instances are validated without first
    /// being copied into a mapping.
    #[must_use]
    pub fn validate_keyed<'v, F>(&self, lookup: F, keys: &IndexMap<String, Validator>) -> Option<Problem>
    where
        F: Fn(&str) -> &'v Value,
    {
        self.walk_keys(lookup, keys, 1)
    }

    fn walk(&self, value: &Value, validator: &Validator, depth: usize) -> Option<Problem> {
        match validator {
            Validator::Leaf(predicate) => return predicate.check(value),
            Validator::Guarded { optional, inner } => {
                if value.is_null() {
                    return (!optional).then(|| Issue::missing().into());
                }
                return self.walk(value, inner, depth);
            }
            _ => {}
        }

        if depth >= self.config.max_depth {
            tracing::warn!(
                max_depth = self.config.max_depth,
                kind = validator.kind_name(),
                "validator nesting exceeds the depth ceiling"
            );
            return Some(Issue::too_deep(self.config.max_depth).into());
        }

        tracing::trace!(kind = validator.kind_name(), depth, found = %value.kind(), "validating");

        match validator {
            Validator::Leaf(_) | Validator::Guarded { .. } => None,
            Validator::Mapping(keys) => match value.as_mapping() {
                Some(map) => self.walk_keys(|key| map.get(key).unwrap_or(&NULL), keys, depth + 1),
                None => Some(mismatch("not a mapping", ValueKind::Mapping, value)),
            },
            Validator::Sequence(element) => match value.as_sequence() {
                Some(items) => {
                    let problems: BTreeMap<usize, Problem> = items
                        .iter()
                        .enumerate()
                        .filter_map(|(index, item)| {
                            self.walk(item, element, depth + 1).map(|p| (index, p))
                        })
                        .collect();
                    (!problems.is_empty()).then_some(Problem::Indexed(problems))
                }
                None => Some(mismatch("not a sequence", ValueKind::Sequence, value)),
            },
            Validator::Tuple(positions) => {
                let items = match value {
                    Value::Tuple(items) => items,
                    Value::Sequence(items) if self.config.lenient_tuples => items,
                    _ => return Some(mismatch("not a tuple", ValueKind::Tuple, value)),
                };
                if items.len() != positions.len() {
                    return Some(Issue::length_mismatch(positions.len(), items.len()).into());
                }
                let problems: BTreeMap<usize, Problem> = items
                    .iter()
                    .zip(positions)
                    .enumerate()
                    .filter_map(|(index, (item, position))| {
                        self.walk(item, position, depth + 1).map(|p| (index, p))
                    })
                    .collect();
                (!problems.is_empty()).then_some(Problem::Indexed(problems))
            }
        }
    }

    fn walk_keys<'v, F>(&self, lookup: F, keys: &IndexMap<String, Validator>, depth: usize) -> Option<Problem>
    where
        F: Fn(&str) -> &'v Value,
    {
        let problems: IndexMap<String, Problem> = keys
            .iter()
            .filter_map(|(key, validator)| {
                self.walk(lookup(key), validator, depth)
                    .map(|p| (key.clone(), p))
            })
            .collect();
        (!problems.is_empty()).then_some(Problem::Keyed(problems))
    }
}

fn mismatch(message: &'static str, expected: ValueKind, value: &Value) -> Problem {
    Issue::type_mismatch(message, expected.name(), value.kind().name()).into()
}

// ============================================================================
// FREE FUNCTIONS
// ============================================================================

/// Validates with a default-configured engine.
///
/// # Examples
///
/// ```rust
/// use stencil_validator::prelude::*;
///
/// let shape = mapping! { "name" => string(), "age" => integer().min_value(0) }.unwrap();
/// let problem = validate(&Value::mapping([("age", -3)]), &shape).unwrap();
/// assert_eq!(
///     problem.to_json(),
///     serde_json::json!({"name": "missing", "age": "less than minimum"})
/// );
/// ```
#[must_use]
pub fn validate(value: &Value, validator: &Validator) -> Option<Problem> {
    Engine::default().validate(value, validator)
}

/// # Errors
///
/// Returns a [`ValidationFailure`] when `value` has problems.
pub fn ensure_valid(value: &Value, validator: &Validator) -> Result<(), ValidationFailure> {
    Engine::default().ensure_valid(value, validator)
}
