//! The validator tree.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use indexmap::map::Entry;
use stencil_value::Value;

use crate::foundation::{DefinitionError, Predicate, Problem};
use crate::validators::{BooleanRule, NumericKind, NumericRule, StringRule};

/// A tree describing the expected shape of a value.
///
/// Built once, then shared read-only between any number of validations and
/// threads. Every node is checked at construction time, so validating with
/// a built tree never fails: it only reports problems.
///
/// # Examples
///
/// ```rust
/// use stencil_validator::prelude::*;
///
/// let point = Validator::tuple([integer(), integer()]).unwrap();
/// let shape = Validator::mapping([
///     ("name", Validator::leaf(string())),
///     ("points", Validator::sequence(point)),
/// ])
/// .unwrap();
///
/// let value = Value::mapping([
///     ("name", Value::from("path")),
///     ("points", Value::sequence([Value::tuple([0, 0]), Value::tuple([1, 2])])),
/// ]);
/// assert!(validate(&value, &shape).is_none());
/// ```
#[derive(Clone)]
pub enum Validator {
    /// A single check on the value itself.
    Leaf(Arc<dyn Predicate>),

    /// Exactly these keys, each with its own validator. Other keys are
    /// ignored and absent keys read as null.
    Mapping(IndexMap<String, Validator>),

    /// Any number of elements, all checked by the same validator.
    Sequence(Box<Validator>),

    /// A fixed number of positions, each with its own validator.
    Tuple(Vec<Validator>),

    /// Presence check, then `inner` on any non-null value. Null is
    /// `missing` unless `optional`. Adds no depth of its own.
    Guarded {
        optional: bool,
        inner: Box<Validator>,
    },
}

impl Validator {
    // ==================== Constructors ====================

    pub fn leaf(predicate: impl Predicate + 'static) -> Self {
        Self::Leaf(Arc::new(predicate))
    }

    /// Wraps a closure as a leaf.
    ///
    /// Prefer this over [`Validator::leaf`] for closures: the `Fn` bound lets
    /// the compiler infer the argument type.
    pub fn from_fn<F>(check: F) -> Self
    where
        F: Fn(&Value) -> Option<Problem> + Send + Sync + 'static,
    {
        Self::Leaf(Arc::new(check))
    }

    /// Builds a mapping validator from `(key, validator)` pairs, keeping
    /// their order.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::DuplicateKey`] when a key repeats.
    pub fn mapping<I, K, V>(entries: I) -> Result<Self, DefinitionError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoValidator,
    {
        let mut keys = IndexMap::new();
        for (key, validator) in entries {
            match keys.entry(key.into()) {
                Entry::Occupied(entry) => {
                    return Err(DefinitionError::DuplicateKey {
                        key: entry.key().clone(),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(validator.into_validator());
                }
            }
        }
        Ok(Self::Mapping(keys))
    }

    pub fn sequence(element: impl IntoValidator) -> Self {
        Self::Sequence(Box::new(element.into_validator()))
    }

    /// Sequence validator from a list that must hold exactly one element
    /// validator.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::SequenceArity`] for any other count.
    pub fn sequence_of(elements: Vec<Validator>) -> Result<Self, DefinitionError> {
        let count = elements.len();
        let mut elements = elements.into_iter();
        match (elements.next(), elements.next()) {
            (Some(element), None) => Ok(Self::sequence(element)),
            _ => Err(DefinitionError::SequenceArity { count }),
        }
    }

    /// # Errors
    ///
    /// Returns [`DefinitionError::EmptyTuple`] when there are no positions.
    pub fn tuple<I, V>(positions: I) -> Result<Self, DefinitionError>
    where
        I: IntoIterator<Item = V>,
        V: IntoValidator,
    {
        let positions: Vec<Validator> = positions
            .into_iter()
            .map(IntoValidator::into_validator)
            .collect();
        if positions.is_empty() {
            return Err(DefinitionError::EmptyTuple);
        }
        Ok(Self::Tuple(positions))
    }

    /// Reports null as `missing`, otherwise defers to `inner`.
    pub fn required(inner: impl IntoValidator) -> Self {
        Self::guarded(inner, false)
    }

    /// Accepts null, otherwise defers to `inner`.
    pub fn optional(inner: impl IntoValidator) -> Self {
        Self::guarded(inner, true)
    }

    pub fn guarded(inner: impl IntoValidator, optional: bool) -> Self {
        Self::Guarded {
            optional,
            inner: Box::new(inner.into_validator()),
        }
    }

    // ==================== Queries ====================

    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Short label for logs.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Leaf(_) => "leaf",
            Self::Mapping(_) => "mapping",
            Self::Sequence(_) => "sequence",
            Self::Tuple(_) => "tuple",
            Self::Guarded { .. } => "guarded",
        }
    }

    /// Declared keys of a mapping validator, seen through a guard.
    #[must_use]
    pub fn keys(&self) -> Option<impl Iterator<Item = &str>> {
        match self.unguarded() {
            Self::Mapping(keys) => Some(keys.keys().map(String::as_str)),
            _ => None,
        }
    }

    /// Number of positions of a tuple validator, seen through a guard.
    #[must_use]
    pub fn arity(&self) -> Option<usize> {
        match self.unguarded() {
            Self::Tuple(positions) => Some(positions.len()),
            _ => None,
        }
    }

    fn unguarded(&self) -> &Self {
        let mut node = self;
        while let Self::Guarded { inner, .. } = node {
            node = inner;
        }
        node
    }

    /// Validates with the default engine.
    #[must_use]
    pub fn check(&self, value: &Value) -> Option<Problem> {
        super::validate(value, self)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(predicate) => f.debug_tuple("Leaf").field(&predicate.name()).finish(),
            Self::Mapping(keys) => f.debug_map().entries(keys.iter()).finish(),
            Self::Sequence(element) => f.debug_list().entry(element).finish(),
            Self::Tuple(positions) => {
                let mut tuple = f.debug_tuple("");
                for position in positions {
                    tuple.field(position);
                }
                tuple.finish()
            }
            Self::Guarded { optional, inner } => f
                .debug_struct("Guarded")
                .field("optional", optional)
                .field("inner", inner)
                .finish(),
        }
    }
}

// ============================================================================
// INTO VALIDATOR
// ============================================================================

/// Anything usable as a node of a validator tree.
pub trait IntoValidator {
    fn into_validator(self) -> Validator;
}

impl IntoValidator for Validator {
    fn into_validator(self) -> Validator {
        self
    }
}

impl IntoValidator for StringRule {
    fn into_validator(self) -> Validator {
        Validator::leaf(self)
    }
}

impl IntoValidator for BooleanRule {
    fn into_validator(self) -> Validator {
        Validator::leaf(self)
    }
}

impl<K: NumericKind + 'static> IntoValidator for NumericRule<K> {
    fn into_validator(self) -> Validator {
        Validator::leaf(self)
    }
}

impl IntoValidator for Arc<dyn Predicate> {
    fn into_validator(self) -> Validator {
        Validator::Leaf(self)
    }
}
