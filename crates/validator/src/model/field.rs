//! Field declarations

use std::sync::Arc;

use regex::Regex;
use rust_decimal::Decimal;
use stencil_value::Value;

use super::ModelDefinition;
use crate::engine::{IntoValidator, Validator};
use crate::foundation::{DefinitionError, Issue, Predicate, Problem};
use crate::validators::{
    BooleanRule, DecimalRule, FloatRule, IntegerRule, LeafRule, NumberRule, PatternFlags,
    StringRule, boolean, decimal, floating_point, integer, number, string,
};

/// What a field accepts once it is known to be present.
#[derive(Debug, Clone)]
pub enum FieldKind {
    /// Any present value.
    Any,
    Text(StringRule),
    Integer(IntegerRule),
    Float(FloatRule),
    Decimal(DecimalRule),
    Number(NumberRule),
    Boolean(BooleanRule),
    /// A nested model, validated as a mapping of its fields.
    Model(Arc<ModelDefinition>),
    /// An arbitrary validator tree.
    Shape(Validator),
}

/// A named slot of a model: a kind, optionality and a default value.
///
/// Validation always runs the presence check first: null is `missing`
/// unless the field is optional, and an optional null field is accepted
/// without looking further.
///
/// # Examples
///
/// ```rust
/// use stencil_validator::model::Field;
/// use stencil_value::Value;
///
/// let age = Field::integer().min_value(0).optional().default_value(0);
/// assert!(age.is_optional());
/// assert_eq!(age.default(), &Value::from(0));
/// assert!(age.validate(&Value::Null).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Field {
    kind: FieldKind,
    optional: bool,
    default_value: Value,
}

impl Field {
    /// A required field of `kind` with a null default.
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            optional: false,
            default_value: Value::Null,
        }
    }

    pub fn any() -> Self {
        Self::new(FieldKind::Any)
    }

    pub fn string() -> Self {
        Self::new(FieldKind::Text(string()))
    }

    pub fn integer() -> Self {
        Self::new(FieldKind::Integer(integer()))
    }

    pub fn floating_point() -> Self {
        Self::new(FieldKind::Float(floating_point()))
    }

    pub fn decimal() -> Self {
        Self::new(FieldKind::Decimal(decimal()))
    }

    pub fn number() -> Self {
        Self::new(FieldKind::Number(number()))
    }

    pub fn boolean() -> Self {
        Self::new(FieldKind::Boolean(boolean()))
    }

    /// A field holding a nested model.
    pub fn model(definition: &Arc<ModelDefinition>) -> Self {
        Self::new(FieldKind::Model(Arc::clone(definition)))
    }

    /// A field checked by any validator tree.
    pub fn shape(validator: impl IntoValidator) -> Self {
        Self::new(FieldKind::Shape(validator.into_validator()))
    }

    // ==================== Builders ====================

    #[must_use = "builder methods must be chained or built"]
    pub fn optional(self) -> Self {
        self.optional_if(true)
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn optional_if(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Value a fresh instance starts with.
    #[must_use = "builder methods must be chained or built"]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Minimum text length. No effect on non-text fields.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(self, min: usize) -> Self {
        self.map_text(|rule| rule.min_length(min))
    }

    /// Maximum text length. No effect on non-text fields.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(self, max: usize) -> Self {
        self.map_text(|rule| rule.max_length(max))
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn allow_empty(self) -> Self {
        self.map_text(StringRule::allow_empty)
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn pattern(self, pattern: Regex) -> Self {
        self.map_text(|rule| rule.pattern(pattern))
    }

    /// Compiles and sets a text pattern.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::InvalidPattern`] if `pattern` does not
    /// compile.
    pub fn pattern_str(self, pattern: &str, flags: PatternFlags) -> Result<Self, DefinitionError> {
        Ok(self.pattern(flags.compile(pattern)?))
    }

    /// Lower bound for integer fields, or any numeric field via `f64`.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_value(mut self, min: i64) -> Self {
        self.kind = match self.kind {
            FieldKind::Integer(rule) => FieldKind::Integer(rule.min_value(min)),
            FieldKind::Float(rule) => FieldKind::Float(rule.min_value(min as f64)),
            FieldKind::Decimal(rule) => FieldKind::Decimal(rule.min_value(Decimal::from(min))),
            FieldKind::Number(rule) => FieldKind::Number(rule.min_value(min as f64)),
            other => other,
        };
        self
    }

    /// Upper bound for integer fields, or any numeric field via `f64`.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_value(mut self, max: i64) -> Self {
        self.kind = match self.kind {
            FieldKind::Integer(rule) => FieldKind::Integer(rule.max_value(max)),
            FieldKind::Float(rule) => FieldKind::Float(rule.max_value(max as f64)),
            FieldKind::Decimal(rule) => FieldKind::Decimal(rule.max_value(Decimal::from(max))),
            FieldKind::Number(rule) => FieldKind::Number(rule.max_value(max as f64)),
            other => other,
        };
        self
    }

    /// Fractional lower bound for float and number fields.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_float(mut self, min: f64) -> Self {
        self.kind = match self.kind {
            FieldKind::Float(rule) => FieldKind::Float(rule.min_value(min)),
            FieldKind::Number(rule) => FieldKind::Number(rule.min_value(min)),
            other => other,
        };
        self
    }

    /// Fractional upper bound for float and number fields.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_float(mut self, max: f64) -> Self {
        self.kind = match self.kind {
            FieldKind::Float(rule) => FieldKind::Float(rule.max_value(max)),
            FieldKind::Number(rule) => FieldKind::Number(rule.max_value(max)),
            other => other,
        };
        self
    }

    fn map_text(mut self, f: impl FnOnce(StringRule) -> StringRule) -> Self {
        if let FieldKind::Text(rule) = self.kind {
            self.kind = FieldKind::Text(f(rule));
        }
        self
    }

    // ==================== Accessors ====================

    #[must_use]
    pub const fn kind(&self) -> &FieldKind {
        &self.kind
    }

    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.optional
    }

    /// Value a fresh instance starts with.
    #[must_use]
    pub const fn default(&self) -> &Value {
        &self.default_value
    }

    /// The field as a validator tree node.
    ///
    /// Nested models and shapes become guarded composites, so whichever
    /// engine walks the tree applies its own configuration and depth count
    /// to them. Every other kind stays a leaf.
    #[must_use]
    pub fn to_validator(&self) -> Validator {
        match &self.kind {
            FieldKind::Model(definition) => Validator::guarded(definition.validator(), self.optional),
            FieldKind::Shape(validator) => Validator::guarded(validator.clone(), self.optional),
            _ => Validator::leaf(self.clone()),
        }
    }

    /// Presence check, then the kind's own checks.
    ///
    /// Nested models and shapes are walked by a default engine here; use
    /// [`Field::to_validator`] to walk them with a configured one.
    #[must_use]
    pub fn validate(&self, value: &Value) -> Option<Problem> {
        if value.is_null() {
            return (!self.optional).then(|| Issue::missing().into());
        }
        match &self.kind {
            FieldKind::Any => None,
            FieldKind::Text(rule) => rule.check_present(value).map(Problem::from),
            FieldKind::Integer(rule) => rule.check_present(value).map(Problem::from),
            FieldKind::Float(rule) => rule.check_present(value).map(Problem::from),
            FieldKind::Decimal(rule) => rule.check_present(value).map(Problem::from),
            FieldKind::Number(rule) => rule.check_present(value).map(Problem::from),
            FieldKind::Boolean(rule) => rule.check_present(value).map(Problem::from),
            FieldKind::Model(definition) => definition.validate_value(value),
            FieldKind::Shape(validator) => validator.check(value),
        }
    }
}

impl Predicate for Field {
    fn check(&self, value: &Value) -> Option<Problem> {
        self.validate(value)
    }

    fn name(&self) -> &str {
        match &self.kind {
            FieldKind::Any => "any",
            FieldKind::Text(_) => "string",
            FieldKind::Integer(_) => "integer",
            FieldKind::Float(_) => "floating_point",
            FieldKind::Decimal(_) => "decimal",
            FieldKind::Number(_) => "number",
            FieldKind::Boolean(_) => "boolean",
            FieldKind::Model(definition) => definition.name(),
            FieldKind::Shape(_) => "shape",
        }
    }
}

impl IntoValidator for Field {
    fn into_validator(self) -> Validator {
        self.to_validator()
    }
}

// A rule's own optional flag carries over to the field.
macro_rules! field_from_rule {
    ($($rule:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$rule> for Field {
                fn from(rule: $rule) -> Self {
                    let optional = rule.is_optional();
                    Self::new(FieldKind::$variant(rule)).optional_if(optional)
                }
            }
        )*
    };
}

field_from_rule!(
    StringRule => Text,
    IntegerRule => Integer,
    FloatRule => Float,
    DecimalRule => Decimal,
    NumberRule => Number,
    BooleanRule => Boolean,
);

impl From<Validator> for Field {
    fn from(validator: Validator) -> Self {
        Self::shape(validator)
    }
}

impl From<&Arc<ModelDefinition>> for Field {
    fn from(definition: &Arc<ModelDefinition>) -> Self {
        Self::model(definition)
    }
}
