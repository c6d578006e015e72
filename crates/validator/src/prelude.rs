//! Prelude module for convenient imports.
//!
//! Provides a single `use stencil_validator::prelude::*;` import that brings
//! in the value type, leaf rules, the engine and the model layer.
//!
//! # Examples
//!
//! ```rust
//! use stencil_validator::prelude::*;
//!
//! let age = Validator::leaf(integer().min_value(0));
//! assert!(validate(&Value::from(3), &age).is_none());
//! ```

// ============================================================================
// FOUNDATION: Problems, errors, traits
// ============================================================================

pub use crate::foundation::{
    ConfigError, DefinitionError, Issue, Predicate, Problem, ValidationFailure,
};

// ============================================================================
// VALIDATORS: Leaf rules
// ============================================================================

pub use crate::validators::{
    BooleanRule, DecimalRule, FloatRule, IntegerRule, NumberRule, PatternFlags, StringRule,
    boolean, decimal, floating_point, integer, number, string,
};

// ============================================================================
// ENGINE: Validator trees and validation
// ============================================================================

pub use crate::engine::{Engine, EngineConfig, IntoValidator, Validator, ensure_valid, validate};
pub use crate::{mapping, tuple};

// ============================================================================
// MODELS AND SCOPES
// ============================================================================

pub use crate::model::{Field, FieldKind, ModelDefinition, ModelInstance};
pub use crate::scope::{Attributes, Scope, check};

// ============================================================================
// VALUES
// ============================================================================

pub use stencil_value::{Mapping, Value, ValueKind};
