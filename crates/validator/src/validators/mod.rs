//! Built-in leaf rules
//!
//! Each rule checks one scalar kind and starts with the same presence
//! check: a null value is `missing` unless the rule is optional, in which
//! case nothing else is checked.
//!
//! - **String**: [`string()`] with length bounds, emptiness and patterns
//! - **Numeric**: [`integer()`], [`floating_point()`], [`decimal()`],
//!   [`number()`] with inclusive bounds
//! - **Boolean**: [`boolean()`]
//!
//! # Examples
//!
//! ```rust
//! use stencil_validator::foundation::Predicate;
//! use stencil_validator::validators::{integer, string};
//! use stencil_value::Value;
//!
//! let name = string().min_length(2);
//! assert_eq!(name.check(&Value::Null).unwrap().message(), Some("missing"));
//! assert_eq!(name.check(&Value::from("")).unwrap().message(), Some("empty value"));
//!
//! let age = integer().min_value(0).optional();
//! assert!(age.check(&Value::Null).is_none());
//! assert_eq!(age.check(&Value::from(-1)).unwrap().message(), Some("less than minimum"));
//! ```

use stencil_value::Value;

use crate::foundation::{Issue, Problem};

// ============================================================================
// SHARED PRESENCE CHECK
// ============================================================================

/// The part of a leaf rule that runs once the value is known to be present.
pub(crate) trait LeafRule {
    fn is_optional(&self) -> bool;

    /// Kind-specific checks for a non-null value.
    fn check_present(&self, value: &Value) -> Option<Issue>;
}

/// Presence check first, then the kind-specific checks.
pub(crate) fn check_leaf<R: LeafRule + ?Sized>(rule: &R, value: &Value) -> Option<Problem> {
    if value.is_null() {
        return (!rule.is_optional()).then(|| Issue::missing().into());
    }
    rule.check_present(value).map(Problem::from)
}

/// Implements [`Predicate`](crate::foundation::Predicate) for leaf rules.
macro_rules! leaf_predicate {
    ($($rule:ty),* $(,)?) => {
        $(
            impl $crate::foundation::Predicate for $rule {
                fn check(&self, value: &::stencil_value::Value) -> Option<$crate::foundation::Problem> {
                    $crate::validators::check_leaf(self, value)
                }
            }
        )*
    };
}

pub(crate) use leaf_predicate;

pub mod boolean;
pub mod numeric;
pub mod pattern;
pub mod string;

pub use boolean::{BooleanRule, boolean};
pub use numeric::{
    AnyNumber, Bounds, DecimalRule, Exact, FloatRule, Floating, IntegerRule, NumberRule,
    NumericKind, NumericRule, Whole, decimal, floating_point, integer, number,
};
pub use pattern::PatternFlags;
pub use string::{StringRule, string};
