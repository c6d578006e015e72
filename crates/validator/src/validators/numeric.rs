//! Numeric rules
//!
//! One generic rule, [`NumericRule`], parameterized by the numeric kind it
//! accepts. Bounds are inclusive, and each bound is checked whenever it is
//! set, including a bound of zero.

use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::marker::PhantomData;

use rust_decimal::Decimal;
use stencil_value::{Value, ValueKind};

use super::LeafRule;
use crate::foundation::{Issue, Predicate, Problem};

// ============================================================================
// NUMERIC KINDS
// ============================================================================

/// A family of numeric values a [`NumericRule`] accepts.
pub trait NumericKind {
    /// The number compared against the bounds.
    type Number: PartialOrd + Display + Debug + Copy + Send + Sync;

    /// Message reported for a value of another kind.
    const MISMATCH: &'static str;

    /// Name reported as the expected kind.
    const EXPECTED: &'static str;

    /// Extracts the number, or `None` when the value has another kind.
    fn extract(value: &Value) -> Option<Self::Number>;
}

/// Whole numbers only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Whole;

/// Floating-point numbers only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Floating;

/// Exact decimals only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exact;

/// Any numeric kind, compared as `f64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnyNumber;

impl NumericKind for Whole {
    type Number = i64;
    const MISMATCH: &'static str = "not a whole number";
    const EXPECTED: &'static str = ValueKind::Integer.name();

    fn extract(value: &Value) -> Option<i64> {
        value.as_i64()
    }
}

impl NumericKind for Floating {
    type Number = f64;
    const MISMATCH: &'static str = "not a floating-point number";
    const EXPECTED: &'static str = ValueKind::Float.name();

    fn extract(value: &Value) -> Option<f64> {
        match value {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl NumericKind for Exact {
    type Number = Decimal;
    const MISMATCH: &'static str = "not a decimal number";
    const EXPECTED: &'static str = ValueKind::Decimal.name();

    fn extract(value: &Value) -> Option<Decimal> {
        value.as_decimal().copied()
    }
}

impl NumericKind for AnyNumber {
    type Number = f64;
    const MISMATCH: &'static str = "not a number";
    const EXPECTED: &'static str = "number";

    fn extract(value: &Value) -> Option<f64> {
        value.as_f64()
    }
}

// ============================================================================
// BOUNDS
// ============================================================================

/// Optional inclusive lower and upper bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> Default for Bounds<T> {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
        }
    }
}

impl<T: PartialOrd + Display + Copy> Bounds<T> {
    /// Minimum first, then maximum.
    ///
    /// A number that does not compare with a set bound (NaN) fails it.
    pub fn check(&self, number: T) -> Option<Issue> {
        if let Some(min) = self.min
            && !matches!(number.partial_cmp(&min), Some(Ordering::Greater | Ordering::Equal))
        {
            return Some(Issue::below_minimum(min, number));
        }
        if let Some(max) = self.max
            && !matches!(number.partial_cmp(&max), Some(Ordering::Less | Ordering::Equal))
        {
            return Some(Issue::above_maximum(max, number));
        }
        None
    }
}

// ============================================================================
// RULE
// ============================================================================

/// A numeric check for kind `K`.
///
/// # Examples
///
/// ```rust
/// use stencil_validator::foundation::Predicate;
/// use stencil_validator::validators::{integer, number};
/// use stencil_value::Value;
///
/// let rule = integer().min_value(0).max_value(10);
/// assert!(rule.check(&Value::from(0)).is_none());
/// assert_eq!(rule.check(&Value::from(11)).unwrap().message(), Some("greater than maximum"));
/// assert_eq!(rule.check(&Value::from(1.0)).unwrap().message(), Some("not a whole number"));
///
/// assert!(number().max_value(2.5).check(&Value::from(2)).is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NumericRule<K: NumericKind> {
    optional: bool,
    bounds: Bounds<K::Number>,
    kind: PhantomData<fn() -> K>,
}

pub type IntegerRule = NumericRule<Whole>;
pub type FloatRule = NumericRule<Floating>;
pub type DecimalRule = NumericRule<Exact>;
pub type NumberRule = NumericRule<AnyNumber>;

impl<K: NumericKind> Default for NumericRule<K> {
    fn default() -> Self {
        Self {
            optional: false,
            bounds: Bounds::default(),
            kind: PhantomData,
        }
    }
}

impl<K: NumericKind> NumericRule<K> {
    #[must_use = "builder methods must be chained or built"]
    pub fn optional(self) -> Self {
        self.optional_if(true)
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn optional_if(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Inclusive lower bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_value(mut self, min: K::Number) -> Self {
        self.bounds.min = Some(min);
        self
    }

    /// Inclusive upper bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_value(mut self, max: K::Number) -> Self {
        self.bounds.max = Some(max);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn range(self, min: K::Number, max: K::Number) -> Self {
        self.min_value(min).max_value(max)
    }

    #[must_use]
    pub fn bounds(&self) -> &Bounds<K::Number> {
        &self.bounds
    }

    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.optional
    }
}

impl<K: NumericKind> LeafRule for NumericRule<K> {
    fn is_optional(&self) -> bool {
        self.optional
    }

    fn check_present(&self, value: &Value) -> Option<Issue> {
        match K::extract(value) {
            Some(number) => self.bounds.check(number),
            None => Some(Issue::type_mismatch(
                K::MISMATCH,
                K::EXPECTED,
                value.kind().name(),
            )),
        }
    }
}

impl<K: NumericKind> Predicate for NumericRule<K> {
    fn check(&self, value: &Value) -> Option<Problem> {
        super::check_leaf(self, value)
    }
}

/// Creates a required whole-number rule.
#[must_use]
pub fn integer() -> IntegerRule {
    NumericRule::default()
}

/// Creates a required floating-point rule.
#[must_use]
pub fn floating_point() -> FloatRule {
    NumericRule::default()
}

/// Creates a required exact-decimal rule.
#[must_use]
pub fn decimal() -> DecimalRule {
    NumericRule::default()
}

/// Creates a required rule accepting any numeric kind.
#[must_use]
pub fn number() -> NumberRule {
    NumericRule::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn message<P: Predicate>(rule: &P, value: Value) -> Option<String> {
        rule.check(&value)
            .and_then(|p| p.message().map(str::to_owned))
    }

    #[rstest]
    #[case(Value::from(5), None)]
    #[case(Value::Null, Some("missing"))]
    #[case(Value::from(5.0), Some("not a whole number"))]
    #[case(Value::from("5"), Some("not a whole number"))]
    #[case(Value::from(true), Some("not a whole number"))]
    fn test_integer_kind(#[case] value: Value, #[case] expected: Option<&str>) {
        assert_eq!(message(&integer(), value).as_deref(), expected);
    }

    #[rstest]
    #[case(-1, Some("less than minimum"))]
    #[case(0, None)]
    #[case(10, None)]
    #[case(11, Some("greater than maximum"))]
    fn test_integer_bounds_inclusive(#[case] n: i64, #[case] expected: Option<&str>) {
        let rule = integer().range(0, 10);
        assert_eq!(message(&rule, Value::from(n)).as_deref(), expected);
    }

    #[test]
    fn test_zero_bounds_are_enforced() {
        assert_eq!(
            message(&integer().max_value(0), Value::from(1)).as_deref(),
            Some("greater than maximum")
        );
        assert_eq!(
            message(&floating_point().min_value(0.0), Value::from(-0.5)).as_deref(),
            Some("less than minimum")
        );
    }

    #[test]
    fn test_nan_fails_set_bounds() {
        let rule = floating_point().min_value(0.0).max_value(1.0);
        assert_eq!(
            message(&rule, Value::from(f64::NAN)).as_deref(),
            Some("less than minimum")
        );
        assert_eq!(
            message(&floating_point().max_value(1.0), Value::from(f64::NAN)).as_deref(),
            Some("greater than maximum")
        );
        assert_eq!(message(&floating_point(), Value::from(f64::NAN)), None);
    }

    #[test]
    fn test_floating_point_rejects_integers() {
        assert_eq!(message(&floating_point(), Value::from(1.5)), None);
        assert_eq!(
            message(&floating_point(), Value::from(1)).as_deref(),
            Some("not a floating-point number")
        );
    }

    #[test]
    fn test_decimal_bounds() {
        let rule = decimal().min_value(Decimal::new(100, 2));
        assert_eq!(message(&rule, Value::from(Decimal::new(100, 2))), None);
        assert_eq!(
            message(&rule, Value::from(Decimal::new(99, 2))).as_deref(),
            Some("less than minimum")
        );
        assert_eq!(
            message(&rule, Value::from(1.0)).as_deref(),
            Some("not a decimal number")
        );
    }

    #[rstest]
    #[case(Value::from(3), None)]
    #[case(Value::from(3.5), None)]
    #[case(Value::from(Decimal::new(35, 1)), None)]
    #[case(Value::from(4), Some("greater than maximum"))]
    #[case(Value::from("3"), Some("not a number"))]
    fn test_number_accepts_every_numeric_kind(#[case] value: Value, #[case] expected: Option<&str>) {
        let rule = number().max_value(3.5);
        assert_eq!(message(&rule, value).as_deref(), expected);
    }

    #[test]
    fn test_bound_params() {
        let problem = integer().min_value(18).check(&Value::from(7)).unwrap();
        let issue = problem.as_issue().unwrap();
        assert_eq!(issue.code, "below_minimum");
        assert_eq!(issue.param("min"), Some("18"));
        assert_eq!(issue.param("actual"), Some("7"));
    }
}
