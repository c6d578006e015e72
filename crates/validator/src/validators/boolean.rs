//! Boolean rule

use stencil_value::{Value, ValueKind};

use super::LeafRule;
use crate::foundation::Issue;

/// Accepts `true` and `false`, nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BooleanRule {
    optional: bool,
}

impl BooleanRule {
    #[must_use = "builder methods must be chained or built"]
    pub const fn optional(self) -> Self {
        self.optional_if(true)
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn optional_if(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.optional
    }
}

impl LeafRule for BooleanRule {
    fn is_optional(&self) -> bool {
        self.optional
    }

    fn check_present(&self, value: &Value) -> Option<Issue> {
        match value {
            Value::Boolean(_) => None,
            other => Some(Issue::type_mismatch(
                "not a boolean value",
                ValueKind::Boolean.name(),
                other.kind().name(),
            )),
        }
    }
}

super::leaf_predicate!(BooleanRule);

/// Creates a required boolean rule.
#[must_use]
pub const fn boolean() -> BooleanRule {
    BooleanRule { optional: false }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Predicate;
    use rstest::rstest;

    #[rstest]
    #[case(Value::from(true), None)]
    #[case(Value::from(false), None)]
    #[case(Value::Null, Some("missing"))]
    #[case(Value::from(1), Some("not a boolean value"))]
    #[case(Value::from("true"), Some("not a boolean value"))]
    fn test_boolean(#[case] value: Value, #[case] expected: Option<&str>) {
        let problem = boolean().check(&value);
        assert_eq!(problem.as_ref().and_then(|p| p.message()), expected);
    }

    #[test]
    fn test_optional_boolean() {
        assert!(boolean().optional().check(&Value::Null).is_none());
        assert!(boolean().optional().check(&Value::from(0)).is_some());
    }
}
