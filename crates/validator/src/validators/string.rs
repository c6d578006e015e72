//! String rule

use regex::Regex;
use stencil_value::{Value, ValueKind};

use super::LeafRule;
use super::pattern::{PatternFlags, matches_from_start};
use crate::foundation::{DefinitionError, Issue};

/// Checks text values: emptiness, length in characters and a pattern.
///
/// Checks run in order and stop at the first failure: kind, emptiness,
/// minimum length, maximum length, pattern. The pattern must match at the
/// start of the string; the end is not anchored unless the pattern says so.
///
/// # Examples
///
/// ```rust
/// use stencil_validator::foundation::Predicate;
/// use stencil_validator::validators::{PatternFlags, string};
/// use stencil_value::Value;
///
/// let zip = string().pattern_str(r"^\d{5}$", PatternFlags::NONE).unwrap();
/// assert!(zip.check(&Value::from("12345")).is_none());
/// assert_eq!(zip.check(&Value::from("1234")).unwrap().message(), Some("non match"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringRule {
    optional: bool,
    allow_empty: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<Regex>,
}

impl StringRule {
    #[must_use = "builder methods must be chained or built"]
    pub fn optional(self) -> Self {
        self.optional_if(true)
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn optional_if(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Accept the empty string without further checks.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    /// Minimum length in characters, inclusive.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Maximum length in characters, inclusive.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Compiles and sets a pattern.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::InvalidPattern`] if `pattern` does not
    /// compile.
    pub fn pattern_str(self, pattern: &str, flags: PatternFlags) -> Result<Self, DefinitionError> {
        Ok(self.pattern(flags.compile(pattern)?))
    }

    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.optional
    }
}

impl LeafRule for StringRule {
    fn is_optional(&self) -> bool {
        self.optional
    }

    fn check_present(&self, value: &Value) -> Option<Issue> {
        let Some(text) = value.as_str() else {
            return Some(Issue::type_mismatch(
                "not a string",
                ValueKind::Text.name(),
                value.kind().name(),
            ));
        };

        if text.is_empty() {
            return (!self.allow_empty).then(Issue::empty);
        }

        let length = text.chars().count();
        if let Some(min) = self.min_length
            && length < min
        {
            return Some(Issue::too_short(min, length));
        }
        if let Some(max) = self.max_length
            && length > max
        {
            return Some(Issue::too_long(max, length));
        }

        match &self.pattern {
            Some(regex) if !matches_from_start(regex, text) => {
                Some(Issue::pattern_mismatch(regex.as_str()))
            }
            _ => None,
        }
    }
}

super::leaf_predicate!(StringRule);

/// Creates a required string rule that rejects the empty string.
#[must_use]
pub fn string() -> StringRule {
    StringRule::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Predicate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn message(rule: &StringRule, value: Value) -> Option<String> {
        rule.check(&value)
            .and_then(|p| p.message().map(str::to_owned))
    }

    #[rstest]
    #[case(Value::from("hello"), None)]
    #[case(Value::Null, Some("missing"))]
    #[case(Value::from(""), Some("empty value"))]
    #[case(Value::from(5), Some("not a string"))]
    #[case(Value::sequence(["a"]), Some("not a string"))]
    fn test_plain_string(#[case] value: Value, #[case] expected: Option<&str>) {
        assert_eq!(message(&string(), value).as_deref(), expected);
    }

    #[test]
    fn test_optional_skips_everything_on_null() {
        let rule = string().optional().min_length(3);
        assert_eq!(message(&rule, Value::Null), None);
        assert_eq!(message(&rule, Value::from("ab")).as_deref(), Some("too short"));
    }

    #[test]
    fn test_allow_empty() {
        let rule = string().allow_empty().min_length(2);
        assert_eq!(message(&rule, Value::from("")), None);
        assert_eq!(message(&rule, Value::from("a")).as_deref(), Some("too short"));
    }

    #[rstest]
    #[case("ab", Some("too short"))]
    #[case("abc", None)]
    #[case("abcde", None)]
    #[case("abcdef", Some("too long"))]
    #[case("héllo", None)]
    fn test_length_bounds_count_chars(#[case] text: &str, #[case] expected: Option<&str>) {
        let rule = string().min_length(3).max_length(5);
        assert_eq!(message(&rule, Value::from(text)).as_deref(), expected);
    }

    #[test]
    fn test_zero_max_length_is_enforced() {
        let rule = string().max_length(0);
        assert_eq!(message(&rule, Value::from("a")).as_deref(), Some("too long"));
    }

    #[test]
    fn test_pattern_anchored_at_start_only() {
        let rule = string().pattern_str(r"[a-z]+", PatternFlags::NONE).unwrap();
        assert_eq!(message(&rule, Value::from("abc123")), None);
        assert_eq!(message(&rule, Value::from("1abc")).as_deref(), Some("non match"));
    }

    #[test]
    fn test_issue_params() {
        let problem = string().min_length(4).check(&Value::from("abc")).unwrap();
        let issue = problem.as_issue().unwrap();
        assert_eq!(issue.code, "too_short");
        assert_eq!(issue.param("min"), Some("4"));
        assert_eq!(issue.param("actual"), Some("3"));

        let problem = string().check(&Value::from(1.5)).unwrap();
        let issue = problem.as_issue().unwrap();
        assert_eq!(issue.code, "type_mismatch");
        assert_eq!(issue.param("actual"), Some("float"));
    }

    #[test]
    fn test_invalid_pattern_is_definition_error() {
        assert!(string().pattern_str("(", PatternFlags::NONE).is_err());
    }
}
