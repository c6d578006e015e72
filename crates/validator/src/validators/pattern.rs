//! Pattern compilation for string rules.

use regex::{Regex, RegexBuilder};

use crate::foundation::DefinitionError;

/// Flags applied when compiling a string pattern.
///
/// # Examples
///
/// ```rust
/// use stencil_validator::validators::PatternFlags;
///
/// let regex = PatternFlags::NONE.case_insensitive().compile("^ab").unwrap();
/// assert!(regex.is_match("ABC"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PatternFlags {
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_matches_new_line: bool,
    pub ignore_whitespace: bool,
}

impl PatternFlags {
    pub const NONE: Self = Self {
        case_insensitive: false,
        multi_line: false,
        dot_matches_new_line: false,
        ignore_whitespace: false,
    };

    #[must_use = "builder methods must be chained or built"]
    pub const fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn multi_line(mut self) -> Self {
        self.multi_line = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn dot_matches_new_line(mut self) -> Self {
        self.dot_matches_new_line = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn ignore_whitespace(mut self) -> Self {
        self.ignore_whitespace = true;
        self
    }

    /// Compiles `pattern` with these flags.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::InvalidPattern`] when the pattern is not a
    /// valid regular expression.
    pub fn compile(self, pattern: &str) -> Result<Regex, DefinitionError> {
        RegexBuilder::new(pattern)
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .ignore_whitespace(self.ignore_whitespace)
            .build()
            .map_err(|source| DefinitionError::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            })
    }
}

/// Match anchored at the start of `text`; the end is left open.
pub(crate) fn matches_from_start(regex: &Regex, text: &str) -> bool {
    regex.find(text).is_some_and(|m| m.start() == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r"\d{3}", "123", true)]
    #[case(r"\d{3}", "1234", true)]
    #[case(r"\d{3}", "a123", false)]
    #[case(r"^\d{5}$", "1234", false)]
    #[case(r"b", "abc", false)]
    fn test_matches_from_start(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
        let regex = PatternFlags::NONE.compile(pattern).unwrap();
        assert_eq!(matches_from_start(&regex, text), expected);
    }

    #[test]
    fn test_flags_apply() {
        let regex = PatternFlags::default().case_insensitive().compile("abc").unwrap();
        assert!(matches_from_start(&regex, "ABCdef"));

        let regex = PatternFlags::NONE.ignore_whitespace().compile("a b c").unwrap();
        assert!(matches_from_start(&regex, "abc"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = PatternFlags::NONE.compile("[unclosed").unwrap_err();
        assert!(matches!(err, DefinitionError::InvalidPattern { ref pattern, .. } if pattern == "[unclosed"));
    }
}
