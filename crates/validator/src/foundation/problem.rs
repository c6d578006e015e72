//! Problem trees returned by validation.
//!
//! A [`Problem`] mirrors the shape of the validator that produced it: a leaf
//! rule yields a single [`Issue`], a mapping validator yields
//! [`Problem::Keyed`], sequence and tuple validators yield
//! [`Problem::Indexed`]. Absence of problems is `None`, never an empty tree.
//!
//! All string fields use `Cow<'static, str>` so the common case of static
//! codes and messages never allocates.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use smallvec::SmallVec;

type Param = (Cow<'static, str>, Cow<'static, str>);

// ============================================================================
// ISSUE
// ============================================================================

/// A single problem: a machine code, a human message and a few parameters.
///
/// # Examples
///
/// ```rust
/// use stencil_validator::foundation::Issue;
///
/// let issue = Issue::too_short(3, 1);
/// assert_eq!(issue.code, "too_short");
/// assert_eq!(issue.message, "too short");
/// assert_eq!(issue.param("min"), Some("3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Issue {
    /// Stable identifier for programmatic handling.
    ///
    /// Examples: "missing", "type_mismatch", "pattern_mismatch"
    pub code: Cow<'static, str>,

    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    /// Ordered key-value parameters (typically 0-2).
    pub params: SmallVec<[Param; 2]>,
}

impl Issue {
    /// Creates a new issue with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Adds a parameter to the issue.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl Issue {
    /// A required value is absent or null.
    pub fn missing() -> Self {
        Self::new("missing", "missing")
    }

    /// The value is present but of the wrong kind.
    ///
    /// `message` is the kind-specific text, e.g. "not a string".
    pub fn type_mismatch(
        message: &'static str,
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new("type_mismatch", message)
            .with_param("expected", expected)
            .with_param("actual", actual)
    }

    /// An empty string where content is required.
    pub fn empty() -> Self {
        Self::new("empty", "empty value")
    }

    pub fn too_short(min: usize, actual: usize) -> Self {
        Self::new("too_short", "too short")
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    pub fn too_long(max: usize, actual: usize) -> Self {
        Self::new("too_long", "too long")
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    pub fn below_minimum<T: fmt::Display>(min: T, actual: T) -> Self {
        Self::new("below_minimum", "less than minimum")
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    pub fn above_maximum<T: fmt::Display>(max: T, actual: T) -> Self {
        Self::new("above_maximum", "greater than maximum")
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// The string does not match the configured pattern at its start.
    pub fn pattern_mismatch(pattern: &str) -> Self {
        Self::new("pattern_mismatch", "non match").with_param("pattern", pattern.to_owned())
    }

    /// A tuple has the wrong number of positions.
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::new(
            "length_mismatch",
            format!("unexpected tuple length: expected {expected}, got {actual}"),
        )
        .with_param("expected", expected.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Validator nesting went past the engine's depth ceiling.
    pub fn too_deep(max_depth: usize) -> Self {
        Self::new("too_deep", "nested too deeply").with_param("max_depth", max_depth.to_string())
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// ============================================================================
// PROBLEM TREE
// ============================================================================

/// A tree of problems shaped like the validated value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    /// A single problem at this location.
    Issue(Issue),

    /// Problems by mapping key or field name, in validator declaration order.
    Keyed(IndexMap<String, Problem>),

    /// Problems by position in a sequence or tuple.
    Indexed(BTreeMap<usize, Problem>),

    /// Several problems for the same location.
    List(Vec<Issue>),
}

impl Problem {
    /// Returns the message when this is a single issue.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.as_issue().map(|issue| issue.message.as_ref())
    }

    /// Returns the code when this is a single issue.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.as_issue().map(|issue| issue.code.as_ref())
    }

    #[must_use]
    pub const fn as_issue(&self) -> Option<&Issue> {
        match self {
            Self::Issue(issue) => Some(issue),
            _ => None,
        }
    }

    /// Child problem under a key of a keyed tree.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Problem> {
        match self {
            Self::Keyed(map) => map.get(key),
            _ => None,
        }
    }

    /// Child problem at a position of an indexed tree.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Problem> {
        match self {
            Self::Indexed(map) => map.get(&index),
            _ => None,
        }
    }

    /// Number of issues in the whole tree.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        match self {
            Self::Issue(_) => 1,
            Self::Keyed(map) => map.values().map(Problem::issue_count).sum(),
            Self::Indexed(map) => map.values().map(Problem::issue_count).sum(),
            Self::List(items) => items.len(),
        }
    }

    /// Flattens the tree depth-first into `(path, issue)` pairs.
    ///
    /// Keys join with `.` and positions render as `[i]`, e.g.
    /// `address.postal_code` or `items[1].name`. A top-level issue has an
    /// empty path.
    pub fn iter_issues(&self) -> impl Iterator<Item = (String, &Issue)> {
        let mut out = Vec::new();
        self.collect_issues(String::new(), &mut out);
        out.into_iter()
    }

    fn collect_issues<'a>(&'a self, path: String, out: &mut Vec<(String, &'a Issue)>) {
        match self {
            Self::Issue(issue) => out.push((path, issue)),
            Self::List(items) => out.extend(items.iter().map(|issue| (path.clone(), issue))),
            Self::Keyed(map) => {
                for (key, child) in map {
                    let child_path = if path.is_empty() {
                        key.clone()
                    } else {
                        format!("{path}.{key}")
                    };
                    child.collect_issues(child_path, out);
                }
            }
            Self::Indexed(map) => {
                for (index, child) in map {
                    child.collect_issues(format!("{path}[{index}]"), out);
                }
            }
        }
    }

    /// JSON rendering: issues become their message, keyed and indexed trees
    /// become objects, lists become arrays of messages.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

impl From<Issue> for Problem {
    fn from(issue: Issue) -> Self {
        Self::Issue(issue)
    }
}

impl Serialize for Problem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Issue(issue) => serializer.serialize_str(&issue.message),
            Self::Keyed(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, child) in map {
                    out.serialize_entry(key, child)?;
                }
                out.end()
            }
            Self::Indexed(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (index, child) in map {
                    out.serialize_entry(&index.to_string(), child)?;
                }
                out.end()
            }
            Self::List(items) => {
                let mut out = serializer.serialize_seq(Some(items.len()))?;
                for issue in items {
                    out.serialize_element(issue.message.as_ref())?;
                }
                out.end()
            }
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => Err(fmt::Error),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
