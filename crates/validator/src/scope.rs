//! Imperative checks with nested scopes.
//!
//! A [`Scope`] wraps a subject and collects problems by attribute name
//! while check methods run against it. Each name accumulates a
//! [`Problem::List`]; nested scopes contribute a [`Problem::Keyed`] under
//! their name.
//!
//! A scope over an absent subject accepts every call and records nothing,
//! so checks on an optional nested object can be written unconditionally.
//!
//! # Examples
//!
//! ```rust
//! use stencil_validator::scope::check;
//! use stencil_value::Value;
//!
//! let order = Value::mapping([
//!     ("quantity", Value::from(0)),
//!     ("customer", Value::mapping([("id", Value::Null)])),
//! ]);
//!
//! let failure = check(&order, |scope| {
//!     scope.require("id").positive("quantity");
//!     scope.nested("customer", |customer| {
//!         customer.not_none("id");
//!     });
//! })
//! .unwrap_err();
//!
//! assert_eq!(
//!     failure.problems().to_json(),
//!     serde_json::json!({
//!         "id": ["missing"],
//!         "quantity": ["non-positive"],
//!         "customer": {"id": ["None"]},
//!     })
//! );
//! ```

use indexmap::IndexMap;
use stencil_value::{Mapping, Value};

use crate::foundation::{Issue, Problem, ValidationFailure};
use crate::model::ModelInstance;

// ============================================================================
// ATTRIBUTES
// ============================================================================

/// Named attribute lookup for scope subjects.
pub trait Attributes {
    /// The attribute's value, or `None` when the subject has no such
    /// attribute. A stored null is `Some(&Value::Null)`.
    fn attribute(&self, name: &str) -> Option<&Value>;
}

impl Attributes for Value {
    fn attribute(&self, name: &str) -> Option<&Value> {
        self.as_mapping().and_then(|map| map.get(name))
    }
}

impl Attributes for Mapping {
    fn attribute(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl Attributes for ModelInstance {
    fn attribute(&self, name: &str) -> Option<&Value> {
        self.values().get(name)
    }
}

// ============================================================================
// SCOPE
// ============================================================================

#[derive(Clone, Copy)]
enum Subject<'a> {
    Present(&'a dyn Attributes),
    Absent,
}

/// Collects problems about one subject.
pub struct Scope<'a> {
    subject: Subject<'a>,
    problems: IndexMap<String, Problem>,
}

impl<'a> Scope<'a> {
    pub fn new(subject: &'a dyn Attributes) -> Self {
        Self {
            subject: Subject::Present(subject),
            problems: IndexMap::new(),
        }
    }

    /// A scope that ignores every check.
    #[must_use]
    pub fn absent() -> Self {
        Self {
            subject: Subject::Absent,
            problems: IndexMap::new(),
        }
    }

    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self.subject, Subject::Absent)
    }

    /// `None` for an absent scope, otherwise the attribute lookup.
    fn lookup(&self, name: &str) -> Option<Option<&'a Value>> {
        match self.subject {
            Subject::Present(subject) => Some(subject.attribute(name)),
            Subject::Absent => None,
        }
    }

    // ==================== Checks ====================

    /// The subject has the attribute, possibly null.
    pub fn require(&mut self, name: &str) -> &mut Self {
        if let Some(None) = self.lookup(name) {
            self.add_problem(name, Issue::missing());
        }
        self
    }

    /// The attribute exists and is not null.
    pub fn not_none(&mut self, name: &str) -> &mut Self {
        if let Some(found) = self.lookup(name)
            && found.is_none_or(Value::is_null)
        {
            self.add_problem(name, Issue::new("null", "None"));
        }
        self
    }

    /// The attribute is a number greater than zero.
    pub fn positive(&mut self, name: &str) -> &mut Self {
        if let Some(found) = self.lookup(name)
            && !found.and_then(Value::as_f64).is_some_and(|n| n > 0.0)
        {
            self.add_problem(name, Issue::new("non_positive", "non-positive"));
        }
        self
    }

    /// The attribute is a number of at least zero.
    pub fn non_negative(&mut self, name: &str) -> &mut Self {
        if let Some(found) = self.lookup(name)
            && !found.and_then(Value::as_f64).is_some_and(|n| n >= 0.0)
        {
            self.add_problem(name, Issue::new("negative", "negative"));
        }
        self
    }

    /// Records a problem under `name`. No-op on an absent scope.
    ///
    /// Issues for the same name accumulate in order; an issue recorded
    /// after a nested scope's problems replaces them.
    pub fn add_problem(&mut self, name: &str, issue: Issue) -> &mut Self {
        if self.is_absent() {
            return self;
        }
        match self.problems.get_mut(name) {
            Some(Problem::List(items)) => items.push(issue),
            Some(other) => *other = Problem::List(vec![issue]),
            None => {
                self.problems.insert(name.to_owned(), Problem::List(vec![issue]));
            }
        }
        self
    }

    // ==================== Nesting ====================

    /// A scope over the attribute `name`.
    ///
    /// Absent when this scope is absent or the attribute is missing or
    /// null.
    #[must_use]
    pub fn child(&self, name: &str) -> Scope<'a> {
        match self.lookup(name) {
            Some(Some(value)) if !value.is_null() => Scope::new(value),
            _ => Scope::absent(),
        }
    }

    /// Stores a child's problems under `name`, replacing anything recorded
    /// there. A child without problems changes nothing.
    pub fn attach(&mut self, name: &str, child: Scope<'_>) -> &mut Self {
        if !self.is_absent() && !child.problems.is_empty() {
            self.problems
                .insert(name.to_owned(), Problem::Keyed(child.problems));
        }
        self
    }

    /// Runs `checks` on a child scope over `name`, then attaches it.
    pub fn nested<F>(&mut self, name: &str, checks: F) -> &mut Self
    where
        F: FnOnce(&mut Scope<'a>),
    {
        let mut child = self.child(name);
        checks(&mut child);
        self.attach(name, child)
    }

    // ==================== Results ====================

    #[must_use]
    pub fn has_problems(&self) -> bool {
        !self.problems.is_empty()
    }

    /// Problems recorded so far, `None` if there are none.
    #[must_use]
    pub fn problems(&self) -> Option<Problem> {
        self.has_problems()
            .then(|| Problem::Keyed(self.problems.clone()))
    }

    #[must_use]
    pub fn into_problems(self) -> Option<Problem> {
        (!self.problems.is_empty()).then_some(Problem::Keyed(self.problems))
    }

    /// # Errors
    ///
    /// Returns a [`ValidationFailure`] if any problem was recorded.
    pub fn finish(self) -> Result<(), ValidationFailure> {
        match self.into_problems() {
            Some(problems) => Err(ValidationFailure::new(problems)),
            None => Ok(()),
        }
    }
}

/// Runs `checks` in a scope over `subject` and raises if anything was
/// recorded.
///
/// # Errors
///
/// Returns a [`ValidationFailure`] with the recorded problems.
pub fn check<S, F>(subject: &S, checks: F) -> Result<(), ValidationFailure>
where
    S: Attributes,
    F: FnOnce(&mut Scope<'_>),
{
    let mut scope = Scope::new(subject);
    checks(&mut scope);
    if scope.has_problems() {
        tracing::debug!(names = scope.problems.len(), "scope check recorded problems");
    }
    scope.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn subject() -> Value {
        Value::mapping([
            ("a", Value::from(1)),
            ("zero", Value::from(0)),
            ("neg", Value::from(-1.5)),
            ("nothing", Value::Null),
            ("text", Value::from("x")),
            ("inner", Value::mapping([("b", Value::from(2))])),
        ])
    }

    fn problems(checks: impl FnOnce(&mut Scope<'_>)) -> Option<serde_json::Value> {
        check(&subject(), checks)
            .err()
            .map(|failure| failure.problems().to_json())
    }

    #[rstest]
    #[case("a", None)]
    #[case("nothing", None)]
    #[case("b", Some(json!({"b": ["missing"]})))]
    fn test_require(#[case] name: &str, #[case] expected: Option<serde_json::Value>) {
        assert_eq!(problems(|s| { s.require(name); }), expected);
    }

    #[rstest]
    #[case("a", None)]
    #[case("nothing", Some(json!({"nothing": ["None"]})))]
    #[case("b", Some(json!({"b": ["None"]})))]
    fn test_not_none(#[case] name: &str, #[case] expected: Option<serde_json::Value>) {
        assert_eq!(problems(|s| { s.not_none(name); }), expected);
    }

    #[rstest]
    #[case("a", None, None)]
    #[case("zero", Some("non-positive"), None)]
    #[case("neg", Some("non-positive"), Some("negative"))]
    #[case("text", Some("non-positive"), Some("negative"))]
    #[case("b", Some("non-positive"), Some("negative"))]
    fn test_sign_checks(
        #[case] name: &str,
        #[case] positive: Option<&str>,
        #[case] non_negative: Option<&str>,
    ) {
        let expect = |message: Option<&str>| {
            message.map(|m| serde_json::Value::Object([(name.to_owned(), json!([m]))].into_iter().collect()))
        };
        assert_eq!(problems(|s| { s.positive(name); }), expect(positive));
        assert_eq!(problems(|s| { s.non_negative(name); }), expect(non_negative));
    }

    #[test]
    fn test_problems_accumulate_per_name() {
        let found = problems(|s| {
            s.positive("zero").add_problem("zero", Issue::new("custom", "custom"));
        });
        assert_eq!(found, Some(json!({"zero": ["non-positive", "custom"]})));
    }

    #[test]
    fn test_nested_scope() {
        let found = problems(|s| {
            s.nested("inner", |inner| {
                inner.require("b").require("c");
            });
        });
        assert_eq!(found, Some(json!({"inner": {"c": ["missing"]}})));
    }

    #[test]
    fn test_nested_child_replaces_parent_entry() {
        let found = problems(|s| {
            s.add_problem("inner", Issue::new("custom", "custom"));
            s.nested("inner", |inner| {
                inner.require("c");
            });
        });
        assert_eq!(found, Some(json!({"inner": {"c": ["missing"]}})));
    }

    #[test]
    fn test_clean_nested_scope_keeps_parent_entry() {
        let found = problems(|s| {
            s.add_problem("inner", Issue::new("custom", "custom"));
            s.nested("inner", |inner| {
                inner.require("b");
            });
        });
        assert_eq!(found, Some(json!({"inner": ["custom"]})));
    }

    #[rstest]
    #[case("nothing")]
    #[case("undeclared")]
    fn test_absent_nested_scope_ignores_checks(#[case] name: &str) {
        let found = problems(|s| {
            s.nested(name, |inner| {
                assert!(inner.is_absent());
                inner
                    .require("x")
                    .not_none("x")
                    .positive("x")
                    .non_negative("x")
                    .add_problem("x", Issue::missing());
                inner.nested("deeper", |deeper| {
                    deeper.require("y");
                });
            });
        });
        assert_eq!(found, None);
    }

    #[test]
    fn test_scalar_child_has_no_attributes() {
        let found = problems(|s| {
            s.nested("a", |inner| {
                inner.require("b");
            });
        });
        assert_eq!(found, Some(json!({"a": {"b": ["missing"]}})));
    }

    #[test]
    fn test_model_instance_subject() {
        use crate::model::{Field, ModelDefinition};

        let definition = ModelDefinition::builder("M")
            .field("n", Field::integer())
            .build()
            .unwrap();
        let instance = definition.instantiate().with("n", -1);
        let failure = check(&instance, |s| {
            s.require("n").non_negative("n").require("other");
        })
        .unwrap_err();
        assert_eq!(
            failure.problems().to_json(),
            json!({"n": ["negative"], "other": ["missing"]})
        );
    }

    #[test]
    fn test_scope_without_problems() {
        assert!(problems(|s| { s.require("a").positive("a"); }).is_none());
        let null = Value::Null;
        let scope = Scope::new(&null);
        assert!(scope.problems().is_none());
    }
}
