//! The seam between the engine and leaf rules.

use stencil_value::Value;

use super::problem::Problem;

/// A leaf check: inspects one value and reports what is wrong with it.
///
/// Every built-in rule implements this trait, and so does any
/// `Fn(&Value) -> Option<Problem>` closure, which lets callers plug custom
/// checks into a validator tree. Implementations must not fail for any
/// input: unexpected kinds are reported as problems.
///
/// # Examples
///
/// ```rust
/// use stencil_validator::foundation::{Issue, Predicate, Problem};
/// use stencil_value::Value;
///
/// let even = |value: &Value| -> Option<Problem> {
///     match value.as_i64() {
///         Some(n) if n % 2 == 0 => None,
///         _ => Some(Issue::new("odd", "not even").into()),
///     }
/// };
/// assert!(even.check(&Value::from(4)).is_none());
/// assert!(even.check(&Value::from(3)).is_some());
/// ```
pub trait Predicate: Send + Sync {
    /// Returns `None` when the value is acceptable.
    fn check(&self, value: &Value) -> Option<Problem>;

    /// Name used in debug output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<F> Predicate for F
where
    F: Fn(&Value) -> Option<Problem> + Send + Sync,
{
    fn check(&self, value: &Value) -> Option<Problem> {
        self(value)
    }

    fn name(&self) -> &str {
        "custom"
    }
}
