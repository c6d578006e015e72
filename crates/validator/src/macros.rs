//! Macros for building validator trees with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`mapping!`] — a mapping validator from `key => rule` pairs
//! - [`tuple!`] — a tuple validator from positional rules
//!
//! Both expand to the fallible constructors on
//! [`Validator`](crate::engine::Validator), so they return
//! `Result<Validator, DefinitionError>`.
//!
//! # Examples
//!
//! ```rust
//! use stencil_validator::prelude::*;
//!
//! let point = tuple![number(), number()].unwrap();
//! let shape = mapping! {
//!     "label" => string().max_length(20),
//!     "at" => point,
//! }
//! .unwrap();
//!
//! let value = Value::mapping([
//!     ("label", Value::from("origin")),
//!     ("at", Value::tuple([0, 0])),
//! ]);
//! assert!(validate(&value, &shape).is_none());
//! ```

// ============================================================================
// MAPPING MACRO
// ============================================================================

/// Builds a mapping validator, keeping key order.
///
/// Each value may be anything implementing
/// [`IntoValidator`](crate::engine::IntoValidator). A repeated key is a
/// [`DefinitionError::DuplicateKey`](crate::foundation::DefinitionError::DuplicateKey).
#[macro_export]
macro_rules! mapping {
    () => {
        $crate::engine::Validator::mapping(::std::iter::empty::<(
            ::std::string::String,
            $crate::engine::Validator,
        )>())
    };
    ($($key:expr => $rule:expr),+ $(,)?) => {
        $crate::engine::Validator::mapping([
            $((
                ::std::string::String::from($key),
                $crate::engine::IntoValidator::into_validator($rule),
            )),+
        ])
    };
}

// ============================================================================
// TUPLE MACRO
// ============================================================================

/// Builds a tuple validator from positional rules of any kind.
#[macro_export]
macro_rules! tuple {
    ($($rule:expr),+ $(,)?) => {
        $crate::engine::Validator::tuple([
            $($crate::engine::IntoValidator::into_validator($rule)),+
        ])
    };
}

#[cfg(test)]
mod tests {
    use crate::engine::Validator;
    use crate::foundation::DefinitionError;
    use crate::validators::{boolean, integer, string};

    #[test]
    fn test_mapping_macro_mixes_rule_types() {
        let validator = mapping! {
            "name" => string(),
            "age" => integer(),
            "admin" => boolean().optional(),
        }
        .unwrap();
        let keys: Vec<&str> = validator.keys().unwrap().collect();
        assert_eq!(keys, ["name", "age", "admin"]);
    }

    #[test]
    fn test_mapping_macro_duplicate_key() {
        let result = mapping! { "a" => string(), "a" => integer() };
        assert!(matches!(result, Err(DefinitionError::DuplicateKey { .. })));
    }

    #[test]
    fn test_empty_mapping_macro() {
        let validator = mapping! {}.unwrap();
        assert!(matches!(validator, Validator::Mapping(ref keys) if keys.is_empty()));
    }

    #[test]
    fn test_tuple_macro() {
        let validator = tuple![integer(), string(), Validator::sequence(integer())].unwrap();
        assert_eq!(validator.arity(), Some(3));
    }
}
