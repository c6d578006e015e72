//! # stencil-validator
//!
//! Structural validation of dynamic values against declarative shape
//! descriptions.
//!
//! ## Quick Start
//!
//! ```rust
//! use stencil_validator::prelude::*;
//!
//! let shape = mapping! {
//!     "name" => string(),
//!     "tags" => Validator::sequence(string()),
//!     "location" => tuple![number(), number()].unwrap(),
//! }
//! .unwrap();
//!
//! let value = Value::mapping([
//!     ("name", Value::from("")),
//!     ("tags", Value::sequence([Value::from("a"), Value::from(2)])),
//!     ("location", Value::tuple([Value::from(1.5)])),
//! ]);
//!
//! let problem = validate(&value, &shape).unwrap();
//! assert_eq!(
//!     problem.to_json(),
//!     serde_json::json!({
//!         "name": "empty value",
//!         "tags": {"1": "not a string"},
//!         "location": "unexpected tuple length: expected 2, got 1",
//!     })
//! );
//! ```
//!
//! ## Layers
//!
//! - [`validators`]: leaf rules for strings, numbers and booleans
//! - [`engine`]: validator trees and the walk that checks values against
//!   them
//! - [`model`]: declarative models with inheritance and instances
//! - [`scope`]: imperative checks that collect problems by attribute
//!
//! Validation never returns an error for bad input: the result is `None`
//! or a [`Problem`](foundation::Problem) tree shaped like the input.

pub mod engine;
pub mod foundation;
mod macros;
pub mod model;
pub mod prelude;
pub mod scope;
pub mod validators;

#[cfg(test)]
mod tests {
    use stencil_value::Value;

    use crate::engine::{Engine, Validator};
    use crate::model::{Field, ModelDefinition, ModelInstance};
    use crate::validators::{NumberRule, StringRule};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_shared_types_are_thread_safe() {
        assert_send_sync::<Value>();
        assert_send_sync::<StringRule>();
        assert_send_sync::<NumberRule>();
        assert_send_sync::<Field>();
        assert_send_sync::<Validator>();
        assert_send_sync::<Engine>();
        assert_send_sync::<ModelDefinition>();
        assert_send_sync::<ModelInstance>();
    }
}
