//! # stencil-value
//!
//! The dynamic value model that the stencil validation engine inspects.
//!
//! A [`Value`] is either a scalar (boolean, integer, float, decimal, text),
//! an ordered collection (an arbitrary-length [`Value::Sequence`] or a
//! fixed-length [`Value::Tuple`]) or a keyed [`Value::Mapping`]. The absent
//! marker is [`Value::Null`]; looking up a key that is not present behaves as
//! if the key held `Null`.
//!
//! ```rust
//! use stencil_value::{Value, ValueKind};
//!
//! let person = Value::mapping([
//!     ("name", Value::from("Ada")),
//!     ("age", Value::from(36)),
//! ]);
//!
//! assert_eq!(person.kind(), ValueKind::Mapping);
//! assert_eq!(person.get("name").as_str(), Some("Ada"));
//! assert!(person.get("email").is_null());
//! ```

mod conversions;
mod kind;
mod serialize;
mod value;

pub use kind::ValueKind;
pub use rust_decimal::Decimal;
pub use value::{Mapping, NULL, Value};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{Decimal, Mapping, Value, ValueKind};
}
