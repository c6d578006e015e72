//! Declarative models
//!
//! A [`ModelDefinition`] is a named set of [`Field`]s that may inherit from
//! other definitions. It derives a mapping validator over its resolved
//! fields, and [`ModelInstance`] holds values for one object of the model.
//!
//! # Examples
//!
//! ```rust
//! use stencil_validator::model::{Field, ModelDefinition};
//! use stencil_validator::validators::PatternFlags;
//!
//! let address = ModelDefinition::builder("Address")
//!     .field("street", Field::string())
//!     .field("postal_code", Field::string().pattern_str(r"^\d{5}$", PatternFlags::NONE).unwrap())
//!     .build()
//!     .unwrap();
//! let person = ModelDefinition::builder("Person")
//!     .field("name", Field::string())
//!     .field("address", Field::model(&address))
//!     .build()
//!     .unwrap();
//!
//! let home = address.instantiate().with("street", "").with("postal_code", "1234");
//! let bob = person.instantiate().with("name", "Bob").with("address", home);
//! assert_eq!(
//!     bob.validate().unwrap().to_json(),
//!     serde_json::json!({"address": {"street": "empty value", "postal_code": "non match"}})
//! );
//! ```

mod definition;
mod field;
mod instance;
mod linearize;

pub use definition::{ModelBuilder, ModelDefinition};
pub use field::{Field, FieldKind};
pub use instance::ModelInstance;
