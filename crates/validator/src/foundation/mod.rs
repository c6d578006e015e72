//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the engine:
//!
//! - **Problems**: [`Issue`], [`Problem`]
//! - **Errors**: [`DefinitionError`], [`ValidationFailure`], [`ConfigError`]
//! - **Traits**: [`Predicate`]
//!
//! # Architecture
//!
//! Validation never fails with an error. A check either finds nothing
//! (`None`) or returns a [`Problem`] tree shaped like the input. Errors are
//! reserved for two situations: a validator that cannot be built
//! ([`DefinitionError`]) and the raising helpers that turn a problem tree
//! into a `Result` ([`ValidationFailure`]).
//!
//! ```rust
//! use stencil_validator::foundation::{Issue, Problem};
//!
//! let problem = Problem::from(Issue::missing());
//! assert_eq!(problem.message(), Some("missing"));
//! ```

pub mod error;
pub mod problem;
pub mod traits;

pub use error::{ConfigError, DefinitionError, ValidationFailure};
pub use problem::{Issue, Problem};
pub use traits::Predicate;
