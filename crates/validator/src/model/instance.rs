//! Model instances

use std::sync::Arc;

use stencil_value::{Mapping, NULL, Value};

use super::ModelDefinition;
use crate::engine::Engine;
use crate::foundation::{Problem, ValidationFailure};

/// Values for the fields of one model, checked on demand.
///
/// Any name can be set, declared or not; only declared fields are
/// validated. Reading a name that was never set gives null.
///
/// # Examples
///
/// ```rust
/// use stencil_validator::model::{Field, ModelDefinition};
///
/// let person = ModelDefinition::builder("Person")
///     .field("name", Field::string())
///     .field("age", Field::integer().min_value(0).optional())
///     .build()
///     .unwrap();
///
/// let mut alice = person.instantiate();
/// assert_eq!(alice.validate().unwrap().to_json(), serde_json::json!({"name": "missing"}));
///
/// alice.set("name", "Alice");
/// assert!(alice.ensure_valid().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ModelInstance {
    definition: Arc<ModelDefinition>,
    values: Mapping,
}

impl ModelInstance {
    /// Starts with every field at its default.
    pub fn new(definition: Arc<ModelDefinition>) -> Self {
        let values = definition
            .fields()
            .iter()
            .map(|(name, field)| (name.clone(), field.default().clone()))
            .collect();
        Self { definition, values }
    }

    /// Builds an instance from a mapping value; missing fields keep their
    /// defaults. Non-mapping values leave every field at its default.
    pub fn from_value(definition: Arc<ModelDefinition>, value: &Value) -> Self {
        let mut instance = Self::new(definition);
        if let Some(map) = value.as_mapping() {
            for (name, v) in map {
                instance.values.insert(name.clone(), v.clone());
            }
        }
        instance
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Stores a value, returning the previous one.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name.into(), value.into())
    }

    /// The stored value, or null.
    #[must_use]
    pub fn get(&self, name: &str) -> &Value {
        self.values.get(name).unwrap_or(&NULL)
    }

    /// Removes a stored value; reads give null afterwards.
    pub fn unset(&mut self, name: &str) -> Option<Value> {
        self.values.shift_remove(name)
    }

    #[must_use]
    pub const fn values(&self) -> &Mapping {
        &self.values
    }

    #[must_use]
    pub const fn definition(&self) -> &Arc<ModelDefinition> {
        &self.definition
    }

    /// The stored values as a mapping value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Mapping(self.values.clone())
    }

    /// Checks every declared field; `None` when the instance is valid.
    #[must_use]
    pub fn validate(&self) -> Option<Problem> {
        self.validate_with(&Engine::default())
    }

    #[must_use]
    pub fn validate_with(&self, engine: &Engine) -> Option<Problem> {
        engine.validate_keyed(|name| self.get(name), self.definition.field_validators())
    }

    /// # Errors
    ///
    /// Returns a [`ValidationFailure`] carrying the problems of
    /// [`ModelInstance::validate`].
    pub fn ensure_valid(&self) -> Result<(), ValidationFailure> {
        match self.validate() {
            Some(problems) => Err(ValidationFailure::new(problems)),
            None => Ok(()),
        }
    }
}

impl From<ModelInstance> for Value {
    fn from(instance: ModelInstance) -> Self {
        Value::Mapping(instance.values)
    }
}
