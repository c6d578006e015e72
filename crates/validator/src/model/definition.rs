//! Model definitions

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use stencil_value::Value;

use super::{Field, ModelInstance, linearize};
use crate::engine::{IntoValidator, Validator};
use crate::foundation::{DefinitionError, Problem};

/// A named, frozen set of fields, possibly inheriting from parent models.
///
/// Field resolution: the model's own declarations win, then every ancestor
/// in C3 order, each contributing the fields it declares itself and that
/// are not yet resolved. The first declaration found wins, so a parent
/// listed earlier shadows one listed later.
///
/// Definitions are built once with [`ModelDefinition::builder`] and shared
/// through `Arc`. The validator they derive is a mapping of the resolved
/// fields, built at the same time.
pub struct ModelDefinition {
    name: String,
    parents: Vec<Arc<ModelDefinition>>,
    ancestors: Vec<Arc<ModelDefinition>>,
    own: IndexMap<String, Field>,
    fields: IndexMap<String, Field>,
    validators: IndexMap<String, Validator>,
}

impl ModelDefinition {
    pub fn builder(name: impl Into<String>) -> ModelBuilder {
        ModelBuilder {
            name: name.into(),
            parents: Vec::new(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct parents, in declaration order.
    #[must_use]
    pub fn parents(&self) -> &[Arc<ModelDefinition>] {
        &self.parents
    }

    /// Every ancestor in C3 order, excluding this model.
    #[must_use]
    pub fn ancestors(&self) -> &[Arc<ModelDefinition>] {
        &self.ancestors
    }

    /// Fields declared on this model itself.
    #[must_use]
    pub const fn own_fields(&self) -> &IndexMap<String, Field> {
        &self.own
    }

    /// Every field, own and inherited, own first.
    #[must_use]
    pub const fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// `true` if `other` is this model or one of its ancestors.
    #[must_use]
    pub fn is_subtype_of(&self, other: &ModelDefinition) -> bool {
        std::ptr::eq(self, other)
            || self
                .ancestors
                .iter()
                .any(|ancestor| std::ptr::eq(Arc::as_ptr(ancestor), other))
    }

    /// Mapping validator over the resolved fields.
    #[must_use]
    pub fn validator(&self) -> Validator {
        Validator::Mapping(self.validators.clone())
    }

    pub(crate) const fn field_validators(&self) -> &IndexMap<String, Validator> {
        &self.validators
    }

    /// Validates a plain value as an instance of this model.
    #[must_use]
    pub fn validate_value(&self, value: &Value) -> Option<Problem> {
        crate::engine::validate(value, &self.validator())
    }

    /// A new instance holding every field's default value.
    #[must_use]
    pub fn instantiate(self: &Arc<Self>) -> ModelInstance {
        ModelInstance::new(Arc::clone(self))
    }
}

impl fmt::Debug for ModelDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelDefinition")
            .field("name", &self.name)
            .field(
                "parents",
                &self.parents.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl IntoValidator for Arc<ModelDefinition> {
    fn into_validator(self) -> Validator {
        self.validator()
    }
}

impl IntoValidator for &Arc<ModelDefinition> {
    fn into_validator(self) -> Validator {
        self.validator()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Collects parents and fields, then freezes them into a definition.
///
/// # Examples
///
/// ```rust
/// use stencil_validator::model::{Field, ModelDefinition};
///
/// let named = ModelDefinition::builder("Named")
///     .field("name", Field::string())
///     .build()
///     .unwrap();
/// let person = ModelDefinition::builder("Person")
///     .extends(&named)
///     .field("age", Field::integer().min_value(0))
///     .build()
///     .unwrap();
///
/// let names: Vec<&str> = person.fields().keys().map(String::as_str).collect();
/// assert_eq!(names, ["age", "name"]);
/// assert!(person.is_subtype_of(&named));
/// ```
#[derive(Debug)]
#[must_use = "builder methods must be chained or built"]
pub struct ModelBuilder {
    name: String,
    parents: Vec<Arc<ModelDefinition>>,
    fields: Vec<(String, Field)>,
}

impl ModelBuilder {
    /// Adds a parent. Earlier parents take precedence over later ones.
    pub fn extends(mut self, parent: &Arc<ModelDefinition>) -> Self {
        self.parents.push(Arc::clone(parent));
        self
    }

    pub fn field(mut self, name: impl Into<String>, field: impl Into<Field>) -> Self {
        self.fields.push((name.into(), field.into()));
        self
    }

    /// Resolves inheritance and freezes the definition.
    ///
    /// # Errors
    ///
    /// - [`DefinitionError::DuplicateField`] when a field name repeats
    /// - [`DefinitionError::DuplicateParent`] when a parent repeats
    /// - [`DefinitionError::InconsistentHierarchy`] when the parents cannot
    ///   be ordered
    pub fn build(self) -> Result<Arc<ModelDefinition>, DefinitionError> {
        let Self {
            name,
            parents,
            fields,
        } = self;

        for (i, parent) in parents.iter().enumerate() {
            if parents[..i].iter().any(|p| Arc::ptr_eq(p, parent)) {
                return Err(DefinitionError::DuplicateParent {
                    model: name,
                    parent: parent.name().to_owned(),
                });
            }
        }

        let mut own = IndexMap::with_capacity(fields.len());
        for (field_name, field) in fields {
            if own.contains_key(&field_name) {
                return Err(DefinitionError::DuplicateField {
                    model: name,
                    field: field_name,
                });
            }
            own.insert(field_name, field);
        }

        let ancestors = linearize::linearize(&name, &parents)?;

        let mut resolved = own.clone();
        for ancestor in &ancestors {
            for (field_name, field) in &ancestor.own {
                if !resolved.contains_key(field_name) {
                    resolved.insert(field_name.clone(), field.clone());
                }
            }
        }

        let validators = resolved
            .iter()
            .map(|(field_name, field)| (field_name.clone(), field.to_validator()))
            .collect();

        tracing::debug!(
            model = %name,
            parents = parents.len(),
            own = own.len(),
            inherited = resolved.len() - own.len(),
            "model definition frozen"
        );

        Ok(Arc::new(ModelDefinition {
            name,
            parents,
            ancestors,
            own,
            fields: resolved,
            validators,
        }))
    }
}
