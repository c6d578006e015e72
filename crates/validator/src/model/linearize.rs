//! C3 ordering of model ancestors.

use std::sync::Arc;

use super::ModelDefinition;
use crate::foundation::DefinitionError;

/// Orders every ancestor of a model named `model` with direct `parents`.
///
/// The result excludes the model itself. Each parent comes before its own
/// ancestors, parents keep their declaration order, and a shared ancestor
/// appears once, after everything that derives from it.
pub(crate) fn linearize(
    model: &str,
    parents: &[Arc<ModelDefinition>],
) -> Result<Vec<Arc<ModelDefinition>>, DefinitionError> {
    let mut sequences: Vec<Vec<Arc<ModelDefinition>>> = parents
        .iter()
        .map(|parent| {
            let mut sequence = Vec::with_capacity(parent.ancestors().len() + 1);
            sequence.push(Arc::clone(parent));
            sequence.extend(parent.ancestors().iter().cloned());
            sequence
        })
        .collect();
    sequences.push(parents.to_vec());

    let mut order = Vec::new();
    loop {
        sequences.retain(|sequence| !sequence.is_empty());
        if sequences.is_empty() {
            return Ok(order);
        }

        // First head that no sequence holds further back.
        let next = sequences
            .iter()
            .map(|sequence| &sequence[0])
            .find(|head| {
                !sequences
                    .iter()
                    .any(|sequence| sequence[1..].iter().any(|d| Arc::ptr_eq(d, head)))
            })
            .cloned();

        let Some(next) = next else {
            return Err(DefinitionError::InconsistentHierarchy {
                model: model.to_owned(),
            });
        };

        for sequence in &mut sequences {
            if Arc::ptr_eq(&sequence[0], &next) {
                sequence.remove(0);
            }
        }
        order.push(next);
    }
}
