//! Effective model computation.
//!
//! Spreads and template instantiation produce anonymous models whose
//! properties are copies of a named model's properties. The effective model
//! maps such a copy back to the named declaration.

use super::{ModelId, PropertyId, TypeGraph};

impl TypeGraph {
    /// Named declaration that an anonymous model is an exact copy of, or the
    /// model itself when there is none.
    pub fn effective_model(&self, model: ModelId) -> ModelId {
        let declared = self.model(model);
        if declared.name.is_some() || declared.properties.is_empty() {
            return model;
        }

        let mut candidates: Option<Vec<ModelId>> = None;
        for &property in &declared.properties {
            if self.property(property).source.is_none() {
                return model;
            }
            let origins = self.named_origins(property);
            candidates = Some(match candidates {
                None => origins,
                Some(found) => found.into_iter().filter(|m| origins.contains(m)).collect(),
            });
        }

        candidates
            .into_iter()
            .flatten()
            .find(|&candidate| self.model(candidate).properties.len() == declared.properties.len())
            .unwrap_or(model)
    }

    /// Named models along the source chain of `property`, nearest first.
    /// The build step rejects cyclic chains, so the walk terminates.
    fn named_origins(&self, property: PropertyId) -> Vec<ModelId> {
        let mut origins = Vec::new();
        let mut current = self.property(property).source;
        while let Some(id) = current {
            let source = self.property(id);
            if self.model(source.model).name.is_some() && !origins.contains(&source.model) {
                origins.push(source.model);
            }
            current = source.source;
        }
        origins
    }
}
