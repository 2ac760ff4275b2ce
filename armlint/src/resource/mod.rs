//! ARM resource discovery and per-pass lint context.
//!
//! A [`LintContext`] is created for every lint pass. The [`ResourceIndex`] is
//! built lazily on the first resource query and then only read.

pub mod patch_surface;
pub mod resolve;

use std::cell::OnceCell;
use std::collections::HashMap;

use tracing::debug;

use crate::config::LinterConfig;
use crate::program::{ModelId, ResourceKind, TypeGraph};

/// A model confirmed to describe an ARM resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    pub model: ModelId,
    pub name: String,
    pub kind: ResourceKind,
}

#[derive(Debug, Default)]
pub struct ResourceIndex {
    resources: Vec<ResourceDescriptor>,
    by_model: HashMap<ModelId, usize>,
}

impl ResourceIndex {
    /// Every registered resource, in model declaration order.
    pub fn build(graph: &TypeGraph) -> Self {
        let mut index = ResourceIndex::default();
        for (id, model) in graph.models() {
            if let Some(kind) = model.resource {
                index.by_model.insert(id, index.resources.len());
                index.resources.push(ResourceDescriptor {
                    model: id,
                    name: graph.model_name(id).to_string(),
                    kind,
                });
            }
        }
        index
    }

    pub fn resources(&self) -> &[ResourceDescriptor] {
        &self.resources
    }

    pub fn get(&self, model: ModelId) -> Option<&ResourceDescriptor> {
        self.by_model.get(&model).map(|&i| &self.resources[i])
    }
}

/// State shared by all rules during one lint pass.
pub struct LintContext<'a> {
    graph: &'a TypeGraph,
    config: &'a LinterConfig,
    resources: OnceCell<ResourceIndex>,
}

impl<'a> LintContext<'a> {
    pub fn new(graph: &'a TypeGraph, config: &'a LinterConfig) -> Self {
        LintContext {
            graph,
            config,
            resources: OnceCell::new(),
        }
    }

    pub fn graph(&self) -> &'a TypeGraph {
        self.graph
    }

    pub fn config(&self) -> &'a LinterConfig {
        self.config
    }

    pub fn resource_index(&self) -> &ResourceIndex {
        self.resources.get_or_init(|| {
            let index = ResourceIndex::build(self.graph);
            debug!(resources = index.resources.len(), "built ARM resource index");
            index
        })
    }

    pub fn arm_resources(&self) -> &[ResourceDescriptor] {
        self.resource_index().resources()
    }

    pub fn arm_resource(&self, model: ModelId) -> Option<&ResourceDescriptor> {
        self.resource_index().get(model)
    }
}
