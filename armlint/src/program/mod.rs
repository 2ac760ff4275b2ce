//! Read-only arena over a compiled type graph.
//!
//! The graph is produced once by [`TypeGraph::build`](crate::parse) and never
//! mutated afterwards. All queries the rules need (property lookup, HTTP
//! parameter classification, error detection, source tracking) live here.

pub mod effective;
pub mod types;

pub use types::*;

use crate::source::{SourceFile, SourceLocation, Span};

#[derive(Debug, Clone, Default)]
pub struct TypeGraph {
    pub(crate) sources: Vec<SourceFile>,
    pub(crate) models: Vec<Model>,
    pub(crate) properties: Vec<ModelProperty>,
    pub(crate) scalars: Vec<Scalar>,
    pub(crate) unions: Vec<Union>,
    pub(crate) operations: Vec<Operation>,
}

impl TypeGraph {
    // -------------------------------------------------------------------------
    // Node access
    // -------------------------------------------------------------------------

    pub fn model(&self, id: ModelId) -> &Model {
        &self.models[id.index()]
    }

    pub fn property(&self, id: PropertyId) -> &ModelProperty {
        &self.properties[id.index()]
    }

    pub fn scalar(&self, id: ScalarId) -> &Scalar {
        &self.scalars[id.index()]
    }

    pub fn union(&self, id: UnionId) -> &Union {
        &self.unions[id.index()]
    }

    pub fn operation(&self, id: OperationId) -> &Operation {
        &self.operations[id.index()]
    }

    pub fn models(&self) -> impl Iterator<Item = (ModelId, &Model)> {
        self.models
            .iter()
            .enumerate()
            .map(|(i, m)| (ModelId(i as u32), m))
    }

    pub fn operations(&self) -> impl Iterator<Item = (OperationId, &Operation)> {
        self.operations
            .iter()
            .enumerate()
            .map(|(i, o)| (OperationId(i as u32), o))
    }

    /// Properties of `model` in declaration order.
    pub fn properties_of(&self, model: ModelId) -> impl Iterator<Item = (PropertyId, &ModelProperty)> {
        self.model(model)
            .properties
            .iter()
            .map(|&id| (id, self.property(id)))
    }

    pub fn find_model(&self, name: &str) -> Option<ModelId> {
        self.models()
            .find(|(_, m)| m.name.as_deref() == Some(name))
            .map(|(id, _)| id)
    }

    pub fn find_operation(&self, name: &str) -> Option<OperationId> {
        self.operations()
            .find(|(_, o)| o.name == name)
            .map(|(id, _)| id)
    }

    /// Display name of a model; anonymous models render as `{}`.
    pub fn model_name(&self, id: ModelId) -> &str {
        self.model(id).name.as_deref().unwrap_or("{}")
    }

    // -------------------------------------------------------------------------
    // Property queries
    // -------------------------------------------------------------------------

    /// Own property of `model` named `name`. Inherited properties are not searched.
    pub fn get_property(&self, model: ModelId, name: &str) -> Option<PropertyId> {
        self.properties_of(model)
            .find(|(_, p)| p.name == name)
            .map(|(id, _)| id)
    }

    pub fn get_pattern(&self, property: PropertyId) -> Option<&str> {
        self.property(property).pattern.as_deref()
    }

    pub fn is_header(&self, property: PropertyId) -> bool {
        self.property(property).http == Some(HttpLocation::Header)
    }

    pub fn is_query_param(&self, property: PropertyId) -> bool {
        self.property(property).http == Some(HttpLocation::Query)
    }

    pub fn is_path_param(&self, property: PropertyId) -> bool {
        self.property(property).http == Some(HttpLocation::Path)
    }

    pub fn is_body(&self, property: PropertyId) -> bool {
        self.property(property).http == Some(HttpLocation::Body)
    }

    pub fn is_body_root(&self, property: PropertyId) -> bool {
        self.property(property).http == Some(HttpLocation::BodyRoot)
    }

    /// Model the property was originally declared on, following the chain of
    /// copies back to its root. A property that was never copied belongs to
    /// its own model.
    pub fn source_model(&self, property: PropertyId) -> ModelId {
        let mut current = self.property(property);
        while let Some(source) = current.source {
            current = self.property(source);
        }
        current.model
    }

    // -------------------------------------------------------------------------
    // Type and operation queries
    // -------------------------------------------------------------------------

    pub fn is_error_type(&self, ty: &Type) -> bool {
        match ty {
            Type::Model(id) => self.model(*id).is_error,
            Type::Intrinsic(Intrinsic::Error) => true,
            Type::Intrinsic(_) | Type::Scalar(_) | Type::Union(_) | Type::Literal(_) => false,
        }
    }

    pub fn get_operation_verb(&self, operation: OperationId) -> Option<HttpVerb> {
        self.operation(operation).verb
    }

    pub fn namespace_of(&self, node: Node) -> Option<&str> {
        match node {
            Node::Model(id) => self.model(id).namespace.as_deref(),
            Node::Scalar(id) => self.scalar(id).namespace.as_deref(),
            Node::Union(id) => self.union(id).namespace.as_deref(),
            Node::Operation(id) => self.operation(id).namespace.as_deref(),
        }
    }

    /// True when `node` lives in one of `prefixes` or a namespace nested below it.
    pub fn is_internal_namespace(&self, node: Node, prefixes: &[String]) -> bool {
        let Some(namespace) = self.namespace_of(node) else {
            return false;
        };
        prefixes.iter().any(|prefix| {
            namespace == prefix
                || namespace
                    .strip_prefix(prefix.as_str())
                    .is_some_and(|rest| rest.starts_with('.'))
        })
    }

    // -------------------------------------------------------------------------
    // Sources
    // -------------------------------------------------------------------------

    pub fn sources(&self) -> &[SourceFile] {
        &self.sources
    }

    pub fn source_file(&self, span: Span) -> &SourceFile {
        &self.sources[span.file.index()]
    }

    pub fn location(&self, span: Span) -> SourceLocation {
        SourceLocation {
            file: self.source_file(span).path.clone(),
            pos: span.pos,
            end: span.end,
        }
    }
}
