//! Node types stored in the [`TypeGraph`](super::TypeGraph) arena.
//!
//! Nodes refer to each other through typed ids, never through references, so
//! templates and union variants can share nodes and the graph may contain
//! cycles (e.g. self-referencing models).

use serde::{Deserialize, Serialize};

use crate::source::Span;

macro_rules! arena_id {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
            pub struct $name(pub(crate) u32);

            impl $name {
                pub fn index(self) -> usize {
                    self.0 as usize
                }
            }
        )*
    };
}

arena_id!(
    /// A model (structural type) node.
    ModelId,
    /// A property node; owned by exactly one model.
    PropertyId,
    ScalarId,
    UnionId,
    OperationId,
);

// =============================================================================
// TYPE REFERENCES
// =============================================================================

/// The type of a property, union variant, template argument or return value.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Model(ModelId),
    Scalar(ScalarId),
    Union(UnionId),
    Intrinsic(Intrinsic),
    Literal(Literal),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Intrinsic {
    Void,
    Never,
    Unknown,
    Null,
    /// Placeholder the frontend leaves behind for types it failed to bind.
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    Number(f64),
    Boolean(bool),
}

// =============================================================================
// ANNOTATIONS
// =============================================================================

/// Where an operation parameter travels in the HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HttpLocation {
    Header,
    Query,
    Path,
    /// A single field that is the whole request body.
    Body,
    /// The whole request body, spread into a model.
    BodyRoot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpVerb {
    Get,
    Put,
    Post,
    Patch,
    Delete,
    Head,
}

/// Kind of a registered ARM resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Tracked,
    Proxy,
    Extension,
    Virtual,
    Custom,
}

// =============================================================================
// NODES
// =============================================================================

#[derive(Debug, Clone)]
pub struct Model {
    /// `None` for anonymous models (inline bodies, spread results).
    pub name: Option<String>,
    pub namespace: Option<String>,
    /// Declaration order.
    pub properties: Vec<PropertyId>,
    /// Template arguments of an instantiated generic model.
    pub template_args: Vec<Type>,
    pub is_error: bool,
    /// Set when the model is registered as an ARM resource.
    pub resource: Option<ResourceKind>,
    pub span: Option<Span>,
}

#[derive(Debug, Clone)]
pub struct ModelProperty {
    pub name: String,
    /// The model declaring this property.
    pub model: ModelId,
    pub ty: Type,
    pub pattern: Option<String>,
    pub http: Option<HttpLocation>,
    /// The property this one was copied from (spread, `is`, template instantiation).
    pub source: Option<PropertyId>,
    pub span: Option<Span>,
}

#[derive(Debug, Clone)]
pub struct Scalar {
    pub name: String,
    pub namespace: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Union {
    pub name: Option<String>,
    pub namespace: Option<String>,
    pub variants: Vec<UnionVariant>,
}

#[derive(Debug, Clone)]
pub struct UnionVariant {
    pub name: String,
    pub ty: Type,
}

#[derive(Debug, Clone)]
pub struct Operation {
    pub name: String,
    pub namespace: Option<String>,
    pub verb: Option<HttpVerb>,
    /// Anonymous model aggregating path, query, header and body inputs.
    pub parameters: ModelId,
    pub return_type: Type,
    pub span: Option<Span>,
}

/// A node that can be the target of a namespace query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Model(ModelId),
    Scalar(ScalarId),
    Union(UnionId),
    Operation(OperationId),
}
