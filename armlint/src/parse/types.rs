//! Serde shape of a compiled type graph as emitted by the frontend.
//!
//! Nodes reference each other by string id; `TypeGraph::build` resolves the
//! ids into arena handles. Every list keeps the frontend's declaration order.

use serde::{Deserialize, Serialize};

use crate::program::{HttpLocation, HttpVerb, Intrinsic, ResourceKind};

// =============================================================================
// TOP-LEVEL DOCUMENT
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeGraphDoc {
    #[serde(default)]
    pub sources: Vec<SourceFileDecl>,
    #[serde(default)]
    pub scalars: Vec<ScalarDecl>,
    #[serde(default)]
    pub models: Vec<ModelDecl>,
    #[serde(default)]
    pub unions: Vec<UnionDecl>,
    #[serde(default)]
    pub operations: Vec<OperationDecl>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFileDecl {
    pub path: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpanDecl {
    /// Path of an entry in `sources`.
    pub file: String,
    pub pos: usize,
    pub end: usize,
}

// =============================================================================
// TYPE REFERENCES
// =============================================================================

/// Externally tagged: `{"model": "Widget"}`, `{"intrinsic": "void"}`, `{"string": "x"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeRefDecl {
    Model(String),
    Scalar(String),
    Union(String),
    Intrinsic(Intrinsic),
    String(String),
    Number(f64),
    Boolean(bool),
}

// =============================================================================
// NODES
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalarDecl {
    pub id: String,
    pub name: String,
    pub namespace: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDecl {
    pub id: String,
    pub name: Option<String>,
    pub namespace: Option<String>,
    /// Model is decorated as an error response.
    #[serde(default)]
    pub error: bool,
    pub resource: Option<ResourceDecl>,
    #[serde(default)]
    pub template_args: Vec<TypeRefDecl>,
    #[serde(default)]
    pub properties: Vec<PropertyDecl>,
    pub span: Option<SpanDecl>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDecl {
    pub kind: ResourceKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRefDecl,
    pub pattern: Option<String>,
    pub http: Option<HttpLocation>,
    pub source: Option<SourceRefDecl>,
    pub span: Option<SpanDecl>,
}

/// Points at the property a copied property came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRefDecl {
    pub model: String,
    pub property: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnionDecl {
    pub id: String,
    pub name: Option<String>,
    pub namespace: Option<String>,
    #[serde(default)]
    pub variants: Vec<VariantDecl>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRefDecl,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDecl {
    pub id: String,
    pub name: String,
    pub namespace: Option<String>,
    pub verb: Option<HttpVerb>,
    /// Id of the parameters model.
    pub parameters: String,
    pub return_type: TypeRefDecl,
    pub span: Option<SpanDecl>,
}
