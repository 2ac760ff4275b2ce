//! Load phase: compiled type graph JSON → document → arena.

pub mod graph;
pub mod types;

pub use types::*;

use crate::error::GraphError;
use crate::program::TypeGraph;

/// Deserialize a type graph JSON string into a `TypeGraphDoc`.
pub fn parse(json: &str) -> Result<TypeGraphDoc, Vec<GraphError>> {
    serde_json::from_str::<TypeGraphDoc>(json)
        .map_err(|e| vec![GraphError::invalid_json("type graph", &e)])
}

/// Parse JSON and build the arena in one step.
pub fn parse_and_build(json: &str) -> Result<TypeGraph, Vec<GraphError>> {
    let doc = parse(json)?;
    TypeGraph::build(&doc)
}
