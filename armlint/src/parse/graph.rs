//! Resolution of a [`TypeGraphDoc`] into the [`TypeGraph`] arena.

use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graph::DiGraph;

use super::types::*;
use crate::error::GraphError;
use crate::program::*;
use crate::source::{FileId, SourceFile, Span};

/// String id → arena handle tables for one document.
#[derive(Default)]
struct Symbols {
    files: HashMap<String, FileId>,
    scalars: HashMap<String, ScalarId>,
    models: HashMap<String, ModelId>,
    unions: HashMap<String, UnionId>,
    /// (model id, property name) → property
    properties: HashMap<(String, String), PropertyId>,
}

impl TypeGraph {
    /// Build the arena, collecting every structural error in the document.
    pub fn build(doc: &TypeGraphDoc) -> Result<Self, Vec<GraphError>> {
        let mut errors = Vec::new();
        let symbols = collect_symbols(doc, &mut errors);
        let mut graph = TypeGraph {
            sources: doc
                .sources
                .iter()
                .map(|s| SourceFile::new(s.path.clone(), s.text.clone()))
                .collect(),
            ..TypeGraph::default()
        };

        for scalar in &doc.scalars {
            graph.scalars.push(Scalar {
                name: scalar.name.clone(),
                namespace: scalar.namespace.clone(),
            });
        }

        // Models first, so property ids are allocated in declaration order.
        for model in &doc.models {
            let model_id = ModelId(graph.models.len() as u32);
            let mut properties = Vec::with_capacity(model.properties.len());
            for property in &model.properties {
                let owner = format!("{}.{}", model.id, property.name);
                let id = PropertyId(graph.properties.len() as u32);
                properties.push(id);
                graph.properties.push(ModelProperty {
                    name: property.name.clone(),
                    model: model_id,
                    ty: resolve_type(&property.ty, &owner, &symbols, &mut errors),
                    pattern: property.pattern.clone(),
                    http: property.http,
                    source: resolve_source(property, &owner, &symbols, &mut errors),
                    span: resolve_span(property.span.as_ref(), &owner, &graph.sources, &symbols, &mut errors),
                });
            }
            graph.models.push(Model {
                name: model.name.clone(),
                namespace: model.namespace.clone(),
                properties,
                template_args: model
                    .template_args
                    .iter()
                    .map(|arg| resolve_type(arg, &model.id, &symbols, &mut errors))
                    .collect(),
                is_error: model.error,
                resource: model.resource.as_ref().map(|r| r.kind),
                span: resolve_span(model.span.as_ref(), &model.id, &graph.sources, &symbols, &mut errors),
            });
        }

        for union in &doc.unions {
            graph.unions.push(Union {
                name: union.name.clone(),
                namespace: union.namespace.clone(),
                variants: union
                    .variants
                    .iter()
                    .map(|v| UnionVariant {
                        name: v.name.clone(),
                        ty: resolve_type(&v.ty, &format!("{}.{}", union.id, v.name), &symbols, &mut errors),
                    })
                    .collect(),
            });
        }

        for operation in &doc.operations {
            let Some(&parameters) = symbols.models.get(&operation.parameters) else {
                errors.push(GraphError::UnknownType {
                    owner: operation.id.clone(),
                    kind: "model",
                    id: operation.parameters.clone(),
                });
                continue;
            };
            graph.operations.push(Operation {
                name: operation.name.clone(),
                namespace: operation.namespace.clone(),
                verb: operation.verb,
                parameters,
                return_type: resolve_type(&operation.return_type, &operation.id, &symbols, &mut errors),
                span: resolve_span(operation.span.as_ref(), &operation.id, &graph.sources, &symbols, &mut errors),
            });
        }

        if errors.is_empty() {
            check_source_chains(&graph, &mut errors);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(graph)
    }
}

fn collect_symbols(doc: &TypeGraphDoc, errors: &mut Vec<GraphError>) -> Symbols {
    let mut symbols = Symbols::default();

    for (i, file) in doc.sources.iter().enumerate() {
        insert_unique(&mut symbols.files, &file.path, FileId(i as u32), "source file", errors);
    }
    for (i, scalar) in doc.scalars.iter().enumerate() {
        insert_unique(&mut symbols.scalars, &scalar.id, ScalarId(i as u32), "scalar", errors);
    }
    for (i, union) in doc.unions.iter().enumerate() {
        insert_unique(&mut symbols.unions, &union.id, UnionId(i as u32), "union", errors);
    }
    let mut operations = HashMap::new();
    for (i, operation) in doc.operations.iter().enumerate() {
        insert_unique(&mut operations, &operation.id, OperationId(i as u32), "operation", errors);
    }

    let mut next_property = 0u32;
    for (i, model) in doc.models.iter().enumerate() {
        insert_unique(&mut symbols.models, &model.id, ModelId(i as u32), "model", errors);
        for property in &model.properties {
            let key = (model.id.clone(), property.name.clone());
            if symbols.properties.insert(key, PropertyId(next_property)).is_some() {
                errors.push(GraphError::DuplicateProperty {
                    model: model.id.clone(),
                    property: property.name.clone(),
                });
            }
            next_property += 1;
        }
    }

    symbols
}

fn insert_unique<T>(
    table: &mut HashMap<String, T>,
    id: &str,
    value: T,
    kind: &'static str,
    errors: &mut Vec<GraphError>,
) {
    if table.insert(id.to_string(), value).is_some() {
        errors.push(GraphError::DuplicateId {
            kind,
            id: id.to_string(),
        });
    }
}

fn resolve_type(
    ty: &TypeRefDecl,
    owner: &str,
    symbols: &Symbols,
    errors: &mut Vec<GraphError>,
) -> Type {
    let (found, kind, id) = match ty {
        TypeRefDecl::Model(id) => (symbols.models.get(id).map(|&m| Type::Model(m)), "model", id),
        TypeRefDecl::Scalar(id) => (symbols.scalars.get(id).map(|&s| Type::Scalar(s)), "scalar", id),
        TypeRefDecl::Union(id) => (symbols.unions.get(id).map(|&u| Type::Union(u)), "union", id),
        TypeRefDecl::Intrinsic(i) => return Type::Intrinsic(*i),
        TypeRefDecl::String(s) => return Type::Literal(Literal::String(s.clone())),
        TypeRefDecl::Number(n) => return Type::Literal(Literal::Number(*n)),
        TypeRefDecl::Boolean(b) => return Type::Literal(Literal::Boolean(*b)),
    };
    found.unwrap_or_else(|| {
        errors.push(GraphError::UnknownType {
            owner: owner.to_string(),
            kind,
            id: id.clone(),
        });
        Type::Intrinsic(Intrinsic::Error)
    })
}

fn resolve_source(
    property: &PropertyDecl,
    owner: &str,
    symbols: &Symbols,
    errors: &mut Vec<GraphError>,
) -> Option<PropertyId> {
    let source = property.source.as_ref()?;
    let key = (source.model.clone(), source.property.clone());
    let found = symbols.properties.get(&key).copied();
    if found.is_none() {
        errors.push(GraphError::UnknownSource {
            owner: owner.to_string(),
            model: source.model.clone(),
            property: source.property.clone(),
        });
    }
    found
}

fn resolve_span(
    span: Option<&SpanDecl>,
    owner: &str,
    sources: &[SourceFile],
    symbols: &Symbols,
    errors: &mut Vec<GraphError>,
) -> Option<Span> {
    let span = span?;
    let invalid = |reason: String| GraphError::InvalidSpan {
        owner: owner.to_string(),
        reason,
    };

    let Some(&file) = symbols.files.get(&span.file) else {
        errors.push(invalid(format!("unknown source file '{}'", span.file)));
        return None;
    };
    let text = &sources[file.index()].text;
    if span.pos > span.end || span.end > text.len() {
        errors.push(invalid(format!(
            "range {}..{} is outside '{}' ({} bytes)",
            span.pos,
            span.end,
            span.file,
            text.len()
        )));
        return None;
    }
    if !text.is_char_boundary(span.pos) || !text.is_char_boundary(span.end) {
        errors.push(invalid(format!(
            "range {}..{} splits a character in '{}'",
            span.pos, span.end, span.file
        )));
        return None;
    }

    Some(Span {
        file,
        pos: span.pos,
        end: span.end,
    })
}

/// Copy chains (`property -> source -> ...`) must terminate.
fn check_source_chains(graph: &TypeGraph, errors: &mut Vec<GraphError>) {
    let mut chains: DiGraph<PropertyId, ()> = DiGraph::new();
    let nodes: Vec<_> = (0..graph.properties.len())
        .map(|i| chains.add_node(PropertyId(i as u32)))
        .collect();

    for (i, property) in graph.properties.iter().enumerate() {
        if let Some(source) = property.source {
            chains.add_edge(nodes[i], nodes[source.index()], ());
        }
    }

    if let Err(cycle) = toposort(&chains, None) {
        let property = graph.property(chains[cycle.node_id()]);
        errors.push(GraphError::CyclicSource {
            property: format!("{}.{}", graph.model_name(property.model), property.name),
        });
    }
}
