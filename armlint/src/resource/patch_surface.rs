//! Computation of the properties a PATCH request body carries.

use tracing::trace;

use crate::program::{ModelId, PropertyId, Type, TypeGraph};

/// Properties of the request body described by an operation's parameters, or
/// `None` when there is no usable body.
///
/// Header, query and path parameters are not part of the body. A body that is
/// a single model-typed parameter is unwrapped to that model's properties;
/// otherwise the remaining parameters are the body. A body or body-root
/// parameter of scalar type cannot be patched property-wise.
pub fn patch_surface(graph: &TypeGraph, parameters: ModelId) -> Option<Vec<PropertyId>> {
    let parameters = graph.effective_model(parameters);
    let mut body = Vec::new();

    for (id, property) in graph.properties_of(parameters) {
        if graph.is_header(id) || graph.is_query_param(id) || graph.is_path_param(id) {
            continue;
        }
        if (graph.is_body(id) || graph.is_body_root(id)) && matches!(property.ty, Type::Scalar(_)) {
            trace!(parameter = %property.name, "scalar request body");
            return None;
        }
        body.push(id);
    }

    if body.is_empty() {
        return None;
    }
    if let &[single] = body.as_slice()
        && let Type::Model(model) = graph.property(single).ty
    {
        return Some(graph.model(model).properties.clone());
    }
    Some(body)
}
