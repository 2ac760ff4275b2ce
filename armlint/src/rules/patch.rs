//! `arm-resource-patch`: PATCH bodies must be a subset of their resource.

use tracing::{debug, trace};

use super::RuleId;
use crate::diagnostic::{Diagnostic, MessageId};
use crate::program::{HttpVerb, ModelId, Node, OperationId, PropertyId, Type, TypeGraph};
use crate::resource::LintContext;
use crate::resource::patch_surface::patch_surface;
use crate::resource::resolve::resolve_resource_model;

/// Resource metadata envelope holding the resource-specific fields.
const ENVELOPE: &str = "properties";
const TAGS: &str = "tags";

const MALFORMED_MESSAGE: &str =
    "The request body of a PATCH must be a model with a subset of resource properties";
const MISSING_TAGS_MESSAGE: &str = "Resource PATCH must contain the 'tags' property.";

pub fn check_operation(
    ctx: &LintContext<'_>,
    operation: OperationId,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let graph = ctx.graph();
    if graph.is_internal_namespace(Node::Operation(operation), &ctx.config().internal_namespaces) {
        return;
    }
    if graph.get_operation_verb(operation) != Some(HttpVerb::Patch) {
        return;
    }

    let op = graph.operation(operation);
    let Some(resource) = resolve_resource_model(ctx, operation) else {
        debug!(operation = %op.name, "PATCH does not return an ARM resource");
        return;
    };

    let Some(surface) = patch_surface(graph, op.parameters) else {
        debug!(operation = %op.name, "PATCH has no usable request body");
        diagnostics.push(Diagnostic::on_operation(
            graph,
            RuleId::ResourcePatch,
            MessageId::Default,
            MALFORMED_MESSAGE,
            operation,
        ));
        return;
    };

    if model_property(graph, resource, TAGS).is_some() && !has_model_property(graph, &surface, TAGS) {
        debug!(operation = %op.name, "PATCH body has no tags");
        diagnostics.push(Diagnostic::on_operation(
            graph,
            RuleId::ResourcePatch,
            MessageId::MissingTags,
            MISSING_TAGS_MESSAGE,
            operation,
        ));
    }

    let offending = offending_properties(ctx, resource, &surface);
    if !offending.is_empty() {
        let names: Vec<&str> = offending
            .iter()
            .map(|&p| graph.property(p).name.as_str())
            .collect();
        debug!(operation = %op.name, properties = ?names, "PATCH body is not a subset of its resource");
        diagnostics.push(Diagnostic::on_operation(
            graph,
            RuleId::ResourcePatch,
            MessageId::ModelSuperset,
            format!(
                "Resource PATCH models must be a subset of the resource type. The following properties: [{}] do not exist in resource Model '{}'.",
                names.join(", "),
                graph.model_name(resource)
            ),
            operation,
        ));
    }
}

/// The model type of `model.name`, if that property exists and is model-typed.
fn model_property(graph: &TypeGraph, model: ModelId, name: &str) -> Option<ModelId> {
    let property = graph.get_property(model, name)?;
    match graph.property(property).ty {
        Type::Model(ty) => Some(ty),
        _ => None,
    }
}

fn has_model_property(graph: &TypeGraph, properties: &[PropertyId], name: &str) -> bool {
    properties.iter().any(|&p| {
        let property = graph.property(p);
        property.name == name && matches!(property.ty, Type::Model(_))
    })
}

/// Surface properties the resource cannot explain, in surface order. A
/// model-typed `properties` entry is also checked field by field against
/// the resource's envelope.
fn offending_properties(
    ctx: &LintContext<'_>,
    resource: ModelId,
    surface: &[PropertyId],
) -> Vec<PropertyId> {
    let graph = ctx.graph();
    let envelope = model_property(graph, resource, ENVELOPE);
    let mut offending = Vec::new();

    for &property in surface {
        if !belongs_to_resource(ctx, resource, envelope, property) {
            offending.push(property);
            continue;
        }

        let declared = graph.property(property);
        let (Some(envelope), Type::Model(nested)) = (envelope, &declared.ty) else {
            continue;
        };
        if declared.name != ENVELOPE
            || *nested == envelope
            || is_inherited_from_resource(ctx, property)
        {
            continue;
        }
        trace!(envelope = graph.model_name(envelope), "checking nested envelope properties");
        for (id, nested_property) in graph.properties_of(*nested) {
            if !is_inherited_from_resource(ctx, id)
                && graph.get_property(envelope, &nested_property.name).is_none()
            {
                offending.push(id);
            }
        }
    }

    offending
}

fn belongs_to_resource(
    ctx: &LintContext<'_>,
    resource: ModelId,
    envelope: Option<ModelId>,
    property: PropertyId,
) -> bool {
    let graph = ctx.graph();
    let name = &graph.property(property).name;
    is_inherited_from_resource(ctx, property)
        || graph.get_property(resource, name).is_some()
        || envelope.is_some_and(|e| graph.get_property(e, name).is_some())
}

/// Properties copied from a resource model are exempt from the subset check.
fn is_inherited_from_resource(ctx: &LintContext<'_>, property: PropertyId) -> bool {
    ctx.arm_resource(ctx.graph().source_model(property)).is_some()
}
