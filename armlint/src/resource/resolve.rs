//! Operation → resource model resolution.

use tracing::trace;

use super::LintContext;
use crate::program::{ModelId, OperationId, Type};

/// Resource model an operation acts on, found through its union return type.
///
/// Variants are inspected in declaration order and the first match wins:
/// either the variant's effective model is itself a resource, or one of its
/// template arguments is (e.g. `ArmResponse<Widget>`). Error variants and
/// non-model variants are skipped.
pub fn resolve_resource_model(ctx: &LintContext<'_>, operation: OperationId) -> Option<ModelId> {
    let graph = ctx.graph();
    let Type::Union(union) = graph.operation(operation).return_type else {
        return None;
    };

    for variant in &graph.union(union).variants {
        if graph.is_error_type(&variant.ty) {
            continue;
        }
        let Type::Model(model) = variant.ty else {
            continue;
        };

        let candidate = graph.effective_model(model);
        if ctx.arm_resource(candidate).is_some() {
            trace!(variant = %variant.name, resource = graph.model_name(candidate), "variant is a resource");
            return Some(candidate);
        }

        for arg in &graph.model(candidate).template_args {
            if let Type::Model(arg) = *arg {
                if ctx.arm_resource(arg).is_some() {
                    trace!(variant = %variant.name, resource = graph.model_name(arg), "template argument is a resource");
                    return Some(arg);
                }
            }
        }
    }

    None
}
