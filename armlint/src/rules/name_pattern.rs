//! `arm-resource-name-pattern`: resource `name` properties need a pattern.

use tracing::debug;

use super::RuleId;
use crate::diagnostic::{CodeFix, Diagnostic, MessageId};
use crate::program::{PropertyId, TypeGraph};
use crate::resource::LintContext;

/// Pattern inserted by the code fix.
pub const DEFAULT_NAME_PATTERN: &str = "^[a-zA-Z0-9-]{3,24}$";

pub const CODEFIX_ID: &str = "add-pattern-decorator";

const MESSAGE: &str = "The resource name parameter should be defined with a 'pattern' restriction. \
Please use 'ResourceNameParameter' to specify the name parameter with options to override default pattern RegEx expression.";

pub fn check_resources(ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
    let graph = ctx.graph();
    for resource in ctx.arm_resources() {
        let Some(name) = graph.get_property(resource.model, "name") else {
            debug!(resource = %resource.name, "resource has no name property");
            continue;
        };
        if graph.get_pattern(name).is_some() {
            continue;
        }

        debug!(resource = %resource.name, "name property has no pattern");
        let diagnostic = Diagnostic::on_property(
            graph,
            RuleId::ResourceNamePattern,
            MessageId::Default,
            MESSAGE,
            name,
        );
        diagnostics.push(match pattern_codefix(graph, name) {
            Some(fix) => diagnostic.with_codefix(fix),
            None => diagnostic,
        });
    }
}

/// `@pattern(...)` on its own line above the property. Needs the property's source span.
fn pattern_codefix(graph: &TypeGraph, property: PropertyId) -> Option<CodeFix> {
    let span = graph.property(property).span?;
    let decorator = format!("@pattern(\"{}\")", DEFAULT_NAME_PATTERN);
    Some(CodeFix {
        id: CODEFIX_ID.to_string(),
        label: "Add `@pattern` decorator to the resource name property with the default ARM pattern."
            .to_string(),
        edits: vec![graph.source_file(span).insert_line_before(span.pos, &decorator)],
    })
}
