//! Lint pass over a type graph.
//!
//! Runs the resource name rule over every registered resource, then the PATCH
//! rule over every operation in declaration order. Diagnostics come back in
//! that order.

pub mod name_pattern;
pub mod patch;

use tracing::info;

use crate::config::LinterConfig;
use crate::diagnostic::Diagnostic;
use crate::program::TypeGraph;
use crate::resource::LintContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    ResourceNamePattern,
    ResourcePatch,
}

impl RuleId {
    pub const ALL: [RuleId; 2] = [RuleId::ResourceNamePattern, RuleId::ResourcePatch];

    pub fn name(self) -> &'static str {
        match self {
            RuleId::ResourceNamePattern => "arm-resource-name-pattern",
            RuleId::ResourcePatch => "arm-resource-patch",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RuleId::ResourceNamePattern => {
                "The resource name parameter should be defined with a 'pattern' restriction."
            }
            RuleId::ResourcePatch => "Validate ARM PATCH operations.",
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Lint the whole graph. Each call uses a fresh resource index.
pub fn lint(graph: &TypeGraph, config: &LinterConfig) -> Vec<Diagnostic> {
    let ctx = LintContext::new(graph, config);
    let mut diagnostics = Vec::new();

    if config.is_enabled(RuleId::ResourceNamePattern) {
        name_pattern::check_resources(&ctx, &mut diagnostics);
    }

    if config.is_enabled(RuleId::ResourcePatch) {
        for (operation, _) in graph.operations() {
            patch::check_operation(&ctx, operation, &mut diagnostics);
        }
    }

    info!(
        resources = ctx.arm_resources().len(),
        diagnostics = diagnostics.len(),
        "lint pass finished"
    );
    diagnostics
}
