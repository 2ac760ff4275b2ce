//! Diagnostics reported by the rules, with optional code fixes.

use serde::{Deserialize, Serialize};

use crate::program::{OperationId, PropertyId, TypeGraph};
use crate::rules::RuleId;
use crate::source::{SourceLocation, Span, TextEdit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Which of a rule's messages was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageId {
    Default,
    MissingTags,
    ModelSuperset,
}

impl MessageId {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageId::Default => "default",
            MessageId::MissingTags => "missingTags",
            MessageId::ModelSuperset => "modelSuperset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticTarget {
    Operation(OperationId),
    Property(PropertyId),
}

/// A named source transformation offered alongside a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeFix {
    pub id: String,
    pub label: String,
    pub edits: Vec<TextEdit>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub rule: RuleId,
    pub message_id: MessageId,
    pub severity: Severity,
    pub message: String,
    pub target: DiagnosticTarget,
    /// `Model.property` or operation name, for display.
    pub target_name: String,
    pub location: Option<SourceLocation>,
    pub codefixes: Vec<CodeFix>,
}

impl Diagnostic {
    pub(crate) fn on_operation(
        graph: &TypeGraph,
        rule: RuleId,
        message_id: MessageId,
        message: impl Into<String>,
        operation: OperationId,
    ) -> Self {
        let op = graph.operation(operation);
        Self::warning(
            graph,
            rule,
            message_id,
            message.into(),
            DiagnosticTarget::Operation(operation),
            op.name.clone(),
            op.span,
        )
    }

    pub(crate) fn on_property(
        graph: &TypeGraph,
        rule: RuleId,
        message_id: MessageId,
        message: impl Into<String>,
        property: PropertyId,
    ) -> Self {
        let prop = graph.property(property);
        Self::warning(
            graph,
            rule,
            message_id,
            message.into(),
            DiagnosticTarget::Property(property),
            format!("{}.{}", graph.model_name(prop.model), prop.name),
            prop.span,
        )
    }

    fn warning(
        graph: &TypeGraph,
        rule: RuleId,
        message_id: MessageId,
        message: String,
        target: DiagnosticTarget,
        target_name: String,
        span: Option<Span>,
    ) -> Self {
        Diagnostic {
            rule,
            message_id,
            severity: Severity::Warning,
            message,
            target,
            target_name,
            location: span.map(|s| graph.location(s)),
            codefixes: Vec::new(),
        }
    }

    pub fn with_codefix(mut self, fix: CodeFix) -> Self {
        self.codefixes.push(fix);
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}:{}] {} (at '{}')",
            self.severity,
            self.rule,
            self.message_id.as_str(),
            self.message,
            self.target_name
        )?;
        if let Some(loc) = &self.location {
            write!(f, " {}:{}", loc.file, loc.pos)?;
        }
        Ok(())
    }
}
