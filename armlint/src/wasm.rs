//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::config::LinterConfig;
use crate::diagnostic::{CodeFix, Diagnostic};
use crate::error::GraphError;

/// Lint a compiled type graph JSON with an optional config JSON (empty string
/// for defaults). Returns a JSON object with either `diagnostics` or `errors`.
#[wasm_bindgen]
pub fn lint_type_graph(graph_json: &str, config_json: &str) -> JsValue {
    let result = lint_type_graph_inner(graph_json, config_json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn lint_type_graph_inner(graph_json: &str, config_json: &str) -> LintResult {
    let config = if config_json.trim().is_empty() {
        LinterConfig::default()
    } else {
        match LinterConfig::from_json(config_json) {
            Ok(c) => c,
            Err(e) => return LintResult::Errors { errors: vec![ErrorDto::from(e)] },
        }
    };

    let graph = match crate::parse::parse_and_build(graph_json) {
        Ok(g) => g,
        Err(errors) => {
            return LintResult::Errors {
                errors: errors.into_iter().map(ErrorDto::from).collect(),
            };
        }
    };

    let diagnostics = crate::rules::lint(&graph, &config);
    LintResult::Success {
        diagnostics: diagnostics.into_iter().map(DiagnosticDto::from).collect(),
    }
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize, serde::Deserialize)]
struct ErrorDto {
    code: String,
    message: String,
}

impl From<GraphError> for ErrorDto {
    fn from(e: GraphError) -> Self {
        ErrorDto {
            code: e.code().to_string(),
            message: e.to_string(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct DiagnosticDto {
    rule: String,
    message_id: String,
    severity: String,
    message: String,
    target: String,
    file: Option<String>,
    pos: Option<usize>,
    end: Option<usize>,
    codefixes: Vec<CodeFix>,
}

impl From<Diagnostic> for DiagnosticDto {
    fn from(d: Diagnostic) -> Self {
        let (file, pos, end) = match d.location {
            Some(loc) => (Some(loc.file), Some(loc.pos), Some(loc.end)),
            None => (None, None, None),
        };
        DiagnosticDto {
            rule: d.rule.name().to_string(),
            message_id: d.message_id.as_str().to_string(),
            severity: d.severity.to_string(),
            message: d.message,
            target: d.target_name,
            file,
            pos,
            end,
            codefixes: d.codefixes,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
enum LintResult {
    #[serde(rename = "success")]
    Success { diagnostics: Vec<DiagnosticDto> },
    #[serde(rename = "errors")]
    Errors { errors: Vec<ErrorDto> },
}
