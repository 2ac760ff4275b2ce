//! Linter configuration.

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::rules::RuleId;

/// Namespaces whose operations belong to the libraries themselves and are
/// never linted.
pub const DEFAULT_INTERNAL_NAMESPACES: [&str; 3] = ["TypeSpec", "Azure.ResourceManager", "Azure.Core"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinterConfig {
    pub internal_namespaces: Vec<String>,
    /// Rule names (e.g. `arm-resource-patch`) to skip.
    pub disabled_rules: Vec<String>,
}

impl Default for LinterConfig {
    fn default() -> Self {
        LinterConfig {
            internal_namespaces: DEFAULT_INTERNAL_NAMESPACES.iter().map(|s| s.to_string()).collect(),
            disabled_rules: Vec::new(),
        }
    }
}

impl LinterConfig {
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        serde_json::from_str(json).map_err(|e| GraphError::invalid_json("linter config", &e))
    }

    pub fn is_enabled(&self, rule: RuleId) -> bool {
        !self.disabled_rules.iter().any(|r| r == rule.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = LinterConfig::from_json("{}").unwrap();
        assert_eq!(config, LinterConfig::default());
        assert!(config.is_enabled(RuleId::ResourcePatch));
    }

    #[test]
    fn disabled_rule_is_skipped() {
        let config = LinterConfig::from_json(r#"{"disabledRules": ["arm-resource-name-pattern"]}"#).unwrap();
        assert!(!config.is_enabled(RuleId::ResourceNamePattern));
        assert!(config.is_enabled(RuleId::ResourcePatch));
        assert_eq!(config.internal_namespaces.len(), 3);
    }

    #[test]
    fn malformed_config_is_p001() {
        let err = LinterConfig::from_json("[").unwrap_err();
        assert_eq!(err.code(), "P001");
    }
}
