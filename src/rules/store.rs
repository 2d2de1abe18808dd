use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::rules::matcher::{CcrComplexRule, MecComplexRule, SccmecTypeRule};

#[derive(Error, Debug)]
pub enum RulesError {
    #[error("Failed to read rules: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse rules: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid rules: {0}")]
    InvalidRule(String),
}

/// Rule table version for compatibility checking
pub const RULES_VERSION: &str = "1.0.0";

/// Where to load the rule table from
#[derive(Debug, Clone, Default)]
pub enum RuleSource {
    /// The default table compiled into the binary
    #[default]
    Embedded,
    File(PathBuf),
}

impl std::fmt::Display for RuleSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded rules"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Serializable rule table format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleData {
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    pub mec_complex: Vec<MecComplexRule>,
    pub ccr_complex: Vec<CcrComplexRule>,
    pub sccmec_types: Vec<SccmecTypeRule>,
}

/// The ordered, read-only classification rules.
///
/// Each list is evaluated in declaration order; the order is the priority.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub mec_complex: Vec<MecComplexRule>,
    pub ccr_complex: Vec<CcrComplexRule>,
    pub sccmec_types: Vec<SccmecTypeRule>,
}

impl RuleSet {
    /// Load the embedded default rule table
    pub fn load_embedded() -> Result<Self, RulesError> {
        // Validated at compile time via build.rs
        const EMBEDDED_RULES: &str = include_str!("../../rules/sccmec_rules.json");
        Self::from_json(EMBEDDED_RULES)
    }

    /// Load a rule table from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, RulesError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn load(source: &RuleSource) -> Result<Self, RulesError> {
        match source {
            RuleSource::Embedded => Self::load_embedded(),
            RuleSource::File(path) => Self::load_from_file(path),
        }
    }

    /// Parse and validate a rule table from a JSON string
    pub fn from_json(json: &str) -> Result<Self, RulesError> {
        let data: RuleData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != RULES_VERSION {
            warn!(
                "Rules version mismatch (expected {}, found {})",
                RULES_VERSION, data.version
            );
        }

        let rules = Self {
            mec_complex: data.mec_complex,
            ccr_complex: data.ccr_complex,
            sccmec_types: data.sccmec_types,
        };
        rules.validate()?;
        Ok(rules)
    }

    fn validate(&self) -> Result<(), RulesError> {
        for (i, rule) in self.mec_complex.iter().enumerate() {
            require_name(&rule.name, "mec_complex", i)?;
            if rule.required.is_empty() && rule.any_of.is_empty() {
                return Err(RulesError::InvalidRule(format!(
                    "mec_complex rule '{}' lists no genes",
                    rule.name
                )));
            }
        }

        for (i, rule) in self.ccr_complex.iter().enumerate() {
            require_name(&rule.name, "ccr_complex", i)?;
            if rule.pattern.is_empty() {
                return Err(RulesError::InvalidRule(format!(
                    "ccr_complex rule '{}' has an empty pattern",
                    rule.name
                )));
            }
        }

        for (i, rule) in self.sccmec_types.iter().enumerate() {
            require_name(&rule.name, "sccmec_types", i)?;
            if rule.mec_complex.trim().is_empty() {
                return Err(RulesError::InvalidRule(format!(
                    "sccmec_types rule '{}' has no mec_complex",
                    rule.name
                )));
            }
        }

        Ok(())
    }

    /// Export the rule table to JSON
    pub fn to_json(&self) -> Result<String, RulesError> {
        let data = RuleData {
            version: RULES_VERSION.to_string(),
            created_at: Some(chrono::Utc::now().to_rfc3339()),
            mec_complex: self.mec_complex.clone(),
            ccr_complex: self.ccr_complex.clone(),
            sccmec_types: self.sccmec_types.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Total number of rules across all sections
    pub fn len(&self) -> usize {
        self.mec_complex.len() + self.ccr_complex.len() + self.sccmec_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn require_name(name: &str, section: &str, index: usize) -> Result<(), RulesError> {
    if name.trim().is_empty() {
        return Err(RulesError::InvalidRule(format!(
            "{section} rule at index {index} has no name"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::matcher::CcrRequirement;

    #[test]
    fn test_load_embedded_rules() {
        let rules = RuleSet::load_embedded().unwrap();
        assert!(!rules.is_empty());
        assert_eq!(rules.mec_complex[0].name, "Class A");
        assert!(rules
            .sccmec_types
            .iter()
            .any(|r| r.ccr == CcrRequirement::Any));
    }

    #[test]
    fn test_round_trip_json() {
        let rules = RuleSet::load_embedded().unwrap();
        let json = rules.to_json().unwrap();
        assert!(json.contains("\"created_at\""));
        assert!(json.contains("\"ANY\""));

        let reloaded = RuleSet::from_json(&json).unwrap();
        assert_eq!(reloaded.len(), rules.len());
        assert_eq!(reloaded.sccmec_types, rules.sccmec_types);
    }

    #[test]
    fn test_unparseable_rules() {
        assert!(matches!(
            RuleSet::from_json("{ not json"),
            Err(RulesError::ParseError(_))
        ));
    }

    #[test]
    fn test_missing_section() {
        let json = r#"{"version": "1.0.0", "mec_complex": [], "ccr_complex": []}"#;
        assert!(matches!(
            RuleSet::from_json(json),
            Err(RulesError::ParseError(_))
        ));
    }

    #[test]
    fn test_mec_rule_without_genes_rejected() {
        let json = r#"{
            "version": "1.0.0",
            "mec_complex": [{"name": "Empty"}],
            "ccr_complex": [],
            "sccmec_types": []
        }"#;
        assert!(matches!(
            RuleSet::from_json(json),
            Err(RulesError::InvalidRule(_))
        ));
    }

    #[test]
    fn test_empty_ccr_pattern_rejected() {
        let json = r#"{
            "version": "1.0.0",
            "mec_complex": [],
            "ccr_complex": [{"name": "Type 1", "pattern": ""}],
            "sccmec_types": []
        }"#;
        assert!(matches!(
            RuleSet::from_json(json),
            Err(RulesError::InvalidRule(_))
        ));
    }

    #[test]
    fn test_version_mismatch_is_not_fatal() {
        let json = r#"{
            "version": "0.9.0",
            "mec_complex": [{"name": "Class A", "required": ["mecA"]}],
            "ccr_complex": [],
            "sccmec_types": []
        }"#;
        let rules = RuleSet::from_json(json).unwrap();
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let source = RuleSource::File(PathBuf::from("/nonexistent/rules.json"));
        assert!(matches!(
            RuleSet::load(&source),
            Err(RulesError::ReadError(_))
        ));
    }
}
