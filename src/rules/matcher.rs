use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Literal used in the rule table for "any ccr complex, including none"
pub const WILDCARD_CCR: &str = "ANY";

/// Set of detected gene symbols
pub type GeneSet = BTreeSet<String>;

/// A named, declarative rule evaluated against evidence of type `E`
pub trait Rule<E: ?Sized> {
    fn name(&self) -> &str;

    fn matches(&self, evidence: &E) -> bool;
}

/// Return the first rule, in declaration order, that matches `evidence`.
///
/// Declaration order is the priority order: an earlier rule shadows any later
/// rule satisfied by the same evidence.
pub fn first_match<'r, E: ?Sized, R: Rule<E>>(rules: &'r [R], evidence: &E) -> Option<&'r R> {
    rules.iter().find(|rule| rule.matches(evidence))
}

/// All rules that match `evidence`, in declaration order
pub fn all_matches<'r, 'e, E: ?Sized, R: Rule<E>>(
    rules: &'r [R],
    evidence: &'e E,
) -> impl Iterator<Item = &'r R> + 'e
where
    'r: 'e,
{
    rules.iter().filter(move |rule| rule.matches(evidence))
}

/// mec-complex rule: every `required` gene present and, when `any_of` is
/// non-empty, at least one of those genes present too
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MecComplexRule {
    pub name: String,

    #[serde(default)]
    pub required: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub any_of: Vec<String>,
}

impl Rule<GeneSet> for MecComplexRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, genes: &GeneSet) -> bool {
        self.required.iter().all(|g| genes.contains(g))
            && (self.any_of.is_empty() || self.any_of.iter().any(|g| genes.contains(g)))
    }
}

/// ccr-complex rule: a ccr gene symbol containing `pattern` belongs to the
/// ccr type `name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CcrComplexRule {
    pub name: String,
    pub pattern: String,
}

impl Rule<str> for CcrComplexRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, symbol: &str) -> bool {
        symbol.contains(self.pattern.as_str())
    }
}

/// Which ccr complexes an SCCmec type accepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CcrRequirement {
    /// Any ccr complex, or none at all
    Any,
    /// A specific ccr type name that must be among the detected types
    Type(String),
}

impl CcrRequirement {
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Any)
    }

    #[must_use]
    pub fn is_satisfied_by(&self, ccr_types: &BTreeSet<String>) -> bool {
        match self {
            Self::Any => true,
            Self::Type(name) => ccr_types.contains(name),
        }
    }
}

impl From<String> for CcrRequirement {
    fn from(s: String) -> Self {
        if s == WILDCARD_CCR {
            Self::Any
        } else {
            Self::Type(s)
        }
    }
}

impl From<CcrRequirement> for String {
    fn from(req: CcrRequirement) -> Self {
        match req {
            CcrRequirement::Any => WILDCARD_CCR.to_string(),
            CcrRequirement::Type(name) => name,
        }
    }
}

impl std::fmt::Display for CcrRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => write!(f, "{WILDCARD_CCR}"),
            Self::Type(name) => write!(f, "{name}"),
        }
    }
}

/// Resolved complexes an SCCmec-type rule is tested against
#[derive(Debug, Clone, Copy)]
pub struct ComplexPair<'a> {
    pub mec_complex: &'a str,
    pub ccr_types: &'a BTreeSet<String>,
}

/// SCCmec-type rule: a mec complex paired with a ccr requirement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SccmecTypeRule {
    pub name: String,
    pub mec_complex: String,
    pub ccr: CcrRequirement,
}

impl SccmecTypeRule {
    /// Whether this rule types `mec_complex` even when no ccr gene was found
    #[must_use]
    pub fn accepts_missing_ccr(&self, mec_complex: &str) -> bool {
        self.mec_complex == mec_complex && self.ccr.is_wildcard()
    }
}

impl<'a> Rule<ComplexPair<'a>> for SccmecTypeRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, pair: &ComplexPair<'a>) -> bool {
        self.mec_complex == pair.mec_complex && self.ccr.is_satisfied_by(pair.ccr_types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genes(symbols: &[&str]) -> GeneSet {
        symbols.iter().map(|s| (*s).to_string()).collect()
    }

    fn mec(name: &str, required: &[&str], any_of: &[&str]) -> MecComplexRule {
        MecComplexRule {
            name: name.to_string(),
            required: required.iter().map(|s| (*s).to_string()).collect(),
            any_of: any_of.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[test]
    fn test_mec_rule_required_and_any_of() {
        let rule = mec("Class A", &["mecR1", "mecI"], &["mecA", "mecC"]);

        assert!(rule.matches(&genes(&["mecC", "mecR1", "mecI"])));
        assert!(!rule.matches(&genes(&["mecR1", "mecI"])));
        assert!(!rule.matches(&genes(&["mecA", "mecR1"])));
    }

    #[test]
    fn test_mec_rule_without_any_of() {
        let rule = mec("IS only", &["IS1272"], &[]);
        assert!(rule.matches(&genes(&["IS1272"])));
    }

    #[test]
    fn test_first_match_respects_declaration_order() {
        let rules = vec![
            mec("First", &["mecA"], &[]),
            mec("Second", &["mecA", "mecR1"], &[]),
        ];
        let found = first_match(&rules, &genes(&["mecA", "mecR1"])).unwrap();
        assert_eq!(found.name, "First");

        let reversed: Vec<_> = rules.into_iter().rev().collect();
        let found = first_match(&reversed, &genes(&["mecA", "mecR1"])).unwrap();
        assert_eq!(found.name, "Second");
    }

    #[test]
    fn test_first_match_none() {
        let rules = vec![mec("Class A", &["mecR1"], &["mecA"])];
        assert!(first_match(&rules, &genes(&["ccrA1"])).is_none());
    }

    #[test]
    fn test_ccr_rule_substring() {
        let rule = CcrComplexRule {
            name: "Type 2".to_string(),
            pattern: "2".to_string(),
        };
        assert!(rule.matches("ccrA2"));
        assert!(rule.matches("ccrC2"));
        assert!(!rule.matches("ccrA1"));
    }

    #[test]
    fn test_all_matches_collects_every_rule() {
        let rules = vec![
            CcrComplexRule {
                name: "Type 1".to_string(),
                pattern: "1".to_string(),
            },
            CcrComplexRule {
                name: "Type 2".to_string(),
                pattern: "2".to_string(),
            },
        ];
        let names: Vec<&str> = all_matches(&rules, "ccrA12")
            .map(|rule| rule.name.as_str())
            .collect();
        assert_eq!(names, vec!["Type 1", "Type 2"]);
    }

    #[test]
    fn test_ccr_requirement_serde() {
        let any: CcrRequirement = serde_json::from_str("\"ANY\"").unwrap();
        assert_eq!(any, CcrRequirement::Any);

        let typed: CcrRequirement = serde_json::from_str("\"Type 2\"").unwrap();
        assert_eq!(typed, CcrRequirement::Type("Type 2".to_string()));

        assert_eq!(serde_json::to_string(&CcrRequirement::Any).unwrap(), "\"ANY\"");
    }

    #[test]
    fn test_sccmec_rule_matches() {
        let ccr: BTreeSet<String> = genes(&["Type 2", "Type 5"]);
        let rule = SccmecTypeRule {
            name: "Type II".to_string(),
            mec_complex: "Class A".to_string(),
            ccr: CcrRequirement::Type("Type 2".to_string()),
        };

        assert!(rule.matches(&ComplexPair {
            mec_complex: "Class A",
            ccr_types: &ccr,
        }));
        assert!(!rule.matches(&ComplexPair {
            mec_complex: "Class B",
            ccr_types: &ccr,
        }));
    }

    #[test]
    fn test_wildcard_accepts_missing_ccr() {
        let rule = SccmecTypeRule {
            name: "Wild".to_string(),
            mec_complex: "Class C".to_string(),
            ccr: CcrRequirement::Any,
        };
        let empty = BTreeSet::new();

        assert!(rule.accepts_missing_ccr("Class C"));
        assert!(!rule.accepts_missing_ccr("Class A"));
        assert!(rule.matches(&ComplexPair {
            mec_complex: "Class C",
            ccr_types: &empty,
        }));
    }
}
