use serde::{Deserialize, Serialize};

/// How the alignment evidence was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMode {
    /// Marker genes (query) aligned onto an assembly (target)
    #[default]
    Assembly,
    /// Reads (query) aligned onto marker genes (target)
    Reads,
}

impl std::fmt::Display for DetectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assembly => write!(f, "assembly"),
            Self::Reads => write!(f, "reads"),
        }
    }
}

/// Relative strand of an alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Strand {
    #[serde(rename = "+")]
    Forward,
    #[serde(rename = "-")]
    Reverse,
    /// Aggregated evidence has no single orientation
    #[default]
    #[serde(rename = "N/A")]
    Unknown,
}

impl Strand {
    pub fn parse(s: &str) -> Self {
        match s {
            "+" => Self::Forward,
            "-" => Self::Reverse,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "+"),
            Self::Reverse => write!(f, "-"),
            Self::Unknown => write!(f, "N/A"),
        }
    }
}

/// Overall outcome of a typing call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypingStatus {
    /// Neither a mec complex nor a ccr complex was found
    Negative,
    /// ccr genes without a mec complex
    #[serde(rename = "Partial (Orphan ccr)")]
    PartialOrphanCcr,
    /// A mec complex without ccr genes and no wildcard rule for it
    #[serde(rename = "Partial (Unclassifiable)")]
    PartialUnclassifiable,
    Positive,
    /// Classification could not run (e.g. the rule table failed to load)
    Error,
}

impl std::fmt::Display for TypingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negative => write!(f, "Negative"),
            Self::PartialOrphanCcr => write!(f, "Partial (Orphan ccr)"),
            Self::PartialUnclassifiable => write!(f, "Partial (Unclassifiable)"),
            Self::Positive => write!(f, "Positive"),
            Self::Error => write!(f, "Error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_to_display_form() {
        for status in [
            TypingStatus::Negative,
            TypingStatus::PartialOrphanCcr,
            TypingStatus::PartialUnclassifiable,
            TypingStatus::Positive,
            TypingStatus::Error,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
    }

    #[test]
    fn test_strand_parse() {
        assert_eq!(Strand::parse("+"), Strand::Forward);
        assert_eq!(Strand::parse("-"), Strand::Reverse);
        assert_eq!(Strand::parse("*"), Strand::Unknown);
        assert_eq!(Strand::Unknown.to_string(), "N/A");
    }
}
