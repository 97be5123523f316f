use serde::{Deserialize, Serialize};

/// One recognized lexical form of a monitored endpoint.
///
/// `literal` is the substring searched for in declaration lines;
/// `canonical` is the identity emitted in output records. Several literals
/// may map to the same canonical identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetPattern {
    pub literal: String,
    pub canonical: String,
}

/// Externally supplied description of the monitored targets of one report
/// family and the text markers that anchor their records.
///
/// `targets` is ordered from most to least specific: discovery-mode
/// classification takes the first entry whose literal appears in the
/// declaration line, so subpath/subdomain forms must precede any bare form
/// they contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetCatalog {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Marker announcing which target a following statistics block describes.
    pub declaration_marker: String,
    /// Marker of the line carrying the up/down percentage and duration data.
    pub statistics_marker: String,
    /// Substrings that disqualify a declaration line in single-target mode
    /// (subpath forms that embed another target as a prefix).
    #[serde(default)]
    pub conflict_markers: Vec<String>,
    /// Canonical identity whose records feed the primary corpus counters.
    pub primary: String,
    /// Canonical identity whose records feed the secondary corpus counters.
    pub secondary: String,
    pub targets: Vec<TargetPattern>,
}

impl TargetCatalog {
    /// Look up a target pattern by its canonical identity.
    pub fn target(&self, canonical: &str) -> Option<&TargetPattern> {
        self.targets.iter().find(|t| t.canonical == canonical)
    }

    pub fn primary_target(&self) -> Option<&TargetPattern> {
        self.target(&self.primary)
    }

    pub fn secondary_target(&self) -> Option<&TargetPattern> {
        self.target(&self.secondary)
    }
}
