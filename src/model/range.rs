use serde::{Deserialize, Serialize};

use super::interval::HzInterval;

// ---------------------------------------------------------------------------
// Reference
// ---------------------------------------------------------------------------

/// A literature citation backing a verified range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub authors: String,
    pub year: u16,
    pub title: String,
    pub venue: String,
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}). {}. {}",
            self.authors, self.year, self.title, self.venue
        )
    }
}

// ---------------------------------------------------------------------------
// Registry entries
// ---------------------------------------------------------------------------

/// Common view over both kinds of registry entry.
pub trait RangeEntry {
    fn name(&self) -> &str;
    fn interval(&self) -> HzInterval;
}

/// A frequency interval with peer-reviewed support.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiedRange {
    pub name: String,
    pub low_hz: f64,
    pub high_hz: f64,
    pub citations: Vec<Reference>,
    /// Domain labels used to disambiguate equally narrow matches.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    /// Copied onto VERIFIED verdicts, e.g. to mark carrier-only context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

impl VerifiedRange {
    /// Explicit labels plus the tokens of the entry name (`tens_therapy`
    /// contributes `tens` and `therapy`), lowercased and deduplicated.
    pub fn effective_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .labels
            .iter()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();
        for token in self.name.split(|c: char| !c.is_alphanumeric()) {
            if token.len() >= 3 {
                labels.push(token.to_lowercase());
            }
        }
        labels.sort();
        labels.dedup();
        labels
    }
}

impl RangeEntry for VerifiedRange {
    fn name(&self) -> &str {
        &self.name
    }

    fn interval(&self) -> HzInterval {
        HzInterval {
            low: self.low_hz,
            high: self.high_hz,
        }
    }
}

/// A frequency interval associated with a debunked claim pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedFlagRange {
    pub name: String,
    pub low_hz: f64,
    pub high_hz: f64,
    pub rationale: String,
    /// Keyword groups that must all be present (one keyword per group) in
    /// the claim's context for this entry to apply. Empty means always.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires_context: Vec<Vec<String>>,
}

impl RedFlagRange {
    pub fn is_context_qualified(&self) -> bool {
        !self.requires_context.is_empty()
    }

    /// Context groups lowercased, each group sorted, for comparison.
    pub fn normalized_context(&self) -> Vec<Vec<String>> {
        let mut groups: Vec<Vec<String>> = self
            .requires_context
            .iter()
            .map(|group| {
                let mut g: Vec<String> =
                    group.iter().map(|k| k.trim().to_lowercase()).collect();
                g.sort();
                g.dedup();
                g
            })
            .collect();
        groups.sort();
        groups
    }
}

impl RangeEntry for RedFlagRange {
    fn name(&self) -> &str {
        &self.name
    }

    fn interval(&self) -> HzInterval {
        HzInterval {
            low: self.low_hz,
            high: self.high_hz,
        }
    }
}
