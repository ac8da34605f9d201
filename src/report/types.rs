use serde::{Deserialize, Serialize};

use crate::extraction::ExtractionWarning;
use crate::model::{FrequencyClaim, Reference, Verdict, VerdictStatus};

// ---------------------------------------------------------------------------
// StatusCounts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub verified: usize,
    pub pseudoscience: usize,
    pub unverified: usize,
    pub ambiguous: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.verified + self.pseudoscience + self.unverified + self.ambiguous
    }

    pub fn get(&self, status: VerdictStatus) -> usize {
        match status {
            VerdictStatus::Verified => self.verified,
            VerdictStatus::Pseudoscience => self.pseudoscience,
            VerdictStatus::Unverified => self.unverified,
            VerdictStatus::Ambiguous => self.ambiguous,
        }
    }

    pub(crate) fn record(&mut self, status: VerdictStatus) {
        match status {
            VerdictStatus::Verified => self.verified += 1,
            VerdictStatus::Pseudoscience => self.pseudoscience += 1,
            VerdictStatus::Unverified => self.unverified += 1,
            VerdictStatus::Ambiguous => self.ambiguous += 1,
        }
    }
}

// ---------------------------------------------------------------------------
// Report sections
// ---------------------------------------------------------------------------

/// A PSEUDOSCIENCE claim with the reason it was flagged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlaggedClaim {
    pub claim: FrequencyClaim,
    pub matched_range: String,
    pub rationale: String,
}

/// An UNVERIFIED claim queued for manual peer review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewItem {
    pub claim: FrequencyClaim,
    pub reason: String,
}

/// An AMBIGUOUS claim with every tied candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbiguousClaim {
    pub claim: FrequencyClaim,
    pub candidates: Vec<String>,
    pub citations: Vec<Reference>,
}

/// A VERIFIED claim with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceEntry {
    pub claim: FrequencyClaim,
    pub matched_range: String,
    pub citations: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

// ---------------------------------------------------------------------------
// VerdictReport
// ---------------------------------------------------------------------------

/// Aggregate result for one document. Every list is in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerdictReport {
    pub counts: StatusCounts,
    pub flagged: Vec<FlaggedClaim>,
    pub review_queue: Vec<ReviewItem>,
    pub ambiguous: Vec<AmbiguousClaim>,
    pub verified: Vec<ProvenanceEntry>,
    pub verdicts: Vec<Verdict>,
    /// Spans the extractor skipped, so partial failures stay visible.
    #[serde(default)]
    pub extraction_warnings: Vec<ExtractionWarning>,
}

impl VerdictReport {
    pub fn has_pseudoscience(&self) -> bool {
        self.counts.pseudoscience > 0
    }

    /// True when a human needs to look at something (flags, unknowns, ties
    /// or skipped spans).
    pub fn needs_review(&self) -> bool {
        self.counts.pseudoscience + self.counts.unverified + self.counts.ambiguous > 0
            || !self.extraction_warnings.is_empty()
    }
}
