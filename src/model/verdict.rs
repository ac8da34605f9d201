use serde::{Deserialize, Serialize};

use super::claim::FrequencyClaim;
use super::enums::VerdictStatus;
use super::range::{RedFlagRange, Reference, VerifiedRange};

/// The classification outcome for one claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub claim: FrequencyClaim,
    pub status: VerdictStatus,
    /// One name for VERIFIED/PSEUDOSCIENCE, every tied candidate for AMBIGUOUS.
    pub matched_ranges: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub citations: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

impl Verdict {
    pub fn verified(claim: FrequencyClaim, range: &VerifiedRange) -> Self {
        Self {
            claim,
            status: VerdictStatus::Verified,
            matched_ranges: vec![range.name.clone()],
            citations: range.citations.clone(),
            rationale: None,
            annotation: range.annotation.clone(),
        }
    }

    pub fn pseudoscience(claim: FrequencyClaim, flag: &RedFlagRange) -> Self {
        Self {
            claim,
            status: VerdictStatus::Pseudoscience,
            matched_ranges: vec![flag.name.clone()],
            citations: Vec::new(),
            rationale: Some(flag.rationale.clone()),
            annotation: None,
        }
    }

    /// Candidate citations are merged in candidate order, without repeats.
    pub fn ambiguous(claim: FrequencyClaim, candidates: &[&VerifiedRange]) -> Self {
        let mut citations: Vec<Reference> = Vec::new();
        for range in candidates {
            for c in &range.citations {
                if !citations.contains(c) {
                    citations.push(c.clone());
                }
            }
        }
        Self {
            claim,
            status: VerdictStatus::Ambiguous,
            matched_ranges: candidates.iter().map(|r| r.name.clone()).collect(),
            citations,
            rationale: None,
            annotation: None,
        }
    }

    pub fn unverified(claim: FrequencyClaim) -> Self {
        Self {
            claim,
            status: VerdictStatus::Unverified,
            matched_ranges: Vec::new(),
            citations: Vec::new(),
            rationale: None,
            annotation: None,
        }
    }

    /// The single matched range, if the verdict has exactly one.
    pub fn matched_range(&self) -> Option<&str> {
        match self.matched_ranges.as_slice() {
            [only] => Some(only.as_str()),
            _ => None,
        }
    }
}
