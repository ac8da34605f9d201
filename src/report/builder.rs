use crate::extraction::ExtractionWarning;
use crate::model::{Verdict, VerdictStatus};

use super::types::{
    AmbiguousClaim, FlaggedClaim, ProvenanceEntry, ReviewItem, StatusCounts, VerdictReport,
};

/// Aggregate one document's verdicts. Deterministic for a given input order;
/// an empty slice gives a report with every count at zero.
pub fn build_report(verdicts: &[Verdict]) -> VerdictReport {
    let mut report = VerdictReport::default();

    for verdict in verdicts {
        report.counts.record(verdict.status);

        match verdict.status {
            VerdictStatus::Pseudoscience => report.flagged.push(FlaggedClaim {
                claim: verdict.claim.clone(),
                matched_range: verdict.matched_ranges.join(", "),
                rationale: verdict.rationale.clone().unwrap_or_default(),
            }),
            VerdictStatus::Unverified => report.review_queue.push(ReviewItem {
                claim: verdict.claim.clone(),
                reason: review_reason(verdict),
            }),
            VerdictStatus::Ambiguous => report.ambiguous.push(AmbiguousClaim {
                claim: verdict.claim.clone(),
                candidates: verdict.matched_ranges.clone(),
                citations: verdict.citations.clone(),
            }),
            VerdictStatus::Verified => report.verified.push(ProvenanceEntry {
                claim: verdict.claim.clone(),
                matched_range: verdict.matched_ranges.join(", "),
                citations: verdict.citations.clone(),
                annotation: verdict.annotation.clone(),
            }),
        }
    }

    report.verdicts = verdicts.to_vec();
    report
}

/// Same as [`build_report`], carrying the extractor's skipped spans along.
pub fn build_report_with_warnings(
    verdicts: &[Verdict],
    warnings: Vec<ExtractionWarning>,
) -> VerdictReport {
    VerdictReport {
        extraction_warnings: warnings,
        ..build_report(verdicts)
    }
}

fn review_reason(verdict: &Verdict) -> String {
    format!(
        "No verified or red-flag range covers {}; route to peer review",
        verdict.claim.hz
    )
}

/// Counts only; convenient when the verdict list itself is not needed.
pub fn count_statuses(verdicts: &[Verdict]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for v in verdicts {
        counts.record(v.status);
    }
    counts
}

/// One-line summary, e.g. `3 claims: 1 verified, 1 pseudoscience, 1 unverified, 0 ambiguous`.
pub fn summary_line(counts: &StatusCounts) -> String {
    format!(
        "{} claim{}: {} verified, {} pseudoscience, {} unverified, {} ambiguous",
        counts.total(),
        if counts.total() == 1 { "" } else { "s" },
        counts.verified,
        counts.pseudoscience,
        counts.unverified,
        counts.ambiguous
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify_all;
    use crate::extraction::{extract_claims, ExtractorOptions};
    use crate::registry::Registries;

    fn verdicts_for(text: &str) -> Vec<Verdict> {
        let registries = Registries::builtin().unwrap();
        let out = extract_claims(text, &ExtractorOptions::default());
        classify_all(&out.claims, &registries)
    }

    #[test]
    fn empty_input_all_zero() {
        let report = build_report(&[]);
        assert_eq!(report.counts, StatusCounts::default());
        assert_eq!(report.counts.total(), 0);
        assert!(report.flagged.is_empty());
        assert!(report.review_queue.is_empty());
        assert!(report.verified.is_empty());
        assert!(report.ambiguous.is_empty());
    }

    #[test]
    fn no_frequency_document_all_zero() {
        let report = build_report(&verdicts_for("Nothing oscillates in this design."));
        assert_eq!(report.counts.total(), 0);
    }

    #[test]
    fn sections_follow_status() {
        let text = "TENS therapy uses 1-200 Hz. \
                    Our pain treatment runs at 2.4 kHz. \
                    The resonator sits at 12 GHz.";
        let report = build_report(&verdicts_for(text));

        assert_eq!(report.counts.verified, 1);
        assert_eq!(report.counts.pseudoscience, 1);
        assert_eq!(report.counts.unverified, 1);
        assert_eq!(report.counts.ambiguous, 0);

        assert_eq!(report.verified[0].matched_range, "tens_therapy");
        assert!(!report.verified[0].citations.is_empty());

        assert_eq!(report.flagged[0].matched_range, "high_freq_pain");
        assert!(!report.flagged[0].rationale.is_empty());

        assert!(report.review_queue[0].reason.contains("12 GHz"));
        assert_eq!(report.verdicts.len(), 3);
    }

    #[test]
    fn deterministic_for_same_input() {
        let verdicts = verdicts_for("TENS therapy uses 1-200 Hz and 40 kHz ultrasonic carrier.");
        assert_eq!(build_report(&verdicts), build_report(&verdicts));
    }

    #[test]
    fn warnings_carried() {
        let out = extract_claims("bad 1.2.3 Hz", &ExtractorOptions::default());
        let report = build_report_with_warnings(&[], out.warnings);
        assert_eq!(report.extraction_warnings.len(), 1);
        assert!(report.needs_review());
    }

    #[test]
    fn summary_line_pluralizes() {
        let counts = StatusCounts {
            verified: 1,
            ..Default::default()
        };
        assert_eq!(
            summary_line(&counts),
            "1 claim: 1 verified, 0 pseudoscience, 0 unverified, 0 ambiguous"
        );
        assert!(summary_line(&StatusCounts::default()).starts_with("0 claims"));
    }

    #[test]
    fn count_statuses_matches_report() {
        let verdicts = verdicts_for("pain frequencies in 900-3000 Hz range");
        assert_eq!(count_statuses(&verdicts), build_report(&verdicts).counts);
    }
}
