use std::fmt::Write;

use crate::extraction::ExtractionOutput;
use crate::model::{RangeEntry, VerdictStatus};
use crate::registry::Registries;
use crate::report::summary_line;
use crate::scanner::ScanOutcome;

// `write!` into a String cannot fail; results are discarded with `let _`.

/// Human-readable scan summary.
pub fn scan_text(outcome: &ScanOutcome) -> String {
    let report = &outcome.report;
    let mut out = String::new();
    let _ = writeln!(out, "== {}: {}", outcome.document, summary_line(&report.counts));

    for verdict in &report.verdicts {
        let claim = &verdict.claim;
        let _ = write!(
            out,
            "  [{}] {} ({}) @{}",
            verdict.status, claim.span, claim.hz, claim.char_offset
        );
        match verdict.status {
            VerdictStatus::Verified => {
                let _ = write!(out, " -> {}", verdict.matched_ranges.join(", "));
                if let Some(annotation) = &verdict.annotation {
                    let _ = write!(out, " [{annotation}]");
                }
                for citation in &verdict.citations {
                    let _ = write!(out, "\n      cite: {citation}");
                }
            }
            VerdictStatus::Pseudoscience => {
                let _ = write!(
                    out,
                    " -> {}: {}",
                    verdict.matched_ranges.join(", "),
                    verdict.rationale.as_deref().unwrap_or_default()
                );
            }
            VerdictStatus::Ambiguous => {
                let _ = write!(out, " -> candidates: {}", verdict.matched_ranges.join(", "));
            }
            VerdictStatus::Unverified => {
                let _ = write!(out, " -> queued for peer review");
            }
        }
        out.push('\n');
    }

    for warning in &report.extraction_warnings {
        let _ = writeln!(
            out,
            "  [SKIPPED] {:?} @{}: {}",
            warning.span, warning.char_offset, warning.error
        );
    }
    out
}

/// Claims only, one per line.
pub fn extraction_text(label: &str, output: &ExtractionOutput) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {}: {} claim(s)", label, output.claims.len());
    for claim in &output.claims {
        let _ = writeln!(
            out,
            "  {} -> {} @{} | {}",
            claim.span, claim.hz, claim.char_offset, claim.context
        );
    }
    for warning in &output.warnings {
        let _ = writeln!(out, "  [SKIPPED] {:?}: {}", warning.span, warning.error);
    }
    out
}

/// Registry listing, narrowest entries first within each table.
pub fn registry_text(registries: &Registries) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Verified ranges ({}):", registries.verified.len());
    for entry in registries.verified.entries() {
        let _ = writeln!(
            out,
            "  {:<28} {:<24} {} citation(s)",
            entry.name(),
            entry.interval().to_string(),
            entry.citations.len()
        );
    }
    let _ = writeln!(out, "Red-flag ranges ({}):", registries.red_flags.len());
    for entry in registries.red_flags.entries() {
        let qualifier = if entry.is_context_qualified() {
            " (context-qualified)"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "  {:<28} {:<24}{}",
            entry.name(),
            entry.interval().to_string(),
            qualifier
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::ScanConfig;
    use crate::scanner::{Document, Scanner};

    fn scanner() -> Scanner {
        Scanner::new(Arc::new(Registries::builtin().unwrap()), ScanConfig::default())
    }

    #[test]
    fn scan_text_lists_each_verdict() {
        let outcome = scanner().scan(&Document::new(
            "doc.txt",
            "TENS therapy uses 1-200 Hz. Our pain treatment runs at 2.4 kHz.",
        ));
        let text = scan_text(&outcome);
        assert!(text.starts_with("== doc.txt: 2 claims"));
        assert!(text.contains("[VERIFIED] 1-200 Hz"));
        assert!(text.contains("tens_therapy"));
        assert!(text.contains("[PSEUDOSCIENCE] 2.4 kHz"));
        assert!(text.contains("high_freq_pain"));
        assert!(text.contains("cite: Melzack"));
    }

    #[test]
    fn scan_text_shows_skipped_spans() {
        let outcome = scanner().scan(&Document::new("bad", "runs at 1.2.3 Hz"));
        assert!(scan_text(&outcome).contains("[SKIPPED] \"1.2.3 Hz\""));
    }

    #[test]
    fn extraction_text_has_context() {
        let s = scanner();
        let doc = Document::new("e", "carrier at 40kHz");
        let text = extraction_text(&doc.label, &s.extract(&doc));
        assert!(text.contains("40kHz -> 40 kHz"));
        assert!(text.contains("| carrier at 40kHz"));
    }

    #[test]
    fn registry_text_lists_both_tables() {
        let text = registry_text(&Registries::builtin().unwrap());
        assert!(text.contains("Verified ranges"));
        assert!(text.contains("tens_therapy"));
        assert!(text.contains("high_freq_pain"));
        assert!(text.contains("(context-qualified)"));
    }
}
