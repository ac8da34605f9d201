//! Document scanner: Extractor → Classifier → Reporter for one document,
//! plus a parallel batch entry point.
//!
//! Registries are shared read-only behind an `Arc`; each scan owns its claims
//! and verdicts, so documents can be processed on any number of threads.

use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classifier::classify_all;
use crate::config::ScanConfig;
use crate::extraction::{extract_claims, ExtractionOutput, ExtractorOptions};
use crate::registry::Registries;
use crate::report::{build_report_with_warnings, VerdictReport};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Scan task for '{document}' failed: {reason}")]
    TaskFailed { document: String, reason: String },
}

// ---------------------------------------------------------------------------
// Input / output
// ---------------------------------------------------------------------------

/// A text document with a label used in logs and reports (file name, "stdin").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub label: String,
    pub text: String,
}

impl Document {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Envelope around a deterministic report. Only the envelope carries
/// per-run identity and timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOutcome {
    pub scan_id: Uuid,
    pub document: String,
    pub scanned_at: NaiveDateTime,
    pub processing_time_ms: u64,
    pub report: VerdictReport,
}

// ---------------------------------------------------------------------------
// Scanner
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Scanner {
    registries: Arc<Registries>,
    config: ScanConfig,
}

impl Scanner {
    pub fn new(registries: Arc<Registries>, config: ScanConfig) -> Self {
        Self { registries, config }
    }

    pub fn registries(&self) -> &Registries {
        &self.registries
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    fn extractor_options(&self) -> ExtractorOptions {
        ExtractorOptions {
            context_window_chars: self.config.context_window_chars,
        }
    }

    /// Claims only, without classification.
    pub fn extract(&self, document: &Document) -> ExtractionOutput {
        extract_claims(&document.text, &self.extractor_options())
    }

    /// The deterministic part of a scan.
    pub fn report(&self, document: &Document) -> VerdictReport {
        let extraction = self.extract(document);
        let verdicts = classify_all(&extraction.claims, &self.registries);
        build_report_with_warnings(&verdicts, extraction.warnings)
    }

    /// Run the full pipeline over one document.
    pub fn scan(&self, document: &Document) -> ScanOutcome {
        let start = Instant::now();
        let scanned_at = chrono::Local::now().naive_local();

        let report = self.report(document);
        let processing_time_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            document = %document.label,
            claims = report.counts.total(),
            pseudoscience = report.counts.pseudoscience,
            unverified = report.counts.unverified,
            ambiguous = report.counts.ambiguous,
            warnings = report.extraction_warnings.len(),
            processing_time_ms,
            "Document scanned"
        );

        ScanOutcome {
            scan_id: Uuid::new_v4(),
            document: document.label.clone(),
            scanned_at,
            processing_time_ms,
            report,
        }
    }

    /// Scan documents in parallel on the blocking pool. Results are in input
    /// order; a task that fails is reported in its slot and does not affect
    /// the others.
    pub async fn scan_batch(&self, documents: Vec<Document>) -> Vec<Result<ScanOutcome, ScanError>> {
        tracing::info!(documents = documents.len(), "Starting batch scan");

        let handles: Vec<_> = documents
            .into_iter()
            .map(|document| {
                let scanner = self.clone();
                let label = document.label.clone();
                let handle = tokio::task::spawn_blocking(move || scanner.scan(&document));
                (label, handle)
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for (label, handle) in handles {
            match handle.await {
                Ok(outcome) => results.push(Ok(outcome)),
                Err(e) => {
                    tracing::error!(document = %label, error = %e, "Scan task failed");
                    results.push(Err(ScanError::TaskFailed {
                        document: label,
                        reason: e.to_string(),
                    }));
                }
            }
        }

        results
    }
}
