use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::FrequencyClaim;

/// Why a matched span was dropped. Never fatal to the scan.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractionError {
    #[error("Malformed numeric literal '{literal}'")]
    MalformedNumber { literal: String },

    #[error("Value '{literal}' overflows when normalized to Hz")]
    OutOfRange { literal: String },

    #[error("Inverted range: lower bound {low_hz} Hz exceeds upper bound {high_hz} Hz")]
    InvertedRange { low_hz: f64, high_hz: f64 },
}

/// A dropped span, kept so the reviewer can see what was skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionWarning {
    pub span: String,
    pub offset: usize,
    pub char_offset: usize,
    pub error: ExtractionError,
}

/// Everything the extractor found in one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionOutput {
    /// Claims in document order.
    pub claims: Vec<FrequencyClaim>,
    pub warnings: Vec<ExtractionWarning>,
}

/// Extractor tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorOptions {
    /// Maximum characters captured on each side of a claim for its context.
    pub context_window_chars: usize,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            context_window_chars: crate::config::DEFAULT_CONTEXT_WINDOW_CHARS,
        }
    }
}
