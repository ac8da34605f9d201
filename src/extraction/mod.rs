//! Frequency Extractor: text in, ordered claims out.
//!
//! Recognizes a small finite grammar of literal frequencies (see
//! [`extractor::extract_claims`]), normalizes every value to Hz and attaches a
//! sentence-bounded context window for downstream disambiguation.

pub mod context;
pub mod extractor;
pub mod number;
pub mod types;

pub use extractor::extract_claims;
pub use types::{ExtractionError, ExtractionOutput, ExtractionWarning, ExtractorOptions};
