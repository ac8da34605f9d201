//! Classifier: one claim plus both registries in, one verdict out.

pub mod engine;
pub mod lexical;

pub use engine::{classify, classify_all, red_flag_applies};
pub use lexical::ContextTokens;
