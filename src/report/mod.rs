//! Verdict Reporter: per-document aggregation of verdicts.

pub mod builder;
pub mod types;

pub use builder::{build_report, build_report_with_warnings, count_statuses, summary_line};
pub use types::{
    AmbiguousClaim, FlaggedClaim, ProvenanceEntry, ReviewItem, StatusCounts, VerdictReport,
};
