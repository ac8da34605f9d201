//! Claim, range and verdict types shared by every pipeline stage.

pub mod claim;
pub mod enums;
pub mod interval;
pub mod range;
pub mod verdict;

pub use claim::{ClaimValue, FrequencyClaim};
pub use enums::{FrequencyUnit, InvalidEnum, VerdictStatus};
pub use interval::{format_hz, HzInterval};
pub use range::{RangeEntry, RedFlagRange, Reference, VerifiedRange};
pub use verdict::Verdict;
