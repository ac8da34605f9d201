use serde::{Deserialize, Serialize};

use super::enums::FrequencyUnit;
use super::interval::HzInterval;

/// The numbers as written, before unit normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClaimValue {
    Single {
        value: f64,
    },
    Range {
        low: f64,
        high: f64,
        /// Set only when the lower bound carried its own unit (`1 kHz - 2 MHz`).
        low_unit: Option<FrequencyUnit>,
    },
}

/// A single frequency assertion extracted from a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyClaim {
    /// The matched text span, e.g. `"1-200 Hz"`.
    pub span: String,
    /// Byte offset of the span in the source document.
    pub offset: usize,
    /// Character (Unicode scalar) offset of the span.
    pub char_offset: usize,
    pub value: ClaimValue,
    /// Unit written after the value (or after the upper bound of a range).
    pub unit: FrequencyUnit,
    /// Normalized interval in Hz.
    pub hz: HzInterval,
    /// Sentence-bounded text surrounding the claim.
    pub context: String,
}

impl FrequencyClaim {
    pub fn is_range(&self) -> bool {
        matches!(self.value, ClaimValue::Range { .. })
    }
}
