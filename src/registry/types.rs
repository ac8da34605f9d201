use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{RedFlagRange, VerifiedRange};

// ---------------------------------------------------------------------------
// RegistryConfig
// ---------------------------------------------------------------------------

/// Enumerable configuration both registries are built from.
/// Any serde format works; [`RegistryConfig::from_json_str`] covers JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub verified_ranges: Vec<VerifiedRange>,
    #[serde(default)]
    pub red_flag_ranges: Vec<RedFlagRange>,
}

/// Which of the two tables an entry belongs to (for error messages).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryKind {
    Verified,
    RedFlag,
}

impl RegistryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::RedFlag => "red_flag",
        }
    }
}

impl std::fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ConfigurationError
// ---------------------------------------------------------------------------

/// Registry load failures. All of them surface before any scan runs.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Registry file could not be read ({0}): {1}")]
    Load(String, String),

    #[error("Registry data could not be parsed ({0}): {1}")]
    Parse(String, String),

    #[error("{registry} entry #{index} has an empty name")]
    EmptyName { registry: RegistryKind, index: usize },

    #[error("Duplicate range name '{name}' in {registry} registry")]
    DuplicateName { registry: RegistryKind, name: String },

    #[error("{registry} entry '{name}' has a non-finite or negative bound ({low_hz}, {high_hz})")]
    InvalidBound {
        registry: RegistryKind,
        name: String,
        low_hz: f64,
        high_hz: f64,
    },

    #[error("{registry} entry '{name}' must satisfy low < high (got {low_hz} >= {high_hz})")]
    InvertedInterval {
        registry: RegistryKind,
        name: String,
        low_hz: f64,
        high_hz: f64,
    },

    #[error("{registry} entry '{name}' has an empty keyword or keyword group")]
    EmptyKeyword { registry: RegistryKind, name: String },

    #[error("{registry} entries '{first}' and '{second}' overlap with equal width and nothing to order them")]
    UndefinedPrecedence {
        registry: RegistryKind,
        first: String,
        second: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tables_default_empty() {
        let config: RegistryConfig = serde_json::from_str("{}").unwrap();
        assert!(config.verified_ranges.is_empty());
        assert!(config.red_flag_ranges.is_empty());
    }

    #[test]
    fn inverted_interval_message_names_entry() {
        let err = ConfigurationError::InvertedInterval {
            registry: RegistryKind::Verified,
            name: "tens_therapy".into(),
            low_hz: 200.0,
            high_hz: 1.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("verified"));
        assert!(msg.contains("tens_therapy"));
        assert!(msg.contains("200"));
    }
}
