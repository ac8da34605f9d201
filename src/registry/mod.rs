//! Range Registry and Red-Flag Registry.
//!
//! Both tables are built once from a [`RegistryConfig`], validated up front,
//! and never mutated afterward. [`Registries`] is `Send + Sync`; share it
//! behind an `Arc` across concurrent scans.

pub mod interval_registry;
pub mod types;
pub mod validation;

use std::path::Path;

pub use interval_registry::{IntervalRegistry, RangeRegistry, RedFlagRegistry};
pub use types::{ConfigurationError, RegistryConfig, RegistryKind};

/// Default table shipped with the crate.
const BUILTIN_REGISTRY_JSON: &str = include_str!("../../resources/frequency_registry.json");
const BUILTIN_REGISTRY_NAME: &str = "frequency_registry.json (builtin)";

impl RegistryConfig {
    /// Parse a JSON registry document.
    pub fn from_json_str(json: &str, source: &str) -> Result<Self, ConfigurationError> {
        serde_json::from_str(json)
            .map_err(|e| ConfigurationError::Parse(source.to_string(), e.to_string()))
    }

    /// Load a JSON registry file.
    pub fn load(path: &Path) -> Result<Self, ConfigurationError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            ConfigurationError::Load(path.display().to_string(), e.to_string())
        })?;
        Self::from_json_str(&json, &path.display().to_string())
    }

    /// The table embedded at compile time.
    pub fn builtin() -> Result<Self, ConfigurationError> {
        Self::from_json_str(BUILTIN_REGISTRY_JSON, BUILTIN_REGISTRY_NAME)
    }
}

// ---------------------------------------------------------------------------
// Registries
// ---------------------------------------------------------------------------

/// Both validated, read-only registries.
#[derive(Debug, Clone)]
pub struct Registries {
    pub verified: RangeRegistry,
    pub red_flags: RedFlagRegistry,
}

impl Registries {
    /// Validate and freeze a configuration. Fails fast on any bad entry.
    pub fn from_config(config: RegistryConfig) -> Result<Self, ConfigurationError> {
        validation::validate(&config.verified_ranges, &config.red_flag_ranges)?;

        let registries = Self {
            verified: IntervalRegistry::from_validated(config.verified_ranges),
            red_flags: IntervalRegistry::from_validated(config.red_flag_ranges),
        };

        tracing::info!(
            verified = registries.verified.len(),
            red_flags = registries.red_flags.len(),
            "Frequency registries loaded"
        );

        Ok(registries)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigurationError> {
        Self::from_config(RegistryConfig::load(path)?)
    }

    pub fn builtin() -> Result<Self, ConfigurationError> {
        Self::from_config(RegistryConfig::builtin()?)
    }
}
