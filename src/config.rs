use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application-level constants
pub const APP_NAME: &str = "Freqlens";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable naming a registry JSON file.
pub const REGISTRY_ENV_VAR: &str = "FREQLENS_REGISTRY";

/// File name looked up under the application data directory.
pub const REGISTRY_FILE_NAME: &str = "frequency_registry.json";

/// Characters of surrounding text kept on each side of a claim.
pub const DEFAULT_CONTEXT_WINDOW_CHARS: usize = 120;

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "freqlens=debug"
    } else {
        "freqlens=warn"
    }
}

/// Get the application data directory
/// ~/.freqlens/ on all platforms. None when no home directory is known.
pub fn app_data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".freqlens"))
}

/// Registry file to load, in priority order: explicit path, `FREQLENS_REGISTRY`,
/// `~/.freqlens/frequency_registry.json` if present. None means the embedded table.
pub fn resolve_registry_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let from_env = std::env::var_os(REGISTRY_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    resolve_from(from_env, app_data_dir())
}

fn resolve_from(from_env: Option<PathBuf>, data_dir: Option<PathBuf>) -> Option<PathBuf> {
    from_env.or_else(|| {
        data_dir
            .map(|dir| dir.join(REGISTRY_FILE_NAME))
            .filter(|p| p.is_file())
    })
}

// ---------------------------------------------------------------------------
// Scan configuration
// ---------------------------------------------------------------------------

/// Per-scan tuning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub context_window_chars: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            context_window_chars: DEFAULT_CONTEXT_WINDOW_CHARS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir().unwrap();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with(".freqlens"));
    }

    #[test]
    fn app_name_is_freqlens() {
        assert_eq!(APP_NAME, "Freqlens");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn explicit_path_wins() {
        let p = Path::new("/tmp/custom.json");
        assert_eq!(resolve_registry_path(Some(p)), Some(p.to_path_buf()));
    }

    #[test]
    fn env_path_beats_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(REGISTRY_FILE_NAME), "{}").unwrap();
        let env = PathBuf::from("/etc/freqlens.json");
        assert_eq!(
            resolve_from(Some(env.clone()), Some(dir.path().to_path_buf())),
            Some(env)
        );
    }

    #[test]
    fn data_dir_file_used_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(REGISTRY_FILE_NAME);
        assert_eq!(resolve_from(None, Some(dir.path().to_path_buf())), None);
        std::fs::write(&file, "{}").unwrap();
        assert_eq!(resolve_from(None, Some(dir.path().to_path_buf())), Some(file));
    }

    #[test]
    fn scan_config_defaults_when_fields_missing() {
        let config: ScanConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ScanConfig::default());
        assert_eq!(config.context_window_chars, DEFAULT_CONTEXT_WINDOW_CHARS);
    }

    #[test]
    fn log_filter_targets_crate() {
        assert!(default_log_filter().starts_with("freqlens="));
    }
}
