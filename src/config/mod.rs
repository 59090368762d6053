//! Configuration management for logsift
//!
//! An optional TOML file selects the reduction profile and summary settings.
//! Pattern tables are not configurable; they are compiled into the binary.

use crate::error::{LogsiftError, Result};
use crate::filtering::ReductionProfile;
use crate::summary::DEFAULT_MAX_LISTED_ERRORS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod validator;

pub use validator::ConfigValidator;

pub const SCHEMA_VERSION: &str = "1.0.0";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "_meta", default)]
    pub meta: MetaConfig,
    #[serde(default)]
    pub reduction: ReductionConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
}

/// Metadata about the configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaConfig {
    pub schema_version: String,
}

impl Default for MetaConfig {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
        }
    }
}

/// Reduction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReductionConfig {
    /// Built-in profile name ("standard" or "extended")
    pub profile: String,
    /// Overrides the profile's package marker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_marker: Option<String>,
    /// Overrides the profile's ordinary-line length bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_line_length: Option<usize>,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            profile: "standard".to_string(),
            app_marker: None,
            max_line_length: None,
        }
    }
}

/// Summary block settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_max_listed_errors")]
    pub max_listed_errors: usize,
}

fn default_max_listed_errors() -> usize {
    DEFAULT_MAX_LISTED_ERRORS
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_listed_errors: DEFAULT_MAX_LISTED_ERRORS,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LogsiftError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| LogsiftError::Io {
            source: e,
            context: format!("Failed to read config file: {:?}", path),
        })?;
        let mut config: Config = toml::from_str(&content)?;

        // Apply environment variable overrides
        config.apply_env_overrides();

        ConfigValidator::validate(&config)?;

        Ok(config)
    }

    /// Apply environment variable overrides
    /// Environment variables in format: LOGSIFT_SECTION__KEY=value
    pub fn apply_env_overrides(&mut self) {
        // Variables that are not valid UTF-8 cannot be ours; skip instead of panicking
        for (key, value) in std::env::vars_os() {
            let Some(key) = key.to_str() else {
                continue;
            };
            let Some(config_key) = key.strip_prefix("LOGSIFT_") else {
                continue;
            };
            let Some(value) = value.to_str() else {
                tracing::warn!("Ignoring env override {}: value is not valid UTF-8", key);
                continue;
            };
            if let Err(e) = self.set_value_from_env(config_key, value) {
                tracing::warn!("Failed to apply env override {}: {}", key, e);
            }
        }
    }

    fn set_value_from_env(&mut self, path: &str, value: &str) -> Result<()> {
        match path {
            "REDUCTION__PROFILE" => {
                self.reduction.profile = value.to_string();
            }
            "REDUCTION__APP_MARKER" => {
                self.reduction.app_marker = Some(value.to_string());
            }
            "REDUCTION__MAX_LINE_LENGTH" => {
                let parsed = value.parse().map_err(|_| LogsiftError::InvalidConfigValue {
                    path: path.to_string(),
                    message: format!("Cannot parse '{}' as a line length", value),
                })?;
                self.reduction.max_line_length = Some(parsed);
            }
            "SUMMARY__ENABLED" => {
                self.summary.enabled =
                    value.parse().map_err(|_| LogsiftError::InvalidConfigValue {
                        path: path.to_string(),
                        message: format!("Cannot parse '{}' as boolean", value),
                    })?;
            }
            "SUMMARY__MAX_LISTED_ERRORS" => {
                self.summary.max_listed_errors =
                    value.parse().map_err(|_| LogsiftError::InvalidConfigValue {
                        path: path.to_string(),
                        message: format!("Cannot parse '{}' as a count", value),
                    })?;
            }
            _ => {
                tracing::debug!("Unknown env config key: {}", path);
            }
        }
        Ok(())
    }

    /// Resolve the reduction profile with overrides applied
    pub fn reduction_profile(&self) -> Result<ReductionProfile> {
        let mut profile: ReductionProfile = self.reduction.profile.parse()?;
        if let Some(marker) = &self.reduction.app_marker {
            profile.app_marker = marker.clone();
        }
        if let Some(max_len) = self.reduction.max_line_length {
            profile.max_line_length = max_len;
        }
        Ok(profile)
    }

    /// Get the default configuration file path
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            LogsiftError::Config("Cannot determine config directory".to_string())
        })?;

        Ok(config_dir.join("logsift").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_profile_is_standard() {
        let profile = Config::default().reduction_profile().unwrap();
        assert_eq!(profile, ReductionProfile::standard());
    }

    #[test]
    fn test_overrides_apply_to_profile() {
        let mut config = Config::default();
        config.reduction.profile = "extended".to_string();
        config.reduction.app_marker = Some("com.example.tv".to_string());
        config.reduction.max_line_length = Some(1000);

        let profile = config.reduction_profile().unwrap();
        assert_eq!(profile.name, "extended");
        assert_eq!(profile.app_marker, "com.example.tv");
        assert_eq!(profile.max_line_length, 1000);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[reduction]\nprofile = \"extended\"\n\n[summary]\nenabled = true").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.meta.schema_version, SCHEMA_VERSION);
        assert_eq!(config.reduction.profile, "extended");
        assert!(config.summary.enabled);
        assert_eq!(config.summary.max_listed_errors, DEFAULT_MAX_LISTED_ERRORS);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, LogsiftError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_rejects_unknown_profile() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[reduction]\nprofile = \"aggressive\"").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, LogsiftError::ConfigValidation { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_env_overrides_skip_non_utf8_variables() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let bad = OsStr::from_bytes(&[0x66, 0xff]);
        std::env::set_var("LOGSIFT_TEST_NON_UTF8_VALUE", bad);
        std::env::set_var(OsStr::from_bytes(b"LOGSIFT_TEST_\xffKEY"), "x");

        let mut config = Config::default();
        config.apply_env_overrides();

        std::env::remove_var("LOGSIFT_TEST_NON_UTF8_VALUE");
        std::env::remove_var(OsStr::from_bytes(b"LOGSIFT_TEST_\xffKEY"));

        assert_eq!(config.reduction.profile, "standard");
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_env_value_parsing() {
        let mut config = Config::default();
        config
            .set_value_from_env("REDUCTION__MAX_LINE_LENGTH", "750")
            .unwrap();
        assert_eq!(config.reduction.max_line_length, Some(750));

        assert!(config
            .set_value_from_env("SUMMARY__ENABLED", "maybe")
            .is_err());
    }
}
