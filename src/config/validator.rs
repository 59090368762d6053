use crate::config::{Config, SCHEMA_VERSION};
use crate::error::{LogsiftError, Result, ValidationError};
use crate::filtering::PROFILE_NAMES;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration, collecting every problem
    pub fn validate(config: &Config) -> Result<()> {
        let mut errors = Vec::new();

        Self::validate_schema_version(config, &mut errors);
        Self::validate_reduction(config, &mut errors);
        Self::validate_summary(config, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(LogsiftError::ConfigValidation { errors })
        }
    }

    fn validate_schema_version(config: &Config, errors: &mut Vec<ValidationError>) {
        let version = &config.meta.schema_version;
        if version != SCHEMA_VERSION {
            errors.push(ValidationError::new(
                "_meta.schema_version",
                format!("Unsupported schema version: {}", version),
            ));
        }
    }

    fn validate_reduction(config: &Config, errors: &mut Vec<ValidationError>) {
        let profile = &config.reduction.profile;
        if !PROFILE_NAMES.contains(&profile.as_str()) {
            errors.push(ValidationError::new(
                "reduction.profile",
                format!(
                    "Profile must be one of {:?}, got '{}'",
                    PROFILE_NAMES, profile
                ),
            ));
        }

        if config.reduction.max_line_length == Some(0) {
            errors.push(ValidationError::new(
                "reduction.max_line_length",
                "Max line length must be greater than 0",
            ));
        }

        if let Some(marker) = &config.reduction.app_marker {
            if marker.trim().is_empty() {
                errors.push(ValidationError::new(
                    "reduction.app_marker",
                    "App marker cannot be empty",
                ));
            }
        }
    }

    fn validate_summary(config: &Config, errors: &mut Vec<ValidationError>) {
        if config.summary.max_listed_errors == 0 {
            errors.push(ValidationError::new(
                "summary.max_listed_errors",
                "Max listed errors must be greater than 0",
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = Config::default();
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = Config::default();
        config.meta.schema_version = "0.9.0".to_string();
        config.reduction.max_line_length = Some(0);
        config.reduction.app_marker = Some("  ".to_string());
        config.summary.max_listed_errors = 0;

        match ConfigValidator::validate(&config) {
            Err(LogsiftError::ConfigValidation { errors }) => assert_eq!(errors.len(), 4),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_profile() {
        let mut config = Config::default();
        config.reduction.profile = "invalid".to_string();
        assert!(ConfigValidator::validate(&config).is_err());
    }
}
