// SPDX-FileCopyrightText: 2026 Valocoach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as page-size bounds and non-empty paths.

use crate::diagnostic::ConfigError;
use crate::model::ValocoachConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &ValocoachConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if config.knowledge.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "knowledge.database_path must not be empty".to_string(),
        });
    }

    if config.knowledge.index.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "knowledge.index must not be empty".to_string(),
        });
    }

    if config.knowledge.dimension == 0 {
        errors.push(ConfigError::Validation {
            message: "knowledge.dimension must be greater than zero".to_string(),
        });
    }

    // The upstream match endpoint rejects sizes outside 1..=10.
    if config.ingest.page_size == 0 || config.ingest.page_size > 10 {
        errors.push(ConfigError::Validation {
            message: format!(
                "ingest.page_size must be between 1 and 10, got {}",
                config.ingest.page_size
            ),
        });
    }

    if config.ingest.chunk_max_chars == 0 {
        errors.push(ConfigError::Validation {
            message: "ingest.chunk_max_chars must be greater than zero".to_string(),
        });
    }

    if config.ingest.embed_batch_size == 0 {
        errors.push(ConfigError::Validation {
            message: "ingest.embed_batch_size must be greater than zero".to_string(),
        });
    }

    if config.agent.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "agent.name must not be empty".to_string(),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = ValocoachConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn empty_database_path_fails_validation() {
        let mut config = ValocoachConfig::default();
        config.storage.database_path = "".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("database_path"))
        ));
    }

    #[test]
    fn oversized_page_size_fails_validation() {
        let mut config = ValocoachConfig::default();
        config.ingest.page_size = 25;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("page_size"))
        ));
    }

    #[test]
    fn zero_page_size_fails_validation() {
        let mut config = ValocoachConfig::default();
        config.ingest.page_size = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn zero_dimension_fails_validation() {
        let mut config = ValocoachConfig::default();
        config.knowledge.dimension = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("dimension"))
        ));
    }

    #[test]
    fn valid_custom_config_passes() {
        let mut config = ValocoachConfig::default();
        config.storage.database_path = "/tmp/matches.db".to_string();
        config.ingest.page_size = 10;
        config.ingest.page_delay_ms = 2000;
        assert!(validate_config(&config).is_ok());
    }
}
