//! Configuration validation

use regex::Regex;
use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_changelist(config)?;
    validate_git(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_changelist(config: &Config) -> Result<()> {
    if config.changelist.file.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelist.file".to_string(),
            message: "file cannot be empty".to_string(),
        }
        .into());
    }

    if config.changelist.unreleased_label.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelist.unreleased_label".to_string(),
            message: "label cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_git(config: &Config) -> Result<()> {
    if let Some(pattern) = &config.git.tag_pattern {
        if let Err(e) = Regex::new(pattern) {
            return Err(ConfigError::InvalidValue {
                field: "git.tag_pattern".to_string(),
                message: e.to_string(),
            }
            .into());
        }
    }

    Ok(())
}
