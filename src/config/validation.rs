//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{AttendanceError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_logging_config(&settings.logging)?;
    validate_session_config(&settings.session)?;
    validate_dashboard_config(&settings.dashboard)?;

    Ok(())
}

/// Validate API client configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(AttendanceError::Config(
            "API base URL is required".to_string()
        ));
    }

    let url = url::Url::parse(&config.base_url)
        .map_err(|e| AttendanceError::Config(format!("Invalid API base URL {}: {}", config.base_url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(AttendanceError::Config(
            format!("API base URL must use http or https, got {}", url.scheme())
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(AttendanceError::Config(
            "API timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(AttendanceError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(AttendanceError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if matches!(config.file_path.as_deref(), Some("")) {
        return Err(AttendanceError::Config(
            "Log file path must not be empty when set".to_string()
        ));
    }

    Ok(())
}

fn validate_session_config(config: &super::SessionConfig) -> Result<()> {
    if matches!(config.persist_path.as_deref(), Some("")) {
        return Err(AttendanceError::Config(
            "Session persist path must not be empty when set".to_string()
        ));
    }

    Ok(())
}

fn validate_dashboard_config(config: &super::DashboardConfig) -> Result<()> {
    if config.upcoming_limit == 0 {
        return Err(AttendanceError::Config(
            "Upcoming lecture limit must be greater than 0".to_string()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_settings(&Settings::default()).is_ok());
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let mut settings = Settings::default();
        settings.api.base_url = "ftp://club.example.org".to_string();
        assert_matches!(validate_settings(&settings), Err(AttendanceError::Config(_)));

        settings.api.base_url = "not a url".to_string();
        assert_matches!(validate_settings(&settings), Err(AttendanceError::Config(_)));
    }

    #[test]
    fn test_rejects_zero_timeout_and_limit() {
        let mut settings = Settings::default();
        settings.api.timeout_seconds = 0;
        assert!(validate_settings(&settings).is_err());

        let mut settings = Settings::default();
        settings.dashboard.upcoming_limit = 0;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        assert_matches!(validate_settings(&settings), Err(AttendanceError::Config(msg)) if msg.contains("verbose"));
    }
}
