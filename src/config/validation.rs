use crate::config::types::{Config, FetcherConfig, ServerConfig, SummaryConfig, UserAgentConfig};
use crate::{ConfigError, ConfigResult};
use std::net::SocketAddr;
use url::Url;

/// Upper bound on configurable summary length
const MAX_SUMMARY_SENTENCES: usize = 50;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_server_config(&config.server)?;
    validate_fetcher_config(&config.fetcher)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_summary_config(&config.summary)?;
    Ok(())
}

/// Validates server configuration
fn validate_server_config(config: &ServerConfig) -> ConfigResult<()> {
    config.bind_address.parse::<SocketAddr>().map_err(|e| {
        ConfigError::Validation(format!(
            "bind_address must be a socket address like '0.0.0.0:5000', got '{}': {}",
            config.bind_address, e
        ))
    })?;

    if config.max_request_bytes < 1 {
        return Err(ConfigError::Validation(
            "max_request_bytes must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> ConfigResult<()> {
    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 || config.connect_timeout_secs > config.timeout_secs {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_secs must be between 1 and timeout_secs ({}), got {}",
            config.timeout_secs, config.connect_timeout_secs
        )));
    }

    if config.max_body_bytes < 1 {
        return Err(ConfigError::Validation(
            "max_body_bytes must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> ConfigResult<()> {
    // Agent name: non-empty, alphanumeric + hyphens only
    if config.agent_name.is_empty() {
        return Err(ConfigError::Validation(
            "agent_name cannot be empty".to_string(),
        ));
    }

    if !config
        .agent_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "agent_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.agent_name
        )));
    }

    if config.agent_version.trim().is_empty() {
        return Err(ConfigError::Validation(
            "agent_version cannot be empty".to_string(),
        ));
    }

    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;

    Ok(())
}

/// Validates summary configuration
fn validate_summary_config(config: &SummaryConfig) -> ConfigResult<()> {
    if config.sentence_count < 1 || config.sentence_count > MAX_SUMMARY_SENTENCES {
        return Err(ConfigError::Validation(format!(
            "sentence_count must be between 1 and {}, got {}",
            MAX_SUMMARY_SENTENCES, config.sentence_count
        )));
    }

    Ok(())
}
