use crate::config::types::{Config, CrawlerConfig, ExtractorConfig};
use crate::ConfigError;

/// Longest pause allowed between requests (milliseconds)
const MAX_DELAY_MS: u64 = 60_000;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_user_agent(&config.user_agent)?;
    validate_crawler_config(&config.crawler)?;
    validate_extractor_config(&config.extractor)?;
    Ok(())
}

/// Validates the User-Agent header value
fn validate_user_agent(user_agent: &str) -> Result<(), ConfigError> {
    if user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    // Must be usable as an HTTP header value
    if user_agent.chars().any(|c| c.is_control()) {
        return Err(ConfigError::Validation(
            "user-agent cannot contain control characters".to_string(),
        ));
    }

    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    validate_delay("crawler.delay-ms", config.delay_ms)?;
    validate_timeout("crawler.request-timeout-secs", config.request_timeout_secs)?;

    for entry in &config.exclude {
        if entry.trim().is_empty() {
            return Err(ConfigError::Validation(
                "crawler.exclude entries cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates extractor configuration
fn validate_extractor_config(config: &ExtractorConfig) -> Result<(), ConfigError> {
    validate_delay("extractor.delay-ms", config.delay_ms)?;
    validate_timeout(
        "extractor.request-timeout-secs",
        config.request_timeout_secs,
    )?;
    Ok(())
}

fn validate_delay(key: &str, delay_ms: u64) -> Result<(), ConfigError> {
    if delay_ms > MAX_DELAY_MS {
        return Err(ConfigError::Validation(format!(
            "{} must be <= {}ms, got {}ms",
            key, MAX_DELAY_MS, delay_ms
        )));
    }
    Ok(())
}

fn validate_timeout(key: &str, timeout_secs: u64) -> Result<(), ConfigError> {
    if timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "{} must be >= 1, got {}",
            key, timeout_secs
        )));
    }
    Ok(())
}
