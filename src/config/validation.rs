use crate::config::types::{CompanyEntry, Config, CrawlerConfig, FrontierConfig, OutputConfig};
use crate::url::parse_http_url;
use crate::ConfigError;
use std::collections::HashSet;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_frontier_config(&config.frontier)?;
    validate_output_config(&config.output)?;
    validate_companies(&config.companies)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.seed_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "seed_timeout_secs must be >= 1".to_string(),
        ));
    }

    if config.probe_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "probe_timeout_secs must be >= 1".to_string(),
        ));
    }

    if config.probe_timeout_secs >= config.seed_timeout_secs {
        return Err(ConfigError::Validation(format!(
            "probe_timeout_secs ({}) must be shorter than seed_timeout_secs ({})",
            config.probe_timeout_secs, config.seed_timeout_secs
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the guessed event-page paths
fn validate_frontier_config(config: &FrontierConfig) -> Result<(), ConfigError> {
    for path in &config.paths {
        if !path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "Frontier path '{}' must start with '/'",
                path
            )));
        }
    }
    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.database_path.is_empty() {
        return Err(ConfigError::Validation(
            "database_path cannot be empty".to_string(),
        ));
    }

    if config.export_path.is_empty() {
        return Err(ConfigError::Validation(
            "export_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the company list
fn validate_companies(companies: &[CompanyEntry]) -> Result<(), ConfigError> {
    if companies.is_empty() {
        return Err(ConfigError::Validation(
            "At least one [[company]] entry is required".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for company in companies {
        validate_ticker(&company.ticker)?;

        if !seen.insert(company.ticker.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Duplicate ticker '{}'",
                company.ticker
            )));
        }

        if company.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "Company '{}' must have a name",
                company.ticker
            )));
        }

        if company.seeds.is_empty() {
            return Err(ConfigError::Validation(format!(
                "Company '{}' must have at least one seed URL",
                company.ticker
            )));
        }

        for seed in &company.seeds {
            parse_http_url(seed).map_err(|e| {
                ConfigError::InvalidUrl(format!("Invalid seed URL '{}': {}", seed, e))
            })?;
        }
    }

    Ok(())
}

/// Validates a ticker: uppercase letters and digits, plus '.' and '-' for
/// share classes (e.g. "BRK.B")
fn validate_ticker(ticker: &str) -> Result<(), ConfigError> {
    if ticker.is_empty() {
        return Err(ConfigError::Validation("ticker cannot be empty".to_string()));
    }

    if !ticker
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '.' || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "ticker must be uppercase alphanumeric, got '{}'",
            ticker
        )));
    }

    Ok(())
}
