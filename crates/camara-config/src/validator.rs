//! Configuration validation

use crate::Config;
use camara_core::{Error, Result};
use url::Url;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_server(config)?;
    validate_upstream(config)?;
    validate_logging(config)?;

    Ok(())
}

fn validate_server(config: &Config) -> Result<()> {
    // Port 0 stays legal so tests can bind an ephemeral port
    if config.server.shutdown_timeout.as_secs() == 0 {
        return Err(Error::Config("shutdown_timeout must be > 0".to_string()));
    }

    if config.server.shutdown_timeout.as_secs() > 300 {
        tracing::warn!("shutdown_timeout is very high (>5 minutes)");
    }

    Ok(())
}

fn validate_upstream(config: &Config) -> Result<()> {
    if config.upstream.base_url.is_empty() {
        return Err(Error::Config("upstream base_url cannot be empty".to_string()));
    }

    let url = Url::parse(&config.upstream.base_url)
        .map_err(|e| Error::Config(format!("Invalid upstream base_url: {e}")))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(Error::Config(format!(
                "Unsupported upstream scheme: {other} (must be http or https)"
            )));
        }
    }

    if let Some(timeout) = config.upstream.request_timeout {
        if timeout.is_zero() {
            return Err(Error::Config("request_timeout must be > 0".to_string()));
        }
    }

    Ok(())
}

fn validate_logging(config: &Config) -> Result<()> {
    match config.logging.level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        other => {
            return Err(Error::Config(format!(
                "Invalid log level: {other} (must be trace, debug, info, warn or error)"
            )));
        }
    }

    match config.logging.format.as_str() {
        "text" | "json" => {}
        other => {
            return Err(Error::Config(format!(
                "Invalid log format: {other} (must be text or json)"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_zero_shutdown_timeout_rejected() {
        let mut config = Config::default();
        config.server.shutdown_timeout = Duration::from_secs(0);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let mut config = Config::default();
        config.upstream.base_url = "not a url".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let mut config = Config::default();
        config.upstream.base_url = "ftp://example.org/api".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_request_timeout_rejected() {
        let mut config = Config::default();
        config.upstream.request_timeout = Some(Duration::from_secs(0));
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_json_log_format_accepted() {
        let mut config = Config::default();
        config.logging.format = "json".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_invalid_log_format_rejected() {
        let mut config = Config::default();
        config.logging.format = "logfmt".to_string();
        assert!(validate_config(&config).is_err());
    }
}
