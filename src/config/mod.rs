use std::{env, time::Duration};

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct Config {
    /// Base address of the shortening service, without trailing slash.
    pub base_url: String,
    pub server_addr: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let server_addr = get_env_or("SERVER_ADDRESS", "127.0.0.1:8080");
        let base_url = env::var("BACKEND_URL").unwrap_or_else(|_| {
            tracing::warn!(
                "BACKEND_URL environment variable not set, using default: http://{}",
                &server_addr
            );
            format!("http://{}", server_addr)
        });
        let request_timeout = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(value) => parse_timeout("REQUEST_TIMEOUT_SECS", &value)?,
            Err(_) => DEFAULT_REQUEST_TIMEOUT,
        };
        Ok(Self {
            base_url: parse_base_url("BACKEND_URL", &base_url)?,
            server_addr,
            request_timeout,
        })
    }
}

fn get_env_or(var: &str, default: &str) -> String {
    env::var(var).unwrap_or_else(|_| {
        tracing::debug!(
            "{} environment variable not set, using default: {}",
            var,
            default
        );
        default.to_string()
    })
}

pub fn parse_base_url(var: &'static str, value: &str) -> Result<String, ConfigError> {
    let invalid = || ConfigError::InvalidBaseUrl {
        var,
        value: value.to_string(),
    };
    let url = Url::parse(value.trim()).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
        return Err(invalid());
    }
    Ok(value.trim().trim_end_matches('/').to_string())
}

fn parse_timeout(var: &'static str, value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout {
            var,
            value: value.to_string(),
        }),
    }
}
