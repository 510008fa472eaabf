//! Connection settings for the catalog REST API, read from the environment.

use std::time::Duration;

pub const DEFAULT_CATALOG_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogApiConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    pub timeout: Duration,
}

impl CatalogApiConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, timeout }
    }

    /// Reads `CATALOG_API_URL` and `CATALOG_API_TIMEOUT_MS`.
    pub fn from_env() -> Self {
        let base_url = std::env::var("CATALOG_API_URL").unwrap_or(DEFAULT_CATALOG_API_URL.to_string());
        let timeout_ms = parse_timeout_ms(std::env::var("CATALOG_API_TIMEOUT_MS").ok().as_deref());
        Self::new(base_url, Duration::from_millis(timeout_ms))
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for CatalogApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_API_URL, Duration::from_millis(DEFAULT_TIMEOUT_MS))
    }
}

fn parse_timeout_ms(raw: Option<&str>) -> u64 {
    let Some(raw) = raw else {
        return DEFAULT_TIMEOUT_MS;
    };
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => ms,
        _ => {
            tracing::warn!("CATALOG_API_TIMEOUT_MS: invalid value {:?}, using {}ms", raw, DEFAULT_TIMEOUT_MS);
            DEFAULT_TIMEOUT_MS
        }
    }
}
