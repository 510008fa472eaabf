use std::fmt::Display;

use anyhow::Context;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::CatalogApiConfig;

/// Non-success response of the REST API.
#[derive(Debug, Clone)]
pub struct ApiStatusError {
    pub status: StatusCode,
    pub body: String,
}

impl Display for ApiStatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match common::form_data::api_error_message(&self.body) {
            Some(message) => write!(f, "{}: {}", self.status, message),
            None => write!(f, "{}", self.status),
        }
    }
}

impl std::error::Error for ApiStatusError {}

#[derive(Debug, Clone)]
pub struct CatalogClient {
    config: CatalogApiConfig,
    http: reqwest::Client,
}

pub fn get_catalog_client() -> anyhow::Result<CatalogClient> {
    CatalogClient::new(CatalogApiConfig::from_env())
}

impl CatalogClient {
    pub fn new(config: CatalogApiConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build http client")?;
        Ok(Self { config, http })
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let request = self.http.request(method, self.config.url(path));
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
        token: Option<&str>,
    ) -> anyhow::Result<T> {
        let request = self.request(Method::GET, path, token).query(query);
        let response_txt = self.execute(request, "GET", path).await?;
        serde_json::from_str(&response_txt).with_context(|| format!("Failed to parse response of GET {path}"))
    }

    /// Sends `body` as JSON with `method` and parses the JSON answer.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &serde_json::Value,
        token: Option<&str>,
    ) -> anyhow::Result<T> {
        let label = method.to_string();
        let request = self.request(method, path, token).json(body);
        let response_txt = self.execute(request, &label, path).await?;
        serde_json::from_str(&response_txt).with_context(|| format!("Failed to parse response of {label} {path}"))
    }

    /// DELETE; any response body is ignored.
    pub async fn delete(&self, path: &str, token: Option<&str>) -> anyhow::Result<()> {
        let request = self.request(Method::DELETE, path, token);
        self.execute(request, "DELETE", path).await?;
        Ok(())
    }

    async fn execute(&self, request: RequestBuilder, method: &str, path: &str) -> anyhow::Result<String> {
        let t0 = std::time::Instant::now();
        let response = request
            .send()
            .await
            .with_context(|| format!("{method} {path}: request failed"))?;
        let status = response.status();
        let response_txt = response.text().await?;
        let dt_ms = t0.elapsed().as_millis();
        if status.is_client_error() || status.is_server_error() {
            tracing::warn!("{} {}: {} after {}ms", method, path, status, dt_ms);
            return Err(ApiStatusError { status, body: response_txt }.into());
        }
        tracing::debug!("{} {}: {} in {}ms, len = {}", method, path, status, dt_ms, response_txt.len());
        Ok(response_txt)
    }
}
