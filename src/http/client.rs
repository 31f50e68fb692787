//! HTTP client used by all operation groups

use crate::config::ClientConfig;
use crate::credentials::Credential;
use crate::error::{Error, Result};
use crate::models::ErrorEnvelope;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters
    pub query: HashMap<String, String>,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Request body (JSON)
    pub body: Option<Value>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// HTTP client shared by every operation group.
///
/// Continuation URLs returned by listing endpoints are absolute and are
/// passed through [`HttpClient::get`] verbatim; only relative paths are
/// joined onto the configured endpoint.
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
    credential: Arc<dyn Credential>,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(config: ClientConfig, credential: Arc<dyn Credential>) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(Error::Http)?;

        Ok(Self {
            client,
            config,
            credential,
        })
    }

    /// The configured control-plane endpoint
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Make a GET request
    pub async fn get(&self, url: &str, config: RequestConfig) -> Result<Response> {
        self.request(Method::GET, url, config).await
    }

    /// Make a PUT request
    pub async fn put(&self, url: &str, config: RequestConfig) -> Result<Response> {
        self.request(Method::PUT, url, config).await
    }

    /// Make a POST request
    pub async fn post(&self, url: &str, config: RequestConfig) -> Result<Response> {
        self.request(Method::POST, url, config).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, url: &str, config: RequestConfig) -> Result<Response> {
        self.request(Method::DELETE, url, config).await
    }

    /// Make a GET request and deserialize the JSON response
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        config: RequestConfig,
    ) -> Result<T> {
        let response = self.get(url, config).await?;
        let value: T = response.json().await.map_err(Error::Http)?;
        Ok(value)
    }

    /// Make a PUT request with a serialized body and deserialize the response
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
        config: RequestConfig,
    ) -> Result<T> {
        let config = config.json(serde_json::to_value(body)?);
        let response = self.put(url, config).await?;
        let value: T = response.json().await.map_err(Error::Http)?;
        Ok(value)
    }

    /// Make a generic request
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        config: RequestConfig,
    ) -> Result<Response> {
        let full_url = self.build_url(url);
        debug!(%method, url = %full_url, "sending request");

        let mut req = self.client.request(method, &full_url);

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }
        req = req.header("accept-language", &self.config.accept_language);

        for (key, value) in &config.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if !config.query.is_empty() {
            req = req.query(&config.query);
        }

        if let Some(ref body) = config.body {
            req = req.json(body);
        }

        req = self.credential.apply(req).await?;

        let response = req.send().await.map_err(Error::Http)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), url = %full_url, "request failed");
            return Err(error_from_response(status.as_u16(), body));
        }

        debug!(status = status.as_u16(), "request succeeded");
        Ok(response)
    }

    /// Build full URL from a path; absolute URLs pass through untouched
    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let base = self.config.endpoint.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Map a non-success response onto `Error::Api`.
///
/// Prefers the structured `{"error": {"code", "message"}}` envelope and
/// keeps the raw body verbatim either way.
fn error_from_response(status: u16, body: String) -> Error {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(&body) {
        if let Some(detail) = envelope.error {
            return Error::Api {
                status,
                code: detail.code,
                message: detail.message.unwrap_or_else(|| body.clone()),
                body,
            };
        }
    }
    Error::api(status, body)
}
