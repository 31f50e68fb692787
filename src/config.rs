//! Client configuration
//!
//! `ClientConfig` carries everything the transport needs that is not
//! request-specific: the control-plane endpoint, the request timeout, the
//! user agent, and default headers sent with every request. Credential and
//! subscription wiring live on the service client builder instead.

use std::collections::HashMap;
use std::time::Duration;

/// Default control-plane endpoint
pub const DEFAULT_ENDPOINT: &str = "https://management.cirrus.example.com";

/// Default accept-language sent with every request
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US";

/// Configuration for the management client transport
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the control plane
    pub endpoint: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Accept-language header value
    pub accept_language: String,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("cirrus-mgmt/{}", env!("CARGO_PKG_VERSION")),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            default_headers: HashMap::new(),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the control-plane endpoint
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set the accept-language header value
    pub fn accept_language(mut self, language: impl Into<String>) -> Self {
        self.config.accept_language = language.into();
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
