//! Service client entry point

use crate::config::{ClientConfig, ClientConfigBuilder};
use crate::credentials::{AnonymousCredential, Credential};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::operations::{DatabasesClient, ServersClient, VirtualNetworksClient};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Entry point to the management API, scoped to a single subscription.
///
/// Cheap to clone; every clone shares the same transport. Operation groups
/// are handed out by the accessor methods and may outlive the client.
#[derive(Debug, Clone)]
pub struct ManagementClient {
    http: Arc<HttpClient>,
    subscription_id: String,
}

impl ManagementClient {
    /// Start building a client
    pub fn builder() -> ManagementClientBuilder {
        ManagementClientBuilder::default()
    }

    /// The subscription this client is scoped to
    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    /// Operations on SQL servers
    pub fn servers(&self) -> ServersClient {
        ServersClient::new(Arc::clone(&self.http), self.subscription_id.clone())
    }

    /// Operations on databases
    pub fn databases(&self) -> DatabasesClient {
        DatabasesClient::new(Arc::clone(&self.http), self.subscription_id.clone())
    }

    /// Operations on virtual networks
    pub fn virtual_networks(&self) -> VirtualNetworksClient {
        VirtualNetworksClient::new(Arc::clone(&self.http), self.subscription_id.clone())
    }
}

/// Builder for [`ManagementClient`]
pub struct ManagementClientBuilder {
    config: ClientConfigBuilder,
    subscription_id: Option<String>,
    credential: Arc<dyn Credential>,
}

impl Default for ManagementClientBuilder {
    fn default() -> Self {
        Self {
            config: ClientConfig::builder(),
            subscription_id: None,
            credential: Arc::new(AnonymousCredential),
        }
    }
}

impl ManagementClientBuilder {
    /// Set the control-plane endpoint
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config = self.config.endpoint(endpoint);
        self
    }

    /// Set the subscription the client is scoped to. Required.
    #[must_use]
    pub fn subscription_id(mut self, subscription_id: impl Into<String>) -> Self {
        self.subscription_id = Some(subscription_id.into());
        self
    }

    /// Set the credential applied to every request
    #[must_use]
    pub fn credential(mut self, credential: Arc<dyn Credential>) -> Self {
        self.credential = credential;
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config = self.config.user_agent(agent);
        self
    }

    /// Add a header sent with every request
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config = self.config.header(key, value);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ManagementClient> {
        let subscription_id = self
            .subscription_id
            .ok_or_else(|| Error::config("subscription_id is required"))?;
        let config = self.config.build();
        debug!(endpoint = %config.endpoint, "building management client");

        let http = HttpClient::new(config, self.credential)?;
        Ok(ManagementClient {
            http: Arc::new(http),
            subscription_id,
        })
    }
}

impl std::fmt::Debug for ManagementClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManagementClientBuilder")
            .field("subscription_id", &self.subscription_id)
            .finish_non_exhaustive()
    }
}
