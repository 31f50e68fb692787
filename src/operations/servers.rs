//! Operations on SQL servers

use super::{fetch_next_page, require, resource_url};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::models::{ServerCreateParams, ServerVersion, SqlServer};
use crate::paging::{ContinuationToken, Page, PagedStream};
use futures::FutureExt;
use std::sync::Arc;

const API_VERSION: &str = "2014-04-01";
const PROVIDER: &str = "Cirrus.Sql";

/// Client for the `Cirrus.Sql/servers` resource type.
///
/// Stateless with respect to iteration: every listing call owns its own
/// cursor, so a client can serve any number of concurrent listings.
#[derive(Debug, Clone)]
pub struct ServersClient {
    http: Arc<HttpClient>,
    subscription_id: String,
}

impl ServersClient {
    pub(crate) fn new(http: Arc<HttpClient>, subscription_id: String) -> Self {
        Self {
            http,
            subscription_id,
        }
    }

    /// Fetch the first page of servers in the subscription
    pub async fn list_single_page(&self) -> Result<Page<SqlServer>> {
        require("subscriptionId", &self.subscription_id)?;
        let url = resource_url(
            self.http.endpoint(),
            &[
                "subscriptions",
                &self.subscription_id,
                "providers",
                PROVIDER,
                "servers",
            ],
            API_VERSION,
        )?;
        self.http
            .get_json(url.as_str(), RequestConfig::default())
            .await
    }

    /// Fetch the first page of servers in a resource group
    pub async fn list_by_resource_group_single_page(
        &self,
        resource_group: &str,
    ) -> Result<Page<SqlServer>> {
        require("subscriptionId", &self.subscription_id)?;
        require("resourceGroupName", resource_group)?;
        let url = resource_url(
            self.http.endpoint(),
            &[
                "subscriptions",
                &self.subscription_id,
                "resourceGroups",
                resource_group,
                "providers",
                PROVIDER,
                "servers",
            ],
            API_VERSION,
        )?;
        self.http
            .get_json(url.as_str(), RequestConfig::default())
            .await
    }

    /// Fetch the page named by a continuation token
    pub async fn list_next_page(&self, token: &ContinuationToken) -> Result<Page<SqlServer>> {
        fetch_next_page(&self.http, token).await
    }

    /// Lazily walk every server in the subscription
    pub fn list(&self) -> PagedStream<SqlServer> {
        let client = self.clone();
        PagedStream::new(move |token| {
            let client = client.clone();
            async move {
                match token {
                    None => client.list_single_page().await,
                    Some(token) => client.list_next_page(&token).await,
                }
            }
            .boxed()
        })
    }

    /// Lazily walk every server in a resource group
    pub fn list_by_resource_group(&self, resource_group: &str) -> PagedStream<SqlServer> {
        let client = self.clone();
        let resource_group = resource_group.to_string();
        PagedStream::new(move |token| {
            let client = client.clone();
            let resource_group = resource_group.clone();
            async move {
                match token {
                    None => {
                        client
                            .list_by_resource_group_single_page(&resource_group)
                            .await
                    }
                    Some(token) => client.list_next_page(&token).await,
                }
            }
            .boxed()
        })
    }

    /// Fetch a single server
    pub async fn get(&self, resource_group: &str, server_name: &str) -> Result<SqlServer> {
        let url = self.server_url(resource_group, server_name)?;
        self.http
            .get_json(url.as_str(), RequestConfig::default())
            .await
    }

    /// Create a server, or update it when it already exists
    pub async fn create_or_update(
        &self,
        resource_group: &str,
        server_name: &str,
        params: &ServerCreateParams,
    ) -> Result<SqlServer> {
        require("parameters.location", &params.location)?;
        let url = self.server_url(resource_group, server_name)?;
        self.http
            .put_json(url.as_str(), params, RequestConfig::default())
            .await
    }

    /// Delete a server
    pub async fn delete(&self, resource_group: &str, server_name: &str) -> Result<()> {
        let url = self.server_url(resource_group, server_name)?;
        self.http
            .delete(url.as_str(), RequestConfig::default())
            .await?;
        Ok(())
    }

    /// Start a fluent create-or-update request
    pub fn define(&self, resource_group: &str, server_name: &str) -> ServerCreate {
        ServerCreate {
            client: self.clone(),
            resource_group: resource_group.to_string(),
            server_name: server_name.to_string(),
            params: ServerCreateParams::default(),
        }
    }

    fn server_url(&self, resource_group: &str, server_name: &str) -> Result<url::Url> {
        require("subscriptionId", &self.subscription_id)?;
        require("resourceGroupName", resource_group)?;
        require("serverName", server_name)?;
        resource_url(
            self.http.endpoint(),
            &[
                "subscriptions",
                &self.subscription_id,
                "resourceGroups",
                resource_group,
                "providers",
                PROVIDER,
                "servers",
                server_name,
            ],
            API_VERSION,
        )
    }
}

/// Fluent builder for a server create-or-update request
#[derive(Debug, Clone)]
pub struct ServerCreate {
    client: ServersClient,
    resource_group: String,
    server_name: String,
    params: ServerCreateParams,
}

impl ServerCreate {
    /// Set the region the server lives in
    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.params.location = location.into();
        self
    }

    /// Add a tag
    #[must_use]
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params
            .tags
            .get_or_insert_with(Default::default)
            .insert(key.into(), value.into());
        self
    }

    /// Set the engine version
    #[must_use]
    pub fn version(mut self, version: ServerVersion) -> Self {
        self.params.properties.version = Some(version);
        self
    }

    /// Set the administrator login name
    #[must_use]
    pub fn administrator_login(mut self, login: impl Into<String>) -> Self {
        self.params.properties.administrator_login = Some(login.into());
        self
    }

    /// Set the administrator password
    #[must_use]
    pub fn administrator_login_password(mut self, password: impl Into<String>) -> Self {
        self.params.properties.administrator_login_password = Some(password.into());
        self
    }

    /// Issue the request
    pub async fn send(self) -> Result<SqlServer> {
        self.client
            .create_or_update(&self.resource_group, &self.server_name, &self.params)
            .await
    }
}
