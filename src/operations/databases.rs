//! Operations on databases hosted by a SQL server

use super::{fetch_next_page, require, resource_url};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::models::{Database, DatabaseCreateParams, DatabaseEdition};
use crate::paging::{ContinuationToken, Page, PagedStream};
use futures::FutureExt;
use std::sync::Arc;

const API_VERSION: &str = "2014-04-01";
const PROVIDER: &str = "Cirrus.Sql";

/// Client for the `Cirrus.Sql/servers/databases` resource type
#[derive(Debug, Clone)]
pub struct DatabasesClient {
    http: Arc<HttpClient>,
    subscription_id: String,
}

impl DatabasesClient {
    pub(crate) fn new(http: Arc<HttpClient>, subscription_id: String) -> Self {
        Self {
            http,
            subscription_id,
        }
    }

    /// Fetch the first page of databases on a server
    pub async fn list_by_server_single_page(
        &self,
        resource_group: &str,
        server_name: &str,
    ) -> Result<Page<Database>> {
        require("subscriptionId", &self.subscription_id)?;
        require("resourceGroupName", resource_group)?;
        require("serverName", server_name)?;
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
                server_name,
                "databases",
            ],
            API_VERSION,
        )?;
        self.http
            .get_json(url.as_str(), RequestConfig::default())
            .await
    }

    /// Fetch the page named by a continuation token
    pub async fn list_next_page(&self, token: &ContinuationToken) -> Result<Page<Database>> {
        fetch_next_page(&self.http, token).await
    }

    /// Lazily walk every database on a server
    pub fn list_by_server(&self, resource_group: &str, server_name: &str) -> PagedStream<Database> {
        let client = self.clone();
        let resource_group = resource_group.to_string();
        let server_name = server_name.to_string();
        PagedStream::new(move |token| {
            let client = client.clone();
            let resource_group = resource_group.clone();
            let server_name = server_name.clone();
            async move {
                match token {
                    None => {
                        client
                            .list_by_server_single_page(&resource_group, &server_name)
                            .await
                    }
                    Some(token) => client.list_next_page(&token).await,
                }
            }
            .boxed()
        })
    }

    /// Fetch a single database
    pub async fn get(
        &self,
        resource_group: &str,
        server_name: &str,
        database_name: &str,
    ) -> Result<Database> {
        let url = self.database_url(resource_group, server_name, database_name)?;
        self.http
            .get_json(url.as_str(), RequestConfig::default())
            .await
    }

    /// Create a database, or update it when it already exists
    pub async fn create_or_update(
        &self,
        resource_group: &str,
        server_name: &str,
        database_name: &str,
        params: &DatabaseCreateParams,
    ) -> Result<Database> {
        require("parameters.location", &params.location)?;
        let url = self.database_url(resource_group, server_name, database_name)?;
        self.http
            .put_json(url.as_str(), params, RequestConfig::default())
            .await
    }

    /// Delete a database
    pub async fn delete(
        &self,
        resource_group: &str,
        server_name: &str,
        database_name: &str,
    ) -> Result<()> {
        let url = self.database_url(resource_group, server_name, database_name)?;
        self.http
            .delete(url.as_str(), RequestConfig::default())
            .await?;
        Ok(())
    }

    /// Start a fluent create-or-update request
    pub fn define(
        &self,
        resource_group: &str,
        server_name: &str,
        database_name: &str,
    ) -> DatabaseCreate {
        DatabaseCreate {
            client: self.clone(),
            resource_group: resource_group.to_string(),
            server_name: server_name.to_string(),
            database_name: database_name.to_string(),
            params: DatabaseCreateParams::default(),
        }
    }

    fn database_url(
        &self,
        resource_group: &str,
        server_name: &str,
        database_name: &str,
    ) -> Result<url::Url> {
        require("subscriptionId", &self.subscription_id)?;
        require("resourceGroupName", resource_group)?;
        require("serverName", server_name)?;
        require("databaseName", database_name)?;
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
                "databases",
                database_name,
            ],
            API_VERSION,
        )
    }
}

/// Fluent builder for a database create-or-update request
#[derive(Debug, Clone)]
pub struct DatabaseCreate {
    client: DatabasesClient,
    resource_group: String,
    server_name: String,
    database_name: String,
    params: DatabaseCreateParams,
}

impl DatabaseCreate {
    /// Set the region the database lives in
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

    /// Set the edition
    #[must_use]
    pub fn edition(mut self, edition: DatabaseEdition) -> Self {
        self.params.properties.edition = Some(edition);
        self
    }

    /// Set the collation
    #[must_use]
    pub fn collation(mut self, collation: impl Into<String>) -> Self {
        self.params.properties.collation = Some(collation.into());
        self
    }

    /// Set the maximum size in bytes
    #[must_use]
    pub fn max_size_bytes(mut self, bytes: u64) -> Self {
        self.params.properties.max_size_bytes = Some(bytes.to_string());
        self
    }

    /// Place the database in an elastic pool
    #[must_use]
    pub fn elastic_pool(mut self, pool_name: impl Into<String>) -> Self {
        self.params.properties.elastic_pool_name = Some(pool_name.into());
        self
    }

    /// Issue the request
    pub async fn send(self) -> Result<Database> {
        self.client
            .create_or_update(
                &self.resource_group,
                &self.server_name,
                &self.database_name,
                &self.params,
            )
            .await
    }
}
