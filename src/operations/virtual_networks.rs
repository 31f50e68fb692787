//! Operations on virtual networks

use super::{fetch_next_page, require, resource_url};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::models::{AddressSpace, DhcpOptions, Subnet, SubnetProperties, VirtualNetwork, VirtualNetworkCreateParams};
use crate::paging::{ContinuationToken, Page, PagedStream};
use futures::FutureExt;
use std::sync::Arc;

const API_VERSION: &str = "2020-06-01";
const PROVIDER: &str = "Cirrus.Network";

/// Client for the `Cirrus.Network/virtualNetworks` resource type
#[derive(Debug, Clone)]
pub struct VirtualNetworksClient {
    http: Arc<HttpClient>,
    subscription_id: String,
}

impl VirtualNetworksClient {
    pub(crate) fn new(http: Arc<HttpClient>, subscription_id: String) -> Self {
        Self {
            http,
            subscription_id,
        }
    }

    /// Fetch the first page of virtual networks in the subscription
    pub async fn list_all_single_page(&self) -> Result<Page<VirtualNetwork>> {
        require("subscriptionId", &self.subscription_id)?;
        let url = resource_url(
            self.http.endpoint(),
            &[
                "subscriptions",
                &self.subscription_id,
                "providers",
                PROVIDER,
                "virtualNetworks",
            ],
            API_VERSION,
        )?;
        self.http
            .get_json(url.as_str(), RequestConfig::default())
            .await
    }

    /// Fetch the first page of virtual networks in a resource group
    pub async fn list_single_page(&self, resource_group: &str) -> Result<Page<VirtualNetwork>> {
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
                "virtualNetworks",
            ],
            API_VERSION,
        )?;
        self.http
            .get_json(url.as_str(), RequestConfig::default())
            .await
    }

    /// Fetch the page named by a continuation token
    pub async fn list_next_page(&self, token: &ContinuationToken) -> Result<Page<VirtualNetwork>> {
        fetch_next_page(&self.http, token).await
    }

    /// Lazily walk every virtual network in the subscription
    pub fn list_all(&self) -> PagedStream<VirtualNetwork> {
        let client = self.clone();
        PagedStream::new(move |token| {
            let client = client.clone();
            async move {
                match token {
                    None => client.list_all_single_page().await,
                    Some(token) => client.list_next_page(&token).await,
                }
            }
            .boxed()
        })
    }

    /// Lazily walk every virtual network in a resource group
    pub fn list(&self, resource_group: &str) -> PagedStream<VirtualNetwork> {
        let client = self.clone();
        let resource_group = resource_group.to_string();
        PagedStream::new(move |token| {
            let client = client.clone();
            let resource_group = resource_group.clone();
            async move {
                match token {
                    None => client.list_single_page(&resource_group).await,
                    Some(token) => client.list_next_page(&token).await,
                }
            }
            .boxed()
        })
    }

    /// Fetch a single virtual network
    pub async fn get(&self, resource_group: &str, network_name: &str) -> Result<VirtualNetwork> {
        let url = self.network_url(resource_group, network_name)?;
        self.http
            .get_json(url.as_str(), RequestConfig::default())
            .await
    }

    /// Create a virtual network, or update it when it already exists
    pub async fn create_or_update(
        &self,
        resource_group: &str,
        network_name: &str,
        params: &VirtualNetworkCreateParams,
    ) -> Result<VirtualNetwork> {
        require("parameters.location", &params.location)?;
        let url = self.network_url(resource_group, network_name)?;
        self.http
            .put_json(url.as_str(), params, RequestConfig::default())
            .await
    }

    /// Delete a virtual network
    pub async fn delete(&self, resource_group: &str, network_name: &str) -> Result<()> {
        let url = self.network_url(resource_group, network_name)?;
        self.http
            .delete(url.as_str(), RequestConfig::default())
            .await?;
        Ok(())
    }

    /// Start a fluent create-or-update request
    pub fn define(&self, resource_group: &str, network_name: &str) -> VirtualNetworkCreate {
        VirtualNetworkCreate {
            client: self.clone(),
            resource_group: resource_group.to_string(),
            network_name: network_name.to_string(),
            params: VirtualNetworkCreateParams::default(),
        }
    }

    fn network_url(&self, resource_group: &str, network_name: &str) -> Result<url::Url> {
        require("subscriptionId", &self.subscription_id)?;
        require("resourceGroupName", resource_group)?;
        require("virtualNetworkName", network_name)?;
        resource_url(
            self.http.endpoint(),
            &[
                "subscriptions",
                &self.subscription_id,
                "resourceGroups",
                resource_group,
                "providers",
                PROVIDER,
                "virtualNetworks",
                network_name,
            ],
            API_VERSION,
        )
    }
}

/// Fluent builder for a virtual network create-or-update request
#[derive(Debug, Clone)]
pub struct VirtualNetworkCreate {
    client: VirtualNetworksClient,
    resource_group: String,
    network_name: String,
    params: VirtualNetworkCreateParams,
}

impl VirtualNetworkCreate {
    /// Set the region the network lives in
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

    /// Reserve an address prefix for the network
    #[must_use]
    pub fn address_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.params
            .properties
            .address_space
            .get_or_insert_with(AddressSpace::default)
            .address_prefixes
            .push(prefix.into());
        self
    }

    /// Add a DNS server handed out to machines in the network
    #[must_use]
    pub fn dns_server(mut self, address: impl Into<String>) -> Self {
        self.params
            .properties
            .dhcp_options
            .get_or_insert_with(DhcpOptions::default)
            .dns_servers
            .push(address.into());
        self
    }

    /// Carve a subnet out of the address space
    #[must_use]
    pub fn subnet(mut self, name: impl Into<String>, address_prefix: impl Into<String>) -> Self {
        self.params.properties.subnets.push(Subnet {
            name: Some(name.into()),
            properties: SubnetProperties {
                address_prefix: Some(address_prefix.into()),
                ..Default::default()
            },
            ..Default::default()
        });
        self
    }

    /// Issue the request
    pub async fn send(self) -> Result<VirtualNetwork> {
        self.client
            .create_or_update(&self.resource_group, &self.network_name, &self.params)
            .await
    }
}
