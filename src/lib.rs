//! # cirrus-mgmt
//!
//! Client SDK for the Cirrus control plane: SQL servers, databases, and
//! virtual networks, behind a single subscription-scoped client.
//!
//! ## Architecture
//!
//! - [`client`] - the [`ManagementClient`] entry point and its builder
//! - [`operations`] - one REST proxy per resource type
//! - [`paging`] - cursor-based listing over `{value, nextLink}` envelopes
//! - [`models`] - wire models matching the JSON schemas
//! - [`http`] - shared transport with error-envelope handling
//! - [`credentials`] - the authentication seam
//! - [`config`] - transport configuration
//! - [`error`] - the error taxonomy
//!
//! ## Example
//!
//! ```no_run
//! use cirrus_mgmt::{ManagementClient, BearerTokenCredential};
//! use futures::TryStreamExt;
//! use std::sync::Arc;
//!
//! # async fn run() -> cirrus_mgmt::Result<()> {
//! let client = ManagementClient::builder()
//!     .subscription_id("sub-1")
//!     .credential(Arc::new(BearerTokenCredential::new("token")))
//!     .build()?;
//!
//! let mut servers = client.servers().list();
//! while let Some(server) = servers.try_next().await? {
//!     println!("{:?}", server.resource.resource.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod http;
pub mod models;
pub mod operations;
pub mod paging;

pub use client::{ManagementClient, ManagementClientBuilder};
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_ENDPOINT};
pub use credentials::{AnonymousCredential, BearerTokenCredential, Credential};
pub use error::{Error, Result};
pub use paging::{ContinuationToken, Page, PagedStream};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
