//! REST operation groups, one per resource type
//!
//! Each client here is a thin proxy: it validates required path parameters
//! before any network I/O, assembles the resource URL with an `api-version`
//! query, and hands the exchange to the shared transport. Listing
//! operations come in three forms: a single first page, a single
//! continuation page, and a lazy stream composing the two.

mod databases;
mod servers;
mod virtual_networks;

pub use databases::{DatabaseCreate, DatabasesClient};
pub use servers::{ServerCreate, ServersClient};
pub use virtual_networks::{VirtualNetworkCreate, VirtualNetworksClient};

use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::paging::{ContinuationToken, Page};
use serde::de::DeserializeOwned;
use url::Url;

/// Reject empty required path parameters before any request is issued
pub(crate) fn require(param: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::required(param));
    }
    Ok(())
}

/// Build a resource URL from path segments, percent-encoding each segment,
/// and append the `api-version` query parameter
pub(crate) fn resource_url(endpoint: &str, segments: &[&str], api_version: &str) -> Result<Url> {
    let mut url = Url::parse(endpoint)?;
    url.path_segments_mut()
        .map_err(|()| Error::config("endpoint cannot be a base URL"))?
        .pop_if_empty()
        .extend(segments);
    url.query_pairs_mut().append_pair("api-version", api_version);
    Ok(url)
}

/// Fetch the page named by a continuation token.
///
/// The token is the URL, issued verbatim: no query parameters are merged
/// in, the server has already encoded everything it needs.
pub(crate) async fn fetch_next_page<T: DeserializeOwned>(
    http: &HttpClient,
    token: &ContinuationToken,
) -> Result<Page<T>> {
    http.get_json(token.as_str(), RequestConfig::default()).await
}
