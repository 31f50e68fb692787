//! Page envelope and continuation token

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// One response from a listing endpoint: a batch of items in server order
/// plus an optional link to the next batch.
///
/// The wire shape is `{"value": [...], "nextLink": "..."}`. A missing or
/// empty `nextLink` means the listing is complete; an empty `value` with a
/// `nextLink` present is a valid intermediate page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct Page<T> {
    /// Items in this page, in the order the server returned them
    #[serde(default)]
    pub value: Vec<T>,
    /// URL of the next page, when more pages exist
    #[serde(rename = "nextLink", default, skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,
}

impl<T> Page<T> {
    /// Create a page from items and an optional next link
    pub fn new(value: Vec<T>, next_link: Option<String>) -> Self {
        Self { value, next_link }
    }

    /// Items in this page
    pub fn items(&self) -> &[T] {
        &self.value
    }

    /// Consume the page, returning its items
    pub fn into_items(self) -> Vec<T> {
        self.value
    }

    /// The continuation token for the next page, if one exists.
    ///
    /// Absent and empty `nextLink` both mean "no more pages".
    pub fn continuation(&self) -> Option<ContinuationToken> {
        self.next_link
            .as_deref()
            .filter(|link| !link.is_empty())
            .map(|link| ContinuationToken(link.to_string()))
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            value: Vec::new(),
            next_link: None,
        }
    }
}

/// Opaque continuation token.
///
/// Wraps the `nextLink` value exactly as the server returned it. The token
/// is never parsed or reconstructed; its only valid use is as the URL of
/// the next page fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinuationToken(pub(crate) String);

impl ContinuationToken {
    /// Create a token from a raw `nextLink` value.
    ///
    /// Rejects empty input: callers must check for the presence of a
    /// continuation before asking for another page.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(Error::required("nextPageLink"));
        }
        Ok(Self(raw))
    }

    /// The token, verbatim
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the token, returning the raw string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ContinuationToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContinuationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
