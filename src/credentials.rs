//! Credential seam for the transport
//!
//! Token acquisition (interactive login, client-credential flows, refresh)
//! is delegated to the host application; the SDK only needs a hook that
//! decorates each outgoing request with whatever the control plane expects.
//! Implement [`Credential`] to plug in a real token source.

use crate::error::Result;
use async_trait::async_trait;
use reqwest::RequestBuilder;

/// Applies authentication to an outgoing request.
///
/// Called once per HTTP exchange, including continuation-page fetches.
/// Implementations are shared across concurrent requests and must be
/// `Send + Sync`.
#[async_trait]
pub trait Credential: Send + Sync {
    /// Decorate a request builder with authentication material
    async fn apply(&self, req: RequestBuilder) -> Result<RequestBuilder>;
}

/// Bearer credential wrapping a pre-acquired token.
///
/// Suitable for tests and tooling where a token is already at hand; there
/// is no refresh, the token is sent as-is until the credential is replaced.
#[derive(Debug, Clone)]
pub struct BearerTokenCredential {
    token: String,
}

impl BearerTokenCredential {
    /// Create a credential from a raw bearer token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl Credential for BearerTokenCredential {
    async fn apply(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        Ok(req.bearer_auth(&self.token))
    }
}

/// No-op credential for unauthenticated or mocked endpoints
#[derive(Debug, Clone, Default)]
pub struct AnonymousCredential;

#[async_trait]
impl Credential for AnonymousCredential {
    async fn apply(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        Ok(req)
    }
}
