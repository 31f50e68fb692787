//! HTTP transport
//!
//! A thin wrapper over `reqwest` that joins paths onto the configured
//! endpoint, applies the injected credential, and maps non-success
//! responses onto the structured error taxonomy. Retry, backoff, and
//! throttling policy belong to whatever sits in front of the control
//! plane, not to this client.

mod client;

pub use client::{HttpClient, RequestConfig};
