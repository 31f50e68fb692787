//! Cursor-based pagination over listing endpoints
//!
//! # Overview
//!
//! Listing endpoints answer with a page envelope: an ordered batch of
//! items (`value`) plus an optional continuation URL (`nextLink`). The
//! module provides the envelope type ([`Page`]), the opaque cursor
//! ([`ContinuationToken`]), and a lazy [`PagedStream`] that walks pages on
//! demand until a page arrives without a continuation.
//!
//! Pagination is inherently sequential: every request after the first
//! depends on the token produced by the previous response, so there is no
//! parallel fan-out and no prefetching. The client never inspects or
//! rewrites the token; it is handed back to the server verbatim.

mod stream;
mod types;

pub use stream::{PageFuture, PagedStream};
pub use types::{ContinuationToken, Page};
