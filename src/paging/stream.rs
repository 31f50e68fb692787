//! Lazy item stream over a paged listing

use super::types::{ContinuationToken, Page};
use crate::error::{Error, Result};
use futures::future::BoxFuture;
use futures::stream::{self, BoxStream, Stream, StreamExt, TryStreamExt};
use pin_project_lite::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Boxed future resolving to a single page
pub type PageFuture<T> = BoxFuture<'static, Result<Page<T>>>;

/// Cursor position of the page walk
enum Cursor {
    /// First page not yet requested
    Start,
    /// A continuation token is in hand
    Next(ContinuationToken),
    /// A page without a continuation has been fully drained
    Done,
}

pin_project! {
    /// A lazy stream of items that transparently walks all pages of a
    /// listing.
    ///
    /// Strictly demand-driven: the fetch for page N+1 is only issued once
    /// every item of page N has been yielded, and no request is in flight
    /// while the consumer is not polling. A fetch failure ends the stream
    /// with that error; items already yielded stand. Each stream owns its
    /// cursor, so independent listings never share iteration state.
    pub struct PagedStream<T> {
        #[pin]
        inner: BoxStream<'static, Result<T>>,
    }
}

impl<T: Send + 'static> PagedStream<T> {
    /// Build a stream from a page-fetch function.
    ///
    /// `fetch` is called with `None` for the first page and with the
    /// continuation token of the previous page thereafter. The walk ends
    /// when a page carries no continuation.
    pub fn new<F>(fetch: F) -> Self
    where
        F: FnMut(Option<ContinuationToken>) -> PageFuture<T> + Send + 'static,
    {
        let pages = stream::try_unfold((fetch, Cursor::Start), |(mut fetch, cursor)| async move {
            let token = match cursor {
                Cursor::Done => return Ok(None),
                Cursor::Start => None,
                Cursor::Next(token) => Some(token),
            };

            let page = fetch(token).await?;
            let next = match page.continuation() {
                Some(token) => Cursor::Next(token),
                None => Cursor::Done,
            };

            Ok::<_, Error>(Some((page, (fetch, next))))
        });

        let items = pages
            .map_ok(|page: Page<T>| stream::iter(page.value.into_iter().map(Ok)))
            .try_flatten();

        Self {
            inner: items.boxed(),
        }
    }

    /// Drain the remaining items into a vector, preserving order.
    ///
    /// Stops at the first error, discarding nothing yielded before it on
    /// the stream itself but returning only the error here.
    pub async fn collect(self) -> Result<Vec<T>> {
        self.try_collect().await
    }
}

impl<T> Stream for PagedStream<T> {
    type Item = Result<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().inner.poll_next(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> std::fmt::Debug for PagedStream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagedStream").finish_non_exhaustive()
    }
}
