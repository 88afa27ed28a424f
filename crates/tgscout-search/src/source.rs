//! Seams between the discovery pipeline and the network.
//!
//! The pipeline only needs "give me a page of results" and "give me a
//! preview", so it is generic over these two traits. The HTTP clients
//! implement them; tests substitute in-memory fakes.

use async_trait::async_trait;

use crate::client::CseClient;
use crate::error::SearchError;
use crate::preview::PreviewClient;
use crate::types::{Preview, SearchPage};

/// A ranked web search returning pages of ten results.
#[async_trait]
pub trait SearchSource: Send + Sync {
    /// Fetch the page of results beginning at 1-based offset `start`.
    async fn search(&self, query: &str, start: u32) -> Result<SearchPage, SearchError>;
}

/// A lookup of public channel metadata by handle.
#[async_trait]
pub trait PreviewSource: Send + Sync {
    /// `None` means no usable preview, which is not an error.
    async fn fetch(&self, handle: &str) -> Option<Preview>;
}

#[async_trait]
impl SearchSource for CseClient {
    async fn search(&self, query: &str, start: u32) -> Result<SearchPage, SearchError> {
        self.search_page(query, start).await
    }
}

#[async_trait]
impl PreviewSource for PreviewClient {
    async fn fetch(&self, handle: &str) -> Option<Preview> {
        self.fetch_preview(handle).await
    }
}
