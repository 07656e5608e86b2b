//! The asynchronous data-source seam consumed by the list controller.
//!
//! The embedding application supplies the provider; the controller never
//! knows whether results come from a database, an HTTP API, or memory.

use std::future::Future;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{SearchRequest, SearchResult};

pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("search backend error: {0}")]
    Backend(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("invalid search request: {0}")]
    InvalidRequest(String),

    #[error("unexpected provider error: {0}")]
    Unexpected(String),
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Fetches one page of results matching a search request.
///
/// Implementations may take arbitrarily long and may fail; the controller
/// catches every error at this boundary and discards responses that have
/// been superseded by a newer request.
#[async_trait]
pub trait SearchProvider<T>: Send + Sync {
    async fn fetch(&self, request: &SearchRequest) -> ProviderResult<SearchResult<T>>;
}

/// Plain async functions and closures act as providers, which keeps
/// embedding call sites that have no state of their own free of wrapper
/// types.
#[async_trait]
impl<T, F, Fut> SearchProvider<T> for F
where
    T: 'static,
    F: Fn(SearchRequest) -> Fut + Send + Sync,
    Fut: Future<Output = ProviderResult<SearchResult<T>>> + Send + 'static,
{
    async fn fetch(&self, request: &SearchRequest) -> ProviderResult<SearchResult<T>> {
        self(request.clone()).await
    }
}
