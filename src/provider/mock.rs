//! Mock provider implementation for isolating the controller in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::{SearchRequest, SearchResult};
use crate::provider::{ProviderResult, SearchProvider};

mock! {
    pub Provider<T: Send + Sync + 'static> {}

    #[async_trait]
    impl<T: Send + Sync + 'static> SearchProvider<T> for Provider<T> {
        async fn fetch(&self, request: &SearchRequest) -> ProviderResult<SearchResult<T>>;
    }
}
