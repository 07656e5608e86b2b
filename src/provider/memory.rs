//! In-memory provider over a fixed collection.
//!
//! Useful for demos and for embedding applications whose data set is small
//! enough to filter in process. Matching is delegated to a caller-supplied
//! predicate so the item type stays opaque.

use async_trait::async_trait;

use crate::domain::{SearchRequest, SearchResult};
use crate::provider::{ProviderResult, SearchProvider};

type MatchFn<T> = Box<dyn Fn(&T, &str) -> bool + Send + Sync>;

pub struct InMemoryProvider<T> {
    items: Vec<T>,
    matches: MatchFn<T>,
}

impl<T> InMemoryProvider<T> {
    /// Wraps a collection with a text-match predicate.
    ///
    /// An empty or whitespace-only search text matches every item.
    pub fn new(items: Vec<T>, matches: impl Fn(&T, &str) -> bool + Send + Sync + 'static) -> Self {
        Self {
            items,
            matches: Box::new(matches),
        }
    }
}

#[async_trait]
impl<T> SearchProvider<T> for InMemoryProvider<T>
where
    T: Clone + Send + Sync,
{
    async fn fetch(&self, request: &SearchRequest) -> ProviderResult<SearchResult<T>> {
        let text = request.text.trim();

        let matching: Vec<&T> = self
            .items
            .iter()
            .filter(|item| text.is_empty() || (self.matches)(item, text))
            .collect();

        let total_count = matching.len();
        let page_size = request.page_size.get();
        let offset = (request.page.get() - 1) * page_size;

        let items = matching
            .into_iter()
            .skip(offset)
            .take(page_size)
            .cloned()
            .collect();

        Ok(SearchResult::new(items, total_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{PageNumber, PageSize};

    fn provider() -> InMemoryProvider<String> {
        let items = (1..=12).map(|i| format!("Item {i}")).collect();
        InMemoryProvider::new(items, |item: &String, text| {
            item.to_lowercase().contains(&text.to_lowercase())
        })
    }

    #[tokio::test]
    async fn empty_text_lists_everything_paged() {
        let result = provider()
            .fetch(&SearchRequest::new("").page_size(PageSize::new(5).expect("valid size")))
            .await
            .expect("fetch should succeed");

        assert_eq!(result.total_count, 12);
        assert_eq!(result.items.len(), 5);
        assert_eq!(result.items[0], "Item 1");
    }

    #[tokio::test]
    async fn filters_case_insensitively() {
        let result = provider()
            .fetch(&SearchRequest::new("item 1"))
            .await
            .expect("fetch should succeed");

        // Item 1 plus Item 10..12.
        assert_eq!(result.total_count, 4);
    }

    #[tokio::test]
    async fn returns_requested_page_only() {
        let request = SearchRequest::new("")
            .page(PageNumber::new(3).expect("valid page"))
            .page_size(PageSize::new(5).expect("valid size"));

        let result = provider().fetch(&request).await.expect("fetch should succeed");

        assert_eq!(result.items, vec!["Item 11".to_string(), "Item 12".to_string()]);
        assert_eq!(result.total_count, 12);
    }
}
