//! Domain values exchanged between the list controller and its provider.

use serde::{Deserialize, Serialize};

pub mod types;

use types::{PageNumber, PageSize};

/// One search attempt against the data provider.
///
/// A fresh value is built for every effective query; nothing mutates a
/// request once it has been handed to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub text: String,
    pub page: PageNumber,
    pub page_size: PageSize,
}

impl SearchRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            page: PageNumber::FIRST,
            page_size: PageSize::DEFAULT,
        }
    }

    pub fn page(mut self, page: PageNumber) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }
}

/// One page of provider results together with the total match count
/// across all pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult<T> {
    pub items: Vec<T>,
    pub total_count: usize,
}

impl<T> SearchResult<T> {
    pub fn new(items: Vec<T>, total_count: usize) -> Self {
        Self { items, total_count }
    }

    /// A result with no matches at all.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder_defaults_to_first_page() {
        let request = SearchRequest::new("alpha");

        assert_eq!(request.text, "alpha");
        assert_eq!(request.page, PageNumber::FIRST);
        assert_eq!(request.page_size, PageSize::DEFAULT);
    }

    #[test]
    fn request_builder_applies_pagination() {
        let request = SearchRequest::new("beta")
            .page(PageNumber::new(3).expect("valid page"))
            .page_size(PageSize::new(5).expect("valid size"));

        assert_eq!(request.page.get(), 3);
        assert_eq!(request.page_size.get(), 5);
    }

    #[test]
    fn empty_result_has_no_matches() {
        let result: SearchResult<u32> = SearchResult::empty();

        assert!(result.items.is_empty());
        assert_eq!(result.total_count, 0);
    }
}
