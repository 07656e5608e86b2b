//! Shared fixtures for controller integration tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use search_pagination::domain::{SearchRequest, SearchResult};
use search_pagination::provider::{ProviderError, ProviderResult, SearchProvider};
use search_pagination::{SearchController, ViewState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestItem {
    pub id: usize,
    pub name: String,
}

pub fn test_items(count: usize) -> Vec<TestItem> {
    (1..=count)
        .map(|id| TestItem {
            id,
            name: format!("Item {id}"),
        })
        .collect()
}

type DelayFn = Box<dyn Fn(&SearchRequest) -> Duration + Send + Sync>;
type FailureFn = Box<dyn Fn(&SearchRequest) -> Option<ProviderError> + Send + Sync>;

/// Provider over a fixed item list that records every request it receives
/// and can be scripted with per-request latency and failures.
pub struct StubProvider {
    items: Vec<TestItem>,
    requests: Arc<Mutex<Vec<SearchRequest>>>,
    delay: DelayFn,
    failure: FailureFn,
}

impl StubProvider {
    pub fn new(items: Vec<TestItem>) -> Self {
        Self {
            items,
            requests: Arc::new(Mutex::new(Vec::new())),
            delay: Box::new(|_| Duration::ZERO),
            failure: Box::new(|_| None),
        }
    }

    pub fn with_delay(
        mut self,
        delay: impl Fn(&SearchRequest) -> Duration + Send + Sync + 'static,
    ) -> Self {
        self.delay = Box::new(delay);
        self
    }

    pub fn with_failure(
        mut self,
        failure: impl Fn(&SearchRequest) -> Option<ProviderError> + Send + Sync + 'static,
    ) -> Self {
        self.failure = Box::new(failure);
        self
    }

    /// Handle onto the request log, usable after the provider has been
    /// moved into a controller.
    pub fn requests(&self) -> Arc<Mutex<Vec<SearchRequest>>> {
        Arc::clone(&self.requests)
    }
}

#[async_trait]
impl SearchProvider<TestItem> for StubProvider {
    async fn fetch(&self, request: &SearchRequest) -> ProviderResult<SearchResult<TestItem>> {
        {
            self.requests
                .lock()
                .expect("request log poisoned")
                .push(request.clone());
        }

        let delay = (self.delay)(request);
        if delay > Duration::ZERO {
            tokio::time::sleep(delay).await;
        }

        if let Some(err) = (self.failure)(request) {
            return Err(err);
        }

        let text = request.text.to_lowercase();
        let matching: Vec<TestItem> = self
            .items
            .iter()
            .filter(|item| text.is_empty() || item.name.to_lowercase().contains(&text))
            .cloned()
            .collect();

        let total_count = matching.len();
        let page_size = request.page_size.get();
        let items = matching
            .into_iter()
            .skip((request.page.get() - 1) * page_size)
            .take(page_size)
            .collect();

        Ok(SearchResult::new(items, total_count))
    }
}

/// Awaits change notifications until `pred` holds, then returns the
/// matching snapshot. Panics if the condition is never reached.
pub async fn wait_until<P, F>(controller: &SearchController<TestItem, P>, pred: F) -> ViewState<TestItem>
where
    P: SearchProvider<TestItem> + 'static,
    F: Fn(&ViewState<TestItem>) -> bool,
{
    let mut changes = controller.subscribe();
    tokio::time::timeout(Duration::from_secs(30), async {
        loop {
            let view = controller.view();
            if pred(&view) {
                return view;
            }
            changes.changed().await.expect("controller dropped");
        }
    })
    .await
    .expect("view state never reached the expected condition")
}

/// Lets already-spawned controller tasks run without advancing the clock,
/// so "no request was issued" assertions are meaningful.
pub async fn drain_tasks() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}
