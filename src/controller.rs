//! The searchable paged list controller.
//!
//! Composes the debouncer, the request sequencer, and the pagination state
//! into one component. All methods are synchronous event handlers; the
//! provider work they trigger runs on spawned tasks, so the controller must
//! live inside a tokio runtime.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::{debug, error};
use tokio::sync::watch;

use crate::GENERIC_ERROR_MESSAGE;
use crate::config::SearchConfig;
use crate::debounce::Debouncer;
use crate::domain::types::{PageNumber, PageSize, TypeConstraintError};
use crate::domain::{SearchRequest, SearchResult};
use crate::dto::ViewState;
use crate::pagination::total_pages;
use crate::provider::{ProviderResult, SearchProvider};

type ItemRenderer<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;
type SelectionCallback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct State<T> {
    text: String,
    page: PageNumber,
    items: Vec<T>,
    total_count: usize,
    total_pages: usize,
    is_loading: bool,
    error: Option<String>,
    /// Latest issued query generation. A response is adopted only while its
    /// generation still equals this value.
    generation: u64,
}

impl<T> State<T> {
    fn new() -> Self {
        Self {
            text: String::new(),
            page: PageNumber::FIRST,
            items: Vec::new(),
            total_count: 0,
            total_pages: 0,
            is_loading: false,
            error: None,
            generation: 0,
        }
    }
}

struct Inner<T, P> {
    provider: P,
    config: SearchConfig,
    page_size: PageSize,
    state: Mutex<State<T>>,
    debounce: Debouncer,
    item_renderer: Option<ItemRenderer<T>>,
    on_selected: Option<SelectionCallback<T>>,
    changed: watch::Sender<u64>,
}

/// Debounced, paginated search over an injected [`SearchProvider`].
///
/// Cheap to clone; clones share the same state and provider.
pub struct SearchController<T, P> {
    inner: Arc<Inner<T, P>>,
}

impl<T, P> Clone for SearchController<T, P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Staged construction for [`SearchController`], collecting the optional
/// rendering and selection hooks before the first load fires.
pub struct SearchControllerBuilder<T, P> {
    provider: P,
    config: SearchConfig,
    item_renderer: Option<ItemRenderer<T>>,
    on_selected: Option<SelectionCallback<T>>,
}

impl<T, P> SearchControllerBuilder<T, P>
where
    T: Send + 'static,
    P: SearchProvider<T> + 'static,
{
    /// Formats each item for display.
    pub fn item_renderer(mut self, renderer: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        self.item_renderer = Some(Arc::new(renderer));
        self
    }

    /// Invoked with the chosen item on [`SearchController::select`].
    pub fn on_selected(mut self, callback: impl Fn(&T) + Send + Sync + 'static) -> Self {
        self.on_selected = Some(Arc::new(callback));
        self
    }

    /// Builds the controller and, unless `load_on_init` is disabled,
    /// submits the initial first-page query.
    ///
    /// Fails if the configured page size is not positive.
    pub fn start(self) -> Result<SearchController<T, P>, TypeConstraintError> {
        let page_size = PageSize::new(self.config.page_size)?;
        let debounce = Debouncer::new(Duration::from_millis(self.config.debounce_delay_ms));
        let (changed, _) = watch::channel(0);

        let controller = SearchController {
            inner: Arc::new(Inner {
                provider: self.provider,
                config: self.config,
                page_size,
                state: Mutex::new(State::new()),
                debounce,
                item_renderer: self.item_renderer,
                on_selected: self.on_selected,
                changed,
            }),
        };

        if controller.inner.config.load_on_init {
            controller.inner.submit(String::new(), PageNumber::FIRST);
        }

        Ok(controller)
    }
}

impl<T, P> SearchController<T, P>
where
    T: Send + 'static,
    P: SearchProvider<T> + 'static,
{
    pub fn builder(provider: P, config: SearchConfig) -> SearchControllerBuilder<T, P> {
        SearchControllerBuilder {
            provider,
            config,
            item_renderer: None,
            on_selected: None,
        }
    }

    /// Builds and starts a controller without hooks.
    pub fn start(provider: P, config: SearchConfig) -> Result<Self, TypeConstraintError> {
        Self::builder(provider, config).start()
    }

    /// Handles one text-change event from the search input.
    ///
    /// The visible text updates immediately; the query itself fires only
    /// after the configured quiet period, and a newer event cancels the
    /// pending one. The emitted query always targets page 1.
    pub fn on_text_changed(&self, text: impl Into<String>) {
        let text = text.into();
        {
            let mut state = self.inner.state();
            state.text = text.clone();
        }
        self.inner.notify();

        let inner = Arc::clone(&self.inner);
        self.inner.debounce.schedule(move || {
            inner.submit(text, PageNumber::FIRST);
        });
    }

    /// Clears the search text and reloads page 1 immediately, bypassing
    /// the debounce delay.
    pub fn clear_search(&self) {
        self.inner.debounce.cancel();
        self.inner.submit(String::new(), PageNumber::FIRST);
    }

    /// Navigates to `page` with the current search text.
    ///
    /// Requests outside `[1, max(1, total_pages)]`, and requests for the
    /// page already shown, are ignored without touching the provider.
    pub fn go_to_page(&self, page: usize) {
        let Ok(target) = PageNumber::new(page) else {
            return;
        };

        let text = {
            let state = self.inner.state();
            if target.get() > state.total_pages.max(1) || target == state.page {
                return;
            }
            state.text.clone()
        };

        self.inner.submit(text, target);
    }

    /// No-op when already on the last page or when there are no pages.
    pub fn next_page(&self) {
        let target = {
            let state = self.inner.state();
            if state.page.get() >= state.total_pages {
                return;
            }
            state.page.get() + 1
        };
        self.go_to_page(target);
    }

    /// No-op when already on the first page.
    pub fn previous_page(&self) {
        let target = {
            let state = self.inner.state();
            if state.page.get() <= 1 {
                return;
            }
            state.page.get() - 1
        };
        self.go_to_page(target);
    }

    /// Hides the error banner without re-querying; the previously shown
    /// items (or empty indicator) become visible again.
    pub fn dismiss_error(&self) {
        {
            let mut state = self.inner.state();
            if state.error.take().is_none() {
                return;
            }
        }
        self.inner.notify();
    }

    /// Reports a click on the item at `index` of the current page to the
    /// configured selection callback, if any.
    pub fn select(&self, index: usize)
    where
        T: Clone,
    {
        let Some(callback) = self.inner.on_selected.clone() else {
            return;
        };
        let item = self.inner.state().items.get(index).cloned();
        if let Some(item) = item {
            callback(&item);
        }
    }

    /// Snapshot of the current display state.
    pub fn view(&self) -> ViewState<T>
    where
        T: Clone,
    {
        let state = self.inner.state();
        ViewState {
            items: state.items.clone(),
            text: state.text.clone(),
            current_page: state.page.get(),
            page_size: self.inner.page_size.get(),
            total_pages: state.total_pages,
            total_count: state.total_count,
            is_loading: state.is_loading,
            error: state.error.clone(),
        }
    }

    /// Current page items formatted by the configured renderer, or `None`
    /// when no renderer was attached.
    pub fn rendered_items(&self) -> Option<Vec<String>> {
        let renderer = self.inner.item_renderer.as_ref()?;
        let state = self.inner.state();
        Some(state.items.iter().map(|item| renderer(item)).collect())
    }

    pub fn config(&self) -> &SearchConfig {
        &self.inner.config
    }

    /// Change notifications: the receiver wakes after every view-state
    /// transition, so embedders can await re-render points.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.changed.subscribe()
    }
}

impl<T, P> Inner<T, P>
where
    T: Send + 'static,
    P: SearchProvider<T> + 'static,
{
    fn state(&self) -> MutexGuard<'_, State<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self) {
        self.changed.send_modify(|version| *version += 1);
    }

    /// Issues a new query generation and dispatches the provider call.
    fn submit(self: &Arc<Self>, text: String, page: PageNumber) -> u64 {
        let generation = {
            let mut state = self.state();
            state.generation += 1;
            state.text = text.clone();
            state.page = page;
            state.is_loading = true;
            state.error = None;
            state.generation
        };
        self.notify();

        debug!("submitting generation {generation}: text={text:?} page={page}");

        let request = SearchRequest::new(text)
            .page(page)
            .page_size(self.page_size);
        let inner = Arc::clone(self);
        tokio::spawn(async move {
            let outcome = inner.provider.fetch(&request).await;
            inner.complete(generation, outcome);
        });

        generation
    }

    /// Adopts a provider response, unless a newer generation has been
    /// issued since this one was submitted.
    fn complete(&self, generation: u64, outcome: ProviderResult<SearchResult<T>>) {
        let mut state = self.state();
        if state.generation != generation {
            debug!("discarding stale response for generation {generation}");
            return;
        }

        state.is_loading = false;
        match outcome {
            Ok(result) => {
                state.total_count = result.total_count;
                state.total_pages = total_pages(result.total_count, self.page_size);
                state.items = result.items;

                // Keep the displayed page inside the recomputed bounds.
                let last = state.total_pages.max(1);
                if state.page.get() > last {
                    state.page = PageNumber::new(last).unwrap_or(PageNumber::FIRST);
                }
            }
            Err(err) => {
                error!("provider failed for generation {generation}: {err}");
                state.error = Some(GENERIC_ERROR_MESSAGE.to_string());
            }
        }
        drop(state);
        self.notify();
    }
}
