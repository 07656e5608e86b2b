//! Component configuration supplied by the embedding application.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
/// Knobs fixed for the lifetime of one list controller instance.
pub struct SearchConfig {
    /// Hint text for the search input.
    pub placeholder: String,
    /// Quiet period after the last keystroke before a search fires.
    pub debounce_delay_ms: u64,
    /// Items fetched per page. Must be positive; validated when the
    /// controller is built.
    pub page_size: usize,
    /// Whether to fetch the first page as soon as the controller starts.
    pub load_on_init: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            placeholder: "Buscar...".to_string(),
            debounce_delay_ms: 400,
            page_size: 10,
            load_on_init: true,
        }
    }
}
