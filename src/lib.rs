//! Debounced search with pagination over an injected data provider.
//!
//! One controller instance backs one searchable list: keystrokes are
//! debounced into a single query, in-flight responses that have been
//! superseded are discarded, and the derived view state tracks
//! loading/error/empty/populated transitions for the rendering layer.

pub mod config;
pub mod controller;
pub mod debounce;
pub mod domain;
pub mod dto;
pub mod pagination;
pub mod provider;

pub use config::SearchConfig;
pub use controller::{SearchController, SearchControllerBuilder};
pub use domain::{SearchRequest, SearchResult};
pub use dto::{ListStatus, ViewState};
pub use provider::{ProviderError, ProviderResult, SearchProvider};

/// Fixed message shown when the provider fails. The underlying error is
/// logged; its text is never surfaced to the user.
pub const GENERIC_ERROR_MESSAGE: &str =
    "Ocurrió un error al realizar la búsqueda. Intente nuevamente.";
