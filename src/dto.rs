//! View-state DTOs shaped for list rendering.
//!
//! `ViewState` is a snapshot derived from the controller's internal state;
//! templates and UI layers read it, nothing writes it back.

use serde::Serialize;

use crate::pagination::page_links;

/// Display status of the result area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListStatus {
    /// A request is in flight and no error is shown.
    Loading,
    /// The last request finished with zero items.
    Empty,
    /// The last request finished with at least one item.
    Populated,
    /// The last request failed and the error banner is visible.
    Errored,
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewState<T> {
    pub items: Vec<T>,
    pub text: String,
    pub current_page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T> ViewState<T> {
    /// Current status, derived with the error banner taking precedence.
    pub fn status(&self) -> ListStatus {
        if self.error.is_some() {
            ListStatus::Errored
        } else if self.is_loading {
            ListStatus::Loading
        } else if self.items.is_empty() {
            ListStatus::Empty
        } else {
            ListStatus::Populated
        }
    }

    /// Whether a previous-page control should be enabled.
    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a next-page control should be enabled.
    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// The clear affordance only appears once there is text to clear.
    pub fn show_clear(&self) -> bool {
        !self.text.is_empty()
    }

    /// Page numbers for a pager strip, `None` marking an ellipsis gap.
    pub fn pages(&self) -> Vec<Option<usize>> {
        page_links(self.total_pages, self.current_page)
    }

    /// One-based index range of the items currently displayed, for the
    /// "showing X - Y of Z" line. `None` while the page is empty.
    pub fn showing_range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.current_page - 1) * self.page_size + 1;
        Some((first, first + self.items.len() - 1))
    }
}
