//! Derived pagination arithmetic.
//!
//! Everything here is a pure function of `(total_count, page_size,
//! current_page)`; the controller recomputes these values after every
//! successful provider response.

use crate::domain::types::PageSize;

/// Number of pages needed to show `total_count` items.
///
/// Zero matches yield zero pages. Page sizes are validated at construction,
/// so a non-positive divisor cannot reach this function.
pub fn total_pages(total_count: usize, page_size: PageSize) -> usize {
    total_count.div_ceil(page_size.get())
}

/// Page numbers to render in a pager strip, with `None` marking an
/// ellipsis gap.
///
/// Keeps the first and last pages visible plus a window around the current
/// page so the strip stays bounded on large result sets.
pub fn page_links(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    windowed_pages(total_pages, current_page, 2, 2, 2, 2)
}

fn windowed_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}
