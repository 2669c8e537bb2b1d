//! Pagination window and per-request page state.
//!
//! DESIGN
//! ======
//! The pager shows page 1, the last page, and a window of `radius` pages on
//! each side of the current one, with ellipses over the gaps.
//!
//! `PageState` stamps every page request with a generation. A response is
//! applied only if it answers the newest request; anything older is dropped,
//! so a slow response for a superseded page never overwrites fresher state.

use crate::catalog::ProductPage;

/// Pages shown on each side of the current page.
pub const WINDOW_RADIUS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(u32),
    Ellipsis,
}

/// Compute the page markers shown around `current`.
///
/// Empty when there is at most one page.
#[must_use]
pub fn pagination_window(current: u32, total_pages: u32, radius: u32) -> Vec<PageMarker> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let mut markers = vec![PageMarker::Page(1)];

    if current > radius + 2 {
        markers.push(PageMarker::Ellipsis);
    }

    let start = current.saturating_sub(radius).max(2);
    let end = current.saturating_add(radius).min(total_pages - 1);
    markers.extend((start..=end).map(PageMarker::Page));

    if current.saturating_add(radius + 1) < total_pages {
        markers.push(PageMarker::Ellipsis);
    }

    markers.push(PageMarker::Page(total_pages));
    markers
}

/// Parse a `?page=` query value. Missing, malformed, or zero reads as page 1.
#[must_use]
pub fn parse_page_param(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|&page| page >= 1)
        .unwrap_or(1)
}

// =============================================================================
// PAGE STATE
// =============================================================================

/// A page fetch issued by [`PageState::request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub generation: u64,
}

/// Current page, page size, and total page count for one listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub current: u32,
    pub size: u32,
    pub total_pages: u32,
    generation: u64,
}

impl PageState {
    #[must_use]
    pub fn new(size: u32) -> Self {
        Self { current: 1, size, total_pages: 1, generation: 0 }
    }

    /// Start a fetch for `page`, superseding any fetch still in flight.
    pub fn request(&mut self, page: u32) -> PageRequest {
        self.generation += 1;
        PageRequest { page: page.max(1), size: self.size, generation: self.generation }
    }

    /// Apply a backend page if it answers the newest request.
    ///
    /// Returns `false` and leaves the state untouched for stale responses.
    pub fn apply(&mut self, request: &PageRequest, response: &ProductPage) -> bool {
        if request.generation != self.generation {
            return false;
        }
        self.current = response.current_page();
        self.total_pages = response.page_count();
        true
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current < self.total_pages
    }

    #[must_use]
    pub fn markers(&self) -> Vec<PageMarker> {
        pagination_window(self.current, self.total_pages, WINDOW_RADIUS)
    }
}

#[cfg(test)]
#[path = "pagination_test.rs"]
mod tests;
