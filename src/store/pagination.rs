use serde::{Deserialize, Serialize};

use crate::domain::{PageEnvelope, PageRequest};

/// Paging position of a collection, as last reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    pub total_elements: u64,
    pub total_pages: u32,
    pub size: u32,
    pub number: u32,
}

impl PaginationState {
    /// Zero-valued state for a collection that has not loaded anything.
    pub fn initial(size: u32) -> Self {
        Self {
            total_elements: 0,
            total_pages: 0,
            size,
            number: 0,
        }
    }

    /// Not cumulative: totals come from the envelope, size and number from
    /// the request that produced it.
    pub fn advance<T>(request: &PageRequest, envelope: &PageEnvelope<T>) -> Self {
        Self {
            total_elements: envelope.total_elements,
            total_pages: envelope.total_pages,
            size: request.size,
            number: request.page,
        }
    }

    pub fn has_next(&self) -> bool {
        self.number.saturating_add(1) < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.number > 0
    }

    /// A page past the end was requested; the server answered with an
    /// empty page and it was accepted as is.
    pub fn is_past_end(&self) -> bool {
        self.total_pages > 0 && self.number >= self.total_pages
    }

    pub fn next_page(&self) -> Option<u32> {
        self.has_next().then(|| self.number + 1)
    }

    pub fn prev_page(&self) -> Option<u32> {
        self.has_prev().then(|| self.number - 1)
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::initial(10)
    }
}
