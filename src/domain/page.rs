use serde::{Deserialize, Serialize};

/// One server response page. Field names are the wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub size: u32,
    pub number: u32,
}

impl<T> PageEnvelope<T> {
    pub fn empty(size: u32, number: u32) -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            size,
            number,
        }
    }
}

/// Parameters of one page fetch. `resource_id` scopes nested collections
/// (the comments of one post); top-level collections leave it unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub resource_id: Option<i64>,
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(resource_id: Option<i64>, page: u32, size: u32) -> Self {
        Self {
            resource_id,
            page,
            size,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.size > 0
    }
}
