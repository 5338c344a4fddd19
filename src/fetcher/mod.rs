pub mod api;
pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::{PageEnvelope, PageRequest, Resource};

pub use api::Api;
pub use http_fetcher::HttpClient;

/// Fetches one page of a paginated collection.
///
/// Implementations must not touch store state; a failure is returned to
/// the caller, which picks the fallback.
#[async_trait]
pub trait PageFetcher<T>: Send + Sync {
    async fn fetch_page(&self, request: PageRequest) -> Result<PageEnvelope<T>>;
}

/// Fetches a single item by id (detail views).
#[async_trait]
pub trait ItemFetcher<T: Resource>: Send + Sync {
    async fn fetch_item(&self, id: &T::Id) -> Result<T>;
}
