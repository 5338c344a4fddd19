//! Store facade: one object per collection, owned by the application
//! context and handed to whatever renders it.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::app::{HanjanError, Result};
use crate::domain::{PageRequest, Resource};
use crate::fetcher::{ItemFetcher, PageFetcher};
use crate::store::ledger;
use crate::store::merge::{Collection, MergeStrategy};
use crate::store::pagination::PaginationState;

/// What a failed fetch does to the state already on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Empty the collection and reset paging.
    Reset,
    /// Keep the last good state.
    Preserve,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    pub page_size: u32,
    pub fetch_strategy: MergeStrategy,
    /// Upper bound applied when items are inserted locally.
    pub insert_cap: Option<usize>,
    pub on_error: FailurePolicy,
}

impl StoreOptions {
    /// Comment history: pages accumulate, stale data survives errors.
    pub fn comments(page_size: u32) -> Self {
        Self {
            page_size,
            fetch_strategy: MergeStrategy::AppendDedup,
            insert_cap: None,
            on_error: FailurePolicy::Preserve,
        }
    }

    /// Notification inbox: each fetch is the full list, newest first.
    pub fn notifications(page_size: u32, capacity: usize) -> Self {
        Self {
            page_size,
            fetch_strategy: MergeStrategy::Replace,
            insert_cap: Some(capacity),
            on_error: FailurePolicy::Reset,
        }
    }

    /// Detail caches (posts, announcements) filled one item at a time.
    pub fn details() -> Self {
        Self {
            page_size: 10,
            fetch_strategy: MergeStrategy::AppendDedup,
            insert_cap: None,
            on_error: FailurePolicy::Preserve,
        }
    }

    pub fn with_failure_policy(mut self, on_error: FailurePolicy) -> Self {
        self.on_error = on_error;
        self
    }
}

#[derive(Debug, Clone)]
pub struct StoreState<T> {
    pub items: Collection<T>,
    pub pagination: PaginationState,
    pub unread_count: usize,
    /// Message of the most recent failure; cleared by the next success.
    pub last_error: Option<String>,
    /// Parent resource the collection belongs to (post id for comments).
    pub resource_id: Option<i64>,
    ticket: u64,
}

impl<T: Resource> StoreState<T> {
    fn new(page_size: u32) -> Self {
        Self {
            items: Collection::new(),
            pagination: PaginationState::initial(page_size),
            unread_count: 0,
            last_error: None,
            resource_id: None,
            ticket: 0,
        }
    }

    fn recount(&mut self) {
        self.unread_count = ledger::unread_count(&self.items);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// A newer request was already applied; this response was dropped.
    Discarded,
    Failed,
    /// The request was malformed and never sent.
    Rejected,
}

pub struct ResourceStore<T: Resource> {
    name: &'static str,
    options: StoreOptions,
    state: watch::Sender<StoreState<T>>,
    issued: AtomicU64,
}

impl<T: Resource> ResourceStore<T> {
    pub fn new(name: &'static str, options: StoreOptions) -> Self {
        let (state, _) = watch::channel(StoreState::new(options.page_size));
        Self {
            name,
            options,
            state,
            issued: AtomicU64::new(0),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Receiver that wakes on every state change, for views to re-render.
    pub fn subscribe(&self) -> watch::Receiver<StoreState<T>> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> StoreState<T> {
        self.state.borrow().clone()
    }

    pub fn items(&self) -> Vec<T> {
        self.state.borrow().items.items().to_vec()
    }

    pub fn find(&self, id: &T::Id) -> Option<T> {
        self.state.borrow().items.get(id).cloned()
    }

    pub fn pagination(&self) -> PaginationState {
        self.state.borrow().pagination
    }

    pub fn unread_count(&self) -> usize {
        self.state.borrow().unread_count
    }

    pub fn last_error(&self) -> Option<String> {
        self.state.borrow().last_error.clone()
    }

    fn next_ticket(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub async fn fetch<F>(&self, fetcher: &F, request: PageRequest) -> FetchOutcome
    where
        F: PageFetcher<T> + ?Sized,
    {
        if !request.is_valid() {
            tracing::warn!(store = self.name, "rejected page request {:?}", request);
            self.state.send_modify(|state| {
                state.last_error = Some(format!("invalid page size {}", request.size));
            });
            return FetchOutcome::Rejected;
        }

        let ticket = self.next_ticket();
        let result = fetcher.fetch_page(request).await;

        let mut outcome = FetchOutcome::Discarded;
        self.state.send_if_modified(|state| {
            if ticket < state.ticket {
                tracing::debug!(
                    store = self.name,
                    "dropping stale response for page {} (ticket {} < {})",
                    request.page,
                    ticket,
                    state.ticket
                );
                return false;
            }
            state.ticket = ticket;

            match result {
                Ok(mut envelope) => {
                    if state.resource_id != request.resource_id {
                        state.items.clear();
                        state.resource_id = request.resource_id;
                    }

                    ledger::load_from_fetch(&mut envelope.content);
                    state.pagination = PaginationState::advance(&request, &envelope);
                    tracing::debug!(
                        store = self.name,
                        "merging {} items from page {}",
                        envelope.content.len(),
                        request.page
                    );
                    state.items.merge(envelope.content, self.options.fetch_strategy);
                    state.last_error = None;
                    outcome = FetchOutcome::Applied;
                }
                Err(err) => {
                    tracing::error!(store = self.name, "error fetching page {}: {}", request.page, err);
                    self.apply_failure(state, &err);
                    outcome = FetchOutcome::Failed;
                }
            }

            state.recount();
            true
        });

        outcome
    }

    /// Refetch at `new_page` with the current size and parent resource.
    /// The page number is not checked against `total_pages`.
    pub async fn page_change<F>(&self, fetcher: &F, new_page: u32) -> FetchOutcome
    where
        F: PageFetcher<T> + ?Sized,
    {
        let (resource_id, size) = {
            let state = self.state.borrow();
            (state.resource_id, state.pagination.size)
        };
        self.fetch(fetcher, PageRequest::new(resource_id, new_page, size))
            .await
    }

    /// Fetch one item and upsert it. Single-item loads take no part in
    /// page sequencing: they never move pagination, never make a page
    /// response stale, and a failure only records `last_error`.
    pub async fn load_one<F>(&self, fetcher: &F, id: &T::Id) -> Option<T>
    where
        F: ItemFetcher<T> + ?Sized,
    {
        match fetcher.fetch_item(id).await {
            Ok(item) => {
                self.state.send_modify(|state| {
                    state.items.merge(vec![item.clone()], MergeStrategy::AppendDedup);
                    state.last_error = None;
                    state.recount();
                });
                Some(item)
            }
            Err(err) => {
                tracing::error!(store = self.name, "error fetching {:?}: {}", id, err);
                self.state.send_modify(|state| {
                    state.last_error = Some(err.to_string());
                });
                None
            }
        }
    }

    /// Point the store at another parent resource. A different parent
    /// empties the collection and makes page fetches still in flight for
    /// the old one stale.
    pub fn scope(&self, resource_id: Option<i64>) {
        let page_size = self.options.page_size;
        let ticket = self.next_ticket();
        self.state.send_if_modified(|state| {
            if state.resource_id == resource_id {
                return false;
            }
            tracing::debug!(
                store = self.name,
                "switching from {:?} to {:?}",
                state.resource_id,
                resource_id
            );
            *state = StoreState::new(page_size);
            state.resource_id = resource_id;
            state.ticket = ticket;
            true
        });
    }

    fn apply_failure(&self, state: &mut StoreState<T>, err: &HanjanError) {
        if self.options.on_error == FailurePolicy::Reset {
            state.items.clear();
            state.pagination = PaginationState::initial(self.options.page_size);
        }
        state.last_error = Some(err.to_string());
    }

    /// Optimistic local insert at the front, no server round trip.
    pub fn add(&self, item: T) {
        let cap = self.options.insert_cap;
        self.state.send_modify(|state| {
            state.items.merge(vec![item], MergeStrategy::PrependDedup { cap });
            state.recount();
        });
    }

    /// Insert as unread (a pushed notification).
    pub fn add_new(&self, item: T) {
        let cap = self.options.insert_cap;
        self.state.send_modify(|state| {
            ledger::add_new(&mut state.items, item, cap);
            state.recount();
        });
    }

    /// Returns whether the unread count went down.
    pub fn mark_read(&self, id: &T::Id) -> bool {
        let mut changed = false;
        self.state.send_if_modified(|state| {
            changed = ledger::mark_as_read(&mut state.items, id);
            state.recount();
            changed
        });
        changed
    }

    /// Show `placeholder` right away, then swap in the server's version
    /// once `request` resolves. On failure the placeholder is withdrawn.
    pub async fn submit<Fut>(&self, placeholder: T, request: Fut) -> Result<T>
    where
        Fut: Future<Output = Result<T>>,
    {
        let local_id = placeholder.id();
        self.add(placeholder);

        match request.await {
            Ok(saved) => {
                tracing::info!(store = self.name, "saved {:?} as {:?}", local_id, saved.id());
                self.state.send_modify(|state| {
                    state.items.replace(&local_id, saved.clone());
                    state.last_error = None;
                    state.recount();
                });
                Ok(saved)
            }
            Err(err) => {
                tracing::error!(store = self.name, "submit failed: {}", err);
                self.state.send_modify(|state| {
                    state.items.remove(&local_id);
                    state.last_error = Some(err.to_string());
                    state.recount();
                });
                Err(err)
            }
        }
    }

    pub fn clear(&self) {
        let page_size = self.options.page_size;
        self.state.send_modify(|state| {
            let ticket = state.ticket;
            *state = StoreState::new(page_size);
            state.ticket = ticket;
        });
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::domain::{Comment, Notification, PageEnvelope};

    fn comment(id: i64, content: &str) -> Comment {
        Comment {
            id,
            member_id: 1,
            member_name: "tester".into(),
            post_id: 1,
            content: content.into(),
            anonymous: false,
            created_at: chrono::Utc::now(),
            updated_at: None,
        }
    }

    fn notification(id: i64, is_new: Option<bool>) -> Notification {
        Notification {
            id,
            member_id: 1,
            post_id: None,
            kind: "COMMENT".into(),
            content: format!("notification {}", id),
            created_at: chrono::Utc::now(),
            is_new,
        }
    }

    /// Serves canned pages keyed by page number, optionally after a delay.
    struct FakePages<T> {
        pages: HashMap<u32, PageEnvelope<T>>,
        delays: HashMap<u32, Duration>,
        fail: bool,
        calls: Mutex<Vec<PageRequest>>,
    }

    impl<T> FakePages<T> {
        fn new() -> Self {
            Self {
                pages: HashMap::new(),
                delays: HashMap::new(),
                fail: false,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn page(mut self, number: u32, content: Vec<T>, total_elements: u64, total_pages: u32) -> Self {
            self.pages.insert(
                number,
                PageEnvelope {
                    content,
                    total_elements,
                    total_pages,
                    size: 10,
                    number,
                },
            );
            self
        }

        fn delay(mut self, number: u32, delay: Duration) -> Self {
            self.delays.insert(number, delay);
            self
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new()
            }
        }
    }

    #[async_trait]
    impl<T: Clone + Send + Sync> PageFetcher<T> for FakePages<T> {
        async fn fetch_page(&self, request: PageRequest) -> Result<PageEnvelope<T>> {
            self.calls.lock().unwrap().push(request);
            if let Some(delay) = self.delays.get(&request.page) {
                tokio::time::sleep(*delay).await;
            }
            if self.fail {
                return Err(HanjanError::Api {
                    status: 503,
                    message: "unavailable".into(),
                });
            }
            Ok(self
                .pages
                .get(&request.page)
                .cloned()
                .unwrap_or_else(|| PageEnvelope::empty(request.size, request.page)))
        }
    }

    struct FakeItems(HashMap<i64, Comment>);

    #[async_trait]
    impl ItemFetcher<Comment> for FakeItems {
        async fn fetch_item(&self, id: &i64) -> Result<Comment> {
            self.0
                .get(id)
                .cloned()
                .ok_or_else(|| HanjanError::NotFound(id.to_string()))
        }
    }

    fn comment_store() -> ResourceStore<Comment> {
        ResourceStore::new("comments", StoreOptions::comments(10))
    }

    fn notification_store() -> ResourceStore<Notification> {
        ResourceStore::new("notifications", StoreOptions::notifications(20, 20))
    }

    #[tokio::test]
    async fn test_first_page_populates_collection_and_pagination() {
        let store = comment_store();
        let fetcher = FakePages::new().page(0, vec![comment(1, "first")], 1, 1);

        let outcome = store.fetch(&fetcher, PageRequest::new(Some(1), 0, 10)).await;

        assert_eq!(outcome, FetchOutcome::Applied);
        let state = store.snapshot();
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items.items()[0].id, 1);
        assert_eq!(
            state.pagination,
            PaginationState {
                total_elements: 1,
                total_pages: 1,
                size: 10,
                number: 0
            }
        );
        assert!(state.last_error.is_none());
    }

    #[tokio::test]
    async fn test_pages_accumulate_without_duplicates() {
        let store = comment_store();
        let fetcher = FakePages::new()
            .page(0, vec![comment(1, "a"), comment(2, "b")], 3, 2)
            .page(1, vec![comment(2, "b edited"), comment(3, "c")], 3, 2);

        store.fetch(&fetcher, PageRequest::new(Some(1), 0, 10)).await;
        store.page_change(&fetcher, 1).await;

        let items = store.items();
        assert_eq!(items.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(items[1].content, "b edited");
        assert_eq!(store.pagination().number, 1);
    }

    #[tokio::test]
    async fn test_page_change_reuses_size_and_resource() {
        let store = comment_store();
        let fetcher: FakePages<Comment> = FakePages::new();

        store.fetch(&fetcher, PageRequest::new(Some(7), 0, 5)).await;
        store.page_change(&fetcher, 9).await;

        let calls = fetcher.calls.lock().unwrap();
        assert_eq!(calls[1], PageRequest::new(Some(7), 9, 5));
        assert_eq!(store.pagination().number, 9);
    }

    #[tokio::test]
    async fn test_switching_resource_starts_fresh() {
        let store = comment_store();
        let fetcher = FakePages::new().page(0, vec![comment(1, "a")], 1, 1);

        store.fetch(&fetcher, PageRequest::new(Some(1), 0, 10)).await;
        let other = FakePages::new().page(0, vec![comment(50, "other post")], 1, 1);
        store.fetch(&other, PageRequest::new(Some(2), 0, 10)).await;

        assert_eq!(store.items().iter().map(|c| c.id).collect::<Vec<_>>(), vec![50]);
        assert_eq!(store.snapshot().resource_id, Some(2));
    }

    #[tokio::test]
    async fn test_failed_notification_fetch_resets() {
        let store = notification_store();
        let ok = FakePages::new().page(0, vec![notification(1, None)], 1, 1);
        store.fetch(&ok, PageRequest::new(None, 0, 20)).await;
        assert_eq!(store.unread_count(), 1);

        let outcome = store.fetch(&FakePages::<Notification>::failing(), PageRequest::new(None, 0, 20)).await;

        assert_eq!(outcome, FetchOutcome::Failed);
        let state = store.snapshot();
        assert!(state.items.is_empty());
        assert_eq!(state.unread_count, 0);
        assert_eq!(state.pagination, PaginationState::initial(20));
        assert!(state.last_error.is_some());
    }

    #[tokio::test]
    async fn test_failed_comment_fetch_preserves() {
        let store = comment_store();
        let ok = FakePages::new().page(0, vec![comment(1, "a")], 1, 1);
        store.fetch(&ok, PageRequest::new(Some(1), 0, 10)).await;

        store.fetch(&FakePages::<Comment>::failing(), PageRequest::new(Some(1), 1, 10)).await;

        let state = store.snapshot();
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.pagination.number, 0);
        assert!(state.last_error.is_some());

        store.fetch(&ok, PageRequest::new(Some(1), 0, 10)).await;
        assert!(store.last_error().is_none());
    }

    #[tokio::test]
    async fn test_zero_size_rejected_without_call() {
        let store = comment_store();
        let fetcher: FakePages<Comment> = FakePages::new();

        let outcome = store.fetch(&fetcher, PageRequest::new(Some(1), 0, 0)).await;

        assert_eq!(outcome, FetchOutcome::Rejected);
        assert!(fetcher.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_out_of_order_response_is_discarded() {
        let store = comment_store();
        let fetcher = FakePages::new()
            .page(1, vec![comment(10, "page one")], 30, 3)
            .page(2, vec![comment(20, "page two")], 30, 3)
            .delay(1, Duration::from_millis(50));

        let (slow, fast) = tokio::join!(
            store.fetch(&fetcher, PageRequest::new(Some(1), 1, 10)),
            store.fetch(&fetcher, PageRequest::new(Some(1), 2, 10)),
        );

        assert_eq!(fast, FetchOutcome::Applied);
        assert_eq!(slow, FetchOutcome::Discarded);
        assert_eq!(store.pagination().number, 2);
        assert_eq!(store.items().iter().map(|c| c.id).collect::<Vec<_>>(), vec![20]);
    }

    #[tokio::test]
    async fn test_add_new_then_fetch_collapses() {
        let store = notification_store();
        store.add_new(notification(2, Some(true)));
        assert_eq!(store.unread_count(), 1);

        let fetcher = FakePages::new().page(0, vec![notification(2, None), notification(3, Some(false))], 2, 1);
        store.fetch(&fetcher, PageRequest::new(None, 0, 20)).await;

        let items = store.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items.iter().filter(|n| n.id == 2).count(), 1);
        assert_eq!(store.find(&2).unwrap().is_new, Some(true));
        assert_eq!(store.unread_count(), 1);
    }

    #[tokio::test]
    async fn test_add_new_caps_notifications() {
        let store = notification_store();
        for id in 0..30 {
            store.add_new(notification(id, None));
        }
        assert_eq!(store.items().len(), 20);
        assert_eq!(store.unread_count(), 20);
        assert_eq!(store.items()[0].id, 29);
    }

    #[tokio::test]
    async fn test_mark_read() {
        let store = notification_store();
        let fetcher = FakePages::new().page(
            0,
            vec![notification(1, None), notification(2, Some(false))],
            2,
            1,
        );
        store.fetch(&fetcher, PageRequest::new(None, 0, 20)).await;
        assert_eq!(store.unread_count(), 1);

        assert!(store.mark_read(&1));
        assert_eq!(store.unread_count(), 0);
        assert!(!store.mark_read(&2));
        assert!(!store.mark_read(&404));
        assert_eq!(store.unread_count(), 0);
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let store = notification_store();
        let mut rx = store.subscribe();

        store.add_new(notification(1, None));

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().unread_count, 1);

        assert!(!store.mark_read(&999));
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_submit_reconciles_placeholder() {
        let store = comment_store();
        store.add(comment(1, "old"));

        let saved = store
            .submit(comment(-100, "draft"), async { Ok(comment(42, "draft")) })
            .await
            .unwrap();

        assert_eq!(saved.id, 42);
        let ids: Vec<i64> = store.items().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![42, 1]);
    }

    #[tokio::test]
    async fn test_submit_failure_withdraws_placeholder() {
        let store = comment_store();
        store.add(comment(1, "old"));

        let result = store
            .submit(comment(-100, "draft"), async {
                Err(HanjanError::Api {
                    status: 500,
                    message: "boom".into(),
                })
            })
            .await;

        assert!(result.is_err());
        assert_eq!(store.items().iter().map(|c| c.id).collect::<Vec<_>>(), vec![1]);
        assert!(store.last_error().is_some());
    }

    #[tokio::test]
    async fn test_load_one_upserts() {
        let store = comment_store();
        store.add(comment(5, "stale"));
        let fetcher = FakeItems(HashMap::from([(5, comment(5, "fresh")), (6, comment(6, "new"))]));

        assert_eq!(store.load_one(&fetcher, &5).await.unwrap().content, "fresh");
        assert!(store.load_one(&fetcher, &6).await.is_some());
        assert!(store.load_one(&fetcher, &7).await.is_none());

        assert_eq!(store.items().len(), 2);
        assert_eq!(store.find(&5).unwrap().content, "fresh");
        assert!(store.last_error().is_some());
    }

    #[tokio::test]
    async fn test_detail_load_does_not_stale_page_fetch() {
        let store = comment_store();
        let pages = FakePages::new()
            .page(0, vec![comment(1, "a"), comment(2, "b")], 12, 2)
            .delay(0, Duration::from_millis(50));
        let items = FakeItems(HashMap::from([(9, comment(9, "detail"))]));

        let (page, detail) = tokio::join!(
            store.fetch(&pages, PageRequest::new(Some(1), 0, 10)),
            store.load_one(&items, &9),
        );

        assert!(detail.is_some());
        assert_eq!(page, FetchOutcome::Applied);
        let state = store.snapshot();
        assert_eq!(state.resource_id, Some(1));
        assert_eq!(state.pagination.total_pages, 2);
        assert_eq!(state.pagination.total_elements, 12);
        assert!(state.items.contains(&1));
    }

    #[tokio::test]
    async fn test_detail_load_and_page_fetch_both_kept() {
        let store = comment_store();
        store.scope(Some(1));
        let pages = FakePages::new()
            .page(0, vec![comment(1, "a")], 1, 1)
            .delay(0, Duration::from_millis(50));
        let items = FakeItems(HashMap::from([(9, comment(9, "detail"))]));

        let (page, _) = tokio::join!(
            store.fetch(&pages, PageRequest::new(Some(1), 0, 10)),
            store.load_one(&items, &9),
        );

        assert_eq!(page, FetchOutcome::Applied);
        let mut ids: Vec<i64> = store.items().iter().map(|c| c.id).collect();
        ids.sort();
        assert_eq!(ids, vec![1, 9]);
    }

    #[tokio::test]
    async fn test_detail_load_failure_keeps_page() {
        let store = notification_store();
        let pages = FakePages::new().page(0, vec![notification(1, None)], 1, 1);
        store.fetch(&pages, PageRequest::new(None, 0, 20)).await;

        struct Missing;
        #[async_trait]
        impl ItemFetcher<Notification> for Missing {
            async fn fetch_item(&self, id: &i64) -> Result<Notification> {
                Err(HanjanError::NotFound(id.to_string()))
            }
        }

        assert!(store.load_one(&Missing, &5).await.is_none());
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.pagination().total_pages, 1);
        assert!(store.last_error().is_some());
    }

    #[tokio::test]
    async fn test_submit_for_other_parent_does_not_mix() {
        let store = comment_store();
        let pages = FakePages::new().page(0, vec![comment(1, "post one")], 1, 1);
        store.fetch(&pages, PageRequest::new(Some(1), 0, 10)).await;

        let other = |id| Comment {
            post_id: 2,
            ..comment(id, "post two")
        };
        store.scope(Some(2));
        store.submit(other(-5), async { Ok(other(77)) }).await.unwrap();

        let state = store.snapshot();
        assert_eq!(state.resource_id, Some(2));
        let ids: Vec<(i64, i64)> = state.items.iter().map(|c| (c.id, c.post_id)).collect();
        assert_eq!(ids, vec![(77, 2)]);
    }

    #[tokio::test]
    async fn test_scope_makes_old_parent_fetch_stale() {
        let store = comment_store();
        let pages = FakePages::new()
            .page(0, vec![comment(1, "post one")], 1, 1)
            .delay(0, Duration::from_millis(50));
        let other = |id| Comment {
            post_id: 2,
            ..comment(id, "post two")
        };

        let (old, saved) = tokio::join!(
            store.fetch(&pages, PageRequest::new(Some(1), 0, 10)),
            async {
                store.scope(Some(2));
                store.submit(other(-5), async { Ok(other(77)) }).await
            },
        );

        assert_eq!(old, FetchOutcome::Discarded);
        assert_eq!(saved.unwrap().id, 77);
        assert_eq!(store.snapshot().resource_id, Some(2));
        assert_eq!(store.items().iter().map(|c| c.id).collect::<Vec<_>>(), vec![77]);
    }

    #[tokio::test]
    async fn test_scope_same_parent_keeps_items() {
        let store = comment_store();
        let pages = FakePages::new().page(0, vec![comment(1, "a")], 1, 1);
        store.fetch(&pages, PageRequest::new(Some(1), 0, 10)).await;

        let mut rx = store.subscribe();
        let _ = rx.borrow_and_update();
        store.scope(Some(1));

        assert!(!rx.has_changed().unwrap());
        assert_eq!(store.items().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_during_page_change() {
        let store = comment_store();
        let pages = FakePages::new()
            .page(0, vec![comment(1, "a")], 2, 2)
            .page(1, vec![comment(2, "b")], 2, 2)
            .delay(1, Duration::from_millis(50));
        store.fetch(&pages, PageRequest::new(Some(1), 0, 1)).await;

        let (outcome, saved) = tokio::join!(
            store.page_change(&pages, 1),
            store.submit(comment(-100, "draft"), async { Ok(comment(42, "draft")) }),
        );

        assert_eq!(outcome, FetchOutcome::Applied);
        assert_eq!(saved.unwrap().id, 42);
        assert_eq!(store.pagination().number, 1);
        assert_eq!(store.items().iter().map(|c| c.id).collect::<Vec<_>>(), vec![42, 1, 2]);
    }

    #[test]
    fn test_clear_resets_state() {
        let store = notification_store();
        store.add_new(notification(1, None));
        store.clear();
        let state = store.snapshot();
        assert!(state.items.is_empty());
        assert_eq!(state.unread_count, 0);
        assert_eq!(state.pagination, PaginationState::initial(20));
    }

    #[test]
    fn test_fetch_from_sync_context() {
        let store = comment_store();
        let fetcher = FakePages::new().page(0, vec![comment(1, "a")], 1, 1);
        let outcome = tokio_test::block_on(store.fetch(&fetcher, PageRequest::new(Some(1), 0, 10)));
        assert_eq!(outcome, FetchOutcome::Applied);
    }
}
