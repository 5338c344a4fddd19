use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

/// An item held in a client-side collection.
///
/// `id` is the merge key: two values with the same id are versions of the
/// same item. Resources that carry a read flag override [`is_new`] and
/// [`set_new`]; for the rest the ledger operations are no-ops.
///
/// [`is_new`]: Resource::is_new
/// [`set_new`]: Resource::set_new
pub trait Resource: Clone + Send + Sync + 'static {
    type Id: Clone + Eq + Hash + Debug + Send + Sync;

    fn id(&self) -> Self::Id;

    fn created_at(&self) -> DateTime<Utc>;

    /// Read flag as received. `None` means the payload did not say.
    fn is_new(&self) -> Option<bool> {
        None
    }

    fn set_new(&mut self, _is_new: bool) {}
}

static LAST_LOCAL_ID: AtomicI64 = AtomicI64::new(0);

/// Id for an optimistic item that has no server id yet.
///
/// Negative and strictly decreasing, so it never equals a server id and
/// two drafts created in the same millisecond still differ.
pub fn next_local_id() -> i64 {
    let candidate = -Utc::now().timestamp_millis();
    let mut current = LAST_LOCAL_ID.load(Ordering::Relaxed);
    loop {
        let next = candidate.min(current - 1);
        match LAST_LOCAL_ID.compare_exchange_weak(current, next, Ordering::Relaxed, Ordering::Relaxed)
        {
            Ok(_) => return next,
            Err(actual) => current = actual,
        }
    }
}

pub fn is_local_id(id: i64) -> bool {
    id < 0
}
