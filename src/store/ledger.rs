//! Read-state ledger.
//!
//! The unread count is always derived from the collection. Nothing here
//! stores it independently, so it cannot drift from the items.

use crate::domain::Resource;
use crate::store::merge::{Collection, MergeStrategy};

pub fn unread_count<T: Resource>(collection: &Collection<T>) -> usize {
    collection
        .iter()
        .filter(|item| item.is_new() == Some(true))
        .count()
}

/// Returns whether the item flipped from unread to read.
/// An absent id is not an error.
pub fn mark_as_read<T: Resource>(collection: &mut Collection<T>, id: &T::Id) -> bool {
    match collection.get_mut(id) {
        Some(item) => {
            let was_new = item.is_new() == Some(true);
            item.set_new(false);
            was_new
        }
        None => false,
    }
}

/// Insert a locally received item as unread at the front.
pub fn add_new<T: Resource>(collection: &mut Collection<T>, mut item: T, cap: Option<usize>) {
    item.set_new(true);
    collection.merge(vec![item], MergeStrategy::PrependDedup { cap });
}

/// Fill in missing read flags on fetched items: absent means unread.
pub fn load_from_fetch<T: Resource>(items: &mut [T]) {
    for item in items.iter_mut() {
        let is_new = item.is_new().unwrap_or(true);
        item.set_new(is_new);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::merge::tests::{row, Row};

    fn unread(id: i64) -> Row {
        Row {
            is_new: Some(true),
            ..row(id, "n")
        }
    }

    #[test]
    fn test_mark_as_read_decrements_once() {
        let mut c = Collection::from_items(vec![unread(1), unread(2)]);
        assert_eq!(unread_count(&c), 2);

        assert!(mark_as_read(&mut c, &1));
        assert_eq!(unread_count(&c), 1);

        assert!(!mark_as_read(&mut c, &1));
        assert_eq!(unread_count(&c), 1);
    }

    #[test]
    fn test_mark_as_read_absent_is_noop() {
        let mut c = Collection::from_items(vec![unread(1)]);
        assert!(!mark_as_read(&mut c, &99));
        assert_eq!(unread_count(&c), 1);
    }

    #[test]
    fn test_add_new_respects_cap_and_count() {
        let mut c = Collection::new();
        for id in 0..25 {
            add_new(&mut c, row(id, "n"), Some(20));
            assert!(c.len() <= 20);
            assert_eq!(unread_count(&c), c.len());
        }
        assert_eq!(c.items()[0].id, 24);
    }

    #[test]
    fn test_add_new_overrides_flag() {
        let mut c = Collection::new();
        let read = Row {
            is_new: Some(false),
            ..row(1, "n")
        };
        add_new(&mut c, read, None);
        assert_eq!(c.get(&1).unwrap().is_new, Some(true));
    }

    #[test]
    fn test_load_from_fetch_defaults_absent_to_unread() {
        let mut items = vec![
            row(1, "a"),
            Row {
                is_new: Some(false),
                ..row(2, "b")
            },
        ];
        load_from_fetch(&mut items);
        assert_eq!(items[0].is_new, Some(true));
        assert_eq!(items[1].is_new, Some(false));
    }
}
