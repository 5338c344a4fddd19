//! Merge engine: folds fetched or locally created items into a collection
//! without ever holding two items with the same id.

use std::collections::{HashMap, HashSet};

use crate::domain::Resource;

/// How incoming items are combined with what the collection already holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
    /// Discard the current contents and take the incoming page as is.
    /// Duplicates inside the page collapse the same way as `AppendDedup`.
    Replace,
    /// Concatenate, then collapse by id. An id keeps the position of its
    /// first occurrence and the payload of its last, so a refetched item
    /// overwrites the cached copy in place.
    AppendDedup,
    /// Put incoming items in front, drop older copies of the same ids, and
    /// truncate from the tail to `cap` items when set.
    PrependDedup { cap: Option<usize> },
}

/// Ordered sequence of items, unique by id.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Resource> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<T>) -> Self {
        let mut collection = Self::new();
        collection.merge(items, MergeStrategy::Replace);
        collection
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn position(&self, id: &T::Id) -> Option<usize> {
        self.items.iter().position(|item| &item.id() == id)
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| &item.id() == id)
    }

    pub fn get_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.items.iter_mut().find(|item| &item.id() == id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.position(id).is_some()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    pub fn merge(&mut self, incoming: Vec<T>, strategy: MergeStrategy) {
        match strategy {
            MergeStrategy::Replace => {
                self.items.clear();
                self.append_dedup(incoming);
            }
            MergeStrategy::AppendDedup => self.append_dedup(incoming),
            MergeStrategy::PrependDedup { cap } => self.prepend_dedup(incoming, cap),
        }
    }

    fn append_dedup(&mut self, incoming: Vec<T>) {
        let existing = std::mem::take(&mut self.items);
        let mut slots: HashMap<T::Id, usize> = HashMap::with_capacity(existing.len() + incoming.len());
        let mut merged: Vec<T> = Vec::with_capacity(existing.len() + incoming.len());

        for item in existing.into_iter().chain(incoming) {
            match slots.get(&item.id()) {
                Some(&slot) => merged[slot] = item,
                None => {
                    slots.insert(item.id(), merged.len());
                    merged.push(item);
                }
            }
        }

        self.items = merged;
    }

    fn prepend_dedup(&mut self, incoming: Vec<T>, cap: Option<usize>) {
        let existing = std::mem::take(&mut self.items);
        let mut seen: HashSet<T::Id> = HashSet::with_capacity(existing.len() + incoming.len());
        let mut merged: Vec<T> = Vec::with_capacity(existing.len() + incoming.len());

        for item in incoming.into_iter().chain(existing) {
            if seen.insert(item.id()) {
                merged.push(item);
            }
        }

        if let Some(cap) = cap {
            merged.truncate(cap);
        }

        self.items = merged;
    }

    /// Swap the item stored under `old_id` for `item`, keeping its slot.
    /// If `item`'s id is already present elsewhere (a fetch raced ahead of
    /// the write response) that other copy is dropped. Falls back to a
    /// front insert when `old_id` is gone.
    pub fn replace(&mut self, old_id: &T::Id, item: T) {
        let new_id = item.id();

        if &new_id != old_id {
            if let Some(dup) = self.position(&new_id) {
                self.items.remove(dup);
            }
        }

        match self.position(old_id) {
            Some(index) => self.items[index] = item,
            None => self.items.insert(0, item),
        }
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
