//! In-memory mirror of the last successful list fetch for one record kind.
//!
//! A [`PageCache`] holds at most one page of records. `replace_all` installs
//! a fetch result in the order the server returned it (the server already
//! applied the active sort); point mutations re-sort by id ascending, which
//! is the documented ordering after local inserts and updates.

use crate::models::{Movie, Person};

/// A record with a server-assigned numeric identity.
pub trait Identified {
    fn id(&self) -> i64;
}

impl Identified for Movie {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for Person {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Ordered, id-keyed cache of the current page.
#[derive(Debug)]
pub struct PageCache<T> {
    records: Vec<T>,
}

impl<T: Identified> PageCache<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Replace the entire cache with a fetched page, keeping its order.
    pub fn replace_all(&mut self, records: Vec<T>) {
        self.records = records;
    }

    /// Insert a record, or replace the cached record with the same id, then
    /// re-sort the page by id ascending.
    pub fn upsert(&mut self, record: T) {
        match self.records.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => *slot = record,
            None => self.records.push(record),
        }
        self.records.sort_by_key(|r| r.id());
    }

    /// Remove the record with the given id. Removing an absent id is a
    /// no-op, reported through the return value.
    pub fn remove_by_id(&mut self, id: i64) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        self.records.len() != before
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Identified> Default for PageCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rec {
        id: i64,
        tag: &'static str,
    }

    impl Identified for Rec {
        fn id(&self) -> i64 {
            self.id
        }
    }

    fn rec(id: i64, tag: &'static str) -> Rec {
        Rec { id, tag }
    }

    fn ids<T: Identified>(cache: &PageCache<T>) -> Vec<i64> {
        cache.records().iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_replace_all_keeps_fetched_order() {
        let mut cache = PageCache::new();
        cache.replace_all(vec![rec(3, "c"), rec(1, "a"), rec(2, "b")]);
        assert_eq!(ids(&cache), vec![3, 1, 2]);
    }

    #[test]
    fn test_upsert_inserts_in_id_order() {
        let mut cache = PageCache::new();
        cache.replace_all(vec![rec(1, "a"), rec(3, "c")]);
        cache.upsert(rec(2, "b"));
        assert_eq!(ids(&cache), vec![1, 2, 3]);
    }

    #[test]
    fn test_upsert_replaces_by_id() {
        let mut cache = PageCache::new();
        cache.replace_all(vec![rec(1, "a"), rec(2, "b")]);
        cache.upsert(rec(2, "b2"));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(2).unwrap().tag, "b2");
    }

    #[test]
    fn test_remove_by_id() {
        let mut cache = PageCache::new();
        cache.replace_all(vec![rec(1, "a"), rec(2, "b")]);
        assert!(cache.remove_by_id(1));
        assert!(!cache.remove_by_id(99));
        assert_eq!(ids(&cache), vec![2]);
    }

    #[test]
    fn test_get_absent_is_none() {
        let cache: PageCache<Rec> = PageCache::new();
        assert!(cache.get(1).is_none());
        assert!(cache.is_empty());
    }
}
