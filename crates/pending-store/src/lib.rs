//! Keyed store for fixed documents awaiting delivery
//!
//! The service layer keeps one pending result per requester between the
//! "violations found" reply and the "send me the fixed file" follow-up.
//! Entries expire after a TTL and the store is capacity-bounded with
//! oldest-first eviction, so abandoned requests cannot grow it without
//! limit. The validation/fixing core never sees this store.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    stored_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PendingStore<K, V> {
    entries: HashMap<K, Entry<V>>,
    ttl: Duration,
    capacity: usize,
}

impl<K: Eq + Hash + Clone, V> PendingStore<K, V> {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        PendingStore {
            entries: HashMap::new(),
            ttl,
            capacity: capacity.max(1),
        }
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.insert_at(key, value, Utc::now());
    }

    /// Insert with an explicit clock, evicting expired entries first and
    /// the oldest entry when the store is full.
    pub fn insert_at(&mut self, key: K, value: V, now: DateTime<Utc>) {
        self.purge_expired_at(now);

        if self.entries.len() >= self.capacity && !self.entries.contains_key(&key) {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.stored_at)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                self.entries.remove(&oldest);
            }
        }

        self.entries.insert(
            key,
            Entry {
                value,
                stored_at: now,
            },
        );
    }

    /// Remove and return the pending value when it has not expired.
    pub fn take(&mut self, key: &K) -> Option<V> {
        self.take_at(key, Utc::now())
    }

    pub fn take_at(&mut self, key: &K, now: DateTime<Utc>) -> Option<V> {
        let entry = self.entries.remove(key)?;
        (now - entry.stored_at <= self.ttl).then_some(entry.value)
    }

    /// Drop expired entries; returns how many were removed.
    pub fn purge_expired(&mut self) -> usize {
        self.purge_expired_at(Utc::now())
    }

    pub fn purge_expired_at(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries.retain(|_, entry| now - entry.stored_at <= ttl);
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
