//! In-memory entry table backing the request cache.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Type-erased cached value. Stores cache values of many entity types under
/// one table and downcast on read.
pub(crate) type SharedValue = Arc<dyn Any + Send + Sync>;

/// A single cached response.
#[derive(Clone)]
pub struct CacheEntry {
  key: String,
  value: SharedValue,
  created_at: Instant,
  /// `None` means the entry lives until explicitly invalidated
  ttl: Option<Duration>,
}

impl CacheEntry {
  pub(crate) fn new(key: String, value: SharedValue, ttl: Option<Duration>) -> Self {
    Self {
      key,
      value,
      created_at: Instant::now(),
      ttl,
    }
  }

  pub fn key(&self) -> &str {
    &self.key
  }

  pub fn created_at(&self) -> Instant {
    self.created_at
  }

  pub fn ttl(&self) -> Option<Duration> {
    self.ttl
  }

  /// Check whether the entry has outlived its ttl.
  pub fn is_expired(&self, now: Instant) -> bool {
    self
      .ttl
      .is_some_and(|ttl| now.saturating_duration_since(self.created_at) >= ttl)
  }

  pub(crate) fn value(&self) -> &SharedValue {
    &self.value
  }
}

impl std::fmt::Debug for CacheEntry {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CacheEntry")
      .field("key", &self.key)
      .field("created_at", &self.created_at)
      .field("ttl", &self.ttl)
      .finish_non_exhaustive()
  }
}

/// Key -> entry map. At most one entry per key; expiry is checked lazily.
#[derive(Default)]
pub(crate) struct EntryTable {
  entries: HashMap<String, CacheEntry>,
}

impl EntryTable {
  /// Get a live entry, dropping it if it has expired.
  pub fn get(&mut self, key: &str) -> Option<&CacheEntry> {
    let expired = self
      .entries
      .get(key)
      .map(|entry| entry.is_expired(Instant::now()))?;

    if expired {
      self.entries.remove(key);
      return None;
    }

    self.entries.get(key)
  }

  pub fn insert(&mut self, key: String, value: SharedValue, ttl: Option<Duration>) {
    let entry = CacheEntry::new(key.clone(), value, ttl);
    self.entries.insert(key, entry);
  }

  /// Remove every entry whose key starts with one of `prefixes`.
  pub fn remove_prefixed(&mut self, prefixes: &[&str]) -> usize {
    let before = self.entries.len();
    self
      .entries
      .retain(|key, _| !prefixes.iter().any(|p| key.starts_with(p)));
    before - self.entries.len()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn clear(&mut self) {
    self.entries.clear();
  }
}
