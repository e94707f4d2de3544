//! Single-flight request executor with a keyed response cache.

use futures::future::{BoxFuture, FutureExt, Shared};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::{debug, warn};

use super::options::ExecuteOptions;
use super::storage::{CacheEntry, EntryTable, SharedValue};
use crate::error::ApiError;

type InFlight = Shared<BoxFuture<'static, Result<SharedValue, ApiError>>>;

struct PendingCall {
  /// Distinguishes this call from a later one registered under the same key
  id: u64,
  future: InFlight,
}

#[derive(Default)]
struct Inner {
  entries: EntryTable,
  in_flight: HashMap<String, PendingCall>,
  next_call_id: u64,
}

enum Lookup {
  Hit(SharedValue),
  Pending(InFlight),
}

impl Inner {
  fn lookup(&mut self, key: &str, force_refresh: bool) -> Option<Lookup> {
    if !force_refresh {
      if let Some(entry) = self.entries.get(key) {
        debug!(key, "cache hit");
        return Some(Lookup::Hit(Arc::clone(entry.value())));
      }
    }

    self.in_flight.get(key).map(|call| {
      debug!(key, "joining in-flight request");
      Lookup::Pending(call.future.clone())
    })
  }
}

/// Request executor that deduplicates in-flight calls and caches results by key.
///
/// For any key at most one underlying operation runs at a time: callers that
/// arrive while it is pending await the same result. Keys are independent;
/// callers namespace them (`fetchCities_...`, `fetchCity_42`) so that
/// [`clear_cache`](Self::clear_cache) can invalidate a family by prefix.
///
/// Cloning is cheap and every clone shares the same table.
#[derive(Clone, Default)]
pub struct RequestCache {
  inner: Arc<Mutex<Inner>>,
  default_ttl: Option<Duration>,
}

impl RequestCache {
  /// Create an empty cache whose entries live until invalidated.
  pub fn new() -> Self {
    Self::default()
  }

  /// Set the ttl applied when a call does not pass its own.
  pub fn with_default_ttl(mut self, ttl: Option<Duration>) -> Self {
    self.default_ttl = ttl;
    self
  }

  fn lock(&self) -> MutexGuard<'_, Inner> {
    lock(&self.inner)
  }

  /// Run `operation` under `key`, or reuse a cached or in-flight result.
  ///
  /// 1. Without `force_refresh`, a live cache entry is returned immediately
  /// 2. An in-flight call for the same key is joined instead of starting another
  /// 3. Otherwise the operation runs; on success the result is cached unless
  ///    `enable_cache` is off. Failures are never cached and reach every waiter.
  pub async fn execute<T, F, Fut>(
    &self,
    key: &str,
    options: ExecuteOptions,
    operation: F,
  ) -> Result<T, ApiError>
  where
    T: Clone + Send + Sync + 'static,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
  {
    let pending = match self.begin(key, options, operation) {
      Lookup::Hit(value) => return downcast(key, &value),
      Lookup::Pending(future) => future,
    };

    let value = pending.await?;
    downcast(key, &value)
  }

  /// Resolve a call to a cached value or an in-flight future, registering a
  /// new in-flight call when there is neither.
  fn begin<T, F, Fut>(&self, key: &str, options: ExecuteOptions, operation: F) -> Lookup
  where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
  {
    if let Some(found) = self.lock().lookup(key, options.force_refresh) {
      return found;
    }

    // Build the future outside the lock so the operation may touch the cache
    let operation = operation();
    let mut inner = self.lock();
    if let Some(found) = inner.lookup(key, options.force_refresh) {
      return found;
    }

    let id = inner.next_call_id;
    inner.next_call_id += 1;
    debug!(key, "starting request");

    let future = self.settle(key.to_string(), id, options, operation);
    inner.in_flight.insert(
      key.to_string(),
      PendingCall {
        id,
        future: future.clone(),
      },
    );
    Lookup::Pending(future)
  }

  /// Wrap an operation so that settling it updates the registry.
  fn settle<T, Fut>(&self, key: String, id: u64, options: ExecuteOptions, operation: Fut) -> InFlight
  where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
  {
    let inner = Arc::clone(&self.inner);
    let ttl = options.ttl.or(self.default_ttl);

    async move {
      let result = operation.await.map(|v| Arc::new(v) as SharedValue);

      let mut guard = lock(&inner);
      let still_registered = guard.in_flight.get(&key).is_some_and(|call| call.id == id);

      if still_registered {
        guard.in_flight.remove(&key);
        if let (Ok(value), true) = (&result, options.enable_cache) {
          guard.entries.insert(key.clone(), Arc::clone(value), ttl);
        }
      } else {
        debug!(key = %key, "request was invalidated while in flight, result not cached");
      }
      drop(guard);

      if let Err(e) = &result {
        warn!(key = %key, error = %e, "request failed");
      }
      result
    }
    .boxed()
    .shared()
  }

  /// Invalidate every cached and in-flight entry whose key starts with one of `prefixes`.
  ///
  /// Returns how many cache entries were dropped. Waiters on a dropped in-flight
  /// call still receive its result, but it is not written back to the cache.
  pub fn clear_cache(&self, prefixes: &[&str]) -> usize {
    let mut inner = self.lock();
    let removed = inner.entries.remove_prefixed(prefixes);
    inner
      .in_flight
      .retain(|key, _| !prefixes.iter().any(|p| key.starts_with(p)));
    debug!(?prefixes, removed, "cache invalidated");
    removed
  }

  /// Drop every entry and in-flight registration.
  pub fn clear_all(&self) {
    let mut inner = self.lock();
    inner.entries.clear();
    inner.in_flight.clear();
  }

  /// Read a live cached value without running anything.
  pub fn get_cached<T: Clone + 'static>(&self, key: &str) -> Option<T> {
    let mut inner = self.lock();
    let entry = inner.entries.get(key)?;
    (**entry.value()).downcast_ref::<T>().cloned()
  }

  /// Metadata of a live entry.
  pub fn entry(&self, key: &str) -> Option<CacheEntry> {
    self.lock().entries.get(key).cloned()
  }

  pub fn is_in_flight(&self, key: &str) -> bool {
    self.lock().in_flight.contains_key(key)
  }

  /// Number of stored entries, including expired ones not yet swept.
  ///
  /// Entries are only removed by invalidation or an expired read, so this
  /// grows with the number of distinct keys.
  pub fn len(&self) -> usize {
    self.lock().entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
  // The maps stay consistent between statements, so a poisoned lock is still usable
  inner.lock().unwrap_or_else(PoisonError::into_inner)
}

fn downcast<T: Clone + 'static>(key: &str, value: &SharedValue) -> Result<T, ApiError> {
  (**value)
    .downcast_ref::<T>()
    .cloned()
    .ok_or_else(|| ApiError::CacheTypeMismatch {
      key: key.to_string(),
    })
}
