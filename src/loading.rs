//! Process-wide registry of named busy flags.
//!
//! Each logical operation owns a key (`"cities.list"`, `"news.mutation"`).
//! Subscribers registered under a key hear about that key only; subscribers
//! under [`GLOBAL_KEY`] hear the OR of every flag each time any flag is set.
//!
//! The manager is not tied to any UI lifecycle. Create one, clone it into
//! every store and every view that needs it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tracing::{trace, warn};

/// Reserved key whose subscribers receive the aggregated flag.
pub const GLOBAL_KEY: &str = "global";

type Callback = Arc<dyn Fn(bool) + Send + Sync>;

#[derive(Default)]
struct Registry {
  flags: HashMap<String, bool>,
  subscribers: HashMap<String, Vec<(u64, Callback)>>,
  next_subscriber_id: u64,
}

impl Registry {
  fn global(&self) -> bool {
    self.flags.values().any(|active| *active)
  }

  fn callbacks(&self, key: &str) -> Vec<Callback> {
    self
      .subscribers
      .get(key)
      .map(|subs| subs.iter().map(|(_, cb)| Arc::clone(cb)).collect())
      .unwrap_or_default()
  }
}

/// Registry of busy flags with subscriber notification.
///
/// Cloning is cheap; clones share one registry.
#[derive(Clone, Default)]
pub struct LoadingManager {
  registry: Arc<Mutex<Registry>>,
}

impl LoadingManager {
  pub fn new() -> Self {
    Self::default()
  }

  fn lock(&self) -> MutexGuard<'_, Registry> {
    self.registry.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// Register `callback` for `key`. Use [`GLOBAL_KEY`] for the aggregated flag.
  ///
  /// The callback is removed when the returned [`Subscription`] is dropped or
  /// unsubscribed. The flag itself is kept.
  pub fn subscribe<F>(&self, key: &str, callback: F) -> Subscription
  where
    F: Fn(bool) + Send + Sync + 'static,
  {
    let mut registry = self.lock();
    let id = registry.next_subscriber_id;
    registry.next_subscriber_id += 1;

    if key != GLOBAL_KEY {
      registry.flags.entry(key.to_string()).or_insert(false);
    }
    registry
      .subscribers
      .entry(key.to_string())
      .or_default()
      .push((id, Arc::new(callback)));

    Subscription {
      registry: Arc::downgrade(&self.registry),
      key: key.to_string(),
      id,
    }
  }

  /// Set a flag and notify its subscribers, then the global subscribers.
  ///
  /// Callbacks run synchronously on the calling task, after the registry
  /// lock is released, so a callback may call back into the manager.
  pub fn set_loading(&self, key: &str, active: bool) {
    if key == GLOBAL_KEY {
      warn!("ignoring attempt to set the reserved '{}' loading key", GLOBAL_KEY);
      return;
    }

    let (keyed, global_subs, global) = {
      let mut registry = self.lock();
      registry.flags.insert(key.to_string(), active);
      (
        registry.callbacks(key),
        registry.callbacks(GLOBAL_KEY),
        registry.global(),
      )
    };

    trace!(key, active, global, "loading flag set");

    for callback in keyed {
      callback(active);
    }
    for callback in global_subs {
      callback(global);
    }
  }

  /// Current value of one flag; unknown keys are not loading.
  pub fn is_loading(&self, key: &str) -> bool {
    if key == GLOBAL_KEY {
      return self.global_loading_state();
    }
    self.lock().flags.get(key).copied().unwrap_or(false)
  }

  /// True iff at least one flag is active.
  pub fn global_loading_state(&self) -> bool {
    self.lock().global()
  }

  /// Keys whose flag is currently active, sorted.
  pub fn active_keys(&self) -> Vec<String> {
    let mut keys: Vec<String> = self
      .lock()
      .flags
      .iter()
      .filter(|(_, active)| **active)
      .map(|(key, _)| key.clone())
      .collect();
    keys.sort();
    keys
  }

  /// Set `key` for as long as the returned guard lives.
  pub fn track(&self, key: &str) -> LoadingGuard {
    self.set_loading(key, true);
    LoadingGuard {
      manager: self.clone(),
      key: key.to_string(),
    }
  }
}

/// Handle for a registered callback.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
  registry: Weak<Mutex<Registry>>,
  key: String,
  id: u64,
}

impl Subscription {
  pub fn key(&self) -> &str {
    &self.key
  }

  pub fn unsubscribe(self) {
    // Drop does the work
  }
}

impl Drop for Subscription {
  fn drop(&mut self) {
    let Some(registry) = self.registry.upgrade() else {
      return;
    };
    let mut registry = registry.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(subs) = registry.subscribers.get_mut(&self.key) {
      subs.retain(|(id, _)| *id != self.id);
      if subs.is_empty() {
        registry.subscribers.remove(&self.key);
      }
    }
  }
}

/// Clears its flag on drop.
#[must_use = "the flag is cleared as soon as the guard is dropped"]
pub struct LoadingGuard {
  manager: LoadingManager,
  key: String,
}

impl Drop for LoadingGuard {
  fn drop(&mut self) {
    self.manager.set_loading(&self.key, false);
  }
}
