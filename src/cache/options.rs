use std::time::Duration;

/// Per-call options for [`RequestCache::execute`](super::RequestCache::execute).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecuteOptions {
  /// Store a successful result. Disabled calls still share in-flight requests.
  pub enable_cache: bool,
  /// Skip the cache lookup and go to the network (joining an in-flight call if any).
  pub force_refresh: bool,
  /// Entry lifetime. Falls back to the cache's default ttl when `None`.
  pub ttl: Option<Duration>,
}

impl Default for ExecuteOptions {
  fn default() -> Self {
    Self {
      enable_cache: true,
      force_refresh: false,
      ttl: None,
    }
  }
}

impl ExecuteOptions {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn force_refresh(mut self, force: bool) -> Self {
    self.force_refresh = force;
    self
  }

  /// Always revalidate; the result is not stored.
  pub fn no_cache(mut self) -> Self {
    self.enable_cache = false;
    self
  }

  pub fn ttl(mut self, ttl: Duration) -> Self {
    self.ttl = Some(ttl);
    self
  }
}
