//! Keyed request cache with in-flight deduplication.
//!
//! - At most one underlying call per key is in flight at a time
//! - Successful results are cached until their ttl expires or a prefix
//!   invalidation removes them
//! - Failures are shared with every waiter and never cached
//!
//! Entries are not evicted by size. A long session that browses many
//! distinct filter combinations keeps every page it loaded until a mutation
//! on that resource invalidates its prefix.

mod executor;
mod options;
mod storage;

pub use executor::RequestCache;
pub use options::ExecuteOptions;
pub use storage::CacheEntry;
