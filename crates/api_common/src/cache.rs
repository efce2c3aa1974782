use moka::future::Cache;
use std::time::Duration;

/// Pages worth keeping; readers rarely walk deeper than this before the TTL
/// would have expired anyway.
const CACHED_PAGES_MAX: u64 = 64;

/// The home-feed cache, keyed by page number and holding the serialized
/// page body. Entries expire on their own after the TTL; deletes are NOT
/// propagated per key, a removed post stays visible until expiry or until
/// an operator clears the cache.
#[derive(Clone)]
pub struct FeedCache {
  pages: Cache<i64, String>,
}

impl FeedCache {
  pub fn new(ttl: Duration) -> Self {
    FeedCache {
      pages: Cache::builder()
        .max_capacity(CACHED_PAGES_MAX)
        .time_to_live(ttl)
        .build(),
    }
  }

  pub async fn get(&self, page: i64) -> Option<String> {
    self.pages.get(&page).await
  }

  pub async fn insert(&self, page: i64, body: String) {
    self.pages.insert(page, body).await;
  }

  /// Global invalidation, the operator-visible "clear cache" action. There
  /// is no per-key variant.
  pub fn clear(&self) {
    self.pages.invalidate_all();
  }
}
