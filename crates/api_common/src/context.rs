use crate::cache::FeedCache;
use std::sync::Arc;
use zhurnal_db_schema::{
  source::secret::Secret,
  utils::{ActualDbPool, DbPool},
};
use zhurnal_utils::settings::{structs::Settings, SETTINGS};

#[derive(Clone)]
pub struct ZhurnalContext {
  pool: ActualDbPool,
  cache: FeedCache,
  secret: Arc<Secret>,
}

impl ZhurnalContext {
  pub fn create(pool: ActualDbPool, cache: FeedCache, secret: Secret) -> ZhurnalContext {
    ZhurnalContext {
      pool,
      cache,
      secret: Arc::new(secret),
    }
  }
  pub fn pool(&self) -> DbPool<'_> {
    DbPool::Pool(&self.pool)
  }
  pub fn inner_pool(&self) -> &ActualDbPool {
    &self.pool
  }
  pub fn cache(&self) -> &FeedCache {
    &self.cache
  }
  pub fn settings(&self) -> &'static Settings {
    &SETTINGS
  }
  pub fn secret(&self) -> &Secret {
    &self.secret
  }
}
