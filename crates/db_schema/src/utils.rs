use chrono::{DateTime, Utc};
use deadpool::Runtime;
use diesel::{
  result::{Error as DieselError, Error::QueryBuilderError},
  Connection,
  PgConnection,
};
use diesel_async::{
  pg::AsyncPgConnection,
  pooled_connection::{
    deadpool::{Object as PooledConnection, Pool},
    AsyncDieselConnectionManager,
  },
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::{
  env,
  ops::{Deref, DerefMut},
};
use tracing::info;
use zhurnal_utils::{
  error::{ZhurnalError, ZhurnalResult},
  settings::SETTINGS,
};

/// Feeds fetch at most this many posts per page.
const FETCH_LIMIT_DEFAULT: i64 = 10;
pub const FETCH_LIMIT_MAX: i64 = 10;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub type ActualDbPool = Pool<AsyncPgConnection>;

/// References a pool or connection. Functions must take `&mut DbPool<'_>` to allow implicit
/// reborrowing.
///
/// https://github.com/rust-lang/rfcs/issues/1403
pub enum DbPool<'a> {
  Pool(&'a ActualDbPool),
  Conn(&'a mut AsyncPgConnection),
}

pub enum DbConn<'a> {
  Pool(PooledConnection<AsyncPgConnection>),
  Conn(&'a mut AsyncPgConnection),
}

pub async fn get_conn<'a, 'b: 'a>(pool: &'a mut DbPool<'b>) -> Result<DbConn<'a>, DieselError> {
  Ok(match pool {
    DbPool::Pool(pool) => DbConn::Pool(pool.get().await.map_err(|e| QueryBuilderError(e.into()))?),
    DbPool::Conn(conn) => DbConn::Conn(conn),
  })
}

impl Deref for DbConn<'_> {
  type Target = AsyncPgConnection;

  fn deref(&self) -> &Self::Target {
    match self {
      DbConn::Pool(conn) => conn.deref(),
      DbConn::Conn(conn) => conn.deref(),
    }
  }
}

impl DerefMut for DbConn<'_> {
  fn deref_mut(&mut self) -> &mut Self::Target {
    match self {
      DbConn::Pool(conn) => conn.deref_mut(),
      DbConn::Conn(conn) => conn.deref_mut(),
    }
  }
}

// Allows functions that take `DbPool<'_>` to be called in a transaction by passing `&mut
// conn.into()`
impl<'a> From<&'a mut AsyncPgConnection> for DbPool<'a> {
  fn from(value: &'a mut AsyncPgConnection) -> Self {
    DbPool::Conn(value)
  }
}

impl<'a, 'b: 'a> From<&'a mut DbConn<'b>> for DbPool<'a> {
  fn from(value: &'a mut DbConn<'b>) -> Self {
    DbPool::Conn(value.deref_mut())
  }
}

impl<'a> From<&'a ActualDbPool> for DbPool<'a> {
  fn from(value: &'a ActualDbPool) -> Self {
    DbPool::Pool(value)
  }
}

/// Page numbers are 1-indexed; anything below 1 is a query error rather than
/// an empty list. Pages past the end simply come back empty.
pub fn limit_and_offset(
  page: Option<i64>,
  limit: Option<i64>,
) -> Result<(i64, i64), diesel::result::Error> {
  let page = match page {
    Some(page) => {
      if page < 1 {
        return Err(QueryBuilderError("Page is < 1".into()));
      }
      page
    }
    None => 1,
  };
  let limit = match limit {
    Some(limit) => {
      if !(1..=FETCH_LIMIT_MAX).contains(&limit) {
        return Err(QueryBuilderError(
          format!("Fetch limit is > {FETCH_LIMIT_MAX}").into(),
        ));
      }
      limit
    }
    None => FETCH_LIMIT_DEFAULT,
  };
  let offset = limit * (page - 1);
  Ok((limit, offset))
}

/// The database url, env var first so tests can point at a throwaway
/// database without a config file.
pub fn get_database_url() -> String {
  match env::var("ZHURNAL_DATABASE_URL") {
    Ok(url) => url,
    Err(_) => SETTINGS.get_database_url(),
  }
}

fn run_migrations(db_url: &str) -> ZhurnalResult<()> {
  // Migrations run on a synchronous connection before the async pool exists.
  let mut conn = PgConnection::establish(db_url)?;
  info!("Running database migrations (this may take a while)...");
  conn
    .run_pending_migrations(MIGRATIONS)
    .map_err(|e| ZhurnalError::from(anyhow::anyhow!("Couldn't run DB Migrations: {e}")))?;
  info!("Database migrations complete.");
  Ok(())
}

pub async fn build_db_pool() -> ZhurnalResult<ActualDbPool> {
  let db_url = get_database_url();
  let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&db_url);
  let pool = Pool::builder(manager)
    .max_size(SETTINGS.database().pool_size)
    .runtime(Runtime::Tokio1)
    .build()?;

  run_migrations(&db_url)?;

  Ok(pool)
}

#[allow(clippy::expect_used)]
pub async fn build_db_pool_for_tests() -> ActualDbPool {
  build_db_pool().await.expect("db pool missing")
}

pub fn naive_now() -> DateTime<Utc> {
  Utc::now()
}

pub mod functions {
  use diesel::sql_types::Text;

  sql_function!(fn lower(x: Text) -> Text);
}

#[cfg(test)]
mod tests {

  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_limit_and_offset_defaults() -> Result<(), DieselError> {
    assert_eq!((10, 0), limit_and_offset(None, None)?);
    assert_eq!((10, 0), limit_and_offset(Some(1), None)?);
    assert_eq!((10, 10), limit_and_offset(Some(2), None)?);
    assert_eq!((5, 10), limit_and_offset(Some(3), Some(5))?);

    Ok(())
  }

  #[test]
  fn test_limit_and_offset_rejects_bad_input() {
    assert!(limit_and_offset(Some(0), None).is_err());
    assert!(limit_and_offset(Some(-2), None).is_err());
    assert!(limit_and_offset(None, Some(0)).is_err());
    assert!(limit_and_offset(None, Some(FETCH_LIMIT_MAX + 1)).is_err());
  }
}
