#![allow(clippy::expect_used)]

use zhurnal_api_common::{cache::FeedCache, context::ZhurnalContext};
use zhurnal_db_schema::{
  source::{
    secret::Secret,
    user::{User, UserInsertForm},
  },
  traits::Crud,
  utils::{build_db_pool_for_tests, DbPool},
};
use zhurnal_db_views::structs::UserView;
use zhurnal_utils::{error::ZhurnalResult, CACHE_DURATION_FEED};

pub(crate) async fn context_for_tests() -> ZhurnalContext {
  let pool = build_db_pool_for_tests().await;
  let secret = {
    let pool = &mut (&pool).into();
    Secret::init(pool).await.expect("jwt secret is seeded")
  };
  ZhurnalContext::create(pool, FeedCache::new(CACHE_DURATION_FEED), secret)
}

pub(crate) async fn make_test_user(pool: &mut DbPool<'_>) -> ZhurnalResult<UserView> {
  let user = User::create(
    pool,
    &UserInsertForm::new(
      "auth".into(),
      "Лев".into(),
      "Толстой".into(),
      "auth@zhurnal.example".into(),
    ),
  )
  .await?;
  Ok(UserView { user })
}
