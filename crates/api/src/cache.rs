use actix_web::web::{Data, Json};
use zhurnal_api_common::{context::ZhurnalContext, utils::SuccessResponse};
use zhurnal_db_views::structs::UserView;
use zhurnal_utils::error::ZhurnalResult;

/// Drops every cached feed page at once, the operator's lever for making a
/// removed post disappear before the TTL would have expired it.
pub async fn clear_cache(
  context: Data<ZhurnalContext>,
  user_view: UserView,
) -> ZhurnalResult<Json<SuccessResponse>> {
  context.cache().clear();
  tracing::info!("feed cache cleared by {}", user_view.user.username);

  Ok(Json(SuccessResponse::default()))
}

#[cfg(test)]
mod tests {

  use super::*;
  use crate::test_utils::{context_for_tests, make_user};
  use pretty_assertions::assert_eq;
  use serial_test::serial;
  use zhurnal_db_schema::{source::user::User, traits::Crud};
  use zhurnal_utils::error::ZhurnalResult;

  #[tokio::test]
  #[serial]
  async fn test_clear_empties_the_cache() -> ZhurnalResult<()> {
    let context = Data::new(context_for_tests().await);
    let user_view = make_user(&mut context.pool(), "auth").await?;

    context.cache().insert(1, "a stale page".into()).await;

    let res = clear_cache(context.clone(), user_view.clone()).await?;
    assert!(res.success);
    assert_eq!(None, context.cache().get(1).await);

    User::delete(&mut context.pool(), user_view.user.id).await?;
    Ok(())
  }
}
