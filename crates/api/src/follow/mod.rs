use actix_web::{
  web::{Data, Path},
  HttpResponse,
};
use zhurnal_api_common::{context::ZhurnalContext, utils::redirect_to};
use zhurnal_db_schema::{
  source::{
    follow::{Follow, FollowForm},
    user::User,
  },
  traits::Followable,
};
use zhurnal_db_views::structs::UserView;
use zhurnal_utils::error::{ZhurnalErrorExt, ZhurnalErrorType, ZhurnalResult};

/// Follows an author. Following twice, or yourself, quietly changes nothing;
/// either way the client lands on their personal feed.
pub async fn profile_follow(
  username: Path<String>,
  context: Data<ZhurnalContext>,
  user_view: UserView,
) -> ZhurnalResult<HttpResponse> {
  let author = User::read_from_username(&mut context.pool(), &username)
    .await
    .with_zhurnal_type(ZhurnalErrorType::NotFound)?;

  let form = FollowForm::new(user_view.user.id, author.id);
  Follow::follow(&mut context.pool(), &form)
    .await
    .with_zhurnal_type(ZhurnalErrorType::CouldntFollow)?;

  Ok(redirect_to("/follow/".to_string()))
}

/// Unfollows an author. Unfollowing someone never followed is a no-op with
/// the same redirect.
pub async fn profile_unfollow(
  username: Path<String>,
  context: Data<ZhurnalContext>,
  user_view: UserView,
) -> ZhurnalResult<HttpResponse> {
  let author = User::read_from_username(&mut context.pool(), &username)
    .await
    .with_zhurnal_type(ZhurnalErrorType::NotFound)?;

  let form = FollowForm::new(user_view.user.id, author.id);
  Follow::unfollow(&mut context.pool(), &form)
    .await
    .with_zhurnal_type(ZhurnalErrorType::CouldntFollow)?;

  Ok(redirect_to("/follow/".to_string()))
}
