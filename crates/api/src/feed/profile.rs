use actix_web::web::{Data, Json, Path, Query};
use zhurnal_api_common::{
  context::ZhurnalContext,
  post::GetPosts,
  user::ProfileResponse,
};
use zhurnal_db_schema::{
  source::{follow::Follow, post::Post, user::User},
  traits::Followable,
};
use zhurnal_db_views::{post_view::PostQuery, structs::UserView};
use zhurnal_utils::error::{ZhurnalErrorExt, ZhurnalErrorType, ZhurnalResult};

/// An author's profile: their posts newest first, the lifetime post count
/// and, for logged-in requesters, whether they follow this author. The
/// route itself is public, so the session is optional here.
pub async fn get_profile(
  username: Path<String>,
  query: Query<GetPosts>,
  context: Data<ZhurnalContext>,
  requester: Option<UserView>,
) -> ZhurnalResult<Json<ProfileResponse>> {
  let user = User::read_from_username(&mut context.pool(), &username)
    .await
    .with_zhurnal_type(ZhurnalErrorType::NotFound)?;

  let posts = PostQuery {
    creator_id: Some(user.id),
    page: query.page,
    ..Default::default()
  }
  .list(&mut context.pool())
  .await?;
  let post_count = Post::count_for_author(&mut context.pool(), user.id).await?;

  let following = match requester {
    Some(requester) => {
      Some(Follow::is_following(&mut context.pool(), requester.user.id, user.id).await?)
    }
    None => None,
  };

  Ok(Json(ProfileResponse {
    user,
    posts,
    post_count,
    following,
  }))
}
