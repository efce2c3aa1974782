use actix_web::web::{Data, Json, Query};
use zhurnal_api_common::{
  context::ZhurnalContext,
  post::{GetPosts, GetPostsResponse},
};
use zhurnal_db_views::{post_view::PostQuery, structs::UserView};
use zhurnal_utils::error::ZhurnalResult;

/// The personal feed: posts by the authors the requester follows. Login
/// required; there is nothing to show an anonymous reader.
pub async fn get_follow_feed(
  query: Query<GetPosts>,
  context: Data<ZhurnalContext>,
  user_view: UserView,
) -> ZhurnalResult<Json<GetPostsResponse>> {
  let posts = PostQuery {
    followed_by: Some(user_view.user.id),
    page: query.page,
    ..Default::default()
  }
  .list(&mut context.pool())
  .await?;

  Ok(Json(GetPostsResponse { posts }))
}

#[cfg(test)]
mod tests {

  use super::*;
  use crate::test_utils::{context_for_tests, make_user};
  use pretty_assertions::assert_eq;
  use serial_test::serial;
  use zhurnal_db_schema::{
    source::{
      follow::{Follow, FollowForm},
      post::{Post, PostInsertForm},
      user::User,
    },
    traits::{Crud, Followable},
  };
  use zhurnal_utils::error::ZhurnalResult;

  #[tokio::test]
  #[serial]
  async fn test_feed_only_has_followed_authors() -> ZhurnalResult<()> {
    let context = Data::new(context_for_tests().await);
    let author = make_user(&mut context.pool(), "auth").await?;
    let reader = make_user(&mut context.pool(), "reader").await?;

    let post = Post::create(
      &mut context.pool(),
      &PostInsertForm::new("Пост для подписчиков".into(), author.user.id),
    )
    .await?;

    let empty = get_follow_feed(Query(GetPosts::default()), context.clone(), reader.clone()).await?;
    assert_eq!(0, empty.posts.len());

    Follow::follow(
      &mut context.pool(),
      &FollowForm::new(reader.user.id, author.user.id),
    )
    .await?;

    let feed = get_follow_feed(Query(GetPosts::default()), context.clone(), reader.clone()).await?;
    assert_eq!(1, feed.posts.len());
    assert_eq!(Some(post.id), feed.posts.first().map(|p| p.post.id));

    User::delete(&mut context.pool(), author.user.id).await?;
    User::delete(&mut context.pool(), reader.user.id).await?;
    Ok(())
  }
}
