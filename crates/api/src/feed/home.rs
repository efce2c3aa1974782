use actix_web::{
  http::header::ContentType,
  web::{Data, Query},
  HttpResponse,
};
use zhurnal_api_common::{
  context::ZhurnalContext,
  post::{GetPosts, GetPostsResponse},
};
use zhurnal_db_views::post_view::PostQuery;
use zhurnal_utils::error::ZhurnalResult;

/// The home feed, every post newest first. The only cached route: each page
/// is rendered once per TTL and then served as a stored body, so a fresh
/// post (or a deleted one) may lag behind by up to the cache duration.
pub async fn get_home_feed(
  query: Query<GetPosts>,
  context: Data<ZhurnalContext>,
) -> ZhurnalResult<HttpResponse> {
  let page = query.page.unwrap_or(1);

  if let Some(body) = context.cache().get(page).await {
    return Ok(
      HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(body),
    );
  }

  let posts = PostQuery {
    page: Some(page),
    ..Default::default()
  }
  .list(&mut context.pool())
  .await?;

  let body = serde_json::to_string(&GetPostsResponse { posts })?;
  context.cache().insert(page, body.clone()).await;

  Ok(
    HttpResponse::Ok()
      .content_type(ContentType::json())
      .body(body),
  )
}

#[cfg(test)]
mod tests {

  use super::*;
  use crate::test_utils::{context_for_tests, make_user};
  use actix_web::body::MessageBody;
  use pretty_assertions::assert_eq;
  use serial_test::serial;
  use zhurnal_db_schema::{
    source::{
      post::{Post, PostInsertForm},
      user::User,
    },
    traits::Crud,
  };
  use zhurnal_utils::error::ZhurnalResult;

  fn body_of(res: HttpResponse) -> String {
    let bytes = res.into_body().try_into_bytes().unwrap_or_default();
    String::from_utf8(bytes.to_vec()).unwrap_or_default()
  }

  #[tokio::test]
  #[serial]
  async fn test_page_is_served_from_cache_until_cleared() -> ZhurnalResult<()> {
    let context = Data::new(context_for_tests().await);
    let author = make_user(&mut context.pool(), "auth").await?;

    Post::create(
      &mut context.pool(),
      &PostInsertForm::new("Текст из формы".into(), author.user.id),
    )
    .await?;

    let doomed = Post::create(
      &mut context.pool(),
      &PostInsertForm::new("Удалённый пост".into(), author.user.id),
    )
    .await?;

    let first = get_home_feed(Query(GetPosts { page: None }), context.clone()).await?;
    let first_body = body_of(first);
    assert!(first_body.contains("Текст из формы"));
    assert!(first_body.contains("Удалённый пост"));

    // a deleted post stays in the cached rendering until invalidation
    Post::delete(&mut context.pool(), doomed.id).await?;
    let cached = get_home_feed(Query(GetPosts { page: Some(1) }), context.clone()).await?;
    assert_eq!(first_body, body_of(cached));

    // clearing the cache makes the deletion visible
    context.cache().clear();
    let fresh = get_home_feed(Query(GetPosts { page: Some(1) }), context.clone()).await?;
    assert!(!body_of(fresh).contains("Удалённый пост"));

    User::delete(&mut context.pool(), author.user.id).await?;
    Ok(())
  }

  #[tokio::test]
  #[serial]
  async fn test_page_below_one_is_refused() -> ZhurnalResult<()> {
    let context = Data::new(context_for_tests().await);

    let res = get_home_feed(Query(GetPosts { page: Some(0) }), context.clone()).await;
    assert!(res.is_err());

    Ok(())
  }
}
