use actix_web::web::{Data, Json, Path};
use zhurnal_api_common::{context::ZhurnalContext, post::GetPostResponse};
use zhurnal_db_schema::{newtypes::PostId, source::post::Post};
use zhurnal_db_views::structs::{CommentView, PostView};
use zhurnal_utils::error::{ZhurnalErrorExt, ZhurnalErrorType, ZhurnalResult};

/// The post detail page: the post with its author and group, the full
/// comment thread and the author's post count. Visible to everyone.
pub async fn get_post(
  post_id: Path<PostId>,
  context: Data<ZhurnalContext>,
) -> ZhurnalResult<Json<GetPostResponse>> {
  let post_id = post_id.into_inner();

  let post_view = PostView::read(&mut context.pool(), post_id)
    .await
    .with_zhurnal_type(ZhurnalErrorType::NotFound)?;
  let comments = CommentView::for_post(&mut context.pool(), post_id).await?;
  let creator_post_count =
    Post::count_for_author(&mut context.pool(), post_view.post.author_id).await?;

  Ok(Json(GetPostResponse {
    post_view,
    comments,
    creator_post_count,
  }))
}

#[cfg(test)]
mod tests {

  use super::*;
  use crate::test_utils::{context_for_tests, make_test_user};
  use pretty_assertions::assert_eq;
  use serial_test::serial;
  use zhurnal_db_schema::{
    source::{
      comment::{Comment, CommentInsertForm},
      post::PostInsertForm,
      user::User,
    },
    traits::Crud,
  };
  use zhurnal_utils::error::ZhurnalResult;

  #[tokio::test]
  #[serial]
  async fn test_detail_carries_thread_and_count() -> ZhurnalResult<()> {
    let context = Data::new(context_for_tests().await);
    let user_view = make_test_user(&mut context.pool()).await?;

    let post = Post::create(
      &mut context.pool(),
      &PostInsertForm::new("Текст из формы".into(), user_view.user.id),
    )
    .await?;
    Comment::create(
      &mut context.pool(),
      &CommentInsertForm::new(user_view.user.id, post.id, "Комментарий из формы".into()),
    )
    .await?;

    let res = get_post(Path::from(post.id), context.clone()).await?;
    assert_eq!(post.id, res.post_view.post.id);
    assert_eq!(1, res.comments.len());
    assert_eq!(1, res.creator_post_count);

    User::delete(&mut context.pool(), user_view.user.id).await?;
    Ok(())
  }

  #[tokio::test]
  #[serial]
  async fn test_missing_post_is_not_found() -> ZhurnalResult<()> {
    let context = Data::new(context_for_tests().await);

    let res = get_post(Path::from(PostId(-1)), context).await;
    let err = match res {
      Err(e) => e,
      Ok(_) => panic!("a missing post must 404"),
    };
    assert_eq!(ZhurnalErrorType::NotFound, err.error_type);

    Ok(())
  }
}
