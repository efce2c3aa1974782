use actix_web::{
  web::{Data, Json, Path},
  HttpResponse,
};
use zhurnal_api_common::{comment::CreateComment, context::ZhurnalContext, utils::redirect_to};
use zhurnal_db_schema::{
  newtypes::PostId,
  source::{
    comment::{Comment, CommentInsertForm},
    post::Post,
  },
  traits::Crud,
};
use zhurnal_db_views::structs::UserView;
use zhurnal_utils::{
  error::{ZhurnalErrorExt, ZhurnalErrorType, ZhurnalResult},
  validation::is_valid_comment_text,
};

/// Attaches a comment to a post and sends the client back to the detail
/// page. A comment that fails validation is dropped, not bounced: the
/// redirect happens either way and the thread simply doesn't grow.
pub async fn create_comment(
  post_id: Path<PostId>,
  data: Json<CreateComment>,
  context: Data<ZhurnalContext>,
  user_view: UserView,
) -> ZhurnalResult<HttpResponse> {
  let post_id = post_id.into_inner();

  let post = Post::read(&mut context.pool(), post_id)
    .await
    .with_zhurnal_type(ZhurnalErrorType::NotFound)?;

  match is_valid_comment_text(&data.text) {
    Ok(()) => {
      let form = CommentInsertForm::new(user_view.user.id, post.id, data.text.clone());
      Comment::create(&mut context.pool(), &form)
        .await
        .with_zhurnal_type(ZhurnalErrorType::CouldntCreateComment)?;
    }
    Err(message) => {
      tracing::warn!("discarding invalid comment on post {}: {message}", post.id);
    }
  }

  Ok(redirect_to(format!("/posts/{}/", post.id)))
}

#[cfg(test)]
mod tests {

  use super::*;
  use crate::test_utils::{context_for_tests, make_test_user};
  use actix_web::http::header::LOCATION;
  use pretty_assertions::assert_eq;
  use serial_test::serial;
  use zhurnal_db_schema::source::{post::PostInsertForm, user::User};
  use zhurnal_db_views::structs::CommentView;
  use zhurnal_utils::error::ZhurnalResult;

  #[tokio::test]
  #[serial]
  async fn test_comment_lands_in_thread() -> ZhurnalResult<()> {
    let context = Data::new(context_for_tests().await);
    let user_view = make_test_user(&mut context.pool()).await?;
    let post = Post::create(
      &mut context.pool(),
      &PostInsertForm::new("Текст из формы".into(), user_view.user.id),
    )
    .await?;

    let data = Json(CreateComment {
      text: "Комментарий из формы".into(),
    });
    let res = create_comment(Path::from(post.id), data, context.clone(), user_view.clone()).await?;

    assert_eq!(302, res.status().as_u16());
    let location = res.headers().get(LOCATION).and_then(|l| l.to_str().ok());
    assert_eq!(Some(format!("/posts/{}/", post.id).as_str()), location);

    let thread = CommentView::for_post(&mut context.pool(), post.id).await?;
    assert_eq!(1, thread.len());

    User::delete(&mut context.pool(), user_view.user.id).await?;
    Ok(())
  }

  #[tokio::test]
  #[serial]
  async fn test_invalid_comment_still_redirects() -> ZhurnalResult<()> {
    let context = Data::new(context_for_tests().await);
    let user_view = make_test_user(&mut context.pool()).await?;
    let post = Post::create(
      &mut context.pool(),
      &PostInsertForm::new("Текст из формы".into(), user_view.user.id),
    )
    .await?;

    let data = Json(CreateComment {
      text: "   ".into(),
    });
    let res = create_comment(Path::from(post.id), data, context.clone(), user_view.clone()).await?;
    assert_eq!(302, res.status().as_u16());

    // the redirect happened but nothing was stored
    let thread = CommentView::for_post(&mut context.pool(), post.id).await?;
    assert_eq!(0, thread.len());

    User::delete(&mut context.pool(), user_view.user.id).await?;
    Ok(())
  }

  #[tokio::test]
  #[serial]
  async fn test_comment_on_missing_post_is_not_found() -> ZhurnalResult<()> {
    let context = Data::new(context_for_tests().await);
    let user_view = make_test_user(&mut context.pool()).await?;

    let data = Json(CreateComment {
      text: "Комментарий из формы".into(),
    });
    let res = create_comment(Path::from(PostId(-1)), data, context.clone(), user_view.clone()).await;

    let err = match res {
      Err(e) => e,
      Ok(_) => panic!("commenting a missing post must 404"),
    };
    assert_eq!(ZhurnalErrorType::NotFound, err.error_type);

    User::delete(&mut context.pool(), user_view.user.id).await?;
    Ok(())
  }
}
