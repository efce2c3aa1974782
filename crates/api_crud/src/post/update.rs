use crate::post::validate_post_form;
use actix_web::{
  web::{Data, Json, Path},
  HttpResponse,
};
use zhurnal_api_common::{
  context::ZhurnalContext,
  post::{CreatePost, EditPost, EditPostFormResponse},
  utils::redirect_to,
};
use zhurnal_db_schema::{
  newtypes::PostId,
  source::{
    group::Group,
    post::{Post, PostUpdateForm},
  },
  traits::Crud,
};
use zhurnal_db_views::structs::{PostView, UserView};
use zhurnal_utils::error::{ZhurnalErrorExt, ZhurnalErrorType, ZhurnalResult};

/// Loads a post for editing, refusing everyone but its author. Anyone else
/// is sent back to the post detail page without an explanation, the same
/// treatment for the form view and the submission.
async fn read_as_author(
  context: &ZhurnalContext,
  post_id: PostId,
  user_view: &UserView,
) -> ZhurnalResult<Post> {
  let post = Post::read(&mut context.pool(), post_id)
    .await
    .with_zhurnal_type(ZhurnalErrorType::NotFound)?;
  if post.author_id != user_view.user.id {
    return Err(ZhurnalErrorType::NoPostEditAllowed { post_id: post_id.0 }.into());
  }
  Ok(post)
}

pub async fn get_edit_form(
  post_id: Path<PostId>,
  context: Data<ZhurnalContext>,
  user_view: UserView,
) -> ZhurnalResult<Json<EditPostFormResponse>> {
  let post = read_as_author(&context, post_id.into_inner(), &user_view).await?;

  let post_view = PostView::read(&mut context.pool(), post.id).await?;
  let groups = Group::list(&mut context.pool()).await?;

  Ok(Json(EditPostFormResponse { post_view, groups }))
}

pub async fn update_post(
  post_id: Path<PostId>,
  data: Json<EditPost>,
  context: Data<ZhurnalContext>,
  user_view: UserView,
) -> ZhurnalResult<HttpResponse> {
  let post = read_as_author(&context, post_id.into_inner(), &user_view).await?;

  validate_post_form(&CreatePost {
    text: data.text.clone(),
    group_id: data.group_id,
    image: None,
  })?;

  if let Some(group_id) = data.group_id {
    Group::read(&mut context.pool(), group_id)
      .await
      .with_zhurnal_type(ZhurnalErrorType::NotFound)?;
  }

  let update_form = PostUpdateForm {
    text: Some(data.text.clone()),
    // an omitted group detaches the post
    group_id: Some(data.group_id),
  };
  Post::update(&mut context.pool(), post.id, &update_form)
    .await
    .with_zhurnal_type(ZhurnalErrorType::CouldntUpdatePost)?;

  Ok(redirect_to(format!("/posts/{}/", post.id)))
}
