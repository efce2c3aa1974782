use crate::post::validate_post_form;
use actix_web::{
  web::{Data, Json},
  HttpResponse,
};
use zhurnal_api_common::{
  context::ZhurnalContext,
  post::{CreatePost, NewPostFormResponse},
  utils::redirect_to,
};
use zhurnal_db_schema::{
  source::{
    group::Group,
    post::{Post, PostInsertForm},
  },
  traits::Crud,
};
use zhurnal_db_views::structs::UserView;
use zhurnal_utils::error::{ZhurnalErrorExt, ZhurnalErrorType, ZhurnalResult};

/// The new-post form needs the list of groups for its dropdown.
pub async fn get_create_form(
  context: Data<ZhurnalContext>,
  _user_view: UserView,
) -> ZhurnalResult<Json<NewPostFormResponse>> {
  let groups = Group::list(&mut context.pool()).await?;

  Ok(Json(NewPostFormResponse { groups }))
}

pub async fn create_post(
  data: Json<CreatePost>,
  context: Data<ZhurnalContext>,
  user_view: UserView,
) -> ZhurnalResult<HttpResponse> {
  let image = validate_post_form(&data)?;

  if let Some(group_id) = data.group_id {
    // a dangling group id means the form was tampered with
    Group::read(&mut context.pool(), group_id)
      .await
      .with_zhurnal_type(ZhurnalErrorType::NotFound)?;
  }

  let post_form = PostInsertForm {
    group_id: data.group_id,
    image,
    ..PostInsertForm::new(data.text.clone(), user_view.user.id)
  };

  Post::create(&mut context.pool(), &post_form)
    .await
    .with_zhurnal_type(ZhurnalErrorType::CouldntCreatePost)?;

  // The home feed stays stale until its TTL runs out, the new post appears
  // on the author's profile right away.
  Ok(redirect_to(format!("/profile/{}/", user_view.user.username)))
}

#[cfg(test)]
mod tests {

  use super::*;
  use crate::test_utils::{context_for_tests, make_test_user};
  use actix_web::http::header::LOCATION;
  use pretty_assertions::assert_eq;
  use serial_test::serial;
  use zhurnal_db_schema::source::user::User;
  use zhurnal_utils::error::ZhurnalResult;

  #[tokio::test]
  #[serial]
  async fn test_create_redirects_to_profile() -> ZhurnalResult<()> {
    let context = Data::new(context_for_tests().await);
    let user_view = make_test_user(&mut context.pool()).await?;

    let data = Json(CreatePost {
      text: "Текст из формы".into(),
      group_id: None,
      image: None,
    });
    let res = create_post(data, context.clone(), user_view.clone()).await?;

    assert_eq!(302, res.status().as_u16());
    let location = res.headers().get(LOCATION).and_then(|l| l.to_str().ok());
    assert_eq!(Some("/profile/auth/"), location);

    User::delete(&mut context.pool(), user_view.user.id).await?;
    Ok(())
  }

  #[tokio::test]
  #[serial]
  async fn test_invalid_form_creates_nothing() -> ZhurnalResult<()> {
    let context = Data::new(context_for_tests().await);
    let user_view = make_test_user(&mut context.pool()).await?;

    let data = Json(CreatePost {
      text: "   ".into(),
      group_id: None,
      image: None,
    });
    let res = create_post(data, context.clone(), user_view.clone()).await;
    assert!(res.is_err());

    let count = Post::count_for_author(&mut context.pool(), user_view.user.id).await?;
    assert_eq!(0, count);

    User::delete(&mut context.pool(), user_view.user.id).await?;
    Ok(())
  }
}
