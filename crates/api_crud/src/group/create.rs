use actix_web::web::{Data, Json};
use diesel::result::{DatabaseErrorKind, Error};
use zhurnal_api_common::{
  context::ZhurnalContext,
  group::{CreateGroup, GroupResponse},
};
use zhurnal_db_schema::{
  source::group::{Group, GroupInsertForm},
  traits::Crud,
};
use zhurnal_db_views::structs::UserView;
use zhurnal_utils::{
  error::{FieldErrors, ZhurnalError, ZhurnalErrorType, ZhurnalResult},
  validation::{is_valid_group_description, is_valid_group_slug, is_valid_group_title},
};

/// Creates a topical group. An administrative action in spirit, but any
/// logged-in user may call it; the slug has to be unique.
pub async fn create_group(
  data: Json<CreateGroup>,
  context: Data<ZhurnalContext>,
  _user_view: UserView,
) -> ZhurnalResult<Json<GroupResponse>> {
  let mut errors = FieldErrors::new();
  errors.check("title", is_valid_group_title(&data.title));
  errors.check("slug", is_valid_group_slug(&data.slug));
  errors.check("description", is_valid_group_description(&data.description));
  errors.into_result()?;

  let form = GroupInsertForm::new(
    data.title.clone(),
    data.slug.clone(),
    data.description.clone(),
  );
  let group = Group::create(&mut context.pool(), &form)
    .await
    .map_err(|e| match e {
      // a taken slug renders as a form error, like any other field problem
      Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
        let mut errors = FieldErrors::new();
        errors.add("slug", "a group with this slug already exists");
        ZhurnalError::from(ZhurnalErrorType::InvalidForm(errors))
      }
      _ => ZhurnalErrorType::CouldntCreateGroup.into(),
    })?;

  Ok(Json(GroupResponse { group }))
}

#[cfg(test)]
mod tests {

  use super::*;
  use crate::test_utils::{context_for_tests, make_test_user};
  use pretty_assertions::assert_eq;
  use serial_test::serial;
  use zhurnal_db_schema::source::user::User;
  use zhurnal_utils::error::ZhurnalResult;

  #[tokio::test]
  #[serial]
  async fn test_duplicate_slug_is_a_field_error() -> ZhurnalResult<()> {
    let context = Data::new(context_for_tests().await);
    let user_view = make_test_user(&mut context.pool()).await?;

    let data = CreateGroup {
      title: "Тестовая группа".into(),
      slug: "test-slug".into(),
      description: "Тестовое описание".into(),
    };
    let created = create_group(Json(data.clone()), context.clone(), user_view.clone()).await?;
    assert_eq!("test-slug", created.group.slug);

    let res = create_group(Json(data), context.clone(), user_view.clone()).await;
    let err = match res {
      Err(e) => e,
      Ok(_) => panic!("a duplicate slug must be refused"),
    };
    match err.error_type {
      ZhurnalErrorType::InvalidForm(errors) => {
        assert_eq!(1, errors.0.len());
        assert_eq!(Some("slug"), errors.0.first().map(|e| e.field.as_str()));
      }
      other => panic!("expected an invalid form, got {other}"),
    }

    Group::delete(&mut context.pool(), created.group.id).await?;
    User::delete(&mut context.pool(), user_view.user.id).await?;
    Ok(())
  }
}
