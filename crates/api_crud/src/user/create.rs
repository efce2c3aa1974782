use actix_web::web::{Data, Json};
use diesel::result::{DatabaseErrorKind, Error};
use zhurnal_api_common::{
  context::ZhurnalContext,
  user::{LoginResponse, Signup},
};
use zhurnal_db_schema::{
  source::user::{User, UserInsertForm},
  traits::Crud,
};
use zhurnal_utils::{
  claims::Claims,
  error::{FieldErrors, ZhurnalError, ZhurnalErrorExt, ZhurnalErrorType, ZhurnalResult},
  validation::{is_valid_email, is_valid_person_name, is_valid_username},
};

/// Registers an author and logs them in right away by answering with a
/// token. Credentials live with the external identity provider, so there is
/// no password here.
pub async fn signup(
  data: Json<Signup>,
  context: Data<ZhurnalContext>,
) -> ZhurnalResult<Json<LoginResponse>> {
  let mut errors = FieldErrors::new();
  errors.check("username", is_valid_username(&data.username));
  errors.check("first_name", is_valid_person_name(&data.first_name));
  errors.check("last_name", is_valid_person_name(&data.last_name));
  errors.check("email", is_valid_email(&data.email));
  errors.into_result()?;

  let form = UserInsertForm::new(
    data.username.clone(),
    data.first_name.trim().to_string(),
    data.last_name.trim().to_string(),
    data.email.clone(),
  );
  let user = User::create(&mut context.pool(), &form)
    .await
    .map_err(|e| match e {
      Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
        let mut errors = FieldErrors::new();
        errors.add("username", "a user with this username already exists");
        ZhurnalError::from(ZhurnalErrorType::InvalidForm(errors))
      }
      _ => ZhurnalErrorType::CouldntCreateUser.into(),
    })?;

  let jwt = Claims::jwt(
    user.id.0,
    &context.secret().jwt_secret,
    &context.settings().hostname(),
  )
  .with_zhurnal_type(ZhurnalErrorType::IncorrectLogin)?;

  Ok(Json(LoginResponse { jwt }))
}
