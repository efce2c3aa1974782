use crate::structs::UserView;
use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use diesel::result::Error;
use std::future::{ready, Ready};
use zhurnal_db_schema::{
  newtypes::UserId,
  source::user::User,
  traits::Crud,
  utils::DbPool,
};
use zhurnal_utils::error::{ZhurnalError, ZhurnalErrorType};

impl UserView {
  pub async fn read(pool: &mut DbPool<'_>, user_id: UserId) -> Result<Self, Error> {
    User::read(pool, user_id).await.map(|user| UserView { user })
  }

  pub async fn read_from_name(pool: &mut DbPool<'_>, username: &str) -> Result<Self, Error> {
    User::read_from_username(pool, username)
      .await
      .map(|user| UserView { user })
  }
}

/// The require-login half of the auth gate. The session middleware resolves
/// the token and stores the view in request extensions; extracting it on a
/// route makes that route redirect anonymous requests to the login page,
/// with the original url preserved in `next`.
impl FromRequest for UserView {
  type Error = ZhurnalError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    ready(match req.extensions().get::<UserView>() {
      Some(u) => Ok(u.clone()),
      None => {
        let next = req
          .uri()
          .path_and_query()
          .map(|pq| pq.as_str().to_owned())
          .unwrap_or_else(|| req.uri().path().to_owned());
        Err(ZhurnalErrorType::NotLoggedIn(next).into())
      }
    })
  }
}

#[cfg(test)]
mod tests {

  use super::*;
  use actix_web::test::TestRequest;
  use pretty_assertions::assert_eq;
  use zhurnal_db_schema::utils::naive_now;

  fn test_user() -> UserView {
    UserView {
      user: User {
        id: UserId(1),
        username: "auth".into(),
        first_name: "Лев".into(),
        last_name: "Толстой".into(),
        email: "auth@zhurnal.example".into(),
        published: naive_now(),
      },
    }
  }

  #[actix_web::test]
  async fn test_extracts_user_from_extensions() {
    let req = TestRequest::get().uri("/create/").to_http_request();
    req.extensions_mut().insert(test_user());

    let extracted = UserView::extract(&req).await.map(|u| u.user.username);
    assert_eq!(Some("auth".to_string()), extracted.ok());
  }

  #[actix_web::test]
  async fn test_anonymous_request_redirects_with_next() {
    let req = TestRequest::get().uri("/create/").to_http_request();

    let err = match UserView::extract(&req).await {
      Err(e) => e,
      Ok(_) => panic!("extraction must fail without a session"),
    };
    assert_eq!(
      ZhurnalErrorType::NotLoggedIn("/create/".into()),
      err.error_type
    );
  }
}
