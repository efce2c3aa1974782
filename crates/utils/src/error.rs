use serde::{Deserialize, Serialize};
use std::{backtrace::Backtrace, fmt, fmt::Debug};
use strum::{Display, EnumIter};

/// A single failed form field, kept in submission order so form renderers can
/// show every problem at once.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub struct FieldError {
  pub field: String,
  pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash, Default)]
#[serde(transparent)]
pub struct FieldErrors(pub Vec<FieldError>);

impl FieldErrors {
  pub fn new() -> Self {
    FieldErrors::default()
  }

  pub fn add(&mut self, field: &str, message: &str) {
    self.0.push(FieldError {
      field: field.to_string(),
      message: message.to_string(),
    });
  }

  /// Records the failure message of a field check, if there was one.
  pub fn check(&mut self, field: &str, result: Result<(), &'static str>) {
    if let Err(message) = result {
      self.add(field, message);
    }
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Fails with `InvalidForm` when any field check was recorded.
  pub fn into_result(self) -> ZhurnalResult<()> {
    if self.0.is_empty() {
      Ok(())
    } else {
      Err(ZhurnalErrorType::InvalidForm(self).into())
    }
  }
}

#[derive(Display, Debug, Serialize, Deserialize, Clone, PartialEq, Eq, EnumIter, Hash)]
#[serde(tag = "error", content = "message", rename_all = "snake_case")]
#[non_exhaustive]
pub enum ZhurnalErrorType {
  NotFound,
  IncorrectLogin,
  /// The request needs an authenticated user. Carries the path the client
  /// should be sent back to after logging in.
  NotLoggedIn(String),
  /// Only the author may edit a post. Everyone else is bounced back to the
  /// post detail page.
  NoPostEditAllowed { post_id: i32 },
  /// One or more form fields failed validation. The response re-renders the
  /// form, so this is not treated as an HTTP error.
  InvalidForm(FieldErrors),
  CouldntCreateComment,
  CouldntCreateGroup,
  CouldntCreatePost,
  CouldntCreateUser,
  CouldntFollow,
  CouldntUpdatePost,
  Unknown(String),
}

pub type ZhurnalResult<T> = Result<T, ZhurnalError>;

pub struct ZhurnalError {
  pub error_type: ZhurnalErrorType,
  pub inner: anyhow::Error,
  pub context: Backtrace,
}

impl<T> From<T> for ZhurnalError
where
  T: Into<anyhow::Error>,
{
  fn from(t: T) -> Self {
    let cause = t.into();
    let error_type = match cause.downcast_ref::<diesel::result::Error>() {
      Some(&diesel::NotFound) => ZhurnalErrorType::NotFound,
      _ => ZhurnalErrorType::Unknown(format!("{}", &cause)),
    };
    ZhurnalError {
      error_type,
      inner: cause,
      context: Backtrace::capture(),
    }
  }
}

impl Debug for ZhurnalError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ZhurnalError")
      .field("message", &self.error_type)
      .field("inner", &self.inner)
      .field("context", &self.context)
      .finish()
  }
}

impl fmt::Display for ZhurnalError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}: ", &self.error_type)?;
    writeln!(f, "{}", self.inner)?;
    fmt::Display::fmt(&self.context, f)
  }
}

impl actix_web::error::ResponseError for ZhurnalError {
  fn status_code(&self) -> actix_web::http::StatusCode {
    match self.error_type {
      ZhurnalErrorType::IncorrectLogin => actix_web::http::StatusCode::UNAUTHORIZED,
      ZhurnalErrorType::NotFound => actix_web::http::StatusCode::NOT_FOUND,
      ZhurnalErrorType::NotLoggedIn(_) | ZhurnalErrorType::NoPostEditAllowed { .. } => {
        actix_web::http::StatusCode::FOUND
      }
      // an invalid form re-renders with its field errors rather than failing
      ZhurnalErrorType::InvalidForm(_) => actix_web::http::StatusCode::OK,
      _ => actix_web::http::StatusCode::BAD_REQUEST,
    }
  }

  fn error_response(&self) -> actix_web::HttpResponse {
    match &self.error_type {
      ZhurnalErrorType::NotLoggedIn(next) => actix_web::HttpResponse::Found()
        .insert_header((
          actix_web::http::header::LOCATION,
          format!("/users/login/?next={next}"),
        ))
        .finish(),
      ZhurnalErrorType::NoPostEditAllowed { post_id } => actix_web::HttpResponse::Found()
        .insert_header((
          actix_web::http::header::LOCATION,
          format!("/posts/{post_id}/"),
        ))
        .finish(),
      _ => actix_web::HttpResponse::build(self.status_code()).json(&self.error_type),
    }
  }
}

impl From<ZhurnalErrorType> for ZhurnalError {
  fn from(error_type: ZhurnalErrorType) -> Self {
    let inner = anyhow::anyhow!("{}", error_type);
    ZhurnalError {
      error_type,
      inner,
      context: Backtrace::capture(),
    }
  }
}

pub trait ZhurnalErrorExt<T, E: Into<anyhow::Error>> {
  fn with_zhurnal_type(self, error_type: ZhurnalErrorType) -> ZhurnalResult<T>;
}

impl<T, E: Into<anyhow::Error>> ZhurnalErrorExt<T, E> for Result<T, E> {
  fn with_zhurnal_type(self, error_type: ZhurnalErrorType) -> ZhurnalResult<T> {
    self.map_err(|error| ZhurnalError {
      error_type,
      inner: error.into(),
      context: Backtrace::capture(),
    })
  }
}

pub trait ZhurnalErrorExt2<T> {
  fn with_zhurnal_type(self, error_type: ZhurnalErrorType) -> ZhurnalResult<T>;
  fn into_anyhow(self) -> Result<T, anyhow::Error>;
}

impl<T> ZhurnalErrorExt2<T> for ZhurnalResult<T> {
  fn with_zhurnal_type(self, error_type: ZhurnalErrorType) -> ZhurnalResult<T> {
    self.map_err(|mut e| {
      e.error_type = error_type;
      e
    })
  }
  // this function can't be an impl From or similar because it would conflict with one of the other broad Into<> implementations
  fn into_anyhow(self) -> Result<T, anyhow::Error> {
    self.map_err(|e| e.inner)
  }
}
