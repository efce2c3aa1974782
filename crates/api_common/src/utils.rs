use actix_web::{http::header::LOCATION, HttpResponse};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SuccessResponse {
  pub success: bool,
}

impl Default for SuccessResponse {
  fn default() -> Self {
    SuccessResponse { success: true }
  }
}

/// Successful form submissions answer with a 302 and no body, pointing at
/// the page to render next.
pub fn redirect_to(location: String) -> HttpResponse {
  HttpResponse::Found()
    .insert_header((LOCATION, location))
    .finish()
}

#[cfg(test)]
mod tests {

  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_redirect_shape() {
    let res = redirect_to("/posts/3/".to_string());
    assert_eq!(302, res.status().as_u16());
    let location = res.headers().get(LOCATION).and_then(|l| l.to_str().ok());
    assert_eq!(Some("/posts/3/"), location);
  }
}
