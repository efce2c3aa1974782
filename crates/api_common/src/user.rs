use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zhurnal_db_schema::source::user::User;
use zhurnal_db_views::structs::PostView;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Sign up a new author. Passwords and sessions belong to the external
/// identity provider; this form only carries the profile fields.
pub struct Signup {
  pub username: String,
  pub first_name: String,
  pub last_name: String,
  pub email: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoginResponse {
  /// A signed token for the `Authorization` header or the `auth` cookie.
  pub jwt: String,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
/// The profile feed. `following` is only present when the requester is
/// logged in; anonymous requesters get no field at all rather than `false`.
pub struct ProfileResponse {
  pub user: User,
  pub posts: Vec<PostView>,
  pub post_count: i64,
  pub following: Option<bool>,
}
