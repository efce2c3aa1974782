use crate::{newtypes::UserId, schema::user_};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = user_)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// An author identity. Password and session handling live with the external
/// identity provider, this core only stores the profile fields it renders.
pub struct User {
  pub id: UserId,
  pub username: String,
  pub first_name: String,
  pub last_name: String,
  pub email: String,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, derive_new::new, Insertable, AsChangeset)]
#[diesel(table_name = user_)]
pub struct UserInsertForm {
  pub username: String,
  pub first_name: String,
  pub last_name: String,
  pub email: String,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = user_)]
pub struct UserUpdateForm {
  pub first_name: Option<String>,
  pub last_name: Option<String>,
  pub email: Option<String>,
}
