use crate::{newtypes::GroupId, schema::group_};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = group_)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A topical category that posts can be filed under.
pub struct Group {
  pub id: GroupId,
  pub title: String,
  /// Unique, used in the group feed url.
  pub slug: String,
  pub description: String,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, derive_new::new, Insertable, AsChangeset)]
#[diesel(table_name = group_)]
pub struct GroupInsertForm {
  pub title: String,
  pub slug: String,
  pub description: String,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = group_)]
pub struct GroupUpdateForm {
  pub title: Option<String>,
  pub description: Option<String>,
}
