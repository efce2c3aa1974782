use crate::{
  newtypes::{DbUrl, GroupId, PostId, UserId},
  schema::post,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = post)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A post.
pub struct Post {
  pub id: PostId,
  pub text: String,
  pub published: DateTime<Utc>,
  /// Immutable after creation, update forms cannot touch it.
  pub author_id: UserId,
  pub group_id: Option<GroupId>,
  /// An optional image attachment url.
  pub image: Option<DbUrl>,
}

#[derive(Debug, Clone, derive_new::new, Insertable, AsChangeset)]
#[diesel(table_name = post)]
pub struct PostInsertForm {
  pub text: String,
  pub author_id: UserId,
  #[new(default)]
  pub group_id: Option<GroupId>,
  #[new(default)]
  pub image: Option<DbUrl>,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = post)]
/// To null out the group, send `Some(None)`. A plain `None` leaves the
/// column untouched.
pub struct PostUpdateForm {
  pub text: Option<String>,
  pub group_id: Option<Option<GroupId>>,
}
