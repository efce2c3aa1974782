use crate::{
  newtypes::{FollowId, UserId},
  schema::follow,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = follow)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A directed follow edge: `user_id` receives the posts of `author_id` in
/// their follow feed. The table enforces uniqueness per pair and rejects
/// self-follows.
pub struct Follow {
  pub id: FollowId,
  pub user_id: UserId,
  pub author_id: UserId,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, derive_new::new, Insertable)]
#[diesel(table_name = follow)]
pub struct FollowForm {
  pub user_id: UserId,
  pub author_id: UserId,
}
