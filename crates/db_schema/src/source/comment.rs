use crate::{
  newtypes::{CommentId, PostId, UserId},
  schema::comment,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = comment)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A comment on a post. Comments are never edited or deleted here, only
/// removed by cascade when their post or author goes away.
pub struct Comment {
  pub id: CommentId,
  pub author_id: UserId,
  pub post_id: PostId,
  pub text: String,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, derive_new::new, Insertable)]
#[diesel(table_name = comment)]
pub struct CommentInsertForm {
  pub author_id: UserId,
  pub post_id: PostId,
  pub text: String,
}
