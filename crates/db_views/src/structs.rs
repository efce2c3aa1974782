use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zhurnal_db_schema::source::{comment::Comment, group::Group, post::Post, user::User};

#[skip_serializing_none]
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
/// A post with the rows a listing needs, so feeds render without N+1
/// lookups.
pub struct PostView {
  pub post: Post,
  pub creator: User,
  pub group: Option<Group>,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
/// A comment joined with its author.
pub struct CommentView {
  pub comment: Comment,
  pub creator: User,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
/// The authenticated user, as resolved by the session middleware. Also the
/// extractor type handlers take to require a login.
pub struct UserView {
  pub user: User,
}
