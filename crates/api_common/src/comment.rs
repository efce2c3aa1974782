use serde::{Deserialize, Serialize};
use zhurnal_db_views::structs::CommentView;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Add a comment to a post.
pub struct CreateComment {
  pub text: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CommentResponse {
  pub comment_view: CommentView,
}
