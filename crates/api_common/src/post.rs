use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zhurnal_db_schema::{newtypes::GroupId, source::group::Group};
use zhurnal_db_views::structs::{CommentView, PostView};

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Create a post.
pub struct CreatePost {
  pub text: String,
  pub group_id: Option<GroupId>,
  /// An optional image attachment, submitted as a url string.
  pub image: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Edit a post. The author never changes, so the form carries no author
/// field; sending no group detaches the post from its group.
pub struct EditPost {
  pub text: String,
  pub group_id: Option<GroupId>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PostResponse {
  pub post_view: PostView,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// The pagination query of every feed route.
pub struct GetPosts {
  pub page: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// The post list response.
pub struct GetPostsResponse {
  pub posts: Vec<PostView>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// The post detail response: the post, its comment thread oldest-first and
/// the author's total post count.
pub struct GetPostResponse {
  pub post_view: PostView,
  pub comments: Vec<CommentView>,
  pub creator_post_count: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// The state an external renderer needs to draw the new-post form.
pub struct NewPostFormResponse {
  pub groups: Vec<Group>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// The state an external renderer needs to draw the edit form.
pub struct EditPostFormResponse {
  pub post_view: PostView,
  pub groups: Vec<Group>,
}
