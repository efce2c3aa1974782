use serde::{Deserialize, Serialize};
use zhurnal_db_schema::source::group::Group;
use zhurnal_db_views::structs::PostView;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Create a group. An administrative action, but exposed as a route so the
/// system is operable without a separate console.
pub struct CreateGroup {
  pub title: String,
  pub slug: String,
  pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GroupResponse {
  pub group: Group,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// The group feed: the group itself plus one page of its posts.
pub struct GroupFeedResponse {
  pub group: Group,
  pub posts: Vec<PostView>,
}
