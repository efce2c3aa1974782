use actix_web::web::{Data, Json, Path, Query};
use zhurnal_api_common::{
  context::ZhurnalContext,
  group::GroupFeedResponse,
  post::GetPosts,
};
use zhurnal_db_schema::source::group::Group;
use zhurnal_db_views::post_view::PostQuery;
use zhurnal_utils::error::{ZhurnalErrorExt, ZhurnalErrorType, ZhurnalResult};

/// One page of a group's posts, addressed by slug.
pub async fn get_group_feed(
  slug: Path<String>,
  query: Query<GetPosts>,
  context: Data<ZhurnalContext>,
) -> ZhurnalResult<Json<GroupFeedResponse>> {
  let group = Group::read_from_slug(&mut context.pool(), &slug)
    .await
    .with_zhurnal_type(ZhurnalErrorType::NotFound)?;

  let posts = PostQuery {
    group_id: Some(group.id),
    page: query.page,
    ..Default::default()
  }
  .list(&mut context.pool())
  .await?;

  Ok(Json(GroupFeedResponse { group, posts }))
}
