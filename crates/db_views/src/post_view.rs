use crate::structs::PostView;
use diesel::{result::Error, ExpressionMethods, NullableExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use zhurnal_db_schema::{
  newtypes::{GroupId, PostId, UserId},
  schema::{follow, group_, post, user_},
  source::{group::Group, post::Post, user::User},
  utils::{get_conn, limit_and_offset, DbPool},
};

type PostViewTuple = (Post, User, Option<Group>);

impl From<PostViewTuple> for PostView {
  fn from((post, creator, group): PostViewTuple) -> Self {
    PostView {
      post,
      creator,
      group,
    }
  }
}

impl PostView {
  pub async fn read(pool: &mut DbPool<'_>, post_id: PostId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    post::table
      .find(post_id)
      .inner_join(user_::table)
      .left_join(group_::table)
      .select((
        post::all_columns,
        user_::all_columns,
        group_::all_columns.nullable(),
      ))
      .first::<PostViewTuple>(conn)
      .await
      .map(Self::from)
  }
}

/// One query behind all four feeds: no filters is the home feed, `group_id`
/// the group feed, `creator_id` the profile feed and `followed_by` the
/// follow feed.
#[derive(Default)]
pub struct PostQuery {
  pub group_id: Option<GroupId>,
  pub creator_id: Option<UserId>,
  pub followed_by: Option<UserId>,
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

impl PostQuery {
  pub async fn list(self, pool: &mut DbPool<'_>) -> Result<Vec<PostView>, Error> {
    let conn = &mut get_conn(pool).await?;
    let mut query = post::table
      .inner_join(user_::table)
      .left_join(group_::table)
      .select((
        post::all_columns,
        user_::all_columns,
        group_::all_columns.nullable(),
      ))
      .into_boxed();

    if let Some(group_id) = self.group_id {
      query = query.filter(post::group_id.eq(group_id));
    }

    if let Some(creator_id) = self.creator_id {
      query = query.filter(post::author_id.eq(creator_id));
    }

    if let Some(followed_by) = self.followed_by {
      let followed_authors = follow::table
        .filter(follow::user_id.eq(followed_by))
        .select(follow::author_id);
      query = query.filter(post::author_id.eq_any(followed_authors));
    }

    let (limit, offset) = limit_and_offset(self.page, self.limit)?;

    let res = query
      // newest first, id as the insertion-order tie breaker
      .order_by(post::published.desc())
      .then_order_by(post::id.desc())
      .limit(limit)
      .offset(offset)
      .load::<PostViewTuple>(conn)
      .await?;

    Ok(res.into_iter().map(PostView::from).collect())
  }
}
