use crate::structs::CommentView;
use diesel::{result::Error, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use zhurnal_db_schema::{
  newtypes::PostId,
  schema::{comment, user_},
  source::{comment::Comment, user::User},
  utils::{get_conn, DbPool},
};

type CommentViewTuple = (Comment, User);

impl From<CommentViewTuple> for CommentView {
  fn from((comment, creator): CommentViewTuple) -> Self {
    CommentView { comment, creator }
  }
}

impl CommentView {
  /// The comment thread of a post, oldest first. Threads are short and never
  /// paginated.
  pub async fn for_post(pool: &mut DbPool<'_>, post_id: PostId) -> Result<Vec<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    let res = comment::table
      .inner_join(user_::table)
      .filter(comment::post_id.eq(post_id))
      .select((comment::all_columns, user_::all_columns))
      .order_by(comment::published.asc())
      .then_order_by(comment::id.asc())
      .load::<CommentViewTuple>(conn)
      .await?;

    Ok(res.into_iter().map(CommentView::from).collect())
  }
}
