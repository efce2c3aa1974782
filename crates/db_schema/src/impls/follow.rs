use crate::{
  newtypes::UserId,
  schema::follow,
  source::follow::{Follow, FollowForm},
  traits::Followable,
  utils::{get_conn, DbPool},
};
use diesel::{
  dsl::{exists, insert_into},
  result::Error,
  select,
  ExpressionMethods,
  QueryDsl,
};
use diesel_async::RunQueryDsl;

#[async_trait]
impl Followable for Follow {
  type Form = FollowForm;

  /// Self-follows are refused before touching the database; duplicates are
  /// swallowed by the unique index, so concurrent follow attempts both
  /// succeed.
  async fn follow(pool: &mut DbPool<'_>, form: &FollowForm) -> Result<usize, Error> {
    if form.user_id == form.author_id {
      return Ok(0);
    }
    let conn = &mut get_conn(pool).await?;
    insert_into(follow::table)
      .values(form)
      .on_conflict((follow::user_id, follow::author_id))
      .do_nothing()
      .execute(conn)
      .await
  }

  async fn unfollow(pool: &mut DbPool<'_>, form: &FollowForm) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(
      follow::table
        .filter(follow::user_id.eq(form.user_id))
        .filter(follow::author_id.eq(form.author_id)),
    )
    .execute(conn)
    .await
  }

  async fn is_following(
    pool: &mut DbPool<'_>,
    user_id: UserId,
    author_id: UserId,
  ) -> Result<bool, Error> {
    let conn = &mut get_conn(pool).await?;
    select(exists(
      follow::table
        .filter(follow::user_id.eq(user_id))
        .filter(follow::author_id.eq(author_id)),
    ))
    .get_result::<bool>(conn)
    .await
  }
}
