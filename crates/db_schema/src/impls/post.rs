use crate::{
  newtypes::{PostId, UserId},
  schema::post,
  source::post::{Post, PostInsertForm, PostUpdateForm},
  traits::Crud,
  utils::{get_conn, DbPool},
};
use diesel::{dsl::insert_into, result::Error, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;

#[async_trait]
impl Crud for Post {
  type InsertForm = PostInsertForm;
  type UpdateForm = PostUpdateForm;
  type IdType = PostId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(post::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn read(pool: &mut DbPool<'_>, post_id: PostId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    post::table.find(post_id).first::<Self>(conn).await
  }

  async fn update(
    pool: &mut DbPool<'_>,
    post_id: PostId,
    form: &Self::UpdateForm,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(post::table.find(post_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
  }

  /// Deletion is an administrative action, no route exposes it. Dependent
  /// comments go away by cascade.
  async fn delete(pool: &mut DbPool<'_>, post_id: PostId) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(post::table.find(post_id))
      .execute(conn)
      .await
  }
}

impl Post {
  /// Total number of posts by an author, unpaginated.
  pub async fn count_for_author(pool: &mut DbPool<'_>, author_id: UserId) -> Result<i64, Error> {
    let conn = &mut get_conn(pool).await?;
    post::table
      .filter(post::author_id.eq(author_id))
      .count()
      .get_result::<i64>(conn)
      .await
  }
}
