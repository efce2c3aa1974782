use crate::{
  newtypes::CommentId,
  schema::comment,
  source::comment::{Comment, CommentInsertForm},
  utils::{get_conn, DbPool},
};
use diesel::{dsl::insert_into, result::Error, QueryDsl};
use diesel_async::RunQueryDsl;

// Comments are append-only, so no Crud impl: there is no update or delete
// path in this core.
impl Comment {
  pub async fn create(pool: &mut DbPool<'_>, form: &CommentInsertForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(comment::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  pub async fn read(pool: &mut DbPool<'_>, comment_id: CommentId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    comment::table.find(comment_id).first::<Self>(conn).await
  }
}
