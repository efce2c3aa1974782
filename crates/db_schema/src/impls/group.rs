use crate::{
  newtypes::GroupId,
  schema::group_,
  source::group::{Group, GroupInsertForm, GroupUpdateForm},
  traits::Crud,
  utils::{get_conn, DbPool},
};
use diesel::{dsl::insert_into, result::Error, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;

#[async_trait]
impl Crud for Group {
  type InsertForm = GroupInsertForm;
  type UpdateForm = GroupUpdateForm;
  type IdType = GroupId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(group_::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn read(pool: &mut DbPool<'_>, group_id: GroupId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    group_::table.find(group_id).first::<Self>(conn).await
  }

  async fn update(
    pool: &mut DbPool<'_>,
    group_id: GroupId,
    form: &Self::UpdateForm,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(group_::table.find(group_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn delete(pool: &mut DbPool<'_>, group_id: GroupId) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(group_::table.find(group_id))
      .execute(conn)
      .await
  }
}

impl Group {
  pub async fn read_from_slug(pool: &mut DbPool<'_>, slug: &str) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    group_::table
      .filter(group_::slug.eq(slug))
      .first::<Self>(conn)
      .await
  }

  pub async fn list(pool: &mut DbPool<'_>) -> Result<Vec<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    group_::table
      .order(group_::title.asc())
      .load::<Self>(conn)
      .await
  }
}
