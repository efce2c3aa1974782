use crate::{
  newtypes::UserId,
  schema::user_,
  source::user::{User, UserInsertForm, UserUpdateForm},
  traits::Crud,
  utils::{functions::lower, get_conn, DbPool},
};
use diesel::{dsl::insert_into, result::Error, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;

#[async_trait]
impl Crud for User {
  type InsertForm = UserInsertForm;
  type UpdateForm = UserUpdateForm;
  type IdType = UserId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(user_::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn read(pool: &mut DbPool<'_>, user_id: UserId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    user_::table.find(user_id).first::<Self>(conn).await
  }

  async fn update(
    pool: &mut DbPool<'_>,
    user_id: UserId,
    form: &Self::UpdateForm,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(user_::table.find(user_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn delete(pool: &mut DbPool<'_>, user_id: UserId) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(user_::table.find(user_id))
      .execute(conn)
      .await
  }
}

impl User {
  pub async fn read_from_username(pool: &mut DbPool<'_>, username: &str) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    user_::table
      .filter(lower(user_::username).eq(username.to_lowercase()))
      .first::<Self>(conn)
      .await
  }
}
