use crate::schema::secret;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = secret)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// The JWT secret, seeded by migration.
pub struct Secret {
  pub id: i32,
  pub jwt_secret: String,
}
