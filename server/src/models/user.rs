// server/src/models/user.rs

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use tiffin::{User, UserId};

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
  pub id: i64,
  pub name: String,
  pub email: String,
  pub password_hash: String,
  pub is_admin: bool,
  pub created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
  fn from(row: UserRow) -> Self {
    User {
      id: UserId(row.id),
      name: row.name,
      email: row.email,
      password_hash: row.password_hash,
      is_admin: row.is_admin,
    }
  }
}
