// server/src/models/session.rs

use sqlx::types::Json;
use sqlx::FromRow;
use tiffin::{Cart, Session, SessionToken, UserId};
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct SessionRow {
  pub token: Uuid,
  pub user_id: i64,
  pub cart: Json<Cart>,
}

impl From<SessionRow> for Session {
  fn from(row: SessionRow) -> Self {
    Session {
      token: SessionToken(row.token),
      user_id: UserId(row.user_id),
      cart: row.cart.0,
    }
  }
}
