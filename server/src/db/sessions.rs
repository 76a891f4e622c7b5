// server/src/db/sessions.rs

use anyhow::Context;
use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tiffin::ports::SessionStore;
use tiffin::{Cart, Session, SessionToken, TiffinError, TiffinResult, UserId};

use crate::models::SessionRow;

/// Sessions with the cart stored as JSONB next to the token.
#[derive(Clone)]
pub struct PgSessionStore {
  pool: PgPool,
}

impl PgSessionStore {
  pub fn new(pool: PgPool) -> Self {
    PgSessionStore { pool }
  }
}

#[async_trait]
impl SessionStore for PgSessionStore {
  async fn open(&self, user_id: UserId) -> TiffinResult<Session> {
    let row = sqlx::query_as::<_, SessionRow>(
      "INSERT INTO sessions (token, user_id, cart) VALUES ($1, $2, $3) RETURNING token, user_id, cart",
    )
    .bind(SessionToken::generate().0)
    .bind(user_id.get())
    .bind(Json(Cart::new()))
    .fetch_one(&self.pool)
    .await
    .with_context(|| format!("opening session for user {}", user_id))?;
    Ok(Session::from(row))
  }

  async fn session(&self, token: SessionToken) -> TiffinResult<Option<Session>> {
    let row = sqlx::query_as::<_, SessionRow>("SELECT token, user_id, cart FROM sessions WHERE token = $1")
      .bind(token.0)
      .fetch_optional(&self.pool)
      .await
      .context("loading session")?;
    Ok(row.map(Session::from))
  }

  async fn save_cart(&self, token: SessionToken, cart: &Cart) -> TiffinResult<()> {
    let updated = sqlx::query("UPDATE sessions SET cart = $2 WHERE token = $1")
      .bind(token.0)
      .bind(Json(cart))
      .execute(&self.pool)
      .await
      .context("saving session cart")?
      .rows_affected();
    if updated == 0 {
      return Err(TiffinError::not_found("Session", token));
    }
    Ok(())
  }

  async fn close(&self, token: SessionToken) -> TiffinResult<()> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
      .bind(token.0)
      .execute(&self.pool)
      .await
      .context("closing session")?;
    Ok(())
  }
}
