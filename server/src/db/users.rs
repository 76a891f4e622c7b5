// server/src/db/users.rs

use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use tiffin::ports::UserStore;
use tiffin::{NewUser, TiffinError, TiffinResult, User, UserId};

use crate::models::UserRow;

const USER_COLUMNS: &str = "id, name, email, password_hash, is_admin, created_at";

#[derive(Clone)]
pub struct PgUserStore {
  pool: PgPool,
}

impl PgUserStore {
  pub fn new(pool: PgPool) -> Self {
    PgUserStore { pool }
  }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
  match err {
    sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
    _ => false,
  }
}

#[async_trait]
impl UserStore for PgUserStore {
  async fn create_user(&self, new_user: &NewUser, password_hash: &str) -> TiffinResult<User> {
    let inserted = sqlx::query_as::<_, UserRow>(&format!(
      "INSERT INTO users (name, email, password_hash, is_admin) VALUES ($1, $2, $3, $4) RETURNING {}",
      USER_COLUMNS
    ))
    .bind(&new_user.name)
    .bind(&new_user.email)
    .bind(password_hash)
    .bind(new_user.is_admin)
    .fetch_one(&self.pool)
    .await;

    match inserted {
      Ok(row) => Ok(User::from(row)),
      Err(e) if is_unique_violation(&e) => Err(TiffinError::DuplicateEmail {
        email: new_user.email.clone(),
      }),
      Err(e) => Err(TiffinError::from(anyhow::Error::new(e).context("inserting user"))),
    }
  }

  async fn user(&self, id: UserId) -> TiffinResult<Option<User>> {
    let row = sqlx::query_as::<_, UserRow>(&format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS))
      .bind(id.get())
      .fetch_optional(&self.pool)
      .await
      .with_context(|| format!("loading user {}", id))?;
    Ok(row.map(User::from))
  }

  async fn user_by_email(&self, email: &str) -> TiffinResult<Option<User>> {
    let row = sqlx::query_as::<_, UserRow>(&format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS))
      .bind(email)
      .fetch_optional(&self.pool)
      .await
      .context("loading user by email")?;
    Ok(row.map(User::from))
  }
}
