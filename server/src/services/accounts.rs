// server/src/services/accounts.rs

//! Sign-up, sign-in and sign-out on top of the user and session ports.

use tiffin::ports::{SessionStore, UserStore};
use tiffin::{NewUser, Platform, Session, SessionToken, User};
use tracing::{info, instrument, warn};

use crate::errors::{AppError, Result};
use crate::services::auth_service::{hash_password, verify_password};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[instrument(name = "accounts::signup", skip(platform, name, password), err(Display))]
pub async fn signup(platform: &Platform, name: &str, email: &str, password: &str) -> Result<User> {
  let new_user = NewUser::parse(name, email, password)?;
  let password_hash = hash_password(&new_user.password)?;
  let user = platform.users().create_user(&new_user, &password_hash).await?;
  info!(user_id = %user.id, "User registered.");
  Ok(user)
}

/// Verifies the credentials and opens a fresh session for the user.
#[instrument(name = "accounts::signin", skip(platform, password), err(Display))]
pub async fn signin(platform: &Platform, email: &str, password: &str) -> Result<(User, Session)> {
  let email = email.trim().to_lowercase();
  let Some(user) = platform.users().user_by_email(&email).await? else {
    warn!("Sign-in for unknown email.");
    return Err(AppError::Auth(INVALID_CREDENTIALS.to_string()));
  };
  if !verify_password(&user.password_hash, password)? {
    warn!(user_id = %user.id, "Sign-in with wrong password.");
    return Err(AppError::Auth(INVALID_CREDENTIALS.to_string()));
  }

  let session = platform.sessions().open(user.id).await?;
  info!(user_id = %user.id, "Session opened.");
  Ok((user, session))
}

#[instrument(name = "accounts::signout", skip(platform, token), fields(token = %token), err(Display))]
pub async fn signout(platform: &Platform, token: SessionToken) -> Result<()> {
  platform.sessions().close(token).await?;
  Ok(())
}
