// server/src/web/extractors.rs

use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use tiffin::ports::{SessionStore, UserStore};
use tiffin::{Caller, Session, SessionToken};
use tracing::warn;

use crate::errors::AppError;
use crate::state::AppState;

/// A caller resolved from `Authorization: Bearer <session token>`.
///
/// Carries the session (and with it the cart) as it was when the request arrived.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
  pub session: Session,
  pub caller: Caller,
}

impl AuthenticatedUser {
  pub fn token(&self) -> SessionToken {
    self.session.token
  }
}

fn bearer_token(req: &HttpRequest) -> Option<SessionToken> {
  let raw = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
  let token = raw.strip_prefix("Bearer ").or_else(|| raw.strip_prefix("bearer "))?;
  SessionToken::parse(token)
}

async fn resolve(state: Option<web::Data<AppState>>, token: Option<SessionToken>) -> Result<AuthenticatedUser, AppError> {
  let state = state.ok_or_else(|| AppError::Internal("Application state is not configured.".to_string()))?;
  let Some(token) = token else {
    warn!("Missing or malformed bearer token.");
    return Err(AppError::Auth("Authentication required.".to_string()));
  };

  let platform = &state.platform;
  let session = platform
    .sessions()
    .session(token)
    .await?
    .ok_or_else(|| AppError::Auth("Session expired or unknown.".to_string()))?;
  let user = platform
    .users()
    .user(session.user_id)
    .await?
    .ok_or_else(|| AppError::Auth("Session user no longer exists.".to_string()))?;

  Ok(AuthenticatedUser {
    caller: user.as_caller(),
    session,
  })
}

impl FromRequest for AuthenticatedUser {
  type Error = AppError;
  type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    let token = bearer_token(req);
    let state = req.app_data::<web::Data<AppState>>().cloned();
    Box::pin(resolve(state, token))
  }
}
