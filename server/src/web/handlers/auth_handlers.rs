// server/src/web/handlers/auth_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::services::accounts;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

// --- Request DTOs ---
#[derive(Deserialize, Debug)]
pub struct SignupRequestPayload {
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub email: String,
  #[serde(default)]
  pub password: String,
}

#[derive(Deserialize, Debug)]
pub struct SigninRequestPayload {
  pub email: String,
  pub password: String,
}

#[instrument(name = "handler::signup", skip(app_state, req_payload), fields(req_email = %req_payload.email))]
pub async fn signup_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<SignupRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let user = accounts::signup(
    &app_state.platform,
    &req_payload.name,
    &req_payload.email,
    &req_payload.password,
  )
  .await?;

  info!(user_id = %user.id, "Signup successful.");
  Ok(HttpResponse::Created().json(json!({
      "message": "User created successfully.",
      "userId": user.id,
      "name": user.name,
      "email": user.email,
  })))
}

#[instrument(name = "handler::signin", skip(app_state, req_payload), fields(req_email = %req_payload.email))]
pub async fn signin_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<SigninRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let (user, session) = accounts::signin(&app_state.platform, &req_payload.email, &req_payload.password).await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Signin successful.",
      "userId": user.id,
      "name": user.name,
      "email": user.email,
      "isAdmin": user.is_admin,
      "token": session.token,
  })))
}

#[instrument(name = "handler::signout", skip(app_state, auth_user), fields(user_id = %auth_user.caller.user_id))]
pub async fn signout_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  accounts::signout(&app_state.platform, auth_user.token()).await?;
  Ok(HttpResponse::Ok().json(json!({ "ok": true })))
}
