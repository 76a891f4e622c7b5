// core/src/model/user.rs

use serde::{Deserialize, Serialize};

use super::ids::UserId;
use crate::error::{TiffinError, TiffinResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  pub id: UserId,
  pub name: String,
  pub email: String,
  #[serde(skip_serializing)] // Never send password hash to client
  pub password_hash: String,
  pub is_admin: bool,
}

impl User {
  pub fn as_caller(&self) -> Caller {
    Caller {
      user_id: self.id,
      is_admin: self.is_admin,
    }
  }
}

/// Whoever is performing an operation. Built by the outer layer after authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
  pub user_id: UserId,
  pub is_admin: bool,
}

impl Caller {
  pub fn customer(user_id: UserId) -> Self {
    Caller {
      user_id,
      is_admin: false,
    }
  }

  pub fn admin(user_id: UserId) -> Self {
    Caller { user_id, is_admin: true }
  }

  /// Owners and admins may read an order; nobody else.
  pub fn can_read(&self, owner: UserId) -> bool {
    self.is_admin || self.user_id == owner
  }
}

/// Validated sign-up input. The password is kept only until the caller hashes it.
#[derive(Debug, Clone)]
pub struct NewUser {
  pub name: String,
  pub email: String,
  pub password: String,
  pub is_admin: bool,
}

impl NewUser {
  /// Trims every field and lower-cases the email; all three fields are required.
  pub fn parse(name: &str, email: &str, password: &str) -> TiffinResult<Self> {
    let name = name.trim();
    let email = email.trim().to_lowercase();
    if name.is_empty() || email.is_empty() || password.is_empty() {
      return Err(TiffinError::Validation("All fields are required.".to_string()));
    }
    Ok(NewUser {
      name: name.to_string(),
      email,
      password: password.to_string(),
      is_admin: false,
    })
  }

  pub fn with_admin(mut self, is_admin: bool) -> Self {
    self.is_admin = is_admin;
    self
  }
}
