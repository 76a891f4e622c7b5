// core/src/session.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::cart::Cart;
use crate::model::UserId;

/// Opaque per-login token. Clients echo it back; nothing can be derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(pub Uuid);

impl SessionToken {
  pub fn generate() -> Self {
    SessionToken(Uuid::new_v4())
  }

  pub fn parse(raw: &str) -> Option<Self> {
    Uuid::parse_str(raw.trim()).ok().map(SessionToken)
  }
}

impl fmt::Display for SessionToken {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// A signed-in user's session, carrying their cart between requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
  pub token: SessionToken,
  pub user_id: UserId,
  pub cart: Cart,
}
