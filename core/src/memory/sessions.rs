// core/src/memory/sessions.rs
use async_trait::async_trait;
use std::collections::HashMap;

use super::shared::Shared;
use crate::cart::Cart;
use crate::error::{TiffinError, TiffinResult};
use crate::model::UserId;
use crate::ports::SessionStore;
use crate::session::{Session, SessionToken};

#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
  sessions: Shared<HashMap<SessionToken, Session>>,
}

impl MemorySessionStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
  async fn open(&self, user_id: UserId) -> TiffinResult<Session> {
    let session = Session {
      token: SessionToken::generate(),
      user_id,
      cart: Cart::new(),
    };
    self.sessions.write().insert(session.token, session.clone());
    Ok(session)
  }

  async fn session(&self, token: SessionToken) -> TiffinResult<Option<Session>> {
    Ok(self.sessions.read().get(&token).cloned())
  }

  async fn save_cart(&self, token: SessionToken, cart: &Cart) -> TiffinResult<()> {
    let mut sessions = self.sessions.write();
    let session = sessions
      .get_mut(&token)
      .ok_or_else(|| TiffinError::not_found("Session", token))?;
    session.cart = cart.clone();
    Ok(())
  }

  async fn close(&self, token: SessionToken) -> TiffinResult<()> {
    self.sessions.write().remove(&token);
    Ok(())
  }
}
