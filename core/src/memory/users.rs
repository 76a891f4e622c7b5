// core/src/memory/users.rs
use async_trait::async_trait;
use std::collections::BTreeMap;

use super::shared::{Sequence, Shared};
use crate::error::{TiffinError, TiffinResult};
use crate::model::{NewUser, User, UserId};
use crate::ports::UserStore;

#[derive(Debug, Default)]
struct UserTables {
  users: BTreeMap<UserId, User>,
  ids: Sequence,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
  tables: Shared<UserTables>,
}

impl MemoryUserStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl UserStore for MemoryUserStore {
  async fn create_user(&self, new_user: &NewUser, password_hash: &str) -> TiffinResult<User> {
    let mut tables = self.tables.write();
    if tables.users.values().any(|u| u.email == new_user.email) {
      return Err(TiffinError::DuplicateEmail {
        email: new_user.email.clone(),
      });
    }
    let user = User {
      id: UserId(tables.ids.next()),
      name: new_user.name.clone(),
      email: new_user.email.clone(),
      password_hash: password_hash.to_string(),
      is_admin: new_user.is_admin,
    };
    tables.users.insert(user.id, user.clone());
    Ok(user)
  }

  async fn user(&self, id: UserId) -> TiffinResult<Option<User>> {
    Ok(self.tables.read().users.get(&id).cloned())
  }

  async fn user_by_email(&self, email: &str) -> TiffinResult<Option<User>> {
    let tables = self.tables.read();
    Ok(tables.users.values().find(|u| u.email == email).cloned())
  }
}
