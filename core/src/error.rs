// core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

use crate::model::{OrderStatus, RestaurantId};

/// Coarse classification of a [`TiffinError`], used by outer layers to pick a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// Bad user input: missing fields, unknown status literal, empty cart.
  Input,
  /// The request clashes with existing state (cart restaurant, registered email, lifecycle).
  Conflict,
  /// The caller may not see or touch the resource.
  Authorization,
  NotFound,
  /// The backing store failed; whatever was in flight has been rolled back.
  Persistence,
}

#[derive(Debug, Error)]
pub enum TiffinError {
  #[error("Validation failed: {0}")]
  Validation(String),

  #[error("Your cart is empty.")]
  EmptyCart,

  #[error("Invalid status: '{value}'")]
  InvalidStatus { value: String },

  #[error("Cart contains items from a different restaurant (cart: {cart_restaurant}, item: {item_restaurant}).")]
  CrossRestaurantConflict {
    cart_restaurant: RestaurantId,
    item_restaurant: RestaurantId,
  },

  #[error("Email already registered: {email}")]
  DuplicateEmail { email: String },

  #[error("Order cannot move from '{from}' to '{to}'")]
  IllegalTransition { from: OrderStatus, to: OrderStatus },

  #[error("Not authorized")]
  NotAuthorized,

  #[error("{entity} {id} not found")]
  NotFound { entity: &'static str, id: String },

  #[error("Storage operation failed. Source: {source}")]
  Storage {
    #[source]
    source: AnyhowError,
  },
}

impl TiffinError {
  pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
    TiffinError::NotFound {
      entity,
      id: id.to_string(),
    }
  }

  pub fn kind(&self) -> ErrorKind {
    match self {
      TiffinError::Validation(_) | TiffinError::EmptyCart | TiffinError::InvalidStatus { .. } => ErrorKind::Input,
      TiffinError::CrossRestaurantConflict { .. }
      | TiffinError::DuplicateEmail { .. }
      | TiffinError::IllegalTransition { .. } => ErrorKind::Conflict,
      TiffinError::NotAuthorized => ErrorKind::Authorization,
      TiffinError::NotFound { .. } => ErrorKind::NotFound,
      TiffinError::Storage { .. } => ErrorKind::Persistence,
    }
  }
}

// Adapters report backend failures as anyhow errors.
impl From<AnyhowError> for TiffinError {
  fn from(err: AnyhowError) -> Self {
    TiffinError::Storage { source: err }
  }
}

pub type TiffinResult<T, E = TiffinError> = std::result::Result<T, E>;
