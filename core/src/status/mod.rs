// core/src/status/mod.rs

//! Order status reads for owners/admins and admin-only status changes.

pub mod policy;

pub use policy::TransitionPolicy;

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::error::{TiffinError, TiffinResult};
use crate::model::{Caller, Order, OrderId, OrderStatus};
use crate::ports::OrderStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusView {
  pub order_id: OrderId,
  pub status: OrderStatus,
  pub updated_at: DateTime<Utc>,
}

impl From<&Order> for StatusView {
  fn from(order: &Order) -> Self {
    StatusView {
      order_id: order.id,
      status: order.status,
      updated_at: order.updated_at,
    }
  }
}

#[derive(Clone)]
pub struct OrderStatusTracker {
  orders: Arc<dyn OrderStore>,
  policy: TransitionPolicy,
}

impl OrderStatusTracker {
  pub fn new(orders: Arc<dyn OrderStore>, policy: TransitionPolicy) -> Self {
    OrderStatusTracker { orders, policy }
  }

  pub fn policy(&self) -> TransitionPolicy {
    self.policy
  }

  /// Current status of an order the caller owns (or any order, for an admin).
  ///
  /// A non-admin asking about an order that is not theirs gets `NotAuthorized` whether or
  /// not it exists.
  #[instrument(name = "status::get", skip(self, caller), fields(user_id = %caller.user_id), err(Display))]
  pub async fn status(&self, order_id: OrderId, caller: &Caller) -> TiffinResult<StatusView> {
    let order = readable_order(self.orders.as_ref(), order_id, caller).await?;
    Ok(StatusView::from(&order))
  }

  /// Admin-only. `raw_status` must be one of the four status literals.
  #[instrument(name = "status::set", skip(self, caller), fields(user_id = %caller.user_id), err(Display))]
  pub async fn set_status(&self, order_id: OrderId, raw_status: &str, caller: &Caller) -> TiffinResult<StatusView> {
    if !caller.is_admin {
      warn!("Status change refused: caller is not an admin.");
      return Err(TiffinError::NotAuthorized);
    }
    let new_status: OrderStatus = raw_status.parse()?;

    let current = self
      .orders
      .order(order_id)
      .await?
      .ok_or_else(|| TiffinError::not_found("Order", order_id))?;
    self.policy.check(current.status, new_status)?;

    if current.status == new_status {
      info!(status = %new_status, "Status unchanged.");
      return Ok(StatusView::from(&current));
    }

    // Concurrent admins race here; the last write wins.
    let updated = self
      .orders
      .update_status(order_id, new_status)
      .await?
      .ok_or_else(|| TiffinError::not_found("Order", order_id))?;
    info!(from = %current.status, to = %updated.status, "Order status changed.");
    Ok(StatusView::from(&updated))
  }
}

/// Loads an order and applies the owner-or-admin read rule.
pub(crate) async fn readable_order(orders: &dyn OrderStore, order_id: OrderId, caller: &Caller) -> TiffinResult<Order> {
  match orders.order(order_id).await? {
    Some(order) if caller.can_read(order.user_id) => Ok(order),
    None if caller.is_admin => Err(TiffinError::not_found("Order", order_id)),
    _ => {
      warn!(%order_id, "Read refused: caller neither owns the order nor is an admin.");
      Err(TiffinError::NotAuthorized)
    }
  }
}
