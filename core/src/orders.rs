// core/src/orders.rs

//! Order history, order details and admin maintenance.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::error::{TiffinError, TiffinResult};
use crate::model::{Caller, Order, OrderDetails, OrderId};
use crate::ports::OrderStore;
use crate::status::readable_order;

#[derive(Clone)]
pub struct OrderBook {
  orders: Arc<dyn OrderStore>,
}

impl OrderBook {
  pub fn new(orders: Arc<dyn OrderStore>) -> Self {
    OrderBook { orders }
  }

  /// The caller's own orders, newest first.
  #[instrument(name = "orders::history", skip(self, caller), fields(user_id = %caller.user_id), err(Display))]
  pub async fn history(&self, caller: &Caller) -> TiffinResult<Vec<Order>> {
    self.orders.orders_for_user(caller.user_id).await
  }

  #[instrument(name = "orders::details", skip(self, caller), fields(user_id = %caller.user_id), err(Display))]
  pub async fn details(&self, order_id: OrderId, caller: &Caller) -> TiffinResult<OrderDetails> {
    let order = readable_order(self.orders.as_ref(), order_id, caller).await?;
    let items = self.orders.order_items(order_id).await?;
    Ok(OrderDetails { order, items })
  }

  /// Every order on the platform, newest first. Admin only.
  #[instrument(name = "orders::all", skip(self, caller), fields(user_id = %caller.user_id), err(Display))]
  pub async fn all_orders(&self, caller: &Caller) -> TiffinResult<Vec<Order>> {
    require_admin(caller)?;
    self.orders.all_orders().await
  }

  /// Deletes an order together with its items. Admin only.
  #[instrument(name = "orders::delete", skip(self, caller), fields(user_id = %caller.user_id), err(Display))]
  pub async fn delete(&self, order_id: OrderId, caller: &Caller) -> TiffinResult<()> {
    require_admin(caller)?;
    if !self.orders.delete_order(order_id).await? {
      return Err(TiffinError::not_found("Order", order_id));
    }
    info!(%order_id, "Order deleted with its items.");
    Ok(())
  }
}

fn require_admin(caller: &Caller) -> TiffinResult<()> {
  if caller.is_admin {
    Ok(())
  } else {
    warn!("Admin-only operation refused.");
    Err(TiffinError::NotAuthorized)
  }
}
