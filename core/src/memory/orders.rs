// core/src/memory/orders.rs
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;

use super::shared::{Sequence, Shared};
use crate::error::TiffinResult;
use crate::model::{Order, OrderDraft, OrderId, OrderItem, OrderItemId, OrderStatus, UserId};
use crate::money;
use crate::ports::OrderStore;

#[derive(Debug, Default)]
struct OrderTables {
  orders: BTreeMap<OrderId, Order>,
  items: Vec<OrderItem>,
  order_ids: Sequence,
  item_ids: Sequence,
}

impl OrderTables {
  fn newest_first(&self, filter: impl Fn(&Order) -> bool) -> Vec<Order> {
    let mut orders: Vec<Order> = self.orders.values().filter(|o| filter(o)).cloned().collect();
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    orders
  }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryOrderStore {
  tables: Shared<OrderTables>,
}

impl MemoryOrderStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn order_count(&self) -> usize {
    self.tables.read().orders.len()
  }

  pub fn item_count(&self) -> usize {
    self.tables.read().items.len()
  }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
  // The whole order is assembled under one write lock, so no reader can observe a
  // half-written order.
  async fn place_order(&self, draft: &OrderDraft) -> TiffinResult<Order> {
    let mut tables = self.tables.write();
    let now = Utc::now();
    let order = Order {
      id: OrderId(tables.order_ids.next()),
      user_id: draft.user_id,
      restaurant_id: draft.restaurant_id,
      status: OrderStatus::Pending,
      total_amount: money::normalize(draft.total_amount),
      created_at: now,
      updated_at: now,
    };

    for line in &draft.lines {
      let item = OrderItem {
        id: OrderItemId(tables.item_ids.next()),
        order_id: order.id,
        menu_item_id: line.menu_item_id,
        quantity: line.quantity,
        price_each: line.price_each,
      };
      tables.items.push(item);
    }

    tables.orders.insert(order.id, order.clone());
    Ok(order)
  }

  async fn order(&self, id: OrderId) -> TiffinResult<Option<Order>> {
    Ok(self.tables.read().orders.get(&id).cloned())
  }

  async fn order_items(&self, id: OrderId) -> TiffinResult<Vec<OrderItem>> {
    let tables = self.tables.read();
    Ok(tables.items.iter().filter(|item| item.order_id == id).cloned().collect())
  }

  async fn orders_for_user(&self, user_id: UserId) -> TiffinResult<Vec<Order>> {
    Ok(self.tables.read().newest_first(|o| o.user_id == user_id))
  }

  async fn all_orders(&self) -> TiffinResult<Vec<Order>> {
    Ok(self.tables.read().newest_first(|_| true))
  }

  async fn update_status(&self, id: OrderId, status: OrderStatus) -> TiffinResult<Option<Order>> {
    let mut tables = self.tables.write();
    Ok(tables.orders.get_mut(&id).map(|order| {
      order.status = status;
      order.updated_at = Utc::now();
      order.clone()
    }))
  }

  async fn delete_order(&self, id: OrderId) -> TiffinResult<bool> {
    let mut tables = self.tables.write();
    if tables.orders.remove(&id).is_none() {
      return Ok(false);
    }
    tables.items.retain(|item| item.order_id != id);
    Ok(true)
  }
}
