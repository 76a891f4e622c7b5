// core/src/ports.rs

//! Storage seams. The services only ever talk to these traits; `memory` implements them
//! in-process and the server implements them over PostgreSQL.

use async_trait::async_trait;

use crate::cart::Cart;
use crate::error::TiffinResult;
use crate::model::{
  MenuItem, MenuItemId, NewUser, Order, OrderDraft, OrderId, OrderItem, OrderStatus, Restaurant, RestaurantId, User,
  UserId,
};
use crate::session::{Session, SessionToken};

#[async_trait]
pub trait MenuCatalog: Send + Sync {
  async fn active_restaurants(&self) -> TiffinResult<Vec<Restaurant>>;

  async fn restaurant(&self, id: RestaurantId) -> TiffinResult<Option<Restaurant>>;

  /// Available items of one restaurant.
  async fn menu(&self, restaurant_id: RestaurantId) -> TiffinResult<Vec<MenuItem>>;

  async fn menu_item(&self, id: MenuItemId) -> TiffinResult<Option<MenuItem>>;

  /// One batch lookup. Ids that no longer resolve are simply absent from the result.
  async fn menu_items(&self, ids: &[MenuItemId]) -> TiffinResult<Vec<MenuItem>>;
}

#[async_trait]
pub trait OrderStore: Send + Sync {
  /// Persists the order as `Pending` together with one item per draft line. The total is
  /// taken from the draft as-is. Either everything is written or nothing is.
  async fn place_order(&self, draft: &OrderDraft) -> TiffinResult<Order>;

  async fn order(&self, id: OrderId) -> TiffinResult<Option<Order>>;

  async fn order_items(&self, id: OrderId) -> TiffinResult<Vec<OrderItem>>;

  /// Newest first.
  async fn orders_for_user(&self, user_id: UserId) -> TiffinResult<Vec<Order>>;

  /// Newest first.
  async fn all_orders(&self) -> TiffinResult<Vec<Order>>;

  /// Writes the new status and refreshes `updated_at`. `None` if the order does not exist.
  async fn update_status(&self, id: OrderId, status: OrderStatus) -> TiffinResult<Option<Order>>;

  /// Removes the order and its items in one step. `false` if there was nothing to delete.
  async fn delete_order(&self, id: OrderId) -> TiffinResult<bool>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
  /// Fails with `DuplicateEmail` (and writes nothing) when the email is taken.
  async fn create_user(&self, new_user: &NewUser, password_hash: &str) -> TiffinResult<User>;

  async fn user(&self, id: UserId) -> TiffinResult<Option<User>>;

  async fn user_by_email(&self, email: &str) -> TiffinResult<Option<User>>;
}

#[async_trait]
pub trait SessionStore: Send + Sync {
  /// Starts a session with a fresh token and an empty cart.
  async fn open(&self, user_id: UserId) -> TiffinResult<Session>;

  async fn session(&self, token: SessionToken) -> TiffinResult<Option<Session>>;

  async fn save_cart(&self, token: SessionToken, cart: &Cart) -> TiffinResult<()>;

  async fn close(&self, token: SessionToken) -> TiffinResult<()>;
}
