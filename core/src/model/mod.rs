// core/src/model/mod.rs

//! Data structures shared by the cart, checkout and status services.

pub mod catalog;
pub mod ids;
pub mod order;
pub mod user;

pub use catalog::{MenuItem, Restaurant};
pub use ids::{MenuItemId, OrderId, OrderItemId, RestaurantId, UserId};
pub use order::{DraftLine, Order, OrderDetails, OrderDraft, OrderItem, OrderStatus};
pub use user::{Caller, NewUser, User};
