// server/src/models/mod.rs

//! Row shapes as PostgreSQL returns them, plus their conversion into the core types.

pub mod catalog;
pub mod order;
pub mod order_item;
pub mod session;
pub mod user;

pub use catalog::{MenuItemRow, RestaurantRow};
pub use order::OrderRow;
pub use order_item::OrderItemRow;
pub use session::SessionRow;
pub use user::UserRow;
