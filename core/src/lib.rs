// core/src/lib.rs

//! Tiffin: the cart, checkout and order-status core of a food ordering platform.
//!
//! Customers fill a cart from one restaurant at a time, check out to create an order, and
//! poll its status; admins move orders through the status lifecycle.
//!  - [`cart::CartManager`] keeps the session cart single-restaurant and prices it live.
//!  - [`checkout::CheckoutProcessor`] snapshots prices into an order and persists it atomically.
//!  - [`status::OrderStatusTracker`] guards status reads and admin-only status changes.
//!  - [`orders::OrderBook`] serves order history, details and admin maintenance.
//!
//! Storage is reached only through the traits in [`ports`]; [`memory`] implements them
//! in-process.

pub mod cart;
pub mod checkout;
pub mod error;
pub mod memory;
pub mod model;
pub mod money;
pub mod orders;
pub mod platform;
pub mod ports;
pub mod session;
pub mod status;

// --- Re-exports for the Public API ---

pub use crate::cart::{Cart, CartLine, CartManager, CartView};
pub use crate::checkout::CheckoutProcessor;
pub use crate::error::{ErrorKind, TiffinError, TiffinResult};
pub use crate::model::{
  Caller, MenuItem, MenuItemId, NewUser, Order, OrderDetails, OrderId, OrderItem, OrderStatus, Restaurant,
  RestaurantId, User, UserId,
};
pub use crate::orders::OrderBook;
pub use crate::platform::Platform;
pub use crate::session::{Session, SessionToken};
pub use crate::status::{OrderStatusTracker, StatusView, TransitionPolicy};
