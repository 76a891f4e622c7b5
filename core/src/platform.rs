// core/src/platform.rs

use std::sync::Arc;

use crate::cart::CartManager;
use crate::checkout::CheckoutProcessor;
use crate::memory::{MemoryCatalog, MemoryOrderStore, MemorySessionStore, MemoryUserStore};
use crate::orders::OrderBook;
use crate::ports::{MenuCatalog, OrderStore, SessionStore, UserStore};
use crate::status::{OrderStatusTracker, TransitionPolicy};

/// The four storage ports plus the services built on top of them.
///
/// Cheap to clone; every clone shares the same stores.
#[derive(Clone)]
pub struct Platform {
  catalog: Arc<dyn MenuCatalog>,
  users: Arc<dyn UserStore>,
  sessions: Arc<dyn SessionStore>,
  cart: CartManager,
  checkout: CheckoutProcessor,
  status: OrderStatusTracker,
  orders: OrderBook,
}

impl Platform {
  pub fn new(
    catalog: Arc<dyn MenuCatalog>,
    orders: Arc<dyn OrderStore>,
    users: Arc<dyn UserStore>,
    sessions: Arc<dyn SessionStore>,
    policy: TransitionPolicy,
  ) -> Self {
    Platform {
      cart: CartManager::new(catalog.clone()),
      checkout: CheckoutProcessor::new(catalog.clone(), orders.clone()),
      status: OrderStatusTracker::new(orders.clone(), policy),
      orders: OrderBook::new(orders),
      catalog,
      users,
      sessions,
    }
  }

  /// Wires fresh in-memory stores. The concrete catalog and order store are returned as
  /// well so callers can seed menus or inspect row counts.
  pub fn in_memory(policy: TransitionPolicy) -> (Self, MemoryCatalog, MemoryOrderStore) {
    let catalog = MemoryCatalog::new();
    let orders = MemoryOrderStore::new();
    let platform = Platform::new(
      Arc::new(catalog.clone()),
      Arc::new(orders.clone()),
      Arc::new(MemoryUserStore::new()),
      Arc::new(MemorySessionStore::new()),
      policy,
    );
    (platform, catalog, orders)
  }

  pub fn catalog(&self) -> &dyn MenuCatalog {
    self.catalog.as_ref()
  }

  pub fn users(&self) -> &dyn UserStore {
    self.users.as_ref()
  }

  pub fn sessions(&self) -> &dyn SessionStore {
    self.sessions.as_ref()
  }

  pub fn cart(&self) -> &CartManager {
    &self.cart
  }

  pub fn checkout(&self) -> &CheckoutProcessor {
    &self.checkout
  }

  pub fn status(&self) -> &OrderStatusTracker {
    &self.status
  }

  pub fn orders(&self) -> &OrderBook {
    &self.orders
  }
}
