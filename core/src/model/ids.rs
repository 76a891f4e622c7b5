// core/src/model/ids.rs

//! Integer identifiers, one newtype per table so they cannot be mixed up.
//!
//! All of them are serde-transparent: a `MenuItemId(7)` is `7` on the wire and `"7"` when
//! used as a JSON object key (the cart's `items` map).

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! row_id {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct $name(pub i64);

    impl $name {
      pub fn get(self) -> i64 {
        self.0
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
      }
    }

    impl From<i64> for $name {
      fn from(raw: i64) -> Self {
        $name(raw)
      }
    }
  };
}

row_id!(UserId);
row_id!(RestaurantId);
row_id!(MenuItemId);
row_id!(
  /// Returned by checkout so the client can go straight to status tracking.
  OrderId
);
row_id!(OrderItemId);
