// core/src/status/policy.rs

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{TiffinError, TiffinResult};
use crate::model::OrderStatus;

/// Edges allowed under [`TransitionPolicy::ForwardOnly`].
const FORWARD_EDGES: &[(OrderStatus, OrderStatus)] = &[
  (OrderStatus::Pending, OrderStatus::Preparing),
  (OrderStatus::Preparing, OrderStatus::OutForDelivery),
  (OrderStatus::OutForDelivery, OrderStatus::Delivered),
];

/// Which status changes an admin may make.
///
/// `Unrestricted` lets any of the four states follow any other, `Delivered` included.
/// `ForwardOnly` walks the lifecycle one step at a time and never backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
  #[default]
  Unrestricted,
  ForwardOnly,
}

impl TransitionPolicy {
  /// Staying in the same state is always allowed.
  pub fn permits(self, from: OrderStatus, to: OrderStatus) -> bool {
    if from == to {
      return true;
    }
    match self {
      TransitionPolicy::Unrestricted => true,
      TransitionPolicy::ForwardOnly => FORWARD_EDGES.contains(&(from, to)),
    }
  }

  pub fn check(self, from: OrderStatus, to: OrderStatus) -> TiffinResult<()> {
    if self.permits(from, to) {
      Ok(())
    } else {
      Err(TiffinError::IllegalTransition { from, to })
    }
  }
}

impl FromStr for TransitionPolicy {
  type Err = TiffinError;

  fn from_str(raw: &str) -> Result<Self, Self::Err> {
    match raw.trim().to_ascii_lowercase().as_str() {
      "unrestricted" => Ok(TransitionPolicy::Unrestricted),
      "forward_only" | "forward-only" => Ok(TransitionPolicy::ForwardOnly),
      other => Err(TiffinError::Validation(format!("Unknown transition policy '{}'", other))),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unrestricted_allows_every_pair() {
    for from in OrderStatus::ALL {
      for to in OrderStatus::ALL {
        assert!(TransitionPolicy::Unrestricted.permits(from, to), "{} -> {}", from, to);
      }
    }
  }

  #[test]
  fn forward_only_follows_the_table() {
    let policy = TransitionPolicy::ForwardOnly;
    assert!(policy.permits(OrderStatus::Pending, OrderStatus::Preparing));
    assert!(policy.permits(OrderStatus::OutForDelivery, OrderStatus::Delivered));
    assert!(policy.permits(OrderStatus::Delivered, OrderStatus::Delivered));
    assert!(!policy.permits(OrderStatus::Pending, OrderStatus::Delivered));
    assert!(!policy.permits(OrderStatus::Delivered, OrderStatus::Pending));

    match policy.check(OrderStatus::Preparing, OrderStatus::Pending) {
      Err(TiffinError::IllegalTransition { from, to }) => {
        assert_eq!(from, OrderStatus::Preparing);
        assert_eq!(to, OrderStatus::Pending);
      }
      other => panic!("Expected IllegalTransition, got {:?}", other),
    }
  }

  #[test]
  fn policy_names_parse() {
    assert_eq!("forward_only".parse::<TransitionPolicy>().unwrap(), TransitionPolicy::ForwardOnly);
    assert_eq!(" Unrestricted ".parse::<TransitionPolicy>().unwrap(), TransitionPolicy::Unrestricted);
    assert!("sideways".parse::<TransitionPolicy>().is_err());
  }
}
