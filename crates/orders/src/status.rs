//! Delivery status lifecycle.

use serde::{Deserialize, Serialize};

use crate::order::OrderKind;

/// Delivery status, in lifecycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Placed,
    Accepted,
    Preparing,
    Pickup,
    Delivered,
}

const FOOD_FLOW: &[OrderStatus] = &[
    OrderStatus::Placed,
    OrderStatus::Accepted,
    OrderStatus::Preparing,
    OrderStatus::Pickup,
    OrderStatus::Delivered,
];

// Couriers have nothing to cook, so the flow skips `Preparing`.
const COURIER_FLOW: &[OrderStatus] = &[
    OrderStatus::Placed,
    OrderStatus::Accepted,
    OrderStatus::Pickup,
    OrderStatus::Delivered,
];

impl OrderStatus {
    /// The full status sequence for an order kind, first to terminal.
    pub fn flow(kind: OrderKind) -> &'static [OrderStatus] {
        match kind {
            OrderKind::Food => FOOD_FLOW,
            OrderKind::Courier => COURIER_FLOW,
        }
    }

    /// The successor status in flow order; `None` at the terminal state
    /// (or for a status that does not appear in this kind's flow).
    pub fn next(self, kind: OrderKind) -> Option<OrderStatus> {
        let flow = Self::flow(kind);
        let idx = flow.iter().position(|s| *s == self)?;
        flow.get(idx + 1).copied()
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn food_flow_walks_all_five_states() {
        let mut status = OrderStatus::Placed;
        let mut seen = vec![status];
        while let Some(next) = status.next(OrderKind::Food) {
            status = next;
            seen.push(status);
        }
        assert_eq!(seen, FOOD_FLOW);
        assert!(status.is_terminal());
    }

    #[test]
    fn courier_flow_skips_preparing() {
        let mut status = OrderStatus::Placed;
        let mut seen = vec![status];
        while let Some(next) = status.next(OrderKind::Courier) {
            status = next;
            seen.push(status);
        }
        assert_eq!(seen, COURIER_FLOW);
        assert!(!seen.contains(&OrderStatus::Preparing));
    }

    #[test]
    fn delivered_has_no_successor() {
        assert_eq!(OrderStatus::Delivered.next(OrderKind::Food), None);
        assert_eq!(OrderStatus::Delivered.next(OrderKind::Courier), None);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Placed).unwrap(),
            "\"placed\""
        );
    }
}
