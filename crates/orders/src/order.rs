use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use velogo_catalog::StoreId;
use velogo_core::{Entity, EntityId};

use crate::status::OrderStatus;

/// Order identifier, assigned by the persistence boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub EntityId);

impl OrderId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::str::FromStr for OrderId {
    type Err = velogo_core::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// The two services the storefront sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    Food,
    Courier,
}

/// Payment methods offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    Transfer,
    Spei,
}

impl core::str::FromStr for PaymentMethod {
    type Err = velogo_core::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(PaymentMethod::Cash),
            "card" => Ok(PaymentMethod::Card),
            "transfer" => Ok(PaymentMethod::Transfer),
            "spei" => Ok(PaymentMethod::Spei),
            other => Err(velogo_core::DomainError::validation(format!(
                "unknown payment method: {other}"
            ))),
        }
    }
}

/// Order line as persisted: a denormalized snapshot of the menu item at
/// purchase time, so later catalog edits cannot rewrite order history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    /// Price in smallest currency unit.
    pub unit_price: u64,
    pub quantity: u32,
}

/// Point-to-point courier task attached to a courier order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourierTask {
    pub description: String,
    pub pickup_address: String,
    pub dropoff_address: String,
}

/// A placed order.
///
/// Created atomically with its lines/task at submission time. `status`
/// starts at `Placed` (assigned locally, not re-fetched) and is only
/// advanced by the delivery tracker afterwards. Orders are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub kind: OrderKind,
    pub store_id: Option<StoreId>,
    pub address: String,
    pub instructions: String,
    pub payment_method: PaymentMethod,
    /// Charged total in smallest currency unit.
    pub total: u64,
    pub status: OrderStatus,
    pub lines: Vec<OrderLine>,
    pub courier_task: Option<CourierTask>,
    pub placed_at: DateTime<Utc>,
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_kind_wire_values_are_lowercase() {
        assert_eq!(serde_json::to_string(&OrderKind::Food).unwrap(), "\"food\"");
        assert_eq!(
            serde_json::to_string(&OrderKind::Courier).unwrap(),
            "\"courier\""
        );
    }

    #[test]
    fn payment_method_parses_wire_values() {
        assert_eq!("cash".parse::<PaymentMethod>().unwrap(), PaymentMethod::Cash);
        assert_eq!("spei".parse::<PaymentMethod>().unwrap(), PaymentMethod::Spei);
        assert!("Efectivo".parse::<PaymentMethod>().is_err());
    }
}
