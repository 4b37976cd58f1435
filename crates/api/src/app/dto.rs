use serde::Deserialize;

use velogo_catalog::StoreId;
use velogo_infra::NewOrder;
use velogo_orders::{CourierTask, OrderKind, OrderLine, PaymentMethod};

// -------------------------
// Request DTOs
// -------------------------

/// Body of the creation endpoint.
///
/// Everything is optional at the wire level; [`into_new_order`] applies the
/// required-field rules and rejects what the handler should answer 400 for.
///
/// [`into_new_order`]: CreateOrderRequest::into_new_order
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub restaurant_id: Option<String>,
    pub address: Option<String>,
    pub details: Option<String>,
    pub payment_method: Option<String>,
    pub total: Option<u64>,
    pub items: Option<Vec<OrderItemRequest>>,
    pub mandado: Option<CourierTaskRequest>,
    pub idempotency_key: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OrderItemRequest {
    pub name: String,
    pub unit_price: u64,
    pub qty: u32,
}

#[derive(Debug, Deserialize)]
pub struct CourierTaskRequest {
    pub what: String,
    pub from: String,
    pub to: String,
}

/// Reasons a payload fails validation. All of them map to the same
/// user-visible 400 response.
#[derive(Debug, PartialEq, Eq)]
pub enum InvalidPayload {
    MissingKind,
    UnknownKind,
    MissingAddress,
    MissingPaymentMethod,
    UnknownPaymentMethod,
    BadRestaurantId,
}

impl CreateOrderRequest {
    /// Validate and convert into store input. No side effects; the caller
    /// must not touch the store when this fails.
    pub fn into_new_order(self) -> Result<NewOrder, InvalidPayload> {
        let kind: OrderKind = match self.kind.as_deref() {
            None | Some("") => return Err(InvalidPayload::MissingKind),
            Some("food") => OrderKind::Food,
            Some("courier") => OrderKind::Courier,
            Some(_) => return Err(InvalidPayload::UnknownKind),
        };

        let address = match self.address {
            Some(a) if !a.trim().is_empty() => a,
            _ => return Err(InvalidPayload::MissingAddress),
        };

        let payment_method: PaymentMethod = match self.payment_method.as_deref() {
            None | Some("") => return Err(InvalidPayload::MissingPaymentMethod),
            Some(raw) => raw.parse().map_err(|_| InvalidPayload::UnknownPaymentMethod)?,
        };

        let store_id: Option<StoreId> = match self.restaurant_id.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(raw.parse().map_err(|_| InvalidPayload::BadRestaurantId)?),
        };

        let lines: Vec<OrderLine> = match kind {
            OrderKind::Food => self
                .items
                .unwrap_or_default()
                .into_iter()
                .map(|i| OrderLine {
                    name: i.name,
                    unit_price: i.unit_price,
                    quantity: i.qty,
                })
                .collect(),
            OrderKind::Courier => Vec::new(),
        };

        let courier_task = match kind {
            OrderKind::Courier => self.mandado.map(|m| CourierTask {
                description: m.what,
                pickup_address: m.from,
                dropoff_address: m.to,
            }),
            OrderKind::Food => None,
        };

        Ok(NewOrder {
            kind,
            store_id,
            address,
            instructions: self.details.unwrap_or_default(),
            payment_method,
            total: self.total.unwrap_or(0),
            lines,
            courier_task,
            idempotency_key: self.idempotency_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> CreateOrderRequest {
        CreateOrderRequest {
            kind: Some("food".to_string()),
            restaurant_id: None,
            address: Some("Av. Juárez 123".to_string()),
            details: None,
            payment_method: Some("cash".to_string()),
            total: Some(212),
            items: Some(vec![OrderItemRequest {
                name: "Tacos al pastor (5u)".to_string(),
                unit_price: 89,
                qty: 2,
            }]),
            mandado: None,
            idempotency_key: None,
        }
    }

    #[test]
    fn valid_food_payload_converts() {
        let order = base().into_new_order().unwrap();
        assert_eq!(order.kind, OrderKind::Food);
        assert_eq!(order.lines.len(), 1);
        assert_eq!(order.total, 212);
        assert!(order.courier_task.is_none());
    }

    #[test]
    fn missing_address_is_rejected() {
        let mut req = base();
        req.address = None;
        assert_eq!(
            req.into_new_order().unwrap_err(),
            InvalidPayload::MissingAddress
        );

        let mut req = base();
        req.address = Some("   ".to_string());
        assert_eq!(
            req.into_new_order().unwrap_err(),
            InvalidPayload::MissingAddress
        );
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let mut req = base();
        req.kind = Some("groceries".to_string());
        assert_eq!(req.into_new_order().unwrap_err(), InvalidPayload::UnknownKind);
    }

    #[test]
    fn courier_payload_keeps_the_task_and_drops_items() {
        let mut req = base();
        req.kind = Some("courier".to_string());
        req.mandado = Some(CourierTaskRequest {
            what: "comprar flores".to_string(),
            from: "Parque Revolución, GDL".to_string(),
            to: "Av. Vallarta 6503, Zapopan".to_string(),
        });
        let order = req.into_new_order().unwrap();
        assert!(order.lines.is_empty());
        assert_eq!(
            order.courier_task.unwrap().description,
            "comprar flores"
        );
    }

    #[test]
    fn malformed_restaurant_id_is_rejected() {
        let mut req = base();
        req.restaurant_id = Some("rs1".to_string());
        assert_eq!(
            req.into_new_order().unwrap_err(),
            InvalidPayload::BadRestaurantId
        );
    }
}
