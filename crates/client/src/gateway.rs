//! Order submission gateway: the storefront's single write path.

use async_trait::async_trait;
use serde_json::json;
use thiserror::Error;

use velogo_catalog::StoreId;
use velogo_orders::{CourierTask, OrderId, OrderKind, OrderLine, PaymentMethod};

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Rejected locally; no network call was made.
    #[error("invalid order: {0}")]
    Validation(String),

    /// The call never completed (connection refused, timeout, bad body).
    #[error("submission failed: {0}")]
    Transport(String),

    /// The endpoint answered with a failure status.
    #[error("order rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Client-side order creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub kind: OrderKind,
    pub store_id: Option<StoreId>,
    pub address: String,
    pub instructions: String,
    pub payment_method: PaymentMethod,
    /// Total in smallest currency unit, recomputed from the cart or quote
    /// immediately before drafting.
    pub total: u64,
    pub lines: Vec<OrderLine>,
    pub courier_task: Option<CourierTask>,
    pub idempotency_key: Option<String>,
}

impl OrderDraft {
    /// Required-field rules, applied before any network call.
    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.address.trim().is_empty() {
            return Err(GatewayError::Validation(
                "delivery address is required".to_string(),
            ));
        }
        if self.kind == OrderKind::Courier {
            let Some(task) = &self.courier_task else {
                return Err(GatewayError::Validation(
                    "courier orders need a task description".to_string(),
                ));
            };
            if task.description.trim().is_empty()
                || task.pickup_address.trim().is_empty()
                || task.dropoff_address.trim().is_empty()
            {
                return Err(GatewayError::Validation(
                    "courier task needs what, pickup and dropoff".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// The creation endpoint's wire body.
    pub fn wire_body(&self) -> serde_json::Value {
        json!({
            "type": self.kind,
            "restaurant_id": self.store_id,
            "address": self.address,
            "details": self.instructions,
            "payment_method": self.payment_method,
            "total": self.total,
            "items": self.lines.iter().map(|line| json!({
                "name": line.name,
                "unit_price": line.unit_price,
                "qty": line.quantity,
            })).collect::<Vec<_>>(),
            "mandado": self.courier_task.as_ref().map(|task| json!({
                "what": task.description,
                "from": task.pickup_address,
                "to": task.dropoff_address,
            })),
            "idempotency_key": self.idempotency_key,
        })
    }
}

/// The single external call that persists an order.
///
/// Awaited exactly once per user action; failures are terminal for that
/// attempt and are never retried automatically.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn submit(&self, draft: &OrderDraft) -> Result<OrderId, GatewayError>;
}

/// Gateway speaking to the creation endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct HttpOrderGateway {
    base_url: String,
    client: reqwest::Client,
}

impl HttpOrderGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl OrderGateway for HttpOrderGateway {
    async fn submit(&self, draft: &OrderDraft) -> Result<OrderId, GatewayError> {
        draft.validate()?;

        let resp = self
            .client
            .post(format!("{}/orders", self.base_url))
            .json(&draft.wire_body())
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = resp.status();
        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = body["error"]
                .as_str()
                .unwrap_or("unknown error")
                .to_string();
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        body["id"]
            .as_str()
            .ok_or_else(|| GatewayError::Transport("response carried no order id".to_string()))?
            .parse()
            .map_err(|e: velogo_core::DomainError| GatewayError::Transport(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn courier_draft() -> OrderDraft {
        OrderDraft {
            kind: OrderKind::Courier,
            store_id: None,
            address: "Av. Vallarta 6503, Zapopan".to_string(),
            instructions: String::new(),
            payment_method: PaymentMethod::Cash,
            total: 70,
            lines: vec![],
            courier_task: Some(CourierTask {
                description: "recoger paquete".to_string(),
                pickup_address: "Parque Revolución, GDL".to_string(),
                dropoff_address: "Av. Vallarta 6503, Zapopan".to_string(),
            }),
            idempotency_key: Some("k-1".to_string()),
        }
    }

    #[test]
    fn empty_address_fails_validation() {
        let mut draft = courier_draft();
        draft.address = "  ".to_string();
        assert!(matches!(
            draft.validate(),
            Err(GatewayError::Validation(_))
        ));
    }

    #[test]
    fn courier_draft_without_task_fails_validation() {
        let mut draft = courier_draft();
        draft.courier_task = None;
        assert!(draft.validate().is_err());
    }

    #[test]
    fn wire_body_uses_the_endpoint_field_names() {
        let body = courier_draft().wire_body();
        assert_eq!(body["type"], "courier");
        assert_eq!(body["mandado"]["what"], "recoger paquete");
        assert_eq!(body["mandado"]["from"], "Parque Revolución, GDL");
        assert_eq!(body["mandado"]["to"], "Av. Vallarta 6503, Zapopan");
        assert_eq!(body["payment_method"], "cash");
        assert_eq!(body["idempotency_key"], "k-1");
    }

    #[test]
    fn wire_body_maps_lines_to_item_rows() {
        let draft = OrderDraft {
            kind: OrderKind::Food,
            store_id: None,
            address: "Av. Juárez 123".to_string(),
            instructions: String::new(),
            payment_method: PaymentMethod::Card,
            total: 212,
            lines: vec![OrderLine {
                name: "Tacos al pastor (5u)".to_string(),
                unit_price: 89,
                quantity: 2,
            }],
            courier_task: None,
            idempotency_key: None,
        };
        let body = draft.wire_body();
        assert_eq!(body["items"][0]["qty"], 2);
        assert_eq!(body["items"][0]["unit_price"], 89);
        assert!(body["mandado"].is_null());
    }
}
