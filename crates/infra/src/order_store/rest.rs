//! REST adapter for the hosted database (PostgREST-style interface).

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use velogo_orders::{OrderId, OrderKind};

use super::{NewOrder, OrderStore, OrderStoreError};

/// Order store speaking the hosted database's REST interface.
///
/// Authenticated with the privileged service-role key; this adapter runs on
/// the server side of the creation endpoint, never in the client.
#[derive(Debug, Clone)]
pub struct RestOrderStore {
    base_url: String,
    service_role: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct InsertedOrder {
    id: OrderId,
}

impl RestOrderStore {
    pub fn new(base_url: impl Into<String>, service_role: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            service_role: service_role.into(),
            client: reqwest::Client::new(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    async fn insert(
        &self,
        table: &str,
        body: &serde_json::Value,
        representation: bool,
    ) -> Result<reqwest::Response, String> {
        let mut req = self
            .client
            .post(self.table_url(table))
            .header("apikey", &self.service_role)
            .bearer_auth(&self.service_role)
            .json(body);
        if representation {
            req = req.header("Prefer", "return=representation");
        }

        let resp = req.send().await.map_err(|e| e.to_string())?;
        if !resp.status().is_success() {
            let status = resp.status();
            let detail = resp.text().await.unwrap_or_default();
            return Err(format!("{table} insert returned {status}: {detail}"));
        }
        Ok(resp)
    }
}

#[async_trait]
impl OrderStore for RestOrderStore {
    async fn create(&self, order: NewOrder) -> Result<OrderId, OrderStoreError> {
        let order_row = json!([{
            "type": order.kind,
            "restaurant_id": order.store_id,
            "address": order.address,
            "details": order.instructions,
            "payment_method": order.payment_method,
            "total": order.total,
            "status": "placed",
            "idempotency_key": order.idempotency_key,
        }]);

        let resp = self
            .insert("orders", &order_row, true)
            .await
            .map_err(OrderStoreError::OrderInsert)?;
        let inserted: Vec<InsertedOrder> = resp
            .json()
            .await
            .map_err(|e| OrderStoreError::OrderInsert(e.to_string()))?;
        let order_id = inserted
            .first()
            .map(|row| row.id)
            .ok_or_else(|| OrderStoreError::OrderInsert("empty insert response".to_string()))?;

        tracing::debug!(%order_id, kind = ?order.kind, "order row persisted");

        // Second step, no transaction: a failure here leaves the order row
        // without its detail rows. Reported as a failure either way.
        match order.kind {
            OrderKind::Food => {
                if !order.lines.is_empty() {
                    let rows: Vec<serde_json::Value> = order
                        .lines
                        .iter()
                        .map(|line| {
                            json!({
                                "order_id": order_id,
                                "name": line.name,
                                "unit_price": line.unit_price,
                                "qty": line.quantity,
                            })
                        })
                        .collect();
                    self.insert("order_items", &json!(rows), false)
                        .await
                        .map_err(|message| OrderStoreError::LineInsert { order_id, message })?;
                }
            }
            OrderKind::Courier => {
                if let Some(task) = &order.courier_task {
                    let row = json!([{
                        "order_id": order_id,
                        "what": task.description,
                        "from_address": task.pickup_address,
                        "to_address": task.dropoff_address,
                    }]);
                    self.insert("delivery_tasks", &row, false)
                        .await
                        .map_err(|message| OrderStoreError::TaskInsert { order_id, message })?;
                }
            }
        }

        Ok(order_id)
    }
}
