use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use velogo_catalog::StoreId;
use velogo_core::EntityId;
use velogo_orders::{Order, OrderId, OrderKind, OrderLine, OrderStatus, PaymentMethod};

use super::{NewOrder, OrderStore, OrderStoreError};

/// Order row as the hosted schema stores it.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    pub id: OrderId,
    pub kind: OrderKind,
    pub store_id: Option<StoreId>,
    pub address: String,
    pub instructions: String,
    pub payment_method: PaymentMethod,
    pub total: u64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub order_id: OrderId,
    pub name: String,
    pub unit_price: u64,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub order_id: OrderId,
    pub description: String,
    pub pickup_address: String,
    pub dropoff_address: String,
}

/// In-memory order store for tests/dev.
///
/// Keeps the three relations separately, like the hosted schema, so the
/// two-step insert (order row first, then items/task) and its partial
/// failure mode can be exercised without a backend.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<OrderId, OrderRow>>,
    items: RwLock<Vec<ItemRow>>,
    tasks: RwLock<Vec<TaskRow>>,
    idempotency: RwLock<HashMap<String, OrderId>>,
    fail_secondary: AtomicBool,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Test hook: make secondary inserts (items/task) fail until unset,
    /// leaving order rows behind.
    pub fn set_secondary_failure(&self, fail: bool) {
        self.fail_secondary.store(fail, Ordering::SeqCst);
    }

    pub fn order(&self, id: OrderId) -> Option<OrderRow> {
        self.orders.read().ok()?.get(&id).cloned()
    }

    pub fn order_count(&self) -> usize {
        self.orders.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn items_of(&self, id: OrderId) -> Vec<ItemRow> {
        self.items
            .read()
            .map(|rows| rows.iter().filter(|r| r.order_id == id).cloned().collect())
            .unwrap_or_default()
    }

    pub fn task_of(&self, id: OrderId) -> Option<TaskRow> {
        self.tasks
            .read()
            .ok()?
            .iter()
            .find(|r| r.order_id == id)
            .cloned()
    }

    /// Assemble the full order from the three relations.
    pub fn fetch(&self, id: OrderId) -> Option<Order> {
        let row = self.order(id)?;
        let lines = self
            .items_of(id)
            .into_iter()
            .map(|r| OrderLine {
                name: r.name,
                unit_price: r.unit_price,
                quantity: r.quantity,
            })
            .collect();
        let courier_task = self.task_of(id).map(|t| velogo_orders::CourierTask {
            description: t.description,
            pickup_address: t.pickup_address,
            dropoff_address: t.dropoff_address,
        });
        Some(Order {
            id: row.id,
            kind: row.kind,
            store_id: row.store_id,
            address: row.address,
            instructions: row.instructions,
            payment_method: row.payment_method,
            total: row.total,
            status: row.status,
            lines,
            courier_task,
            placed_at: row.created_at,
        })
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(&self, order: NewOrder) -> Result<OrderId, OrderStoreError> {
        if let Some(key) = &order.idempotency_key {
            if let Some(existing) = self
                .idempotency
                .read()
                .map_err(|e| OrderStoreError::OrderInsert(e.to_string()))?
                .get(key)
            {
                return Ok(*existing);
            }
        }

        let order_id = OrderId::new(EntityId::new());

        // Primary insert: the order row, status always starts at placed.
        self.orders
            .write()
            .map_err(|e| OrderStoreError::OrderInsert(e.to_string()))?
            .insert(
                order_id,
                OrderRow {
                    id: order_id,
                    kind: order.kind,
                    store_id: order.store_id,
                    address: order.address.clone(),
                    instructions: order.instructions.clone(),
                    payment_method: order.payment_method,
                    total: order.total,
                    status: OrderStatus::Placed,
                    created_at: Utc::now(),
                },
            );

        if let Some(key) = &order.idempotency_key {
            if let Ok(mut map) = self.idempotency.write() {
                map.insert(key.clone(), order_id);
            }
        }

        // Secondary insert, by kind. A failure here leaves the order row.
        match order.kind {
            OrderKind::Food => {
                if self.fail_secondary.load(Ordering::SeqCst) {
                    return Err(OrderStoreError::LineInsert {
                        order_id,
                        message: "simulated line insert failure".to_string(),
                    });
                }
                let mut items = self
                    .items
                    .write()
                    .map_err(|e| OrderStoreError::LineInsert {
                        order_id,
                        message: e.to_string(),
                    })?;
                for line in &order.lines {
                    items.push(ItemRow {
                        order_id,
                        name: line.name.clone(),
                        unit_price: line.unit_price,
                        quantity: line.quantity,
                    });
                }
            }
            OrderKind::Courier => {
                if self.fail_secondary.load(Ordering::SeqCst) {
                    return Err(OrderStoreError::TaskInsert {
                        order_id,
                        message: "simulated task insert failure".to_string(),
                    });
                }
                if let Some(task) = &order.courier_task {
                    self.tasks
                        .write()
                        .map_err(|e| OrderStoreError::TaskInsert {
                            order_id,
                            message: e.to_string(),
                        })?
                        .push(TaskRow {
                            order_id,
                            description: task.description.clone(),
                            pickup_address: task.pickup_address.clone(),
                            dropoff_address: task.dropoff_address.clone(),
                        });
                }
            }
        }

        Ok(order_id)
    }
}
