//! Order persistence boundary.

use async_trait::async_trait;
use thiserror::Error;

use velogo_catalog::StoreId;
use velogo_orders::{CourierTask, OrderId, OrderKind, OrderLine, PaymentMethod};

mod in_memory;
mod rest;

pub use in_memory::{InMemoryOrderStore, ItemRow, OrderRow, TaskRow};
pub use rest::RestOrderStore;

/// Validated order-creation data handed to a store.
///
/// Food orders carry `lines`; courier orders carry `courier_task`. The
/// optional idempotency key is client-generated and dedupes accidental
/// double submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub kind: OrderKind,
    pub store_id: Option<StoreId>,
    pub address: String,
    pub instructions: String,
    pub payment_method: PaymentMethod,
    /// Charged total in smallest currency unit.
    pub total: u64,
    pub lines: Vec<OrderLine>,
    pub courier_task: Option<CourierTask>,
    pub idempotency_key: Option<String>,
}

/// Persistence failure.
///
/// The secondary variants mean the order row was already written: the
/// operation is still reported as failed, and the stray row is left behind
/// (at-least-once insert, no compensation).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderStoreError {
    #[error("order insert failed: {0}")]
    OrderInsert(String),

    #[error("line items insert failed for order {order_id}: {message}")]
    LineInsert { order_id: OrderId, message: String },

    #[error("courier task insert failed for order {order_id}: {message}")]
    TaskInsert { order_id: OrderId, message: String },
}

/// The single external persistence call of the storefront: write the order
/// record, then (by kind) its line items or courier task, and hand back the
/// new order id.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn create(&self, order: NewOrder) -> Result<OrderId, OrderStoreError>;
}
