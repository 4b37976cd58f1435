//! `velogo-infra` — persistence adapters.
//!
//! The order store (in-memory for tests/dev, REST for the hosted database)
//! and the JSON-file cart snapshot store.

pub mod cart_store;
pub mod order_store;

pub use cart_store::JsonFileCartStore;
pub use order_store::{InMemoryOrderStore, NewOrder, OrderStore, OrderStoreError, RestOrderStore};
