//! Cart snapshot persistence: port + persist-on-mutation session.

use std::sync::{Arc, Mutex};

use thiserror::Error;

use velogo_catalog::{MenuItem, MenuItemId, StoreId};
use velogo_core::DomainResult;
use velogo_pricing::PriceBreakdown;

use crate::cart::Cart;

/// Fixed namespace the snapshot is stored under.
pub const CART_NAMESPACE: &str = "velogo-cart";

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read cart snapshot: {0}")]
    Read(String),
    #[error("failed to write cart snapshot: {0}")]
    Write(String),
}

/// Durable storage for the cart snapshot.
///
/// Loaded once at session start; rewritten after every mutation.
pub trait SnapshotStore: Send + Sync {
    fn load(&self) -> Result<Option<Cart>, SnapshotError>;
    fn save(&self, cart: &Cart) -> Result<(), SnapshotError>;
}

/// In-memory snapshot store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    inner: Mutex<Option<Cart>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the store, as if a previous session had saved.
    pub fn seeded(cart: Cart) -> Self {
        Self {
            inner: Mutex::new(Some(cart)),
        }
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn load(&self) -> Result<Option<Cart>, SnapshotError> {
        Ok(self.inner.lock().map_err(|e| SnapshotError::Read(e.to_string()))?.clone())
    }

    fn save(&self, cart: &Cart) -> Result<(), SnapshotError> {
        *self
            .inner
            .lock()
            .map_err(|e| SnapshotError::Write(e.to_string()))? = Some(cart.clone());
        Ok(())
    }
}

/// A cart bound to its snapshot store.
///
/// Every mutation goes through the cart first; only successful mutations are
/// persisted. A failing save is logged and does not poison the in-memory
/// cart; the session keeps working and the next save retries the write.
pub struct CartSession {
    cart: Cart,
    store: Arc<dyn SnapshotStore>,
}

impl CartSession {
    /// Restore the persisted snapshot, or start empty when there is none
    /// (or it cannot be read).
    pub fn restore(store: Arc<dyn SnapshotStore>) -> Self {
        let cart = match store.load() {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(err) => {
                tracing::warn!(namespace = CART_NAMESPACE, "cart snapshot load failed: {err}");
                Cart::new()
            }
        };
        Self { cart, store }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn add(&mut self, item: MenuItem, store_id: StoreId) -> DomainResult<()> {
        self.cart.add(item, store_id)?;
        self.persist();
        Ok(())
    }

    pub fn increment(&mut self, item_id: MenuItemId) {
        self.cart.increment(item_id);
        self.persist();
    }

    pub fn decrement(&mut self, item_id: MenuItemId) {
        self.cart.decrement(item_id);
        self.persist();
    }

    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    pub fn breakdown(&self) -> PriceBreakdown {
        self.cart.breakdown()
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.cart) {
            tracing::warn!(namespace = CART_NAMESPACE, "cart snapshot save failed: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velogo_core::EntityId;

    fn item(store: StoreId) -> MenuItem {
        MenuItem {
            id: MenuItemId::new(EntityId::new()),
            store_id: store,
            name: "Hawaiana".to_string(),
            unit_price: 149,
            tags: vec![],
        }
    }

    #[test]
    fn every_mutation_rewrites_the_snapshot() {
        let store = Arc::new(InMemorySnapshotStore::new());
        let s = StoreId::new(EntityId::new());
        let pizza = item(s);

        let mut session = CartSession::restore(store.clone());
        session.add(pizza.clone(), s).unwrap();
        assert_eq!(store.load().unwrap().unwrap().item_count(), 1);

        session.increment(pizza.id);
        assert_eq!(store.load().unwrap().unwrap().item_count(), 2);

        session.clear();
        assert!(store.load().unwrap().unwrap().is_empty());
    }

    #[test]
    fn restore_picks_up_the_previous_session() {
        let s = StoreId::new(EntityId::new());
        let pizza = item(s);
        let mut previous = Cart::new();
        previous.add(pizza, s).unwrap();

        let store = Arc::new(InMemorySnapshotStore::seeded(previous.clone()));
        let session = CartSession::restore(store);
        assert_eq!(session.cart(), &previous);
    }

    #[test]
    fn rejected_add_is_not_persisted() {
        let store = Arc::new(InMemorySnapshotStore::new());
        let a = StoreId::new(EntityId::new());
        let b = StoreId::new(EntityId::new());

        let mut session = CartSession::restore(store.clone());
        session.add(item(a), a).unwrap();
        let persisted_before = store.load().unwrap().unwrap();

        assert!(session.add(item(b), b).is_err());
        assert_eq!(store.load().unwrap().unwrap(), persisted_before);
    }
}
