//! `velogo-cart` — single-store shopping cart.
//!
//! The cart is either empty or owned by exactly one restaurant; the owning
//! store is part of the cart itself so the invariant cannot be violated line
//! by line. Mutations persist a snapshot through the [`SnapshotStore`] port
//! so a reload restores the session.

pub mod cart;
pub mod snapshot;

pub use cart::{Cart, CartLine};
pub use snapshot::{
    CartSession, InMemorySnapshotStore, SnapshotError, SnapshotStore, CART_NAMESPACE,
};
