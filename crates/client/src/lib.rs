//! `velogo-client` — the storefront application core.
//!
//! Holds the explicit app-state struct the screens render from, the order
//! submission gateway, and the wiring between checkout, the cart session and
//! the delivery-status simulation.

pub mod gateway;
pub mod state;

pub use gateway::{GatewayError, HttpOrderGateway, OrderDraft, OrderGateway};
pub use state::{ActiveOrder, CheckoutDetails, CourierRequest, Storefront, View};
