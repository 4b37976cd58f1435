//! `velogo-pricing` — pure order-total arithmetic.
//!
//! Two distinct formulas: food carts (subtotal + flat delivery fee +
//! 5% service fee, rounded half-up) and courier runs (base + per-km +
//! flat service fee). No side effects anywhere in this crate.

pub mod courier;
pub mod food;

pub use courier::{
    courier_quote, CourierQuote, COURIER_BASE_FEE, COURIER_PER_KM, COURIER_SERVICE_FEE,
    DISTANCE_KM_MAX, DISTANCE_KM_MIN,
};
pub use food::{food_breakdown, PriceBreakdown, DELIVERY_FEE, SERVICE_FEE_PERCENT};
