//! Food-order pricing: subtotal + flat delivery fee + percentage service fee.

use serde::{Deserialize, Serialize};

use velogo_core::ValueObject;

/// Flat delivery fee, charged only on non-empty carts.
pub const DELIVERY_FEE: u64 = 25;

/// Service fee percentage applied to the subtotal.
pub const SERVICE_FEE_PERCENT: u64 = 5;

/// Derived totals for a food cart.
///
/// Never stored; recompute from the cart on every read so the displayed and
/// charged totals cannot drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub subtotal: u64,
    pub delivery_fee: u64,
    pub service_fee: u64,
    pub total: u64,
}

impl ValueObject for PriceBreakdown {}

/// Compute the breakdown for a cart given as `(unit_price, quantity)` pairs.
///
/// Pure and deterministic. Quantities are positive by cart construction, so
/// the subtotal cannot underflow.
pub fn food_breakdown<I>(lines: I) -> PriceBreakdown
where
    I: IntoIterator<Item = (u64, u32)>,
{
    let mut subtotal: u64 = 0;
    let mut empty = true;
    for (unit_price, quantity) in lines {
        empty = false;
        subtotal += unit_price * u64::from(quantity);
    }

    let delivery_fee = if empty { 0 } else { DELIVERY_FEE };
    let service_fee = percent_round_half_up(subtotal, SERVICE_FEE_PERCENT);

    PriceBreakdown {
        subtotal,
        delivery_fee,
        service_fee,
        total: subtotal + delivery_fee + service_fee,
    }
}

/// `round(amount × pct%)` with half-up rounding, in integer arithmetic.
fn percent_round_half_up(amount: u64, pct: u64) -> u64 {
    (amount * pct + 50) / 100
}
