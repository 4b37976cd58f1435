//! Courier ("mandado") pricing: base fee + per-km rate + flat service fee.

use serde::{Deserialize, Serialize};

use velogo_core::ValueObject;

pub const COURIER_BASE_FEE: u64 = 25;
pub const COURIER_PER_KM: u64 = 8;
pub const COURIER_SERVICE_FEE: u64 = 5;

/// Bounds of the distance slider; callers clamp before quoting.
pub const DISTANCE_KM_MIN: u8 = 1;
pub const DISTANCE_KM_MAX: u8 = 20;

/// Derived quote for a point-to-point courier task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourierQuote {
    pub subtotal: u64,
    pub service_fee: u64,
    pub total: u64,
}

impl ValueObject for CourierQuote {}

/// Quote a courier run of `distance_km` kilometers.
///
/// `distance_km` must already be clamped to
/// [`DISTANCE_KM_MIN`, `DISTANCE_KM_MAX`]; out-of-range input is a caller
/// error, not handled here.
pub fn courier_quote(distance_km: u8) -> CourierQuote {
    let subtotal = COURIER_BASE_FEE + COURIER_PER_KM * u64::from(distance_km);
    CourierQuote {
        subtotal,
        service_fee: COURIER_SERVICE_FEE,
        total: subtotal + COURIER_SERVICE_FEE,
    }
}
