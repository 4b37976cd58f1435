//! Simulated rider roster and ETA assignment.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::order::OrderKind;

/// A delivery rider as shown on the tracking view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rider {
    pub name: String,
    pub vehicle: String,
    pub rating: f32,
}

const ROSTER: &[(&str, &str, f32)] = &[
    ("Ana G.", "Moto", 4.9),
    ("Luis R.", "Bici", 4.8),
    ("Paola T.", "Moto", 4.7),
    ("Diego V.", "Auto", 4.6),
];

/// Pick a rider from the fixed roster.
pub fn assign_rider(rng: &mut impl Rng) -> Rider {
    let (name, vehicle, rating) = ROSTER[rng.gen_range(0..ROSTER.len())];
    Rider {
        name: name.to_string(),
        vehicle: vehicle.to_string(),
        rating,
    }
}

/// Simulated delivery ETA in minutes. Courier runs are quoted a little
/// tighter than restaurant orders.
pub fn simulated_eta_minutes(kind: OrderKind, rng: &mut impl Rng) -> u16 {
    match kind {
        OrderKind::Food => rng.gen_range(15..=35),
        OrderKind::Courier => rng.gen_range(12..=25),
    }
}
