//! `velogo-orders` — order records and the delivery-status simulation.

pub mod order;
pub mod rider;
pub mod status;
pub mod tracker;

pub use order::{CourierTask, Order, OrderId, OrderKind, OrderLine, PaymentMethod};
pub use rider::{assign_rider, simulated_eta_minutes, Rider};
pub use status::OrderStatus;
pub use tracker::{
    Clock, DeliveryTracker, ManualClock, StatusChange, SystemClock, Tracker, STATUS_TICK_SECS,
};
