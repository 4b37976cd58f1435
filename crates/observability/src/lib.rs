//! `velogo-observability` — process-wide logging setup.

mod tracing;

pub use crate::tracing::init;
