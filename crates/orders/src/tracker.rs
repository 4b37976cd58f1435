//! Timer-driven delivery status simulation.
//!
//! The simulation is non-authoritative: it advances through the status flow
//! on a fixed cadence regardless of any real backend state, standing in for
//! tracking telemetry the platform does not have.

use chrono::{DateTime, Duration, Utc};

use crate::order::{OrderId, OrderKind};
use crate::status::OrderStatus;

/// Seconds between simulated status advances.
pub const STATUS_TICK_SECS: i64 = 5;

fn tick_interval() -> Duration {
    Duration::seconds(STATUS_TICK_SECS)
}

/// Time source port, so tests drive the simulation deterministically.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Hand-driven clock for tests.
#[derive(Debug)]
pub struct ManualClock {
    now: std::sync::Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            now: std::sync::Mutex::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Status change reported by a poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub order_id: OrderId,
    pub status: OrderStatus,
}

/// Finite-state simulation of one order's delivery.
///
/// `poll` advances exactly one state per elapsed tick interval, in flow
/// order. Once the terminal state is reached the tracker goes quiet; no
/// further ticks fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryTracker {
    order_id: OrderId,
    kind: OrderKind,
    status: OrderStatus,
    next_due: DateTime<Utc>,
}

impl DeliveryTracker {
    pub fn start(order_id: OrderId, kind: OrderKind, started_at: DateTime<Utc>) -> Self {
        Self {
            order_id,
            kind,
            status: OrderStatus::Placed,
            next_due: started_at + tick_interval(),
        }
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn kind(&self) -> OrderKind {
        self.kind
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn is_delivered(&self) -> bool {
        self.status.is_terminal()
    }

    /// Advance the simulation up to `now`, returning the statuses entered
    /// (possibly several when more than one interval elapsed).
    pub fn poll(&mut self, now: DateTime<Utc>) -> Vec<OrderStatus> {
        let mut entered = Vec::new();
        while !self.status.is_terminal() && now >= self.next_due {
            match self.status.next(self.kind) {
                Some(next) => {
                    self.status = next;
                    self.next_due += tick_interval();
                    entered.push(next);
                }
                None => break,
            }
        }
        entered
    }
}

/// The single active simulation slot.
///
/// Starting a new order replaces whatever was tracked before; concurrent
/// multi-order tracking is out of scope. `stop` is the explicit cancellation
/// call for when the user abandons the tracking view.
#[derive(Debug, Default)]
pub struct Tracker {
    active: Option<DeliveryTracker>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin simulating `order_id`, invalidating any previous tracking.
    pub fn start(&mut self, order_id: OrderId, kind: OrderKind, now: DateTime<Utc>) {
        self.active = Some(DeliveryTracker::start(order_id, kind, now));
    }

    /// Stop tracking `order_id`. Ignored when some other order is active.
    pub fn stop(&mut self, order_id: OrderId) {
        if self.active.as_ref().is_some_and(|t| t.order_id() == order_id) {
            self.active = None;
        }
    }

    pub fn active(&self) -> Option<&DeliveryTracker> {
        self.active.as_ref()
    }

    pub fn poll(&mut self, now: DateTime<Utc>) -> Vec<StatusChange> {
        let Some(tracker) = self.active.as_mut() else {
            return Vec::new();
        };
        let order_id = tracker.order_id();
        tracker
            .poll(now)
            .into_iter()
            .map(|status| StatusChange { order_id, status })
            .collect()
    }
}
