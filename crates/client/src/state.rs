//! Storefront application state.
//!
//! One explicit struct owns the cart session, the browse state, the active
//! order and its tracker; screens are derived from it, not the other way
//! around. All time flows through the injected clock.

use std::sync::Arc;

use velogo_cart::{CartSession, SnapshotStore};
use velogo_catalog::{browse, BrowseQuery, MenuItem, MenuItemId, Restaurant, SortKey, StoreId};
use velogo_core::{DomainError, DomainResult, EntityId};
use velogo_orders::{
    assign_rider, simulated_eta_minutes, Clock, CourierTask, OrderId, OrderKind, OrderLine,
    OrderStatus, PaymentMethod, Rider, StatusChange, Tracker,
};
use velogo_pricing::{courier_quote, CourierQuote, PriceBreakdown, DISTANCE_KM_MAX, DISTANCE_KM_MIN};

use crate::gateway::{GatewayError, OrderDraft, OrderGateway};

/// Which screen is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Restaurant,
    Checkout,
    Track,
}

/// The order currently shown on the tracking view.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveOrder {
    pub id: OrderId,
    pub kind: OrderKind,
    pub status: OrderStatus,
    pub eta_minutes: u16,
    pub rider: Rider,
    pub address: String,
}

/// Checkout form data for a food order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutDetails {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub instructions: String,
    pub payment_method: PaymentMethod,
}

/// Courier request from the mandados form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourierRequest {
    pub description: String,
    pub pickup_address: String,
    pub dropoff_address: String,
    pub distance_km: u8,
    pub payment_method: PaymentMethod,
}

/// The whole client-side application state.
pub struct Storefront {
    view: View,
    service: OrderKind,
    query: BrowseQuery,
    selected_store: Option<StoreId>,
    cart: CartSession,
    tracker: Tracker,
    active_order: Option<ActiveOrder>,
    checkout_key: Option<String>,
    last_error: Option<String>,
    clock: Arc<dyn Clock>,
    gateway: Arc<dyn OrderGateway>,
}

impl Storefront {
    /// Restore the persisted cart and start on the home screen.
    pub fn new(
        gateway: Arc<dyn OrderGateway>,
        snapshots: Arc<dyn SnapshotStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            view: View::Home,
            service: OrderKind::Food,
            query: BrowseQuery::default(),
            selected_store: None,
            cart: CartSession::restore(snapshots),
            tracker: Tracker::new(),
            active_order: None,
            checkout_key: None,
            last_error: None,
            clock,
            gateway,
        }
    }

    // ---- read side ----

    pub fn view(&self) -> View {
        self.view
    }

    pub fn service(&self) -> OrderKind {
        self.service
    }

    pub fn cart(&self) -> &velogo_cart::Cart {
        self.cart.cart()
    }

    pub fn breakdown(&self) -> PriceBreakdown {
        self.cart.breakdown()
    }

    pub fn active_order(&self) -> Option<&ActiveOrder> {
        self.active_order.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn selected_store(&self) -> Option<StoreId> {
        self.selected_store
    }

    /// Filtered/sorted restaurant list for the home screen. Courier mode has
    /// no restaurant browsing.
    pub fn browse(&self, restaurants: &[Restaurant]) -> Vec<Restaurant> {
        if self.service == OrderKind::Courier {
            return Vec::new();
        }
        browse(restaurants, &self.query)
    }

    /// Quote for the mandados form. The slider value is clamped into the
    /// supported distance range before pricing.
    pub fn courier_estimate(&self, distance_km: u8) -> CourierQuote {
        courier_quote(distance_km.clamp(DISTANCE_KM_MIN, DISTANCE_KM_MAX))
    }

    // ---- browse state ----

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.query.category = category;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
    }

    // ---- navigation & cart actions ----

    /// Switch between restaurants and mandados. The cart belongs to the food
    /// flow, so switching destroys it.
    pub fn switch_service(&mut self, kind: OrderKind) {
        if self.service != kind {
            self.service = kind;
            self.selected_store = None;
            self.cart.clear();
            self.view = View::Home;
        }
    }

    pub fn select_store(&mut self, store_id: StoreId) {
        self.selected_store = Some(store_id);
        self.view = View::Restaurant;
    }

    /// Add one unit of `item` from the currently open restaurant.
    pub fn add_item(&mut self, item: MenuItem) -> DomainResult<()> {
        let Some(store_id) = self.selected_store else {
            return Err(DomainError::invariant("no restaurant selected"));
        };
        match self.cart.add(item, store_id) {
            Ok(()) => {
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn increment(&mut self, item_id: MenuItemId) {
        self.cart.increment(item_id);
    }

    pub fn decrement(&mut self, item_id: MenuItemId) {
        self.cart.decrement(item_id);
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Open the checkout screen. The idempotency key for the upcoming
    /// submission is minted here, once per checkout.
    pub fn go_checkout(&mut self) {
        if self.cart.cart().is_empty() {
            return;
        }
        self.view = View::Checkout;
        self.checkout_key
            .get_or_insert_with(|| EntityId::new().to_string());
    }

    // ---- order submission ----

    /// Submit the cart as a food order.
    ///
    /// On success the tracking view takes over and the status simulation
    /// starts at `placed`. On failure the view, cart and checkout stay as
    /// they were; only `last_error` changes.
    pub async fn place_food_order(
        &mut self,
        details: CheckoutDetails,
    ) -> Result<OrderId, GatewayError> {
        let breakdown = self.cart.breakdown();
        let draft = OrderDraft {
            kind: OrderKind::Food,
            store_id: self.cart.cart().store_id(),
            address: details.address.clone(),
            instructions: details.instructions.clone(),
            payment_method: details.payment_method,
            total: breakdown.total,
            lines: self
                .cart
                .cart()
                .lines()
                .iter()
                .map(|l| OrderLine {
                    name: l.item.name.clone(),
                    unit_price: l.item.unit_price,
                    quantity: l.quantity,
                })
                .collect(),
            courier_task: None,
            idempotency_key: Some(self.checkout_mint()),
        };

        self.submit(draft, details.address).await
    }

    /// Submit a point-to-point courier order.
    pub async fn place_courier_order(
        &mut self,
        request: CourierRequest,
    ) -> Result<OrderId, GatewayError> {
        let km = request
            .distance_km
            .clamp(DISTANCE_KM_MIN, DISTANCE_KM_MAX);
        let quote = courier_quote(km);
        let address = request.dropoff_address.clone();
        let draft = OrderDraft {
            kind: OrderKind::Courier,
            store_id: None,
            address: address.clone(),
            instructions: String::new(),
            payment_method: request.payment_method,
            total: quote.total,
            lines: vec![],
            courier_task: Some(CourierTask {
                description: request.description,
                pickup_address: request.pickup_address,
                dropoff_address: request.dropoff_address,
            }),
            idempotency_key: Some(self.checkout_mint()),
        };

        self.submit(draft, address).await
    }

    async fn submit(&mut self, draft: OrderDraft, address: String) -> Result<OrderId, GatewayError> {
        if let Err(err) = draft.validate() {
            self.last_error = Some(err.to_string());
            return Err(err);
        }

        let kind = draft.kind;
        match self.gateway.submit(&draft).await {
            Ok(order_id) => {
                let mut rng = rand::thread_rng();
                self.active_order = Some(ActiveOrder {
                    id: order_id,
                    kind,
                    status: OrderStatus::Placed,
                    eta_minutes: simulated_eta_minutes(kind, &mut rng),
                    rider: assign_rider(&mut rng),
                    address,
                });
                self.tracker.start(order_id, kind, self.clock.now());
                self.view = View::Track;
                self.checkout_key = None;
                self.last_error = None;
                tracing::info!(%order_id, ?kind, "order placed");
                Ok(order_id)
            }
            Err(err) => {
                // Terminal for this attempt; a retry is a fresh submission
                // with a fresh key.
                self.last_error = Some(err.to_string());
                self.checkout_key = Some(EntityId::new().to_string());
                tracing::warn!("order submission failed: {err}");
                Err(err)
            }
        }
    }

    fn checkout_mint(&mut self) -> String {
        self.checkout_key
            .get_or_insert_with(|| EntityId::new().to_string())
            .clone()
    }

    // ---- tracking ----

    /// Advance the status simulation to the clock's current time.
    ///
    /// A food order entering `delivered` empties the cart.
    pub fn poll(&mut self) -> Vec<StatusChange> {
        let changes = self.tracker.poll(self.clock.now());
        for change in &changes {
            if let Some(active) = self.active_order.as_mut() {
                if active.id == change.order_id {
                    active.status = change.status;
                    if change.status == OrderStatus::Delivered && active.kind == OrderKind::Food {
                        self.cart.clear();
                    }
                }
            }
        }
        changes
    }

    /// Leave the tracking view. The simulation keeps running in the
    /// background until stopped or replaced.
    pub fn back_home(&mut self) {
        self.view = View::Home;
    }

    /// Explicitly cancel tracking of the active order.
    pub fn stop_tracking(&mut self) {
        if let Some(active) = self.active_order.take() {
            self.tracker.stop(active.id);
        }
        if self.view == View::Track {
            self.view = View::Home;
        }
    }
}
