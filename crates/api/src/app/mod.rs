//! Application state and router assembly.

use std::sync::Arc;

use axum::{extract::Extension, Router};

use velogo_catalog::{seed, Catalog};
use velogo_infra::{InMemoryOrderStore, OrderStore, RestOrderStore};

use crate::config::{ApiConfig, ENV_BASE_URL, ENV_SERVICE_ROLE};

pub mod dto;
pub mod errors;
pub mod routes;

/// Shared per-request state.
///
/// `orders` is `None` when the backend configuration is absent; the creation
/// endpoint then answers with the config-error response instead of the
/// process refusing to start.
#[derive(Clone)]
pub struct AppState {
    pub orders: Option<Arc<dyn OrderStore>>,
    pub catalog: Arc<Catalog>,
}

/// Assemble the router over the given state.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(routes::orders::router())
        .merge(routes::catalog::router())
        .layer(Extension(state))
}

/// Wire the production state from the environment.
pub fn bootstrap() -> AppState {
    let catalog = Arc::new(seed::guadalajara());
    let orders: Option<Arc<dyn OrderStore>> = match ApiConfig::from_env() {
        Some(cfg) => Some(Arc::new(RestOrderStore::new(cfg.base_url, cfg.service_role))),
        None => {
            tracing::error!(
                "missing backend configuration ({ENV_BASE_URL} / {ENV_SERVICE_ROLE}); \
                 order creation will answer 500"
            );
            None
        }
    };
    AppState { orders, catalog }
}

/// In-memory state for tests/dev; hands back the store so assertions can
/// look at the persisted rows.
pub fn in_memory_state() -> (AppState, Arc<InMemoryOrderStore>) {
    let store = Arc::new(InMemoryOrderStore::new());
    let state = AppState {
        orders: Some(store.clone()),
        catalog: Arc::new(seed::guadalajara()),
    };
    (state, store)
}
