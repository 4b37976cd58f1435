use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use velogo_catalog::StoreId;

use crate::app::{errors, AppState};

pub fn router() -> Router {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route("/restaurants/:id/menu", get(restaurant_menu))
}

/// Restaurants, best rated first.
pub async fn list_restaurants(
    Extension(state): Extension<AppState>,
) -> axum::response::Response {
    let items = state.catalog.restaurants_by_rating();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn restaurant_menu(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let store_id: StoreId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "Invalid restaurant id"),
    };

    if state.catalog.restaurant(store_id).is_none() {
        return errors::json_error(StatusCode::NOT_FOUND, "Restaurant not found");
    }

    let items = state.catalog.menu_of(store_id);
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}
