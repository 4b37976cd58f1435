use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use crate::app::{dto, errors, AppState};

pub fn router() -> Router {
    // Non-POST invocations of the creation endpoint get the 405 body, not
    // axum's bare status.
    Router::new().route("/orders", post(create_order).fallback(method_not_allowed))
}

async fn method_not_allowed() -> axum::response::Response {
    errors::json_error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

/// The single creation endpoint: persist the order (and its line items or
/// courier task) and return the new id.
pub async fn create_order(
    Extension(state): Extension<AppState>,
    body: Option<Json<dto::CreateOrderRequest>>,
) -> axum::response::Response {
    let Some(store) = state.orders.clone() else {
        return errors::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Missing backend configuration",
        );
    };

    let Some(Json(request)) = body else {
        return errors::json_error(StatusCode::BAD_REQUEST, "Invalid payload");
    };

    let order = match request.into_new_order() {
        Ok(order) => order,
        Err(reason) => {
            tracing::debug!(?reason, "order payload rejected");
            return errors::json_error(StatusCode::BAD_REQUEST, "Invalid payload");
        }
    };

    match store.create(order).await {
        Ok(order_id) => (
            StatusCode::OK,
            Json(serde_json::json!({ "id": order_id })),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("order persistence failed: {err}");
            errors::store_error_to_response(err)
        }
    }
}
