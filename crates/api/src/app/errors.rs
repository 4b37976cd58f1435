use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use velogo_infra::OrderStoreError;

/// The error body shape every failure response shares: `{"error": message}`.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
        })),
    )
        .into_response()
}

/// Persistence failures surface as a generic internal error carrying the
/// underlying message. Partial writes are not cleaned up here; the error
/// text says which step failed.
pub fn store_error_to_response(err: OrderStoreError) -> axum::response::Response {
    json_error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}
