use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use storefront_catalog::RepositoryError;
use storefront_core::ProductId;

/// Single-field error body used by every failure branch.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        Json(json!({
            "error": message.into(),
        })),
    )
        .into_response()
}

/// Map a repository outcome to the response contract.
///
/// Dependency faults collapse into one opaque 502 body; details go to the
/// log, not to the client.
pub fn repository_error_to_response(
    id: &ProductId,
    err: RepositoryError,
) -> axum::response::Response {
    match err {
        RepositoryError::NotFound => json_error(
            StatusCode::NOT_FOUND,
            format!("product not found for id={id}"),
        ),
        RepositoryError::Unavailable(msg) => {
            tracing::error!(product_id = %id, error = %msg, "catalog lookup unavailable");
            json_error(StatusCode::BAD_GATEWAY, "lookup failed")
        }
        RepositoryError::Backend(msg) => {
            tracing::error!(product_id = %id, error = %msg, "catalog lookup failed");
            json_error(StatusCode::BAD_GATEWAY, "lookup failed")
        }
    }
}
