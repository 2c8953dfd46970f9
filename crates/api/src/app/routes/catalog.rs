use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use storefront_core::ProductId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(missing_identifier))
        .route("/:id", get(get_product))
}

/// One GET in, one repository call, one response out.
async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    // Blank-after-trim counts as absent; the repository is never consulted.
    let product_id = match ProductId::new(id) {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "missing identifier"),
    };

    match services.find_product(product_id.clone()).await {
        Ok(product) => {
            (StatusCode::OK, Json(dto::product_to_response(&product))).into_response()
        }
        Err(err) => errors::repository_error_to_response(&product_id, err),
    }
}

/// Route shape `/<prefix>/` — the identifier segment is missing entirely.
pub async fn missing_identifier() -> axum::response::Response {
    errors::json_error(StatusCode::BAD_REQUEST, "missing identifier")
}
