use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Request-scoped identifier, available to handlers via extensions.
#[derive(Debug, Copy, Clone)]
pub struct RequestId(pub Uuid);

/// Attach a request id and a tracing span to every inbound request.
pub async fn request_span_middleware(mut req: Request, next: Next) -> Response {
    let request_id = Uuid::now_v7();
    req.extensions_mut().insert(RequestId(request_id));

    let span = tracing::info_span!(
        "http_request",
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    next.run(req).instrument(span).await
}
