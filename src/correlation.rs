use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::{error, info_span, Instrument};
use uuid::Uuid;

pub const CORRELATION_ID_HEADER: HeaderName = HeaderName::from_static("x-correlation-id");

/// Id tying together the logs of one request. Echoed from the client when sent.
#[derive(Debug, Clone)]
pub struct CorrelationId(pub String);

pub async fn correlation_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get(&CORRELATION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    req.extensions_mut().insert(CorrelationId(id.clone()));
    let span = info_span!("correlation", correlation_id = %id);
    let mut res = next.run(req).instrument(span).await;

    if res.status().is_server_error() {
        error!(correlation_id = %id, status = %res.status(), "request failed");
    }
    if let Ok(value) = HeaderValue::from_str(&id) {
        res.headers_mut().insert(CORRELATION_ID_HEADER, value);
    }
    res
}
