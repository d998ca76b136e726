use crate::errors::ServerError;
use astra::{Body, Response};
use http::StatusCode;
use serde_json::json;

use super::json::apply_cors;

/// Convert a ServerError into a JSON `{"detail": ...}` response.
pub fn error_to_response(err: ServerError) -> Response {
    let detail = match &err {
        ServerError::DbError(msg) => format!("Internal server error: {msg}"),
        ServerError::InternalError => "Internal server error".to_string(),
        other => other.to_string(),
    };

    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    json_error_response(status, &detail)
}

/// Build a JSON error body. Infallible so it can back every other failure.
pub fn json_error_response(status: StatusCode, detail: &str) -> Response {
    let body = json!({ "detail": detail }).to_string();

    let mut resp = Response::new(Body::from(body));
    *resp.status_mut() = status;
    resp.headers_mut().insert(
        http::header::CONTENT_TYPE,
        http::HeaderValue::from_static("application/json"),
    );
    apply_cors(&mut resp);
    resp
}
