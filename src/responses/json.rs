// responses/json.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, Response, ResponseBuilder};
use http::{HeaderValue, StatusCode};
use serde::Serialize;

const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// Serialize `value` as the JSON body of a response with the given status.
pub fn json_response<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> ResultResp {
    let body = serde_json::to_vec(value).map_err(|e| {
        tracing::error!(error = %e, "failed to serialize response body");
        ServerError::InternalError
    })?;

    let mut resp = ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)?;

    apply_cors(&mut resp);
    Ok(resp)
}

/// Empty 204, used for CORS preflight.
pub fn no_content_response() -> ResultResp {
    let mut resp = ResponseBuilder::new()
        .status(StatusCode::NO_CONTENT)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)?;

    apply_cors(&mut resp);
    Ok(resp)
}

/// Any origin may call the API; there is no credentialed surface.
pub fn apply_cors(resp: &mut Response) {
    let headers = resp.headers_mut();
    headers.insert(
        "Access-Control-Allow-Origin",
        HeaderValue::from_static("*"),
    );
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static("*"),
    );
}
