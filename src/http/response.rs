//! HTTP response building module
//!
//! Builds the error-page and JSONP responses a server sends for a routed
//! request. Only values are produced here; writing them out is up to the caller.

use crate::http::html::client_error;
use crate::http::query::{jsonp_body, CallbackName};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

/// Content-Type of an unwrapped JSON payload
const JSON_CONTENT_TYPE: &str = "application/json";

/// Content-Type of a callback-wrapped payload
const JSONP_CONTENT_TYPE: &str = "text/javascript";

/// Build an HTML error page response
pub fn build_error_response(
    status: StatusCode,
    message: &str,
    server_name: &str,
) -> Response<Full<Bytes>> {
    let page = client_error(message);
    let content_length = page.len();

    Response::builder()
        .status(status)
        .header("Server", server_name)
        .header("Content-Type", "text/html")
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(page)))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            let mut resp = Response::new(Full::new(Bytes::from(client_error(message))));
            *resp.status_mut() = status;
            resp
        })
}

/// Build a 200 response carrying a JSON payload
///
/// With a callback the payload is wrapped as `callback(...)` and served as
/// JavaScript, otherwise it is served as plain JSON.
pub fn build_jsonp_response(
    callback: Option<&CallbackName>,
    payload: &serde_json::Value,
    server_name: &str,
) -> Response<Full<Bytes>> {
    let body = jsonp_body(callback, payload);
    let content_length = body.len();
    let content_type = if callback.is_some() {
        JSONP_CONTENT_TYPE
    } else {
        JSON_CONTENT_TYPE
    };

    Response::builder()
        .status(200)
        .header("Server", server_name)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("JSONP", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
