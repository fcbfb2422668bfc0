// API response utility functions module
// Envelope responses for the auth routes

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use super::types::ApiResponse;
use crate::http;

/// Build an envelope response with `Content-Type: application/json`
pub fn envelope<T: Serialize>(
    status: StatusCode,
    body: &ApiResponse<T>,
    server_name: &str,
) -> Response<Full<Bytes>> {
    http::build_json_response(status, body, server_name)
}

/// `{ success: false, message }` with the given status
pub fn failure(status: StatusCode, message: &str, server_name: &str) -> Response<Full<Bytes>> {
    envelope(status, &ApiResponse::failure(message), server_name)
}

/// 404 Not Found response
pub fn not_found(server_name: &str) -> Response<Full<Bytes>> {
    failure(StatusCode::NOT_FOUND, "Route not found", server_name)
}

/// 405 Method Not Allowed response
pub fn method_not_allowed(server_name: &str) -> Response<Full<Bytes>> {
    let mut resp = failure(
        StatusCode::METHOD_NOT_ALLOWED,
        "Method not allowed",
        server_name,
    );
    resp.headers_mut().insert(
        hyper::header::ALLOW,
        hyper::header::HeaderValue::from_static("POST, OPTIONS"),
    );
    resp
}

/// 400 for an unparsable body: plain text, no envelope
pub fn invalid_json(server_name: &str) -> Response<Full<Bytes>> {
    http::build_plain_response(StatusCode::BAD_REQUEST, "Invalid JSON", server_name)
}

/// 400 when the body could not be read at all
pub fn unreadable_body(server_name: &str) -> Response<Full<Bytes>> {
    http::build_plain_response(StatusCode::BAD_REQUEST, "Invalid request body", server_name)
}

/// 413 Payload Too Large response
pub fn payload_too_large(server_name: &str) -> Response<Full<Bytes>> {
    http::build_plain_response(
        StatusCode::PAYLOAD_TOO_LARGE,
        "413 Payload Too Large",
        server_name,
    )
}
