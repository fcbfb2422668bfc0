//! HTTP response building module
//!
//! Every builder here stamps the permissive CORS headers, so no response can
//! leave the server without them.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::http::response::Builder;
use hyper::{Response, StatusCode};
use serde::Serialize;

pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const CORS_ALLOW_HEADERS: &str = "Content-Type";

/// Response builder with status, `Server` and CORS headers already set
fn base_builder(status: StatusCode, server_name: &str) -> Builder {
    Response::builder()
        .status(status)
        .header("Server", server_name)
        .header("Access-Control-Allow-Origin", CORS_ALLOW_ORIGIN)
        .header("Access-Control-Allow-Methods", CORS_ALLOW_METHODS)
        .header("Access-Control-Allow-Headers", CORS_ALLOW_HEADERS)
}

/// Build OPTIONS response (preflight request): 200 with an empty body
pub fn build_options_response(server_name: &str) -> Response<Full<Bytes>> {
    base_builder(StatusCode::OK, server_name)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build pretty-printed JSON response
pub fn build_json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
    server_name: &str,
) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string_pretty(body) {
        Ok(j) => j,
        Err(e) => {
            crate::logger::log_error(&format!("Failed to serialize response: {e}"));
            return build_plain_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                server_name,
            );
        }
    };

    base_builder(status, server_name)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build plain-text response, used where the JSON envelope is deliberately absent
pub fn build_plain_response(
    status: StatusCode,
    message: &'static str,
    server_name: &str,
) -> Response<Full<Bytes>> {
    base_builder(status, server_name)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Full::new(Bytes::from_static(message.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::from_static(message.as_bytes())))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_string(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn assert_cors(resp: &Response<Full<Bytes>>) {
        let headers = resp.headers();
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(headers["access-control-allow-methods"], "GET, POST, OPTIONS");
        assert_eq!(headers["access-control-allow-headers"], "Content-Type");
    }

    #[tokio::test]
    async fn test_options_response() {
        let resp = build_options_response("test");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_cors(&resp);
        assert_eq!(resp.headers()["server"], "test");
        assert!(body_string(resp).await.is_empty());
    }

    #[tokio::test]
    async fn test_json_response_is_pretty() {
        let resp = build_json_response(
            StatusCode::CREATED,
            &serde_json::json!({ "success": true }),
            "test",
        );
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_cors(&resp);
        assert_eq!(resp.headers()["content-type"], "application/json");
        assert!(body_string(resp).await.contains("\"success\": true"));
    }

    #[tokio::test]
    async fn test_plain_response() {
        let resp = build_plain_response(StatusCode::BAD_REQUEST, "Invalid JSON", "test");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_cors(&resp);
        assert!(resp.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        assert_eq!(body_string(resp).await, "Invalid JSON");
    }
}
