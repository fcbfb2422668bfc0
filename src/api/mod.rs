// API module entry
// Mock login/register endpoints

mod handlers;
mod response;
mod types;

use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::config::AppState;
use crate::error::BodyError;
use crate::logger::{self, AccessLogEntry};

pub const LOGIN_PATH: &str = "/api/v1/auth/login";
pub const REGISTER_PATH: &str = "/api/v1/auth/register";

/// Routes advertised in the startup banner
pub const ENDPOINTS: [(&str, &str); 2] = [("POST", LOGIN_PATH), ("POST", REGISTER_PATH)];

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Service entry point: route the request and write the access log line
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: Into<BoxError>,
{
    let started = Instant::now();
    let mut entry = AccessLogEntry::from_request(peer_addr, &req);

    let response = route_request(req, &state).await;

    if state.config.logging.access_log {
        let body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        entry.finish(response.status().as_u16(), body_bytes, started.elapsed());
        logger::log_access(&entry, &state.access_log_format);
    }

    Ok(response)
}

/// Dispatch by method, then by exact path once the body parsed as JSON
async fn route_request<B>(req: Request<B>, state: &AppState) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: Into<BoxError>,
{
    let server_name = state.config.http.server_name.as_str();
    let max_body_size = state.config.http.max_body_size;

    match *req.method() {
        Method::OPTIONS => return crate::http::build_options_response(server_name),
        Method::POST => {}
        _ => {
            logger::log_warning(&format!("Method not allowed: {}", req.method()));
            return response::method_not_allowed(server_name);
        }
    }

    if let Some(resp) = check_body_size(&req, max_body_size, server_name) {
        return resp;
    }

    let path = req.uri().path().to_string();

    let body = match read_body(req.into_body(), max_body_size).await {
        Ok(body) => body,
        Err(BodyError::TooLarge { limit }) => {
            logger::log_warning(&format!("Request body too large (max: {limit})"));
            return response::payload_too_large(server_name);
        }
        Err(e) => {
            logger::log_error(&e.to_string());
            return response::unreadable_body(server_name);
        }
    };

    let payload: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => {
            logger::log_warning(&format!("Invalid JSON on {path}: {e}"));
            return response::invalid_json(server_name);
        }
    };

    match path.as_str() {
        LOGIN_PATH => handlers::handle_login(&payload, state),
        REGISTER_PATH => handlers::handle_register(&payload, state),
        _ => response::not_found(server_name),
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size<B>(
    req: &Request<B>,
    max_body_size: u64,
    server_name: &str,
) -> Option<Response<Full<Bytes>>> {
    let size = req
        .headers()
        .get(hyper::header::CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .parse::<u64>()
        .ok()?;

    if size > max_body_size {
        logger::log_warning(&format!(
            "Request body too large: {size} bytes (max: {max_body_size})"
        ));
        return Some(response::payload_too_large(server_name));
    }
    None
}

/// Collect the whole body, refusing anything past `limit` bytes
async fn read_body<B>(body: B, limit: u64) -> Result<Bytes, BodyError>
where
    B: Body,
    B::Error: Into<BoxError>,
{
    let limit_bytes = usize::try_from(limit).unwrap_or(usize::MAX);
    match Limited::new(body, limit_bytes).collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(e) if e.is::<LengthLimitError>() => Err(BodyError::TooLarge { limit }),
        Err(e) => Err(BodyError::Read(e.to_string())),
    }
}
