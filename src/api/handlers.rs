// Auth endpoint handlers module

use chrono::{DateTime, Utc};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde_json::Value;

use super::response::{envelope, failure};
use super::types::{
    ApiResponse, LoginData, LoginRequest, RegisterData, RegisterRequest, UserProfile,
    DEFAULT_ROLE, REGISTERED_USER_ID,
};
use crate::config::AppState;
use crate::error::AuthError;
use crate::logger;

pub const LOGIN_SUCCESS: &str = "Login successful";
pub const REGISTER_SUCCESS: &str = "Registration successful";
pub const TOKEN_PREFIX: &str = "mock_jwt_token_";

/// POST /api/v1/auth/login
pub fn handle_login(payload: &Value, state: &AppState) -> Response<Full<Bytes>> {
    let req = LoginRequest::from_json(payload);
    logger::log_login_attempt(
        req.email.as_deref(),
        req.password.as_deref(),
        state.config.logging.log_credentials,
    );

    let server_name = &state.config.http.server_name;
    match login(&req, Utc::now()) {
        Ok(data) => envelope(
            StatusCode::CREATED,
            &ApiResponse::ok(LOGIN_SUCCESS, data),
            server_name,
        ),
        Err(e) => failure(StatusCode::BAD_REQUEST, &e.to_string(), server_name),
    }
}

/// POST /api/v1/auth/register
pub fn handle_register(payload: &Value, state: &AppState) -> Response<Full<Bytes>> {
    let req = RegisterRequest::from_json(payload);
    logger::log_register_attempt(req.email.as_deref(), req.full_name.as_deref());

    let server_name = &state.config.http.server_name;
    match register(&req) {
        Ok(data) => envelope(
            StatusCode::CREATED,
            &ApiResponse::ok(REGISTER_SUCCESS, data),
            server_name,
        ),
        Err(e) => failure(StatusCode::BAD_REQUEST, &e.to_string(), server_name),
    }
}

/// Accept any present email/password pair and hand back the fixed test user
pub fn login(req: &LoginRequest, issued_at: DateTime<Utc>) -> Result<LoginData, AuthError> {
    let (Some(email), Some(_)) = (&req.email, &req.password) else {
        return Err(AuthError::MissingCredentials);
    };

    Ok(LoginData {
        access_token: mock_access_token(issued_at),
        user: UserProfile::test_user(email),
    })
}

/// Echo the submitted profile back under the fixed registered id
pub fn register(req: &RegisterRequest) -> Result<RegisterData, AuthError> {
    let (Some(email), Some(_), Some(full_name), Some(phone)) = (
        &req.email,
        &req.password,
        &req.full_name,
        &req.phone_number,
    ) else {
        return Err(AuthError::MissingRegistrationFields);
    };

    Ok(RegisterData {
        user: UserProfile {
            id: REGISTERED_USER_ID.to_string(),
            full_name: full_name.clone(),
            email: email.clone(),
            phone: phone.clone(),
            role: DEFAULT_ROLE.to_string(),
        },
    })
}

/// Placeholder token carrying the issue time in whole epoch seconds. Not a JWT.
pub fn mock_access_token(issued_at: DateTime<Utc>) -> String {
    format!("{TOKEN_PREFIX}{}", issued_at.timestamp())
}
