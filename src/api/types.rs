// API types module
// Wire shapes for the auth endpoints and the response envelope

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const MOCK_USER_ID: &str = "123";
pub const MOCK_USER_NAME: &str = "Test User";
pub const MOCK_USER_PHONE: &str = "+1234567890";
pub const REGISTERED_USER_ID: &str = "124";
pub const DEFAULT_ROLE: &str = "user";

/// Uniform response envelope: `{ success, message, data? }`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// Login body. A field is `Some` only when it is a non-empty JSON string.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "present_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "present_string")]
    pub password: Option<String>,
}

/// Register body, same presence rule as [`LoginRequest`]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "present_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "present_string")]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "present_string")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "present_string")]
    pub phone_number: Option<String>,
}

impl LoginRequest {
    /// Non-object payloads yield an empty request
    pub fn from_json(payload: &Value) -> Self {
        if !payload.is_object() {
            return Self::default();
        }
        Self::deserialize(payload).unwrap_or_default()
    }
}

impl RegisterRequest {
    pub fn from_json(payload: &Value) -> Self {
        if !payload.is_object() {
            return Self::default();
        }
        Self::deserialize(payload).unwrap_or_default()
    }
}

/// Accepts any JSON value, keeping only non-empty strings
fn present_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    })
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
}

impl UserProfile {
    /// The fixed account every successful login resolves to
    pub fn test_user(email: &str) -> Self {
        Self {
            id: MOCK_USER_ID.to_string(),
            full_name: MOCK_USER_NAME.to_string(),
            email: email.to_string(),
            phone: MOCK_USER_PHONE.to_string(),
            role: DEFAULT_ROLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LoginData {
    pub access_token: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RegisterData {
    pub user: UserProfile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_presence_rule() {
        let req = LoginRequest::from_json(&json!({
            "email": "a@b.com",
            "password": ""
        }));
        assert_eq!(req.email.as_deref(), Some("a@b.com"));
        assert!(req.password.is_none());

        let req = LoginRequest::from_json(&json!({ "email": 0, "password": null }));
        assert!(req.email.is_none());
        assert!(req.password.is_none());
    }

    #[test]
    fn test_non_string_credentials_are_missing() {
        let req = LoginRequest::from_json(&json!({ "email": "a@b.com", "password": 123 }));
        assert_eq!(req.email.as_deref(), Some("a@b.com"));
        assert!(req.password.is_none());

        let req = LoginRequest::from_json(&json!({ "email": true, "password": "x" }));
        assert!(req.email.is_none());
    }

    #[test]
    fn test_non_object_payload_is_empty() {
        let positional = json!(["a@b.com", "x", "Ada", "+100"]);
        for payload in [json!([]), positional, json!("x"), json!(42), json!(null)] {
            let req = RegisterRequest::from_json(&payload);
            assert!(req.email.is_none());
            assert!(req.full_name.is_none());
        }
    }

    #[test]
    fn test_register_camel_case_fields() {
        let req = RegisterRequest::from_json(&json!({
            "email": "a@b.com",
            "password": "x",
            "fullName": "Ada",
            "phoneNumber": "+100",
            "extra": true
        }));
        assert_eq!(req.full_name.as_deref(), Some("Ada"));
        assert_eq!(req.phone_number.as_deref(), Some("+100"));
    }

    #[test]
    fn test_failure_envelope_omits_data() {
        let body = serde_json::to_value(ApiResponse::failure("Route not found")).unwrap();
        assert_eq!(body, json!({ "success": false, "message": "Route not found" }));
    }

    #[test]
    fn test_user_profile_wire_names() {
        let body = serde_json::to_value(UserProfile::test_user("a@b.com")).unwrap();
        assert_eq!(body["fullName"], "Test User");
        assert_eq!(body["phone"], "+1234567890");
        assert_eq!(body["role"], "user");
    }
}
