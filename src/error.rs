//! Error types
//!
//! Only startup and serve-loop failures are represented here. Per-request
//! problems are turned into HTTP responses by the API layer and never escape
//! the service function.

use std::net::SocketAddr;

use thiserror::Error;

/// Fatal server errors
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid listen address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to initialize logging: {0}")]
    Logging(String),

    #[error("runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Failure while reading a request body
#[derive(Debug, Error)]
pub enum BodyError {
    #[error("request body exceeds {limit} bytes")]
    TooLarge { limit: u64 },

    #[error("failed to read request body: {0}")]
    Read(String),
}

/// Required-field failures of the auth endpoints; the message is sent to the client as-is
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email and password are required")]
    MissingCredentials,

    #[error("All fields are required")]
    MissingRegistrationFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_address_message() {
        let source = "not-an-addr".parse::<SocketAddr>().unwrap_err();
        let err = ServerError::InvalidAddress {
            addr: "not-an-addr".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("invalid listen address 'not-an-addr'"));
    }

    #[test]
    fn test_body_too_large_message() {
        let err = BodyError::TooLarge { limit: 16 };
        assert_eq!(err.to_string(), "request body exceeds 16 bytes");
    }
}
