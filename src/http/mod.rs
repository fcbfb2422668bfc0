//! HTTP protocol layer module
//!
//! Response builders shared by every route, decoupled from the auth logic.

pub mod response;

// Re-export commonly used types
pub use response::{build_json_response, build_options_response, build_plain_response};
