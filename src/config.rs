//! Deployment Configuration
//!
//! Compile-time settings for the external auth API and durable storage.

/// Base URL of the auth backend. Overridable at build time:
/// `TASKDECK_API_BASE=https://api.example.com trunk build`
pub fn api_base() -> &'static str {
    option_env!("TASKDECK_API_BASE").unwrap_or("http://localhost:5000")
}

/// localStorage key holding the serialized session record
pub const SESSION_STORAGE_KEY: &str = "userInfo";

/// Auth endpoint paths, relative to `api_base`
pub const SIGNUP_PATH: &str = "/signup";
pub const LOGIN_PATH: &str = "/login";
