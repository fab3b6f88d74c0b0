//! Process-wide operator identity
//!
//! Every response envelope carries the operator-configured `official_email`,
//! including error bodies produced by the centralized error mapper, which has
//! no access to application state. The identity is therefore published once
//! at server construction into a process-wide singleton.

use std::sync::OnceLock;

static OPERATOR_EMAIL: OnceLock<String> = OnceLock::new();

/// Publish the operator email. Only the first call takes effect.
pub fn init_operator_email(email: &str) {
    let _ = OPERATOR_EMAIL.set(email.to_string());
}

/// Get the operator email, or an empty string before initialization.
pub fn operator_email() -> &'static str {
    OPERATOR_EMAIL.get().map(String::as_str).unwrap_or("")
}
