//! Wire types for the hub HTTP API.
//!
//! Shapes are strict: a 2xx response that deviates from the documented
//! schema is a validation failure at the boundary, never a silently
//! defaulted value.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated account as returned by the hub.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Body for `POST /login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_token: Option<&'a str>,
    pub device_type: &'a str,
}

/// Successful `POST /login` payload.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Successful `GET /me` payload. `user` is required; its absence makes the
/// stored session invalid.
#[derive(Debug, Deserialize)]
pub struct MeResponse {
    pub user: User,
}

/// Error body the hub attaches to 4xx responses. Both fields are optional on
/// the wire, so this side stays lenient about what a *failure* looks like.
#[derive(Debug, Default, Deserialize)]
pub struct FailureBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<FieldErrors>,
}

/// Per-field validation messages from `POST /login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct FieldErrors {
    #[serde(default)]
    pub email: Vec<String>,
    #[serde(default)]
    pub password: Vec<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_empty() && self.password.is_empty()
    }
}

/// Body for `POST /logout`.
#[derive(Debug, Serialize)]
pub struct LogoutRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_token: Option<&'a str>,
}

/// One notification category the hub can send.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NotificationType {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NotificationType {
    /// Human-readable label: `deploy_failed` → `Deploy Failed`.
    pub fn label(&self) -> String {
        self.name
            .split('_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
