//! Error response body.
//!
//! Every failed request is answered with the same JSON shape:
//! `{ timestamp, status, error, message, path }`, plus `violations` when a
//! payload failed validation.

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::product::FieldViolation;

/// One violated field rule, as sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl From<&FieldViolation> for Violation {
    fn from(v: &FieldViolation) -> Self {
        Self {
            field: v.field.to_string(),
            message: v.message.to_string(),
        }
    }
}

/// Uniform error body. Built fresh per failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// When the error response was created.
    pub timestamp: DateTime<Utc>,
    /// Numeric HTTP status.
    pub status: u16,
    /// Short status label, e.g. `NOT_FOUND`.
    pub error: String,
    pub message: String,
    /// Request path that triggered the error.
    pub path: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: status_label(status),
            message: message.into(),
            path: path.into(),
            violations: Vec::new(),
        }
    }

    pub fn with_violations(mut self, violations: Vec<Violation>) -> Self {
        self.violations = violations;
        self
    }
}

/// `404 Not Found` → `NOT_FOUND`.
pub fn status_label(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Unknown")
        .to_uppercase()
        .replace([' ', '-'], "_")
}
