//! Uniform `{status, message, data}` wrapper shared by every endpoint.

use serde::{Deserialize, Serialize};

use crate::validation::FieldViolation;

/// Success envelope. `data` serializes as `null` when the operation has no payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: true,
            message: message.into(),
            data: None,
        }
    }
}

/// Failure envelope; `data` only appears for validation failures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiFailure {
    pub status: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<FieldViolation>>,
}

impl ApiFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: message.into(),
            data: None,
        }
    }

    pub fn with_violations(message: impl Into<String>, violations: Vec<FieldViolation>) -> Self {
        Self {
            status: false,
            message: message.into(),
            data: Some(violations),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_only_success_serializes_null_data() {
        let value = serde_json::to_value(ApiResponse::message("Login successful")).expect("json");
        assert_eq!(
            value,
            json!({ "status": true, "message": "Login successful", "data": null })
        );
    }

    #[test]
    fn failure_carries_violations_when_present() {
        let failure = ApiFailure::with_violations(
            "request validation failed",
            vec![FieldViolation::new("email", "Email cannot be blank")],
        );
        let value = serde_json::to_value(failure).expect("json");
        assert_eq!(value["status"], json!(false));
        assert_eq!(value["data"][0]["field"], "email");
    }
}
