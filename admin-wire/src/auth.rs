//! Authentication wire types.
//!
//! The admin API issues a bearer token in exchange for a phone number and the
//! one-time password delivered to it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/admin/otp`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OtpRequest {
    /// Country code followed by the local number, digits only
    pub phone_number: String,
}

impl OtpRequest {
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
        }
    }
}

/// Response of `POST /api/admin/token`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenResponse {
    /// Opaque bearer credential
    pub access_token: String,

    /// Always "bearer" in practice; older servers omit it
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Response of `GET /api/admin/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminUser {
    pub name: String,
    pub role: String,
}

/// Error body returned by the admin API on non-2xx responses.
///
/// `detail` is a plain string for HTTP exceptions and a list of
/// `{loc, msg, type}` objects for request validation failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorDetail {
    pub detail: Value,
}

impl ErrorDetail {
    /// Human-readable message extracted from `detail`.
    pub fn message(&self) -> String {
        match &self.detail {
            Value::String(s) => s.clone(),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.get("msg")
                        .and_then(|m| m.as_str())
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| item.to_string())
                })
                .collect::<Vec<_>>()
                .join("; "),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_request_shape() {
        let json = serde_json::to_value(OtpRequest::new("14155551234")).unwrap();
        assert_eq!(json, serde_json::json!({ "phone_number": "14155551234" }));
    }

    #[test]
    fn test_token_response_without_type() {
        let token: TokenResponse = serde_json::from_str(r#"{"access_token":"tok-abc"}"#).unwrap();
        assert_eq!(token.access_token, "tok-abc");
        assert_eq!(token.token_type, "bearer");
    }

    #[test]
    fn test_error_detail_string() {
        let err: ErrorDetail =
            serde_json::from_str(r#"{"detail":"Invalid OTP or mobile number"}"#).unwrap();
        assert_eq!(err.message(), "Invalid OTP or mobile number");
    }

    #[test]
    fn test_error_detail_validation_list() {
        let err: ErrorDetail = serde_json::from_str(
            r#"{"detail":[
                {"loc":["body","phone_number"],"msg":"field required","type":"value_error.missing"},
                {"loc":["query","page_size"],"msg":"ensure this value is less than or equal to 100"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            err.message(),
            "field required; ensure this value is less than or equal to 100"
        );
    }
}
