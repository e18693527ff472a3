// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiErrorCode {
    InvalidQueryParameter,
    PayloadTooLarge,
    Timeout,
    NotReady,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub details: Value,
    pub request_id: String,
}

impl ApiError {
    #[must_use]
    pub fn new(
        code: ApiErrorCode,
        message: impl Into<String>,
        details: Value,
        request_id: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            request_id: request_id.into(),
        }
    }

    #[must_use]
    pub fn invalid_param(name: &str, reason: &str) -> Self {
        Self::new(
            ApiErrorCode::InvalidQueryParameter,
            format!("invalid query parameter: {name}"),
            json!({"field_errors":[{"parameter": name, "reason": reason}]}),
            "req-unknown",
        )
    }

    #[must_use]
    pub fn payload_too_large(limit: usize) -> Self {
        Self::new(
            ApiErrorCode::PayloadTooLarge,
            "request body too large",
            json!({"max_body_bytes": limit}),
            "req-unknown",
        )
    }

    #[must_use]
    pub fn timeout(stage: &str, limit_ms: u128) -> Self {
        Self::new(
            ApiErrorCode::Timeout,
            format!("{stage} timed out"),
            json!({"stage": stage, "timeout_ms": limit_ms}),
            "req-unknown",
        )
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::Internal, message, json!({}), "req-unknown")
    }

    #[must_use]
    pub fn with_request_id(mut self, request_id: &str) -> Self {
        self.request_id = request_id.to_string();
        self
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_serialize_as_variant_names() {
        let err = ApiError::invalid_param("query", "blank").with_request_id("req-1");
        let v = serde_json::to_value(&err).expect("json");
        assert_eq!(v["code"], "InvalidQueryParameter");
        assert_eq!(v["request_id"], "req-1");
        assert_eq!(v["details"]["field_errors"][0]["parameter"], "query");
    }

    #[test]
    fn unknown_fields_are_rejected_on_decode() {
        let raw = r#"{"code":"Timeout","message":"m","details":{},"request_id":"r","extra":1}"#;
        assert!(serde_json::from_str::<ApiError>(raw).is_err());
    }
}
