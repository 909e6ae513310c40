//! Response types for the salary slip API.
//!
//! This module defines the component response, the error response body, and
//! the mapping from [`PayrollError`] to HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PayrollError;
use crate::models::SlipComponent;

/// Response body for a single-component calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentResponse {
    /// The component that was calculated.
    pub component: SlipComponent,
    /// The calculated amount.
    pub amount: Decimal,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an unknown component error response.
    pub fn unknown_component(slug: &str) -> Self {
        let known: Vec<String> = SlipComponent::ALL
            .iter()
            .map(|c| c.rule_id().replace('_', "-"))
            .collect();
        Self::with_details(
            "UNKNOWN_COMPONENT",
            format!("Unknown salary slip component: {}", slug),
            format!("Expected one of: {}", known.join(", ")),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PayrollError> for ApiErrorResponse {
    fn from(error: PayrollError) -> Self {
        let message = error.to_string();
        match error {
            PayrollError::MissingArgument { argument } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MISSING_ARGUMENT",
                    message,
                    format!("The request must include '{}'", argument),
                ),
            },
            PayrollError::OutOfRange { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "OUT_OF_RANGE",
                    message,
                    format!("Field '{}' holds a value the policy cannot pay", field),
                ),
            },
            PayrollError::ZoneService(_) => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::new("ZONE_SERVICE_ERROR", message),
            },
            PayrollError::ZoneServiceUnavailable { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("ZONE_SERVICE_UNAVAILABLE", message),
            },
            PayrollError::ConfigNotFound { .. }
            | PayrollError::ConfigParseError { .. }
            | PayrollError::InvalidPolicy { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
        }
    }
}
