//! Response types for the salary engine API.
//!
//! This module defines the error response structures, the validation
//! endpoint's response shape, and the mapping from engine errors to HTTP
//! responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::ResolvedSalary;

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

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::OverCommitted { total, wage } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "STRUCTURE_OVERCOMMITTED",
                    format!("Total components ({}) exceed wage ({})", total, wage),
                    "The configured components commit more than the wage",
                ),
            },
            EngineError::InvalidWage { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_WAGE",
                    format!("Invalid wage: {}", message),
                    "The wage must be a non-negative monetary amount",
                ),
            },
            EngineError::InvalidMonth { month } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_MONTH",
                    format!("Invalid month: {}", month),
                    "The month must be between 1 and 12",
                ),
            },
        }
    }
}

/// Response body for the structure validation endpoint.
///
/// Over-commit is a recoverable business condition, not a transport error:
/// the endpoint answers 200 either way and the editor blocks the save when
/// `valid` is false.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// Whether the structure may be persisted for this wage.
    pub valid: bool,
    /// The over-commit message when invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The computed breakdown when valid, for the editor's preview.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculated: Option<ResolvedSalary>,
}

impl ValidationResponse {
    /// A passing validation carrying the computed breakdown.
    pub fn valid(calculated: ResolvedSalary) -> Self {
        Self {
            valid: true,
            error: None,
            calculated: Some(calculated),
        }
    }

    /// A failing validation carrying the over-commit message.
    pub fn invalid(message: String) -> Self {
        Self {
            valid: false,
            error: Some(message),
            calculated: None,
        }
    }
}

/// A compact employee reference echoed by the employee payroll endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
}

/// Response body for `POST /payroll/employee`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeePayrollResponse {
    /// The employee the payroll was resolved for.
    pub employee: EmployeeSummary,
    /// The resolved salary breakdown.
    pub salary: ResolvedSalary,
}

/// Response body for `POST /attendance/working-hours`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHoursResponse {
    /// The computed working hours, rounded to 2 decimal places.
    pub working_hours: rust_decimal::Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_over_committed_maps_to_bad_request() {
        let engine_error = EngineError::OverCommitted {
            total: Decimal::from(11000),
            wage: Decimal::from(10000),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "STRUCTURE_OVERCOMMITTED");
        assert!(api_error.error.message.contains("11000"));
    }

    #[test]
    fn test_invalid_month_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidMonth { month: 13 }.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_MONTH");
    }

    #[test]
    fn test_invalid_validation_response_skips_calculated() {
        let response = ValidationResponse::invalid("Total components (11000) exceed wage (10000)".into());
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"valid\":false"));
        assert!(!json.contains("calculated"));
    }
}
