//! Error response types for the analytics queries.
//!
//! This module maps [`EngineError`] onto the error body and status code the
//! external request layer sends back to the client.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::ChartType;

/// Error body returned to the client.
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
}

/// An API error paired with the HTTP status the request layer should use.
#[derive(Debug, Clone)]
pub struct ErrorResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The error body.
    pub error: ApiError,
}

impl ErrorResponse {
    /// Returns true for errors caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }
}

impl From<EngineError> for ErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ErrorResponse {
                status: 500,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ErrorResponse {
                status: 500,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfig { message } => ErrorResponse {
                status: 500,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid configuration", message),
            },
            EngineError::Validation {
                row,
                field,
                message,
            } => ErrorResponse {
                status: 400,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid row {} field '{}': {}", row, field, message),
                    "The uploaded file was rejected; no records were ingested",
                ),
            },
            EngineError::NoDataAvailable => ErrorResponse {
                status: 404,
                error: ApiError::with_details(
                    "NO_DATA_AVAILABLE",
                    "No data available for analysis",
                    "Upload a file before querying metrics or charts",
                ),
            },
            EngineError::UnsupportedChartType { chart_type } => ErrorResponse {
                status: 400,
                error: ApiError::with_details(
                    "UNSUPPORTED_CHART_TYPE",
                    format!("Unsupported chart type: {}", chart_type),
                    format!(
                        "Supported chart types: {}",
                        ChartType::ALL.map(|chart| chart.as_str()).join(", ")
                    ),
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response: ErrorResponse = EngineError::Validation {
            row: 4,
            field: "hire_date".to_string(),
            message: "missing hire date".to_string(),
        }
        .into();

        assert_eq!(response.status, 400);
        assert!(response.is_client_error());
        assert_eq!(response.error.code, "VALIDATION_ERROR");
        assert!(response.error.message.contains("row 4"));
    }

    #[test]
    fn test_no_data_maps_to_not_found() {
        let response: ErrorResponse = EngineError::NoDataAvailable.into();
        assert_eq!(response.status, 404);
        assert_eq!(response.error.code, "NO_DATA_AVAILABLE");
    }

    #[test]
    fn test_unsupported_chart_is_client_error() {
        let response: ErrorResponse = EngineError::UnsupportedChartType {
            chart_type: "pie".to_string(),
        }
        .into();

        assert!(response.is_client_error());
        assert_eq!(response.error.code, "UNSUPPORTED_CHART_TYPE");
        assert!(response.error.message.contains("pie"));
        let details = response.error.details.unwrap();
        for chart in ChartType::ALL {
            assert!(details.contains(chart.as_str()));
        }
    }

    #[test]
    fn test_config_errors_are_server_errors() {
        let response: ErrorResponse = EngineError::ConfigNotFound {
            path: "/etc/engine.yaml".to_string(),
        }
        .into();

        assert_eq!(response.status, 500);
        assert!(!response.is_client_error());
    }
}
