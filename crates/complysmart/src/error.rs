use crate::audit::AuditApiError;
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    AuditApi(AuditApiError),
    Export(csv::Error),
    NoAudit,
    UnknownSuggestion(usize),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::AuditApi(AuditApiError::EmptyQuestion) | AppError::UnknownSuggestion(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::AuditApi(_) => StatusCode::BAD_GATEWAY,
            AppError::NoAudit => StatusCode::NOT_FOUND,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::AuditApi(err) => write!(f, "error connecting to audit API: {}", err),
            AppError::Export(err) => write!(f, "export error: {}", err),
            AppError::NoAudit => write!(f, "no audit data available; run an audit first"),
            AppError::UnknownSuggestion(index) => {
                write!(f, "no suggested question at index {}", index)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::AuditApi(err) => Some(err),
            AppError::Export(err) => Some(err),
            AppError::NoAudit | AppError::UnknownSuggestion(_) => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<AuditApiError> for AppError {
    fn from(value: AuditApiError) -> Self {
        Self::AuditApi(value)
    }
}

impl From<csv::Error> for AppError {
    fn from(value: csv::Error) -> Self {
        Self::Export(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_failures_map_to_bad_gateway() {
        let err = AppError::from(AuditApiError::Status {
            endpoint: "POST /query",
            status: 503,
            body: "maintenance".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn missing_audit_is_not_found() {
        let response = AppError::NoAudit.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
