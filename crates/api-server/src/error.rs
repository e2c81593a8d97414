//! Translation of `DomainError` into HTTP responses.
//!
//! The registry endpoints answer with plain text, the housing endpoints with a
//! JSON error document and the user endpoints with bare status codes (create
//! also carries a message). Internal failures are logged and never leak detail.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{SecondsFormat, Utc};
use domain::DomainError;
use serde::Serialize;
use tracing::error;

pub const INTERNAL_ERROR_MESSAGE: &str = "An Error has occurred";

/// Status code for a domain error kind.
pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        e if e.is_not_found() => StatusCode::NOT_FOUND,
        DomainError::ValidationError(_) => StatusCode::BAD_REQUEST,
        DomainError::EmailAlreadyExists(_) => StatusCode::CONFLICT,
        DomainError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn log_internal(status: StatusCode, err: &DomainError) {
    if status.is_server_error() {
        error!(error = %err, "request failed");
    }
}

/// Plain-text error for the course registry endpoints.
#[derive(Debug)]
pub struct RegistryError(pub DomainError);

impl From<DomainError> for RegistryError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        log_internal(status, &self.0);
        let body = if status.is_server_error() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.0.to_string()
        };
        (status, body).into_response()
    }
}

#[derive(Debug, Serialize)]
struct HousingErrorBody {
    timestamp: String,
    status: u16,
    error: &'static str,
    message: String,
    path: String,
}

/// JSON error document for the housing endpoints.
#[derive(Debug)]
pub struct HousingError {
    pub error: DomainError,
    pub path: String,
}

impl HousingError {
    pub fn new(error: DomainError, path: impl Into<String>) -> Self {
        Self {
            error,
            path: path.into(),
        }
    }
}

impl IntoResponse for HousingError {
    fn into_response(self) -> Response {
        let status = status_for(&self.error);
        log_internal(status, &self.error);
        let message = if status.is_server_error() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.error.to_string()
        };
        let body = HousingErrorBody {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Error"),
            message,
            path: self.path,
        };
        (status, Json(body)).into_response()
    }
}

/// Error for the user endpoints. `authenticate` answers with the status alone;
/// `create` includes the message for client errors.
#[derive(Debug)]
pub struct UserError {
    pub error: DomainError,
    pub with_message: bool,
}

impl UserError {
    pub fn status_only(error: DomainError) -> Self {
        Self {
            error,
            with_message: false,
        }
    }

    pub fn with_message(error: DomainError) -> Self {
        Self {
            error,
            with_message: true,
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = status_for(&self.error);
        log_internal(status, &self.error);
        if status.is_server_error() {
            return (status, INTERNAL_ERROR_MESSAGE).into_response();
        }
        if self.with_message {
            (status, self.error.to_string()).into_response()
        } else {
            status.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_statuses() {
        assert_eq!(
            status_for(&DomainError::DepartmentNotFound("X".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&DomainError::ValidationError("blank".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&DomainError::EmailAlreadyExists("a@b.c".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(&DomainError::InvalidCredentials),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_for(&DomainError::RepositoryError("disk".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_errors_hide_detail() {
        let response = RegistryError(DomainError::RepositoryError("pool gone".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
