//! Command results as HTTP responses.
//!
//! | Result | Status | Body |
//! |--------|--------|------|
//! | `Output::Created` | 201 | record |
//! | `Output::Deleted` | 204 | empty |
//! | other outputs | 200 | records / record / `{"message"}` |
//! | `Error::NotFound` | 404 | `{"error": "<Label> not found"}` |
//! | `Error::InvalidInput` | 400 | `{"error": reason}` |
//! | system errors | 500 | `{"error": "Failed to ..."}` |
//! | path, query or body rejected | 400 / 415 / 422 | `{"error": reason}` |
//! | method not allowed | 405 | `{"error": "Method not allowed"}` |
//!
//! System error details are logged by the executor and never sent.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use flatstore_executor::{Error, Output};
use serde_json::json;

/// An error response: status plus `{"error": message}`
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// HTTP status
    pub status: StatusCode,
    /// Message placed in the `error` field
    pub message: String,
}

impl ApiError {
    /// Build an error response
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Map an executor error, using `failure` for server-side errors
    pub fn from_command_error(err: Error, failure: &'static str) -> Self {
        match err {
            Error::NotFound { resource, .. } => {
                Self::new(StatusCode::NOT_FOUND, format!("{} not found", resource.label()))
            }
            Error::InvalidInput { reason } => Self::new(StatusCode::BAD_REQUEST, reason),
            Error::Io { .. } | Error::Serialization { .. } | Error::Internal { .. } => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, failure)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

/// Give axum's bare 405 the `{"error"}` body, keeping its `Allow` header.
pub async fn json_method_not_allowed(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }
    let allow = response.headers().get(header::ALLOW).cloned();
    let mut json =
        ApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed").into_response();
    if let Some(allow) = allow {
        json.headers_mut().insert(header::ALLOW, allow);
    }
    json
}

/// Response for a successful command
pub fn output_response(output: Output) -> Response {
    let status = match &output {
        Output::Created(_) => StatusCode::CREATED,
        Output::Deleted => StatusCode::NO_CONTENT,
        _ => StatusCode::OK,
    };
    match output.into_body() {
        Some(body) => (status, Json(body)).into_response(),
        None => status.into_response(),
    }
}
