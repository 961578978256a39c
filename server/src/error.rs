use std::process::{ExitCode, Termination};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use error_stack::Report;
use serde::Serialize;

use kernel::prelude::validation::ValidationError;
use kernel::KernelError;

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub enum ErrorStatus {
    Kernel(Report<KernelError>),
    BadRequest(String),
}

impl ErrorStatus {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ErrorStatus::BadRequest(message.into())
    }

    /// Replaces the canonical message of a validation failure with the one
    /// `reword` gives for it, if any.
    pub fn reword(self, reword: fn(&ValidationError) -> Option<&'static str>) -> Self {
        match self {
            ErrorStatus::Kernel(report) => {
                match report.current_context().validation().and_then(reword) {
                    Some(message) => ErrorStatus::bad_request(message),
                    None => ErrorStatus::Kernel(report),
                }
            }
            other => other,
        }
    }
}

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus::Kernel(e)
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> Response {
        let report = match self {
            ErrorStatus::BadRequest(message) => {
                return (StatusCode::BAD_REQUEST, Json(MessageResponse::new(message)))
                    .into_response()
            }
            ErrorStatus::Kernel(report) => report,
        };
        match report.current_context() {
            KernelError::Validation(violation) => (
                StatusCode::BAD_REQUEST,
                Json(MessageResponse::new(violation.to_string())),
            )
                .into_response(),
            KernelError::NotFound => {
                tracing::debug!("{report:?}");
                (
                    StatusCode::NOT_FOUND,
                    Json(MessageResponse::new(KernelError::NotFound.to_string())),
                )
                    .into_response()
            }
            KernelError::Concurrency => StatusCode::CONFLICT.into_response(),
            KernelError::Timeout => StatusCode::REQUEST_TIMEOUT.into_response(),
            KernelError::Internal => {
                tracing::error!("{report:?}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
