use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::Serialize;

use crate::services::ServiceError;

pub mod analytics;
pub mod auth;
pub mod booking;
pub mod chat;
pub mod menu;
pub mod restaurant;

/// JSON error payload returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Stable error kind, e.g. `validation` or `forbidden`.
    pub error: &'static str,
    /// Human-readable explanation.
    pub message: String,
}

/// Translate a service failure into the JSON error response.
pub(crate) fn error_response(context: &str, err: ServiceError) -> HttpResponse {
    let (status, kind) = match &err {
        ServiceError::Form(_) => (StatusCode::BAD_REQUEST, "validation"),
        ServiceError::Forbidden => (StatusCode::FORBIDDEN, "forbidden"),
        ServiceError::NotFound => (StatusCode::NOT_FOUND, "not_found"),
        ServiceError::Conflict => (StatusCode::CONFLICT, "conflict"),
        ServiceError::Unavailable => (StatusCode::SERVICE_UNAVAILABLE, "unavailable"),
        ServiceError::Llm(_) => (StatusCode::BAD_GATEWAY, "assistant_failed"),
        ServiceError::Repository(_) | ServiceError::Internal(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "internal")
        }
    };

    if status.is_server_error() {
        log::error!("{context}: {err}");
    }

    HttpResponse::build(status).json(ErrorBody {
        error: kind,
        message: err.to_string(),
    })
}
