use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt::Display;
use thiserror::Error;
use tracing::{error, warn};

use crate::db::StoreError;
use crate::state::AppState;
use crate::utils::response::error as error_response;

pub const SERVER_ERROR_MESSAGE: &str = "Terjadi kesalahan pada server";

/// Raw failure behind a 500, carried in the response extensions.
///
/// The body never includes it; [`expose_error_details`] puts it back when
/// the deployment asks for it.
#[derive(Debug, Clone)]
pub struct ServerErrorDetail {
    pub message: String,
    pub detail: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("{message}")]
    ServerError {
        message: String,
        detail: Option<String>,
    },
}

impl AppError {
    /// A 500 carrying a caller-facing message and the underlying failure.
    pub fn server(message: impl Into<String>, detail: impl Display) -> Self {
        AppError::ServerError {
            message: message.into(),
            detail: Some(detail.to_string()),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthError(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::ServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn log(&self) {
        match self {
            AppError::ValidationError(msg)
            | AppError::AuthError(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg) => {
                warn!(status = %self.status_code(), message = %msg, "Request rejected");
            }
            AppError::ServerError { message, detail } => {
                error!(message = %message, detail = ?detail, "Server error");
            }
        }
    }

}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        self.log();

        match self {
            AppError::ValidationError(msg)
            | AppError::AuthError(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg) => error_response(status, msg, None),
            AppError::ServerError { message, detail } => {
                let mut response = error_response(status, message.clone(), None);
                if let Some(detail) = detail {
                    response
                        .extensions_mut()
                        .insert(ServerErrorDetail { message, detail });
                }
                response
            }
        }
    }
}

/// Re-renders 500 envelopes with their `error` field when
/// `EXPOSE_ERROR_DETAILS` is on.
pub async fn expose_error_details(State(state): State<AppState>, response: Response) -> Response {
    if !state.expose_error_details {
        return response;
    }

    match response.extensions().get::<ServerErrorDetail>().cloned() {
        Some(ServerErrorDetail { message, detail }) => {
            error_response(response.status(), message, Some(detail))
        }
        None => response,
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::server(SERVER_ERROR_MESSAGE, err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(format!("Body JSON tidak valid: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::ValidationError(format!("Parameter tidak valid: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::ValidationError(format!("Query tidak valid: {}", rejection.body_text()))
    }
}
