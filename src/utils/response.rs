use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// The envelope every endpoint answers with.
#[derive(Serialize)]
pub struct ApiResponse<T, S = ()>
where
    T: Serialize,
    S: Serialize,
{
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<S>,
}

impl<T: Serialize, S: Serialize> ApiResponse<T, S> {
    fn ok(data: Option<T>, message: Option<String>, summary: Option<S>) -> Self {
        Self {
            success: true,
            data,
            message,
            error: None,
            summary,
        }
    }
}

pub fn success<T>(data: T) -> Response
where
    T: Serialize,
{
    let body: ApiResponse<T> = ApiResponse::ok(Some(data), None, None);
    (StatusCode::OK, Json(body)).into_response()
}

pub fn success_with_message<T>(data: T, message: impl Into<String>) -> Response
where
    T: Serialize,
{
    let body: ApiResponse<T> = ApiResponse::ok(Some(data), Some(message.into()), None);
    (StatusCode::OK, Json(body)).into_response()
}

pub fn success_with_summary<T, S>(data: T, summary: S) -> Response
where
    T: Serialize,
    S: Serialize,
{
    let body = ApiResponse::ok(Some(data), None, Some(summary));
    (StatusCode::OK, Json(body)).into_response()
}

/// 201 with the row the creating procedure returned, when it returned one.
pub fn created<T>(data: Option<T>, message: impl Into<String>) -> Response
where
    T: Serialize,
{
    let body: ApiResponse<T> = ApiResponse::ok(data, Some(message.into()), None);
    (StatusCode::CREATED, Json(body)).into_response()
}

pub fn empty_success(message: impl Into<String>) -> Response {
    let body: ApiResponse<()> = ApiResponse::ok(None, Some(message.into()), None);
    (StatusCode::OK, Json(body)).into_response()
}

pub fn error(status: StatusCode, message: impl Into<String>, detail: Option<String>) -> Response {
    let body: ApiResponse<()> = ApiResponse {
        success: false,
        data: None,
        message: Some(message.into()),
        error: detail,
        summary: None,
    };

    (status, Json(body)).into_response()
}
