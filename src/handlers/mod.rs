use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::any::Any;

use crate::state::AppState;
use crate::utils::error::{AppError, SERVER_ERROR_MESSAGE};
use crate::utils::response::{error, success, success_with_message};

pub mod cashier;
pub mod film;
pub mod payment;
pub mod schedule;
pub mod ticket;

#[derive(Serialize)]
struct Endpoints {
    auth: &'static str,
    films: &'static str,
    jadwal: &'static str,
    tiket: &'static str,
    pembayaran: &'static str,
}

#[derive(Serialize)]
struct ServiceInfo {
    service: &'static str,
    version: &'static str,
    endpoints: Endpoints,
}

/// GET /
pub async fn index() -> Response {
    let info = ServiceInfo {
        service: "API Sistem Pemesanan Tiket Bioskop",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: Endpoints {
            auth: "/api/auth",
            films: "/api/films",
            jadwal: "/api/jadwal",
            tiket: "/api/tiket",
            pembayaran: "/api/pembayaran",
        },
    };

    success(info)
}

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    database: &'static str,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Result<Response, AppError> {
    state
        .store
        .ping()
        .await
        .map_err(|e| AppError::server("Database tidak dapat dihubungi", e))?;

    let payload = HealthPayload {
        status: "ok",
        database: "connected",
    };
    Ok(success_with_message(payload, "Health check successful"))
}

/// Answers every unmatched path or method.
pub async fn not_found() -> Response {
    error(StatusCode::NOT_FOUND, "Endpoint tidak ditemukan", None)
}

/// Converts a handler panic into the uniform 500 envelope.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::ServerError {
        message: SERVER_ERROR_MESSAGE.to_string(),
        detail: Some(detail),
    }
    .into_response()
}
