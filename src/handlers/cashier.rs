use axum::extract::State;
use axum::response::Response;

use crate::models::cashier::{Credentials, HistoryQuery, LoggedIn, LoginRequest};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::extract::{AppJson, AppPath, AppQuery};
use crate::utils::response::{success, success_with_message};

const DEFAULT_LOGIN_FAILURE: &str = "Username atau password salah";

/// POST /api/auth/login
///
/// The procedure decides; its message is passed through on failure and
/// nothing else about the credentials is revealed.
pub async fn login(
    State(state): State<AppState>,
    AppJson(body): AppJson<LoginRequest>,
) -> Result<Response, AppError> {
    let credentials = Credentials::try_from(body)?;

    match state.store.login(&credentials).await? {
        Some(outcome) if outcome.is_success() => {
            tracing::info!(kasir_id = ?outcome.kasir_id, "Login succeeded");
            Ok(success_with_message(LoggedIn::from(outcome), "Login berhasil"))
        }
        outcome => {
            let message = outcome
                .and_then(|o| o.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_LOGIN_FAILURE.to_string());
            Err(AppError::AuthError(message))
        }
    }
}

/// GET /api/kasir
pub async fn list_cashiers(State(state): State<AppState>) -> Result<Response, AppError> {
    let cashiers = state.store.list_cashiers().await?;
    Ok(success(cashiers))
}

/// GET /api/riwayat?kasir_id=
pub async fn transaction_history(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<HistoryQuery>,
) -> Result<Response, AppError> {
    let rows = state.store.transaction_history(query.kasir_id).await?;
    Ok(success(rows))
}

/// GET /api/kasir/:kasir_id/riwayat
pub async fn cashier_history(
    State(state): State<AppState>,
    AppPath(kasir_id): AppPath<i32>,
) -> Result<Response, AppError> {
    let rows = state.store.transaction_history(Some(kasir_id)).await?;
    Ok(success(rows))
}
