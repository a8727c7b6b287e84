use axum::extract::State;
use axum::response::Response;
use serde_json::{Map, Value};

use crate::models::payment::{DateRangeQuery, SalesSummary};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::extract::{AppPath, AppQuery};
use crate::utils::response::{success, success_with_summary};

/// GET /api/laporan/penjualan?tanggal_mulai=&tanggal_akhir=
pub async fn sales_report(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<DateRangeQuery>,
) -> Result<Response, AppError> {
    let range = query.range().ok_or_else(|| {
        AppError::ValidationError("tanggal_mulai dan tanggal_akhir harus diisi".to_string())
    })?;

    let rows = state.store.sales_report(range).await?;
    Ok(success(rows))
}

/// GET /api/laporan/penjualan/view
///
/// The view has one row per day; the summary totals them.
pub async fn sales_report_view(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<DateRangeQuery>,
) -> Result<Response, AppError> {
    let rows = state.store.sales_report_view(query.range()).await?;
    let summary = SalesSummary::from_rows(&rows);

    Ok(success_with_summary(rows, summary))
}

/// GET /api/dashboard/admin
pub async fn admin_dashboard(State(state): State<AppState>) -> Result<Response, AppError> {
    let snapshot = state
        .store
        .admin_dashboard()
        .await?
        .unwrap_or_else(|| Value::Object(Map::new()));

    Ok(success(snapshot))
}

/// GET /api/pembayaran
pub async fn list_payments(State(state): State<AppState>) -> Result<Response, AppError> {
    let payments = state.store.list_payments().await?;
    Ok(success(payments))
}

/// GET /api/pembayaran/:id
pub async fn get_payment(
    State(state): State<AppState>,
    AppPath(pembayaran_id): AppPath<i32>,
) -> Result<Response, AppError> {
    let payment = state
        .store
        .find_payment(pembayaran_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Pembayaran tidak ditemukan".to_string()))?;

    Ok(success(payment))
}

/// GET /api/pembayaran/metode/:metode
pub async fn payments_by_method(
    State(state): State<AppState>,
    AppPath(metode): AppPath<String>,
) -> Result<Response, AppError> {
    let payments = state.store.payments_by_method(&metode).await?;
    Ok(success(payments))
}

/// GET /api/pembayaran/statistik/metode
pub async fn payment_statistics(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<DateRangeQuery>,
) -> Result<Response, AppError> {
    let stats = state.store.payment_statistics(query.range()).await?;
    Ok(success(stats))
}
