use axum::extract::State;
use axum::response::Response;

use crate::db::{ConflictReason, StoreError};
use crate::models::ticket::{CancelRequest, NewTicket, TicketRequest};
use crate::models::AdminRequest;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::extract::{AppJson, AppPath, OptionalJson};
use crate::utils::response::{created, empty_success, success, success_with_message};

/// GET /api/tiket
pub async fn list_tickets(State(state): State<AppState>) -> Result<Response, AppError> {
    let tickets = state.store.list_tickets().await?;
    Ok(success(tickets))
}

/// POST /api/tiket
pub async fn create_ticket(
    State(state): State<AppState>,
    AppJson(body): AppJson<TicketRequest>,
) -> Result<Response, AppError> {
    let ticket = NewTicket::try_from(body)?;
    let (jadwal_id, kasir_id) = (ticket.jadwal_id, ticket.kasir_id);

    let row = state
        .store
        .create_ticket(ticket)
        .await
        .map_err(|e| match e {
            StoreError::Conflict(ConflictReason::SeatOccupied) => {
                AppError::Conflict("Kursi sudah terisi atau tidak tersedia".to_string())
            }
            StoreError::Conflict(ConflictReason::StudioFull) => {
                AppError::Conflict("Kapasitas studio sudah penuh".to_string())
            }
            other => AppError::server("Gagal membuat tiket", other),
        })?;

    tracing::info!(jadwal_id, kasir_id, "Ticket sold");
    Ok(created(row, "Tiket berhasil dibuat"))
}

/// PUT /api/tiket/:kode_tiket/batal
pub async fn cancel_ticket(
    State(state): State<AppState>,
    AppPath(kode_tiket): AppPath<String>,
    OptionalJson(body): OptionalJson<CancelRequest>,
) -> Result<Response, AppError> {
    let kasir_id = body.kasir_id()?;

    state
        .store
        .cancel_ticket(&kode_tiket, kasir_id)
        .await
        .map_err(|e| AppError::server("Gagal membatalkan tiket", e))?;

    tracing::info!(kode_tiket = %kode_tiket, kasir_id, "Ticket cancelled");
    Ok(empty_success("Tiket berhasil dibatalkan"))
}

/// GET /api/tiket/kode/:kode_tiket
pub async fn get_ticket_by_code(
    State(state): State<AppState>,
    AppPath(kode_tiket): AppPath<String>,
) -> Result<Response, AppError> {
    let ticket = state
        .store
        .find_ticket_by_code(&kode_tiket)
        .await?
        .ok_or_else(|| AppError::NotFound("Tiket tidak ditemukan".to_string()))?;

    Ok(success(ticket))
}

/// GET /api/tiket/detail/:kode_tiket
pub async fn get_ticket_detail(
    State(state): State<AppState>,
    AppPath(kode_tiket): AppPath<String>,
) -> Result<Response, AppError> {
    let detail = state
        .store
        .ticket_detail(&kode_tiket)
        .await?
        .ok_or_else(|| AppError::NotFound("Tiket tidak ditemukan".to_string()))?;

    Ok(success(detail))
}

/// DELETE /api/tiket/batal/hapus
pub async fn purge_cancelled_tickets(
    State(state): State<AppState>,
    OptionalJson(body): OptionalJson<AdminRequest>,
) -> Result<Response, AppError> {
    let admin_id = body.admin_id()?;

    let result = state
        .store
        .purge_cancelled_tickets(admin_id)
        .await
        .map_err(|e| AppError::server("Gagal menghapus tiket batal", e))?;

    tracing::info!(admin_id, total = result.total_dihapus, "Cancelled tickets purged");
    let message = format!("{} tiket batal berhasil dihapus", result.total_dihapus);
    Ok(success_with_message(result, message))
}

/// GET /api/tiket/kasir/:kasir_id
pub async fn tickets_by_cashier(
    State(state): State<AppState>,
    AppPath(kasir_id): AppPath<i32>,
) -> Result<Response, AppError> {
    let tickets = state.store.tickets_by_cashier(kasir_id).await?;
    Ok(success(tickets))
}
