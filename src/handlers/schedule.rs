use axum::extract::State;
use axum::response::Response;

use crate::db::{ConflictReason, InvalidInput, StoreError};
use crate::models::schedule::{AvailableSeatsQuery, NewSchedule, NowShowingQuery, ScheduleRequest};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::extract::{AppJson, AppPath, AppQuery};
use crate::utils::response::{created, success};

/// GET /api/jadwal
pub async fn list_schedules(State(state): State<AppState>) -> Result<Response, AppError> {
    let schedules = state.store.list_schedules().await?;
    Ok(success(schedules))
}

/// GET /api/jadwal/:id
pub async fn get_schedule(
    State(state): State<AppState>,
    AppPath(jadwal_id): AppPath<i32>,
) -> Result<Response, AppError> {
    let schedule = state
        .store
        .find_schedule(jadwal_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Jadwal tidak ditemukan".to_string()))?;

    Ok(success(schedule))
}

/// GET /api/jadwal/tayang/list?tanggal=
pub async fn now_showing(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<NowShowingQuery>,
) -> Result<Response, AppError> {
    let rows = state.store.now_showing(query.tanggal).await?;
    Ok(success(rows))
}

/// GET /api/jadwal/kursi/tersedia?jadwal_id=
pub async fn available_seats(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<AvailableSeatsQuery>,
) -> Result<Response, AppError> {
    let rows = state.store.available_seats(query.jadwal_id).await?;
    Ok(success(rows))
}

/// GET /api/jadwal/:id/kursi/terisi
pub async fn occupied_seats(
    State(state): State<AppState>,
    AppPath(jadwal_id): AppPath<i32>,
) -> Result<Response, AppError> {
    let seats = state.store.occupied_seats(jadwal_id).await?;
    Ok(success(seats))
}

/// POST /api/jadwal
pub async fn create_schedule(
    State(state): State<AppState>,
    AppJson(body): AppJson<ScheduleRequest>,
) -> Result<Response, AppError> {
    let schedule = NewSchedule::try_from(body)?;
    let (studio_id, tanggal) = (schedule.studio_id, schedule.tanggal);

    let row = state
        .store
        .create_schedule(schedule)
        .await
        .map_err(|e| match e {
            StoreError::Conflict(ConflictReason::ScheduleOverlap) => AppError::Conflict(
                "Jadwal bentrok dengan jadwal lain di studio yang sama".to_string(),
            ),
            StoreError::ValidationFailed(InvalidInput::FilmNotShowing) => {
                AppError::ValidationError("Film tidak dalam status tayang".to_string())
            }
            other => AppError::server("Gagal menambahkan jadwal", other),
        })?;

    tracing::info!(studio_id, %tanggal, "Schedule created");
    Ok(created(row, "Jadwal berhasil ditambahkan"))
}

/// GET /api/studio
pub async fn list_studios(State(state): State<AppState>) -> Result<Response, AppError> {
    let studios = state.store.list_studios().await?;
    Ok(success(studios))
}
