use axum::extract::State;
use axum::response::Response;

use crate::models::film::{FilmChanges, FilmRequest, NewFilm};
use crate::models::AdminRequest;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::extract::{AppJson, AppPath, OptionalJson};
use crate::utils::response::{created, empty_success, success};

/// GET /api/films
pub async fn list_films(State(state): State<AppState>) -> Result<Response, AppError> {
    let films = state.store.list_films().await?;
    Ok(success(films))
}

/// GET /api/films/:id
pub async fn get_film(
    State(state): State<AppState>,
    AppPath(film_id): AppPath<i32>,
) -> Result<Response, AppError> {
    let film = state
        .store
        .find_film(film_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Film tidak ditemukan".to_string()))?;

    Ok(success(film))
}

/// GET /api/films/statistik/all
pub async fn film_statistics(State(state): State<AppState>) -> Result<Response, AppError> {
    let rows = state.store.film_statistics().await?;
    Ok(success(rows))
}

/// GET /api/films/top/terlaris
pub async fn top_selling_films(State(state): State<AppState>) -> Result<Response, AppError> {
    let rows = state.store.top_selling_films().await?;
    Ok(success(rows))
}

/// POST /api/films
pub async fn create_film(
    State(state): State<AppState>,
    AppJson(body): AppJson<FilmRequest>,
) -> Result<Response, AppError> {
    let film = NewFilm::try_from(body)?;
    let admin_id = film.admin_id;

    let row = state
        .store
        .create_film(film)
        .await
        .map_err(|e| AppError::server("Gagal menambahkan film", e))?;

    tracing::info!(admin_id, "Film created");
    Ok(created(row, "Film berhasil ditambahkan"))
}

/// PUT /api/films/:id
pub async fn update_film(
    State(state): State<AppState>,
    AppPath(film_id): AppPath<i32>,
    AppJson(body): AppJson<FilmRequest>,
) -> Result<Response, AppError> {
    let changes = FilmChanges::try_from(body)?;
    let admin_id = changes.admin_id;

    state
        .store
        .update_film(film_id, changes)
        .await
        .map_err(|e| AppError::server("Gagal mengupdate film", e))?;

    tracing::info!(film_id, admin_id, "Film updated");
    Ok(empty_success("Film berhasil diupdate"))
}

/// DELETE /api/films/:id
///
/// The procedure refuses films that still have active schedules; that
/// surfaces as a plain 500.
pub async fn delete_film(
    State(state): State<AppState>,
    AppPath(film_id): AppPath<i32>,
    OptionalJson(body): OptionalJson<AdminRequest>,
) -> Result<Response, AppError> {
    let admin_id = body.admin_id()?;

    state.store.delete_film(film_id, admin_id).await.map_err(|e| {
        AppError::server(
            "Gagal menghapus film. Pastikan tidak ada jadwal aktif yang terkait",
            e,
        )
    })?;

    tracing::info!(film_id, admin_id, "Film deleted");
    Ok(empty_success("Film berhasil dihapus"))
}
