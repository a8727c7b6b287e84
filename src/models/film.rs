use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{filled, given};
use crate::utils::error::AppError;

/// Status value for films currently in cinemas.
pub const STATUS_SHOWING: &str = "Tayang";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Film {
    pub film_id: i32,
    pub judul_film: String,
    pub genre: String,
    pub durasi: Option<i32>,
    pub sutradara: Option<String>,
    pub sinopsis: Option<String>,
    pub rating: Option<String>,
    pub tanggal_rilis: Option<NaiveDate>,
    pub status_film: String,
}

/// Body of `POST /api/films` and `PUT /api/films/:id`.
#[derive(Debug, Default, Deserialize)]
pub struct FilmRequest {
    pub judul_film: Option<String>,
    pub genre: Option<String>,
    pub durasi: Option<i32>,
    pub sutradara: Option<String>,
    pub sinopsis: Option<String>,
    pub rating: Option<String>,
    pub tanggal_rilis: Option<NaiveDate>,
    pub status_film: Option<String>,
    pub admin_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewFilm {
    pub judul_film: String,
    pub genre: String,
    pub durasi: Option<i32>,
    pub sutradara: Option<String>,
    pub sinopsis: Option<String>,
    pub rating: Option<String>,
    pub tanggal_rilis: Option<NaiveDate>,
    pub status_film: String,
    pub admin_id: i32,
}

/// Partial update; `None` fields are passed to the procedure as NULL.
#[derive(Debug, Clone, PartialEq)]
pub struct FilmChanges {
    pub judul_film: Option<String>,
    pub genre: Option<String>,
    pub durasi: Option<i32>,
    pub sutradara: Option<String>,
    pub sinopsis: Option<String>,
    pub rating: Option<String>,
    pub tanggal_rilis: Option<NaiveDate>,
    pub status_film: Option<String>,
    pub admin_id: i32,
}

impl TryFrom<FilmRequest> for NewFilm {
    type Error = AppError;

    fn try_from(req: FilmRequest) -> Result<Self, Self::Error> {
        match (filled(req.judul_film), filled(req.genre), given(req.admin_id)) {
            (Some(judul_film), Some(genre), Some(admin_id)) => Ok(NewFilm {
                judul_film,
                genre,
                durasi: req.durasi,
                sutradara: req.sutradara,
                sinopsis: req.sinopsis,
                rating: req.rating,
                tanggal_rilis: req.tanggal_rilis,
                status_film: filled(req.status_film)
                    .unwrap_or_else(|| STATUS_SHOWING.to_string()),
                admin_id,
            }),
            _ => Err(AppError::ValidationError(
                "Judul film, genre, dan admin_id harus diisi".to_string(),
            )),
        }
    }
}

impl TryFrom<FilmRequest> for FilmChanges {
    type Error = AppError;

    fn try_from(req: FilmRequest) -> Result<Self, Self::Error> {
        let admin_id = given(req.admin_id)
            .ok_or_else(|| AppError::ValidationError("admin_id harus diisi".to_string()))?;

        Ok(FilmChanges {
            judul_film: req.judul_film,
            genre: req.genre,
            durasi: req.durasi,
            sutradara: req.sutradara,
            sinopsis: req.sinopsis,
            rating: req.rating,
            tanggal_rilis: req.tanggal_rilis,
            status_film: req.status_film,
            admin_id,
        })
    }
}
