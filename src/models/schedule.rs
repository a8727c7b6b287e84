use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::given;
use crate::utils::de::{empty_string_as_none, optional_time};
use crate::utils::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Schedule {
    pub jadwal_id: i32,
    pub film_id: i32,
    pub studio_id: i32,
    pub tanggal: NaiveDate,
    pub waktu_mulai: NaiveTime,
    pub waktu_selesai: NaiveTime,
    pub harga_tiket: Decimal,
}

/// A schedule joined with the film and studio fields shown on listings.
///
/// `kapasitas` is only selected by the single-schedule lookup.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ScheduleListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub jadwal: Schedule,
    pub judul_film: String,
    pub genre: String,
    pub durasi: Option<i32>,
    pub rating: Option<String>,
    pub nama_studio: String,
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kapasitas: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Studio {
    pub studio_id: i32,
    pub nama_studio: String,
    pub kapasitas: i32,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OccupiedSeat {
    pub nomor_kursi: String,
    pub status_tiket: String,
}

/// Body of `POST /api/jadwal`.
#[derive(Debug, Default, Deserialize)]
pub struct ScheduleRequest {
    pub film_id: Option<i32>,
    pub studio_id: Option<i32>,
    pub tanggal: Option<NaiveDate>,
    #[serde(default, deserialize_with = "optional_time")]
    pub waktu_mulai: Option<NaiveTime>,
    #[serde(default, deserialize_with = "optional_time")]
    pub waktu_selesai: Option<NaiveTime>,
    pub harga_tiket: Option<Decimal>,
    pub admin_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSchedule {
    pub film_id: i32,
    pub studio_id: i32,
    pub tanggal: NaiveDate,
    pub waktu_mulai: NaiveTime,
    pub waktu_selesai: NaiveTime,
    pub harga_tiket: Decimal,
    pub admin_id: i32,
}

impl TryFrom<ScheduleRequest> for NewSchedule {
    type Error = AppError;

    fn try_from(req: ScheduleRequest) -> Result<Self, Self::Error> {
        match (
            given(req.film_id),
            given(req.studio_id),
            req.tanggal,
            req.waktu_mulai,
            req.waktu_selesai,
            req.harga_tiket.filter(|harga| !harga.is_zero()),
            given(req.admin_id),
        ) {
            (
                Some(film_id),
                Some(studio_id),
                Some(tanggal),
                Some(waktu_mulai),
                Some(waktu_selesai),
                Some(harga_tiket),
                Some(admin_id),
            ) => Ok(NewSchedule {
                film_id,
                studio_id,
                tanggal,
                waktu_mulai,
                waktu_selesai,
                harga_tiket,
                admin_id,
            }),
            _ => Err(AppError::ValidationError(
                "Semua field harus diisi".to_string(),
            )),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct NowShowingQuery {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub tanggal: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AvailableSeatsQuery {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub jadwal_id: Option<i32>,
}
