use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{filled, given};
use crate::utils::error::AppError;

/// Status value of a ticket that still holds its seat.
pub const STATUS_ACTIVE: &str = "Aktif";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ticket {
    pub tiket_id: i32,
    pub kode_tiket: String,
    pub jadwal_id: i32,
    pub kasir_id: i32,
    pub nomor_kursi: String,
    pub status_tiket: String,
    pub tanggal_pembelian: NaiveDateTime,
}

/// A ticket joined with its screening; `nama_kasir` is absent on per-cashier listings.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TicketListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub tiket: Ticket,
    pub judul_film: String,
    pub tanggal: NaiveDate,
    pub waktu_mulai: NaiveTime,
    pub nama_studio: String,
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nama_kasir: Option<String>,
}

/// Body of `POST /api/tiket`.
#[derive(Debug, Default, Deserialize)]
pub struct TicketRequest {
    pub jadwal_id: Option<i32>,
    pub kasir_id: Option<i32>,
    pub nomor_kursi: Option<String>,
    pub metode_pembayaran: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTicket {
    pub jadwal_id: i32,
    pub kasir_id: i32,
    pub nomor_kursi: String,
    pub metode_pembayaran: String,
}

impl TryFrom<TicketRequest> for NewTicket {
    type Error = AppError;

    fn try_from(req: TicketRequest) -> Result<Self, Self::Error> {
        match (
            given(req.jadwal_id),
            given(req.kasir_id),
            filled(req.nomor_kursi),
            filled(req.metode_pembayaran),
        ) {
            (Some(jadwal_id), Some(kasir_id), Some(nomor_kursi), Some(metode_pembayaran)) => {
                Ok(NewTicket {
                    jadwal_id,
                    kasir_id,
                    nomor_kursi,
                    metode_pembayaran,
                })
            }
            _ => Err(AppError::ValidationError(
                "Semua field harus diisi".to_string(),
            )),
        }
    }
}

/// Body of `PUT /api/tiket/:kode_tiket/batal`.
#[derive(Debug, Default, Deserialize)]
pub struct CancelRequest {
    pub kasir_id: Option<i32>,
}

impl CancelRequest {
    pub fn kasir_id(&self) -> Result<i32, AppError> {
        given(self.kasir_id)
            .ok_or_else(|| AppError::ValidationError("kasir_id harus diisi".to_string()))
    }
}

/// Result row of the cancelled-ticket purge.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct PurgeResult {
    pub total_dihapus: i64,
}
