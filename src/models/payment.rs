use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use std::str::FromStr;

use crate::utils::de::empty_string_as_none;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    pub pembayaran_id: i32,
    pub tiket_id: i32,
    pub metode_pembayaran: String,
    pub jumlah_pembayaran: Decimal,
    pub status_pembayaran: String,
    pub tanggal_pembayaran: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PaymentListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub pembayaran: Payment,
    pub kode_tiket: String,
    pub nomor_kursi: String,
    pub nama_kasir: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PaymentDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub pembayaran: Payment,
    pub kode_tiket: String,
    pub nomor_kursi: String,
    pub jadwal_id: i32,
    pub nama_kasir: String,
    pub judul_film: String,
    pub tanggal: NaiveDate,
    pub nama_studio: String,
}

/// Per-method aggregate over paid transactions.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PaymentMethodStats {
    pub metode_pembayaran: String,
    pub total_transaksi: i64,
    pub total_nominal: Option<Decimal>,
    pub rata_rata_nominal: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub mulai: NaiveDate,
    pub akhir: NaiveDate,
}

/// `?tanggal_mulai=&tanggal_akhir=` on the report endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct DateRangeQuery {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub tanggal_mulai: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub tanggal_akhir: Option<NaiveDate>,
}

impl DateRangeQuery {
    /// Both bounds, or nothing; a single bound does not filter.
    pub fn range(&self) -> Option<DateRange> {
        match (self.tanggal_mulai, self.tanggal_akhir) {
            (Some(mulai), Some(akhir)) => Some(DateRange { mulai, akhir }),
            _ => None,
        }
    }
}

/// Totals across the rows of the sales report view.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SalesSummary {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_pendapatan: Decimal,
    pub total_tiket_terjual: i64,
}

impl SalesSummary {
    pub fn from_rows(rows: &[Value]) -> Self {
        rows.iter().fold(
            SalesSummary {
                total_pendapatan: Decimal::ZERO,
                total_tiket_terjual: 0,
            },
            |acc, row| SalesSummary {
                total_pendapatan: acc.total_pendapatan + decimal_field(row, "total_pendapatan"),
                total_tiket_terjual: acc.total_tiket_terjual
                    + integer_field(row, "jumlah_tiket_terjual"),
            },
        )
    }
}

// NUMERIC columns come back from to_jsonb as numbers, older views cast them to text.
fn decimal_field(row: &Value, key: &str) -> Decimal {
    let text = match row.get(key) {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.trim().to_string(),
        _ => return Decimal::ZERO,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .unwrap_or(Decimal::ZERO)
}

fn integer_field(row: &Value, key: &str) -> i64 {
    match row.get(key) {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}
