use async_trait::async_trait;
use serde_json::Value;

use super::{PaymentStore, PgStore, StoreResult};
use crate::models::payment::{DateRange, PaymentDetail, PaymentListing, PaymentMethodStats};

const LISTING_QUERY: &str = "\
    SELECT p.*, t.kode_tiket, t.nomor_kursi, k.nama AS nama_kasir \
    FROM pembayaran p \
    JOIN tiket t ON p.tiket_id = t.tiket_id \
    JOIN kasir k ON t.kasir_id = k.kasir_id";

#[async_trait]
impl PaymentStore for PgStore {
    async fn sales_report(&self, range: DateRange) -> StoreResult<Vec<Value>> {
        Ok(sqlx::query_scalar::<_, Value>(
            "SELECT to_jsonb(l) FROM laporan_penjualan_periode($1, $2) l",
        )
        .bind(range.mulai)
        .bind(range.akhir)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn sales_report_view(&self, range: Option<DateRange>) -> StoreResult<Vec<Value>> {
        Ok(sqlx::query_scalar::<_, Value>(
            "SELECT to_jsonb(l) FROM laporan_penjualan l \
             WHERE ($1::DATE IS NULL OR l.tanggal BETWEEN $1 AND $2) \
             ORDER BY l.tanggal DESC",
        )
        .bind(range.map(|r| r.mulai))
        .bind(range.map(|r| r.akhir))
        .fetch_all(&self.pool)
        .await?)
    }

    async fn admin_dashboard(&self) -> StoreResult<Option<Value>> {
        Ok(
            sqlx::query_scalar::<_, Value>("SELECT to_jsonb(d) FROM dashboard_admin d LIMIT 1")
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn list_payments(&self) -> StoreResult<Vec<PaymentListing>> {
        let query = format!("{LISTING_QUERY} ORDER BY p.tanggal_pembayaran DESC");
        Ok(sqlx::query_as::<_, PaymentListing>(&query)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn find_payment(&self, pembayaran_id: i32) -> StoreResult<Option<PaymentDetail>> {
        Ok(sqlx::query_as::<_, PaymentDetail>(
            "SELECT p.*, t.kode_tiket, t.nomor_kursi, t.jadwal_id, \
                    k.nama AS nama_kasir, f.judul_film, j.tanggal, s.nama_studio \
             FROM pembayaran p \
             JOIN tiket t ON p.tiket_id = t.tiket_id \
             JOIN kasir k ON t.kasir_id = k.kasir_id \
             JOIN jadwal j ON t.jadwal_id = j.jadwal_id \
             JOIN film f ON j.film_id = f.film_id \
             JOIN studio s ON j.studio_id = s.studio_id \
             WHERE p.pembayaran_id = $1",
        )
        .bind(pembayaran_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn payments_by_method(&self, metode: &str) -> StoreResult<Vec<PaymentListing>> {
        let query = format!(
            "{LISTING_QUERY} WHERE p.metode_pembayaran = $1 ORDER BY p.tanggal_pembayaran DESC"
        );
        Ok(sqlx::query_as::<_, PaymentListing>(&query)
            .bind(metode)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn payment_statistics(
        &self,
        range: Option<DateRange>,
    ) -> StoreResult<Vec<PaymentMethodStats>> {
        Ok(sqlx::query_as::<_, PaymentMethodStats>(
            "SELECT metode_pembayaran, \
                    COUNT(*) AS total_transaksi, \
                    SUM(jumlah_pembayaran) AS total_nominal, \
                    AVG(jumlah_pembayaran) AS rata_rata_nominal \
             FROM pembayaran \
             WHERE status_pembayaran = 'Lunas' \
               AND ($1::DATE IS NULL OR tanggal_pembayaran::DATE BETWEEN $1 AND $2) \
             GROUP BY metode_pembayaran \
             ORDER BY total_nominal DESC",
        )
        .bind(range.map(|r| r.mulai))
        .bind(range.map(|r| r.akhir))
        .fetch_all(&self.pool)
        .await?)
    }
}
