use async_trait::async_trait;
use serde_json::Value;

use super::{PgStore, StoreResult, TicketStore};
use crate::models::ticket::{NewTicket, PurgeResult, TicketListing};

#[async_trait]
impl TicketStore for PgStore {
    async fn list_tickets(&self) -> StoreResult<Vec<TicketListing>> {
        Ok(sqlx::query_as::<_, TicketListing>(
            "SELECT t.*, f.judul_film, j.tanggal, j.waktu_mulai, s.nama_studio, \
                    k.nama AS nama_kasir \
             FROM tiket t \
             JOIN jadwal j ON t.jadwal_id = j.jadwal_id \
             JOIN film f ON j.film_id = f.film_id \
             JOIN studio s ON j.studio_id = s.studio_id \
             JOIN kasir k ON t.kasir_id = k.kasir_id \
             ORDER BY t.tanggal_pembelian DESC",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn create_ticket(&self, ticket: NewTicket) -> StoreResult<Option<Value>> {
        Ok(sqlx::query_scalar::<_, Value>(
            "SELECT to_jsonb(t) FROM buat_tiket($1, $2, $3, $4) t",
        )
        .bind(ticket.jadwal_id)
        .bind(ticket.kasir_id)
        .bind(ticket.nomor_kursi)
        .bind(ticket.metode_pembayaran)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn cancel_ticket(&self, kode_tiket: &str, kasir_id: i32) -> StoreResult<()> {
        sqlx::query("CALL batalkan_tiket($1, $2)")
            .bind(kode_tiket)
            .bind(kasir_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_ticket_by_code(&self, kode_tiket: &str) -> StoreResult<Option<Value>> {
        Ok(
            sqlx::query_scalar::<_, Value>("SELECT to_jsonb(t) FROM tampilkan_tiket($1) t")
                .bind(kode_tiket)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn ticket_detail(&self, kode_tiket: &str) -> StoreResult<Option<Value>> {
        Ok(sqlx::query_scalar::<_, Value>(
            "SELECT to_jsonb(d) FROM detail_tiket d WHERE d.kode_tiket = $1",
        )
        .bind(kode_tiket)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn purge_cancelled_tickets(&self, admin_id: i32) -> StoreResult<PurgeResult> {
        Ok(sqlx::query_as::<_, PurgeResult>(
            "SELECT total_dihapus::BIGINT AS total_dihapus FROM hapus_tiket_batal($1)",
        )
        .bind(admin_id)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn tickets_by_cashier(&self, kasir_id: i32) -> StoreResult<Vec<TicketListing>> {
        Ok(sqlx::query_as::<_, TicketListing>(
            "SELECT t.*, f.judul_film, j.tanggal, j.waktu_mulai, s.nama_studio \
             FROM tiket t \
             JOIN jadwal j ON t.jadwal_id = j.jadwal_id \
             JOIN film f ON j.film_id = f.film_id \
             JOIN studio s ON j.studio_id = s.studio_id \
             WHERE t.kasir_id = $1 \
             ORDER BY t.tanggal_pembelian DESC",
        )
        .bind(kasir_id)
        .fetch_all(&self.pool)
        .await?)
    }
}
