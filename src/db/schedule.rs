use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;

use super::{PgStore, ScheduleStore, StoreResult};
use crate::models::schedule::{NewSchedule, OccupiedSeat, ScheduleListing, Studio};

const LISTING_SELECT: &str = "\
    SELECT j.*, f.judul_film, f.genre, f.durasi, f.rating, s.nama_studio";

const LISTING_JOINS: &str = "\
    FROM jadwal j \
    JOIN film f ON j.film_id = f.film_id \
    JOIN studio s ON j.studio_id = s.studio_id";

#[async_trait]
impl ScheduleStore for PgStore {
    async fn list_schedules(&self) -> StoreResult<Vec<ScheduleListing>> {
        let query = format!("{LISTING_SELECT} {LISTING_JOINS} ORDER BY j.tanggal, j.waktu_mulai");
        Ok(sqlx::query_as::<_, ScheduleListing>(&query)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn find_schedule(&self, jadwal_id: i32) -> StoreResult<Option<ScheduleListing>> {
        let query = format!("{LISTING_SELECT}, s.kapasitas {LISTING_JOINS} WHERE j.jadwal_id = $1");
        Ok(sqlx::query_as::<_, ScheduleListing>(&query)
            .bind(jadwal_id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn now_showing(&self, tanggal: Option<NaiveDate>) -> StoreResult<Vec<Value>> {
        Ok(sqlx::query_scalar::<_, Value>(
            "SELECT to_jsonb(t) FROM jadwal_tayang t \
             WHERE ($1::DATE IS NULL OR t.tanggal = $1) \
             ORDER BY t.tanggal, t.waktu_mulai",
        )
        .bind(tanggal)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn available_seats(&self, jadwal_id: Option<i32>) -> StoreResult<Vec<Value>> {
        Ok(sqlx::query_scalar::<_, Value>(
            "SELECT to_jsonb(k) FROM daftar_kursi_tersedia k \
             WHERE ($1::INTEGER IS NULL OR k.jadwal_id = $1)",
        )
        .bind(jadwal_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn occupied_seats(&self, jadwal_id: i32) -> StoreResult<Vec<OccupiedSeat>> {
        Ok(sqlx::query_as::<_, OccupiedSeat>(
            "SELECT nomor_kursi, status_tiket FROM tiket \
             WHERE jadwal_id = $1 AND status_tiket = 'Aktif' \
             ORDER BY nomor_kursi",
        )
        .bind(jadwal_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn create_schedule(&self, schedule: NewSchedule) -> StoreResult<Option<Value>> {
        Ok(sqlx::query_scalar::<_, Value>(
            "SELECT to_jsonb(j) FROM tambah_jadwal($1, $2, $3, $4, $5, $6, $7) j",
        )
        .bind(schedule.film_id)
        .bind(schedule.studio_id)
        .bind(schedule.tanggal)
        .bind(schedule.waktu_mulai)
        .bind(schedule.waktu_selesai)
        .bind(schedule.harga_tiket)
        .bind(schedule.admin_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn list_studios(&self) -> StoreResult<Vec<Studio>> {
        Ok(sqlx::query_as::<_, Studio>(
            "SELECT studio_id, nama_studio, kapasitas FROM studio ORDER BY nama_studio",
        )
        .fetch_all(&self.pool)
        .await?)
    }
}
