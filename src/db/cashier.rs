use async_trait::async_trait;
use serde_json::Value;

use super::{CashierStore, PgStore, StoreResult};
use crate::models::cashier::{Cashier, Credentials, LoginOutcome};

/// Most recent history rows returned per request.
const HISTORY_LIMIT: i64 = 50;

#[async_trait]
impl CashierStore for PgStore {
    async fn login(&self, credentials: &Credentials) -> StoreResult<Option<LoginOutcome>> {
        Ok(sqlx::query_as::<_, LoginOutcome>(
            "SELECT status, message, kasir_id, nama, level_akses FROM login_user($1, $2)",
        )
        .bind(&credentials.username)
        .bind(&credentials.password)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn list_cashiers(&self) -> StoreResult<Vec<Cashier>> {
        Ok(sqlx::query_as::<_, Cashier>(
            "SELECT kasir_id, nama, username, no_telepon, tanggal_bergabung, level_akses \
             FROM kasir ORDER BY nama",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn transaction_history(&self, kasir_id: Option<i32>) -> StoreResult<Vec<Value>> {
        Ok(sqlx::query_scalar::<_, Value>(
            "SELECT to_jsonb(r) FROM riwayat_transaksi_kasir r \
             WHERE ($1::INTEGER IS NULL OR r.kasir_id = $1) \
             ORDER BY r.waktu_aksi DESC \
             LIMIT $2",
        )
        .bind(kasir_id)
        .bind(HISTORY_LIMIT)
        .fetch_all(&self.pool)
        .await?)
    }
}
