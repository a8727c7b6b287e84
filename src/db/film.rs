use async_trait::async_trait;
use serde_json::Value;

use super::{FilmStore, PgStore, StoreResult};
use crate::models::film::{Film, FilmChanges, NewFilm};

/// Column list for `film` queries.
const FILM_COLUMNS: &str = "\
    film_id, judul_film, genre, durasi, sutradara, sinopsis, rating, \
    tanggal_rilis, status_film";

#[async_trait]
impl FilmStore for PgStore {
    async fn list_films(&self) -> StoreResult<Vec<Film>> {
        let query = format!("SELECT {FILM_COLUMNS} FROM film ORDER BY tanggal_rilis DESC");
        Ok(sqlx::query_as::<_, Film>(&query)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn find_film(&self, film_id: i32) -> StoreResult<Option<Film>> {
        let query = format!("SELECT {FILM_COLUMNS} FROM film WHERE film_id = $1");
        Ok(sqlx::query_as::<_, Film>(&query)
            .bind(film_id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn film_statistics(&self) -> StoreResult<Vec<Value>> {
        Ok(sqlx::query_scalar::<_, Value>(
            "SELECT to_jsonb(s) FROM statistik_film s ORDER BY s.total_pendapatan DESC",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn top_selling_films(&self) -> StoreResult<Vec<Value>> {
        Ok(
            sqlx::query_scalar::<_, Value>("SELECT to_jsonb(t) FROM top5_film_terlaris t")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn create_film(&self, film: NewFilm) -> StoreResult<Option<Value>> {
        Ok(sqlx::query_scalar::<_, Value>(
            "SELECT to_jsonb(f) FROM tambah_film($1, $2, $3, $4, $5, $6, $7, $8, $9) f",
        )
        .bind(film.judul_film)
        .bind(film.genre)
        .bind(film.durasi)
        .bind(film.sutradara)
        .bind(film.sinopsis)
        .bind(film.rating)
        .bind(film.tanggal_rilis)
        .bind(film.status_film)
        .bind(film.admin_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn update_film(&self, film_id: i32, changes: FilmChanges) -> StoreResult<()> {
        sqlx::query("CALL update_film($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)")
            .bind(film_id)
            .bind(changes.judul_film)
            .bind(changes.genre)
            .bind(changes.durasi)
            .bind(changes.sutradara)
            .bind(changes.sinopsis)
            .bind(changes.rating)
            .bind(changes.tanggal_rilis)
            .bind(changes.status_film)
            .bind(changes.admin_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_film(&self, film_id: i32, admin_id: i32) -> StoreResult<()> {
        sqlx::query("CALL hapus_film($1, $2)")
            .bind(film_id)
            .bind(admin_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
