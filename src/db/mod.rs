//! Data access for the ticketing database.
//!
//! Business rules live in the database's procedures and views. Each store
//! trait issues exactly one statement per call; rejections raised by the
//! procedures come back as a structured [`StoreError`].

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;
use crate::models::cashier::{Cashier, Credentials, LoginOutcome};
use crate::models::film::{Film, FilmChanges, NewFilm};
use crate::models::payment::{
    DateRange, PaymentDetail, PaymentListing, PaymentMethodStats,
};
use crate::models::schedule::{NewSchedule, OccupiedSeat, ScheduleListing, Studio};
use crate::models::ticket::{NewTicket, PurgeResult, TicketListing};

mod cashier;
pub mod error;
mod film;
mod payment;
mod schedule;
mod ticket;

pub use error::{ConflictReason, InvalidInput, StoreError};

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait FilmStore: Send + Sync {
    /// All films, newest release first.
    async fn list_films(&self) -> StoreResult<Vec<Film>>;
    async fn find_film(&self, film_id: i32) -> StoreResult<Option<Film>>;
    /// Rows of `statistik_film`, highest revenue first.
    async fn film_statistics(&self) -> StoreResult<Vec<Value>>;
    async fn top_selling_films(&self) -> StoreResult<Vec<Value>>;
    /// Returns the row produced by `tambah_film`, if any.
    async fn create_film(&self, film: NewFilm) -> StoreResult<Option<Value>>;
    async fn update_film(&self, film_id: i32, changes: FilmChanges) -> StoreResult<()>;
    async fn delete_film(&self, film_id: i32, admin_id: i32) -> StoreResult<()>;
}

#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// All schedules ordered by date and start time.
    async fn list_schedules(&self) -> StoreResult<Vec<ScheduleListing>>;
    async fn find_schedule(&self, jadwal_id: i32) -> StoreResult<Option<ScheduleListing>>;
    async fn now_showing(&self, tanggal: Option<NaiveDate>) -> StoreResult<Vec<Value>>;
    async fn available_seats(&self, jadwal_id: Option<i32>) -> StoreResult<Vec<Value>>;
    /// Seats held by active tickets, ordered by seat number.
    async fn occupied_seats(&self, jadwal_id: i32) -> StoreResult<Vec<OccupiedSeat>>;
    async fn create_schedule(&self, schedule: NewSchedule) -> StoreResult<Option<Value>>;
    async fn list_studios(&self) -> StoreResult<Vec<Studio>>;
}

#[async_trait]
pub trait TicketStore: Send + Sync {
    /// All tickets, most recent purchase first.
    async fn list_tickets(&self) -> StoreResult<Vec<TicketListing>>;
    async fn create_ticket(&self, ticket: NewTicket) -> StoreResult<Option<Value>>;
    async fn cancel_ticket(&self, kode_tiket: &str, kasir_id: i32) -> StoreResult<()>;
    async fn find_ticket_by_code(&self, kode_tiket: &str) -> StoreResult<Option<Value>>;
    async fn ticket_detail(&self, kode_tiket: &str) -> StoreResult<Option<Value>>;
    async fn purge_cancelled_tickets(&self, admin_id: i32) -> StoreResult<PurgeResult>;
    async fn tickets_by_cashier(&self, kasir_id: i32) -> StoreResult<Vec<TicketListing>>;
}

#[async_trait]
pub trait PaymentStore: Send + Sync {
    async fn sales_report(&self, range: DateRange) -> StoreResult<Vec<Value>>;
    /// Rows of the `laporan_penjualan` view, newest date first.
    async fn sales_report_view(&self, range: Option<DateRange>) -> StoreResult<Vec<Value>>;
    async fn admin_dashboard(&self) -> StoreResult<Option<Value>>;
    async fn list_payments(&self) -> StoreResult<Vec<PaymentListing>>;
    async fn find_payment(&self, pembayaran_id: i32) -> StoreResult<Option<PaymentDetail>>;
    async fn payments_by_method(&self, metode: &str) -> StoreResult<Vec<PaymentListing>>;
    async fn payment_statistics(
        &self,
        range: Option<DateRange>,
    ) -> StoreResult<Vec<PaymentMethodStats>>;
}

#[async_trait]
pub trait CashierStore: Send + Sync {
    /// `None` when the procedure returns no discriminant row.
    async fn login(&self, credentials: &Credentials) -> StoreResult<Option<LoginOutcome>>;
    async fn list_cashiers(&self) -> StoreResult<Vec<Cashier>>;
    /// At most 50 history rows, newest first.
    async fn transaction_history(&self, kasir_id: Option<i32>) -> StoreResult<Vec<Value>>;
}

/// Everything the HTTP layer needs from the database.
#[async_trait]
pub trait Store: FilmStore + ScheduleStore + TicketStore + PaymentStore + CashierStore {
    async fn ping(&self) -> StoreResult<()>;
}

/// [`Store`] backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Builds a lazy pool; no connection is opened until first use.
    pub fn connect_lazy(config: &Config) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_lazy(&config.database_url)?;
        Ok(Self::new(pool))
    }

    /// Checks out one connection and hands it straight back.
    pub async fn check_connection(&self) -> Result<(), sqlx::Error> {
        let conn = self.pool.acquire().await?;
        drop(conn);
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
