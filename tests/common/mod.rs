//! In-memory [`Store`] used to drive the real router without a database.
//!
//! It mimics the rules the database procedures enforce (seat conflicts,
//! schedule overlap, film status) closely enough for the HTTP contract.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tower::ServiceExt;

use bioskop_server::db::{
    CashierStore, ConflictReason, FilmStore, InvalidInput, PaymentStore, ScheduleStore, Store,
    StoreError, StoreResult, TicketStore,
};
use bioskop_server::models::cashier::{Cashier, Credentials, LoginOutcome};
use bioskop_server::models::film::{Film, FilmChanges, NewFilm};
use bioskop_server::models::payment::{
    DateRange, Payment, PaymentDetail, PaymentListing, PaymentMethodStats,
};
use bioskop_server::models::schedule::{
    NewSchedule, OccupiedSeat, Schedule, ScheduleListing, Studio,
};
use bioskop_server::models::ticket::{NewTicket, PurgeResult, Ticket, TicketListing};
use bioskop_server::routes::create_routes;
use bioskop_server::state::AppState;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn timestamp(d: NaiveDate, h: u32) -> NaiveDateTime {
    d.and_time(time(h, 0))
}

fn opaque(msg: &str) -> StoreError {
    StoreError::Unknown(sqlx::Error::Protocol(msg.to_string()))
}

#[derive(Default)]
struct Tables {
    films: Vec<Film>,
    studios: Vec<Studio>,
    schedules: Vec<Schedule>,
    tickets: Vec<Ticket>,
    payments: Vec<Payment>,
    cashiers: Vec<(Cashier, String)>,
    film_stats: Vec<Value>,
    sales_rows: Vec<Value>,
    history: Vec<Value>,
    dashboard: Option<Value>,
    next_id: i32,
}

#[derive(Default)]
pub struct FakeStore {
    tables: Mutex<Tables>,
    calls: AtomicUsize,
    offline: bool,
}

impl FakeStore {
    /// Two films (one no longer showing), two studios, one schedule, one cashier.
    pub fn seeded() -> Self {
        let tables = Tables {
            films: vec![
                Film {
                    film_id: 1,
                    judul_film: "Laskar Pelangi".to_string(),
                    genre: "Drama".to_string(),
                    durasi: Some(125),
                    sutradara: Some("Riri Riza".to_string()),
                    sinopsis: None,
                    rating: Some("SU".to_string()),
                    tanggal_rilis: Some(date(2008, 9, 25)),
                    status_film: "Tayang".to_string(),
                },
                Film {
                    film_id: 2,
                    judul_film: "Gundala".to_string(),
                    genre: "Aksi".to_string(),
                    durasi: Some(123),
                    sutradara: Some("Joko Anwar".to_string()),
                    sinopsis: None,
                    rating: Some("R13+".to_string()),
                    tanggal_rilis: Some(date(2019, 8, 29)),
                    status_film: "Tayang".to_string(),
                },
                Film {
                    film_id: 3,
                    judul_film: "Ada Apa dengan Cinta?".to_string(),
                    genre: "Romansa".to_string(),
                    durasi: Some(112),
                    sutradara: Some("Rudi Soedjarwo".to_string()),
                    sinopsis: None,
                    rating: Some("R13+".to_string()),
                    tanggal_rilis: Some(date(2002, 2, 7)),
                    status_film: "Selesai".to_string(),
                },
            ],
            studios: vec![
                Studio {
                    studio_id: 1,
                    nama_studio: "Studio 1".to_string(),
                    kapasitas: 2,
                },
                Studio {
                    studio_id: 2,
                    nama_studio: "Studio 2".to_string(),
                    kapasitas: 100,
                },
            ],
            schedules: vec![Schedule {
                jadwal_id: 1,
                film_id: 1,
                studio_id: 1,
                tanggal: date(2024, 6, 1),
                waktu_mulai: time(13, 0),
                waktu_selesai: time(15, 10),
                harga_tiket: Decimal::new(45000, 0),
            }],
            cashiers: vec![(
                Cashier {
                    kasir_id: 1,
                    nama: "Sari".to_string(),
                    username: "sari".to_string(),
                    no_telepon: Some("0812000111".to_string()),
                    tanggal_bergabung: Some(date(2023, 1, 10)),
                    level_akses: "Kasir".to_string(),
                },
                "rahasia".to_string(),
            )],
            film_stats: vec![
                json!({"film_id": 2, "judul_film": "Gundala", "total_pendapatan": 300000}),
                json!({"film_id": 1, "judul_film": "Laskar Pelangi", "total_pendapatan": 900000}),
            ],
            sales_rows: vec![
                json!({"tanggal": "2024-06-02", "jumlah_tiket_terjual": 4, "total_pendapatan": 180000.50}),
                json!({"tanggal": "2024-06-01", "jumlah_tiket_terjual": 2, "total_pendapatan": "90000"}),
                json!({"tanggal": "2024-05-20", "jumlah_tiket_terjual": 1, "total_pendapatan": 45000}),
            ],
            history: (1..=60)
                .map(|i| json!({"kasir_id": if i % 2 == 0 { 1 } else { 2 }, "aksi": "Jual", "urutan": i}))
                .collect(),
            dashboard: Some(json!({"total_film_tayang": 2, "tiket_terjual_hari_ini": 6})),
            next_id: 100,
            ..Default::default()
        };

        FakeStore {
            tables: Mutex::new(tables),
            ..Default::default()
        }
    }

    /// Seeded store whose database ping fails.
    pub fn offline() -> Self {
        FakeStore {
            offline: true,
            ..Self::seeded()
        }
    }

    /// Number of store operations issued so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.tables.lock().unwrap()
    }
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn schedule_listing(&self, s: &Schedule, with_capacity: bool) -> Option<ScheduleListing> {
        let film = self.films.iter().find(|f| f.film_id == s.film_id)?;
        let studio = self.studios.iter().find(|st| st.studio_id == s.studio_id)?;
        Some(ScheduleListing {
            jadwal: s.clone(),
            judul_film: film.judul_film.clone(),
            genre: film.genre.clone(),
            durasi: film.durasi,
            rating: film.rating.clone(),
            nama_studio: studio.nama_studio.clone(),
            kapasitas: with_capacity.then_some(studio.kapasitas),
        })
    }

    fn ticket_listing(&self, t: &Ticket, with_cashier: bool) -> Option<TicketListing> {
        let s = self.schedules.iter().find(|s| s.jadwal_id == t.jadwal_id)?;
        let listing = self.schedule_listing(s, false)?;
        let kasir = self
            .cashiers
            .iter()
            .find(|(c, _)| c.kasir_id == t.kasir_id)
            .map(|(c, _)| c.nama.clone());
        Some(TicketListing {
            tiket: t.clone(),
            judul_film: listing.judul_film,
            tanggal: s.tanggal,
            waktu_mulai: s.waktu_mulai,
            nama_studio: listing.nama_studio,
            nama_kasir: if with_cashier { kasir } else { None },
        })
    }

    fn payment_listing(&self, p: &Payment) -> Option<PaymentListing> {
        let t = self.tickets.iter().find(|t| t.tiket_id == p.tiket_id)?;
        let (kasir, _) = self.cashiers.iter().find(|(c, _)| c.kasir_id == t.kasir_id)?;
        Some(PaymentListing {
            pembayaran: p.clone(),
            kode_tiket: t.kode_tiket.clone(),
            nomor_kursi: t.nomor_kursi.clone(),
            nama_kasir: kasir.nama.clone(),
        })
    }

    fn active_seats(&self, jadwal_id: i32) -> Vec<&Ticket> {
        self.tickets
            .iter()
            .filter(|t| t.jadwal_id == jadwal_id && t.status_tiket == "Aktif")
            .collect()
    }
}

#[async_trait]
impl FilmStore for FakeStore {
    async fn list_films(&self) -> StoreResult<Vec<Film>> {
        let mut films = self.hit().films.clone();
        films.sort_by(|a, b| b.tanggal_rilis.cmp(&a.tanggal_rilis));
        Ok(films)
    }

    async fn find_film(&self, film_id: i32) -> StoreResult<Option<Film>> {
        Ok(self.hit().films.iter().find(|f| f.film_id == film_id).cloned())
    }

    async fn film_statistics(&self) -> StoreResult<Vec<Value>> {
        let mut rows = self.hit().film_stats.clone();
        rows.sort_by_key(|r| std::cmp::Reverse(r["total_pendapatan"].as_i64().unwrap_or(0)));
        Ok(rows)
    }

    async fn top_selling_films(&self) -> StoreResult<Vec<Value>> {
        let mut rows = self.film_statistics().await?;
        rows.truncate(5);
        Ok(rows)
    }

    async fn create_film(&self, film: NewFilm) -> StoreResult<Option<Value>> {
        let mut tables = self.hit();
        let film = Film {
            film_id: tables.next_id(),
            judul_film: film.judul_film,
            genre: film.genre,
            durasi: film.durasi,
            sutradara: film.sutradara,
            sinopsis: film.sinopsis,
            rating: film.rating,
            tanggal_rilis: film.tanggal_rilis,
            status_film: film.status_film,
        };
        let row = serde_json::to_value(&film).ok();
        tables.films.push(film);
        Ok(row)
    }

    async fn update_film(&self, film_id: i32, changes: FilmChanges) -> StoreResult<()> {
        let mut tables = self.hit();
        let film = tables
            .films
            .iter_mut()
            .find(|f| f.film_id == film_id)
            .ok_or_else(|| opaque("Film tidak ditemukan"))?;
        if let Some(judul) = changes.judul_film {
            film.judul_film = judul;
        }
        if let Some(status) = changes.status_film {
            film.status_film = status;
        }
        Ok(())
    }

    async fn delete_film(&self, film_id: i32, _admin_id: i32) -> StoreResult<()> {
        let mut tables = self.hit();
        if tables.schedules.iter().any(|s| s.film_id == film_id) {
            return Err(opaque("Film masih memiliki jadwal aktif"));
        }
        tables.films.retain(|f| f.film_id != film_id);
        Ok(())
    }
}

#[async_trait]
impl ScheduleStore for FakeStore {
    async fn list_schedules(&self) -> StoreResult<Vec<ScheduleListing>> {
        let tables = self.hit();
        let mut rows: Vec<_> = tables
            .schedules
            .iter()
            .filter_map(|s| tables.schedule_listing(s, false))
            .collect();
        rows.sort_by_key(|r| (r.jadwal.tanggal, r.jadwal.waktu_mulai));
        Ok(rows)
    }

    async fn find_schedule(&self, jadwal_id: i32) -> StoreResult<Option<ScheduleListing>> {
        let tables = self.hit();
        Ok(tables
            .schedules
            .iter()
            .find(|s| s.jadwal_id == jadwal_id)
            .and_then(|s| tables.schedule_listing(s, true)))
    }

    async fn now_showing(&self, tanggal: Option<NaiveDate>) -> StoreResult<Vec<Value>> {
        let tables = self.hit();
        Ok(tables
            .schedules
            .iter()
            .filter(|s| tanggal.map_or(true, |d| s.tanggal == d))
            .filter_map(|s| tables.schedule_listing(s, false))
            .filter_map(|l| serde_json::to_value(l).ok())
            .collect())
    }

    async fn available_seats(&self, jadwal_id: Option<i32>) -> StoreResult<Vec<Value>> {
        let tables = self.hit();
        Ok(tables
            .schedules
            .iter()
            .filter(|s| jadwal_id.map_or(true, |id| s.jadwal_id == id))
            .filter_map(|s| {
                let studio = tables.studios.iter().find(|st| st.studio_id == s.studio_id)?;
                let taken = tables.active_seats(s.jadwal_id).len() as i32;
                Some(json!({"jadwal_id": s.jadwal_id, "kursi_tersedia": studio.kapasitas - taken}))
            })
            .collect())
    }

    async fn occupied_seats(&self, jadwal_id: i32) -> StoreResult<Vec<OccupiedSeat>> {
        let tables = self.hit();
        let mut seats: Vec<_> = tables
            .active_seats(jadwal_id)
            .into_iter()
            .map(|t| OccupiedSeat {
                nomor_kursi: t.nomor_kursi.clone(),
                status_tiket: t.status_tiket.clone(),
            })
            .collect();
        seats.sort_by(|a, b| a.nomor_kursi.cmp(&b.nomor_kursi));
        Ok(seats)
    }

    async fn create_schedule(&self, new: NewSchedule) -> StoreResult<Option<Value>> {
        let mut tables = self.hit();
        let film = tables
            .films
            .iter()
            .find(|f| f.film_id == new.film_id)
            .ok_or_else(|| opaque("Film tidak ditemukan"))?;
        if film.status_film != "Tayang" {
            return Err(StoreError::ValidationFailed(InvalidInput::FilmNotShowing));
        }
        let overlaps = tables.schedules.iter().any(|s| {
            s.studio_id == new.studio_id
                && s.tanggal == new.tanggal
                && s.waktu_mulai < new.waktu_selesai
                && new.waktu_mulai < s.waktu_selesai
        });
        if overlaps {
            return Err(StoreError::Conflict(ConflictReason::ScheduleOverlap));
        }

        let schedule = Schedule {
            jadwal_id: tables.next_id(),
            film_id: new.film_id,
            studio_id: new.studio_id,
            tanggal: new.tanggal,
            waktu_mulai: new.waktu_mulai,
            waktu_selesai: new.waktu_selesai,
            harga_tiket: new.harga_tiket,
        };
        let row = serde_json::to_value(&schedule).ok();
        tables.schedules.push(schedule);
        Ok(row)
    }

    async fn list_studios(&self) -> StoreResult<Vec<Studio>> {
        let mut studios = self.hit().studios.clone();
        studios.sort_by(|a, b| a.nama_studio.cmp(&b.nama_studio));
        Ok(studios)
    }
}

#[async_trait]
impl TicketStore for FakeStore {
    async fn list_tickets(&self) -> StoreResult<Vec<TicketListing>> {
        let tables = self.hit();
        let mut rows: Vec<_> = tables
            .tickets
            .iter()
            .filter_map(|t| tables.ticket_listing(t, true))
            .collect();
        rows.sort_by(|a, b| b.tiket.tanggal_pembelian.cmp(&a.tiket.tanggal_pembelian));
        Ok(rows)
    }

    async fn create_ticket(&self, new: NewTicket) -> StoreResult<Option<Value>> {
        let mut tables = self.hit();
        let schedule = tables
            .schedules
            .iter()
            .find(|s| s.jadwal_id == new.jadwal_id)
            .cloned()
            .ok_or_else(|| opaque("Jadwal tidak ditemukan"))?;
        let active = tables.active_seats(new.jadwal_id);
        if active.iter().any(|t| t.nomor_kursi == new.nomor_kursi) {
            return Err(StoreError::Conflict(ConflictReason::SeatOccupied));
        }
        let capacity = tables
            .studios
            .iter()
            .find(|s| s.studio_id == schedule.studio_id)
            .map_or(0, |s| s.kapasitas);
        if active.len() as i32 >= capacity {
            return Err(StoreError::Conflict(ConflictReason::StudioFull));
        }

        let tiket_id = tables.next_id();
        let purchased = timestamp(schedule.tanggal, 10) + chrono::Duration::minutes(tiket_id as i64);
        let ticket = Ticket {
            tiket_id,
            kode_tiket: format!("TKT-{tiket_id:04}"),
            jadwal_id: new.jadwal_id,
            kasir_id: new.kasir_id,
            nomor_kursi: new.nomor_kursi,
            status_tiket: "Aktif".to_string(),
            tanggal_pembelian: purchased,
        };
        let pembayaran_id = tables.next_id();
        tables.payments.push(Payment {
            pembayaran_id,
            tiket_id,
            metode_pembayaran: new.metode_pembayaran,
            jumlah_pembayaran: schedule.harga_tiket,
            status_pembayaran: "Lunas".to_string(),
            tanggal_pembayaran: purchased,
        });
        let row = serde_json::to_value(&ticket).ok();
        tables.tickets.push(ticket);
        Ok(row)
    }

    async fn cancel_ticket(&self, kode_tiket: &str, _kasir_id: i32) -> StoreResult<()> {
        let mut tables = self.hit();
        let ticket = tables
            .tickets
            .iter_mut()
            .find(|t| t.kode_tiket == kode_tiket && t.status_tiket == "Aktif")
            .ok_or_else(|| opaque("Tiket tidak ditemukan atau sudah dibatalkan"))?;
        ticket.status_tiket = "Batal".to_string();
        Ok(())
    }

    async fn find_ticket_by_code(&self, kode_tiket: &str) -> StoreResult<Option<Value>> {
        let tables = self.hit();
        Ok(tables
            .tickets
            .iter()
            .find(|t| t.kode_tiket == kode_tiket)
            .and_then(|t| serde_json::to_value(t).ok()))
    }

    async fn ticket_detail(&self, kode_tiket: &str) -> StoreResult<Option<Value>> {
        let tables = self.hit();
        Ok(tables
            .tickets
            .iter()
            .find(|t| t.kode_tiket == kode_tiket)
            .and_then(|t| tables.ticket_listing(t, true))
            .and_then(|l| serde_json::to_value(l).ok()))
    }

    async fn purge_cancelled_tickets(&self, _admin_id: i32) -> StoreResult<PurgeResult> {
        let mut tables = self.hit();
        let before = tables.tickets.len();
        tables.tickets.retain(|t| t.status_tiket != "Batal");
        Ok(PurgeResult {
            total_dihapus: (before - tables.tickets.len()) as i64,
        })
    }

    async fn tickets_by_cashier(&self, kasir_id: i32) -> StoreResult<Vec<TicketListing>> {
        let tables = self.hit();
        Ok(tables
            .tickets
            .iter()
            .filter(|t| t.kasir_id == kasir_id)
            .filter_map(|t| tables.ticket_listing(t, false))
            .collect())
    }
}

#[async_trait]
impl PaymentStore for FakeStore {
    async fn sales_report(&self, range: DateRange) -> StoreResult<Vec<Value>> {
        self.sales_report_view(Some(range)).await
    }

    async fn sales_report_view(&self, range: Option<DateRange>) -> StoreResult<Vec<Value>> {
        let tables = self.hit();
        Ok(tables
            .sales_rows
            .iter()
            .filter(|row| match (range, row["tanggal"].as_str()) {
                (Some(r), Some(d)) => {
                    let d: NaiveDate = d.parse().unwrap();
                    r.mulai <= d && d <= r.akhir
                }
                _ => true,
            })
            .cloned()
            .collect())
    }

    async fn admin_dashboard(&self) -> StoreResult<Option<Value>> {
        Ok(self.hit().dashboard.clone())
    }

    async fn list_payments(&self) -> StoreResult<Vec<PaymentListing>> {
        let tables = self.hit();
        Ok(tables
            .payments
            .iter()
            .rev()
            .filter_map(|p| tables.payment_listing(p))
            .collect())
    }

    async fn find_payment(&self, pembayaran_id: i32) -> StoreResult<Option<PaymentDetail>> {
        let tables = self.hit();
        let Some(p) = tables.payments.iter().find(|p| p.pembayaran_id == pembayaran_id) else {
            return Ok(None);
        };
        let listing = tables.payment_listing(p);
        let ticket = tables.tickets.iter().find(|t| t.tiket_id == p.tiket_id);
        Ok(listing.zip(ticket).and_then(|(l, t)| {
            let s = tables.schedules.iter().find(|s| s.jadwal_id == t.jadwal_id)?;
            let view = tables.schedule_listing(s, false)?;
            Some(PaymentDetail {
                pembayaran: l.pembayaran,
                kode_tiket: l.kode_tiket,
                nomor_kursi: l.nomor_kursi,
                jadwal_id: t.jadwal_id,
                nama_kasir: l.nama_kasir,
                judul_film: view.judul_film,
                tanggal: s.tanggal,
                nama_studio: view.nama_studio,
            })
        }))
    }

    async fn payments_by_method(&self, metode: &str) -> StoreResult<Vec<PaymentListing>> {
        let tables = self.hit();
        Ok(tables
            .payments
            .iter()
            .filter(|p| p.metode_pembayaran == metode)
            .filter_map(|p| tables.payment_listing(p))
            .collect())
    }

    async fn payment_statistics(
        &self,
        _range: Option<DateRange>,
    ) -> StoreResult<Vec<PaymentMethodStats>> {
        let tables = self.hit();
        let mut stats: Vec<PaymentMethodStats> = Vec::new();
        for p in tables.payments.iter().filter(|p| p.status_pembayaran == "Lunas") {
            match stats
                .iter_mut()
                .find(|s| s.metode_pembayaran == p.metode_pembayaran)
            {
                Some(s) => {
                    s.total_transaksi += 1;
                    s.total_nominal = Some(s.total_nominal.unwrap_or_default() + p.jumlah_pembayaran);
                }
                None => stats.push(PaymentMethodStats {
                    metode_pembayaran: p.metode_pembayaran.clone(),
                    total_transaksi: 1,
                    total_nominal: Some(p.jumlah_pembayaran),
                    rata_rata_nominal: None,
                }),
            }
        }
        for s in &mut stats {
            s.rata_rata_nominal = s
                .total_nominal
                .map(|total| total / Decimal::from(s.total_transaksi));
        }
        stats.sort_by(|a, b| b.total_nominal.cmp(&a.total_nominal));
        Ok(stats)
    }
}

#[async_trait]
impl CashierStore for FakeStore {
    async fn login(&self, credentials: &Credentials) -> StoreResult<Option<LoginOutcome>> {
        let tables = self.hit();
        let found = tables
            .cashiers
            .iter()
            .find(|(c, pw)| c.username == credentials.username && *pw == credentials.password);
        Ok(Some(match found {
            Some((c, _)) => LoginOutcome {
                status: "success".to_string(),
                message: None,
                kasir_id: Some(c.kasir_id),
                nama: Some(c.nama.clone()),
                level_akses: Some(c.level_akses.clone()),
            },
            None => LoginOutcome {
                status: "failed".to_string(),
                message: Some("Kredensial tidak valid".to_string()),
                ..Default::default()
            },
        }))
    }

    async fn list_cashiers(&self) -> StoreResult<Vec<Cashier>> {
        Ok(self.hit().cashiers.iter().map(|(c, _)| c.clone()).collect())
    }

    async fn transaction_history(&self, kasir_id: Option<i32>) -> StoreResult<Vec<Value>> {
        let tables = self.hit();
        Ok(tables
            .history
            .iter()
            .rev()
            .filter(|row| kasir_id.map_or(true, |id| row["kasir_id"] == id))
            .take(50)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl Store for FakeStore {
    async fn ping(&self) -> StoreResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.offline {
            Err(opaque("connection refused"))
        } else {
            Ok(())
        }
    }
}

pub struct TestApp {
    pub store: Arc<FakeStore>,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_store(FakeStore::seeded())
    }

    pub fn with_store(store: FakeStore) -> Self {
        Self::build(store, false)
    }

    /// Router with `EXPOSE_ERROR_DETAILS` switched on.
    pub fn exposing_details(store: FakeStore) -> Self {
        Self::build(store, true)
    }

    fn build(store: FakeStore, expose_error_details: bool) -> Self {
        let store = Arc::new(store);
        let router = create_routes(AppState {
            store: store.clone(),
            expose_error_details,
        });
        Self { store, router }
    }

    /// Sends a raw request and returns the response untouched.
    pub async fn send(&self, request: Request<Body>) -> axum::response::Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, body).await
    }
}
