use axum::http::StatusCode;
use axum::middleware::{map_response, map_response_with_state};
use axum::response::Response;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::config::create_cors_layer;
use crate::handlers::{self, cashier, film, payment, schedule, ticket};
use crate::state::AppState;
use crate::utils::error::expose_error_details;

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .nest("/api", api_routes())
        .fallback(handlers::not_found)
        .layer(map_response(method_mismatch_as_not_found))
        .layer(CatchPanicLayer::custom(handlers::handle_panic))
        .layer(map_response_with_state(state.clone(), expose_error_details))
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(cashier_routes())
        .merge(film_routes())
        .merge(schedule_routes())
        .merge(ticket_routes())
        .merge(payment_routes())
}

fn cashier_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(cashier::login))
        .route("/kasir", get(cashier::list_cashiers))
        .route("/kasir/:kasir_id/riwayat", get(cashier::cashier_history))
        .route("/riwayat", get(cashier::transaction_history))
}

fn film_routes() -> Router<AppState> {
    Router::new()
        .route("/films", get(film::list_films).post(film::create_film))
        .route(
            "/films/:id",
            get(film::get_film)
                .put(film::update_film)
                .delete(film::delete_film),
        )
        .route("/films/statistik/all", get(film::film_statistics))
        .route("/films/top/terlaris", get(film::top_selling_films))
}

fn schedule_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/jadwal",
            get(schedule::list_schedules).post(schedule::create_schedule),
        )
        .route("/jadwal/:id", get(schedule::get_schedule))
        .route("/jadwal/tayang/list", get(schedule::now_showing))
        .route("/jadwal/kursi/tersedia", get(schedule::available_seats))
        .route("/jadwal/:id/kursi/terisi", get(schedule::occupied_seats))
        .route("/studio", get(schedule::list_studios))
}

fn ticket_routes() -> Router<AppState> {
    Router::new()
        .route("/tiket", get(ticket::list_tickets).post(ticket::create_ticket))
        .route("/tiket/kode/:kode_tiket", get(ticket::get_ticket_by_code))
        .route("/tiket/detail/:kode_tiket", get(ticket::get_ticket_detail))
        .route("/tiket/kasir/:kasir_id", get(ticket::tickets_by_cashier))
        .route("/tiket/:kode_tiket/batal", put(ticket::cancel_ticket))
        .route("/tiket/batal/hapus", delete(ticket::purge_cancelled_tickets))
}

fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard/admin", get(payment::admin_dashboard))
        .route("/laporan/penjualan", get(payment::sales_report))
        .route("/laporan/penjualan/view", get(payment::sales_report_view))
        .route("/pembayaran", get(payment::list_payments))
        .route("/pembayaran/:id", get(payment::get_payment))
        .route("/pembayaran/metode/:metode", get(payment::payments_by_method))
        .route(
            "/pembayaran/statistik/metode",
            get(payment::payment_statistics),
        )
}

/// A known path hit with the wrong method gets the same 404 as an unknown path.
async fn method_mismatch_as_not_found(response: Response) -> Response {
    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        handlers::not_found().await
    } else {
        response
    }
}
