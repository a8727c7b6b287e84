use axum::Router;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use bioskop_server::config::Config;
use bioskop_server::db::PgStore;
use bioskop_server::routes::create_routes;
use bioskop_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bioskop_server=debug,tower_http=info")),
        )
        .init();

    let config = Config::from_env();

    let store = PgStore::connect_lazy(&config)?;
    if let Err(e) = store.check_connection().await {
        tracing::error!(error = %e, "Database connection failed");
        std::process::exit(1);
    }

    tracing::info!("Database connected successfully");

    let pool = store.pool().clone();
    let app: Router = create_routes(
        AppState::new(store).with_error_details(config.expose_error_details),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server running at http://{}", addr);

    axum::serve(listener, app).await?;

    pool.close().await;
    Ok(())
}
