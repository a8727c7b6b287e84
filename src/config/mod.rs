use std::env;
use std::str::FromStr;

pub mod cors;

pub use cors::create_cors_layer;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_URL: &str = "postgres://localhost/bioskop";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    /// Echo raw data-layer error text in the `error` field of 500 responses.
    pub expose_error_details: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: parse_or("PORT", env::var("PORT").ok(), DEFAULT_PORT),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            max_connections: parse_or(
                "DB_MAX_CONNECTIONS",
                env::var("DB_MAX_CONNECTIONS").ok(),
                DEFAULT_MAX_CONNECTIONS,
            ),
            expose_error_details: parse_flag(env::var("EXPOSE_ERROR_DETAILS").ok()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            expose_error_details: false,
        }
    }
}

fn parse_or<T>(name: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Config: invalid {} '{}', using {}", name, value, default);
            default
        }),
        None => default,
    }
}

fn parse_flag(raw: Option<String>) -> bool {
    raw.map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}
