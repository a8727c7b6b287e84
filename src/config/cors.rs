use axum::http::{header, HeaderName, HeaderValue, Method};
use std::env;
use tower_http::cors::{AllowOrigin, CorsLayer};

const PREFLIGHT_MAX_AGE_SECS: u64 = 86400;

/// Open cross-origin policy for the cashier and admin front-ends.
///
/// Any origin is allowed unless `CORS_ALLOWED_ORIGINS` names a list.
/// Preflight `OPTIONS` requests are answered by the layer itself.
pub fn create_cors_layer() -> CorsLayer {
    cors_layer_for(env::var("CORS_ALLOWED_ORIGINS").ok())
}

fn cors_layer_for(origins: Option<String>) -> CorsLayer {
    let allowed = allowed_origins(origins.as_deref());
    let allow_origin = if allowed.is_empty() {
        AllowOrigin::any()
    } else {
        tracing::info!(count = allowed.len(), "CORS restricted to configured origins");
        AllowOrigin::list(allowed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
        .max_age(std::time::Duration::from_secs(PREFLIGHT_MAX_AGE_SECS))
}

/// Comma-separated allow-list; blank or unparseable entries are skipped.
fn allowed_origins(raw: Option<&str>) -> Vec<HeaderValue> {
    raw.into_iter()
        .flat_map(|list| list.split(','))
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect()
}
