//! jot-api - HTTP API server for jot

use axum::http::{header, HeaderValue, Method};
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use jot_api::{router, AppState};
use jot_db::Database;

/// Generates time-ordered UUIDv7 request correlation IDs.
///
/// UUIDv7 embeds a Unix timestamp, so IDs sort chronologically — useful
/// for log correlation and debugging production incidents.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// Parse allowed origins from a comma-separated environment variable.
///
/// Origins that fail header-value parsing are dropped with a warning.
fn parse_allowed_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with configurable output
    //
    // Environment variables:
    //   LOG_FORMAT  - "json" or "text" (default: "text")
    //   LOG_FILE    - path to log file (optional, enables file logging)
    //   RUST_LOG    - standard env filter (default: "jot_api=debug,tower_http=debug")
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let log_file = std::env::var("LOG_FILE").ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "jot_api=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(env_filter);

    // Optionally create a file appender with daily rotation
    let _file_guard = if let Some(ref path) = log_file {
        let file_dir = std::path::Path::new(path)
            .parent()
            .unwrap_or(std::path::Path::new("."));
        let file_name = std::path::Path::new(path)
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("jot-api.log");
        let file_appender = tracing_appender::rolling::daily(file_dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        if log_format == "json" {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking),
                )
                .init();
        } else {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
                .init();
        }
        Some(guard)
    } else if log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
        None
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
        None
    };

    info!(
        log_format = %log_format,
        log_file = log_file.as_deref().unwrap_or("(stdout)"),
        "Logging initialized"
    );

    // Get configuration from environment
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "postgres://localhost/jot".to_string());
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .unwrap_or(3000);

    // Connect to database
    info!("Connecting to database...");
    let db = Database::connect(&database_url).await?;
    info!("Database connected");

    // Run pending database migrations on startup
    info!("Running database migrations...");
    db.migrate().await?;
    info!("Database migrations complete");

    let state = AppState { db };

    // Build router with middleware
    let mut app = router(state)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        // Notes are short text; 1 MiB is generous.
        .layer(RequestBodyLimitLayer::new(1024 * 1024));

    // Strict origin whitelist: CORS is enabled only for origins listed in
    // CORS_ALLOWED_ORIGINS (comma-separated).
    if let Ok(raw) = std::env::var("CORS_ALLOWED_ORIGINS") {
        let origins = parse_allowed_origins(&raw);
        if !origins.is_empty() {
            info!(origins = origins.len(), "CORS enabled");
            app = app.layer(
                CorsLayer::new()
                    .allow_origin(origins)
                    .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                    .allow_headers([header::CONTENT_TYPE, header::HeaderName::from_static(
                        jot_api::identity::USER_ID_HEADER,
                    )]),
            );
        }
    }

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "jot-api listening");

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_allowed_origins_splits_and_trims() {
        let origins = parse_allowed_origins("https://a.example, https://b.example ,");
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[0], "https://a.example");
    }

    #[test]
    fn test_parse_allowed_origins_empty() {
        assert!(parse_allowed_origins("").is_empty());
        assert!(parse_allowed_origins(" , ").is_empty());
    }

    #[test]
    fn test_request_id_is_uuid() {
        let mut make = MakeRequestUuidV7;
        let req = axum::http::Request::new(());
        let id = make.make_request_id(&req).unwrap();
        let value = id.header_value().to_str().unwrap().to_string();
        assert!(Uuid::parse_str(&value).is_ok());
    }
}
