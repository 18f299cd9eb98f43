use std::sync::{Arc, Mutex};

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use roadroam::catalog::Catalog;
use roadroam::config::AppConfig;
use roadroam::db;
use roadroam::handlers;
use roadroam::services::email::resend::ResendEmailProvider;
use roadroam::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    let catalog = Catalog::from_env();

    let conn = db::init_db(&config.database_url)?;

    if config.resend_api_key.is_empty() {
        tracing::warn!("RESEND_API_KEY not set; email notifications will fail until configured");
    }
    let email = ResendEmailProvider::new(config.resend_api_key.clone(), config.email_from.clone());

    let state = Arc::new(AppState {
        db: Arc::new(Mutex::new(conn)),
        config: config.clone(),
        catalog,
        email: Box::new(email),
    });

    // The booking form and admin dashboard are served from other origins.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/bookings", post(handlers::bookings::create_booking))
        .route("/api/admin/bookings", get(handlers::admin::list_bookings))
        .route(
            "/api/admin/bookings/:id",
            get(handlers::admin::get_booking)
                .patch(handlers::admin::update_booking)
                .delete(handlers::admin::delete_booking),
        )
        .route("/api/admin/export", get(handlers::admin::export_bookings))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
