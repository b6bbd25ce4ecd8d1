//! Raiatea Rental Server
//!
//! REST API server for vehicle and bungalow rental management.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use raiatea_rental_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("raiatea_rental_server={},tower_http=debug", config.logging.level).into()
    });

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting Raiatea Rental Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.auth.clone(), config.email.clone());

    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    let app = create_router(state);

    let addr = SocketAddr::new(server_host.parse().expect("Invalid host address"), server_port);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authentication
        .route("/auth/login", post(api::auth::login))
        .route("/auth/me", get(api::auth::me))
        // Clients
        .route("/clients", get(api::clients::list_clients))
        .route("/clients", post(api::clients::create_client))
        .route("/clients/:id", get(api::clients::get_client))
        .route("/clients/:id", put(api::clients::update_client))
        .route("/clients/:id", delete(api::clients::delete_client))
        // Vehicles
        .route("/vehicles", get(api::vehicles::list_vehicles))
        .route("/vehicles", post(api::vehicles::create_vehicle))
        .route("/vehicles/:id", get(api::vehicles::get_vehicle))
        .route("/vehicles/:id", put(api::vehicles::update_vehicle))
        .route("/vehicles/:id", delete(api::vehicles::delete_vehicle))
        // Bungalows
        .route("/bungalows", get(api::bungalows::list_bungalows))
        .route("/bungalows", post(api::bungalows::create_bungalow))
        .route("/bungalows/:id", get(api::bungalows::get_bungalow))
        .route("/bungalows/:id", put(api::bungalows::update_bungalow))
        .route("/bungalows/:id", delete(api::bungalows::delete_bungalow))
        // Reservations
        .route("/reservations", get(api::reservations::list_reservations))
        .route("/reservations", post(api::reservations::create_reservation))
        .route("/reservations/:id", get(api::reservations::get_reservation))
        .route("/reservations/:id", put(api::reservations::update_reservation))
        .route("/reservations/:id", delete(api::reservations::delete_reservation))
        .route("/reservations/:id/status", put(api::reservations::update_reservation_status))
        // Documents
        .route("/documents", get(api::documents::list_documents))
        .route("/documents", post(api::documents::compose_document))
        .route("/documents/:id", get(api::documents::get_document))
        .route("/documents/:id/status", put(api::documents::update_document_status))
        .route("/documents/:id/render", get(api::documents::render_document_html))
        .route("/documents/:id/send", post(api::documents::send_document))
        .route("/documents/:id/payments", get(api::documents::list_payments))
        .route("/documents/:id/payments", post(api::documents::record_payment))
        // Statistics
        .route("/stats", get(api::stats::get_stats))
        // Settings
        .route("/settings", get(api::settings::get_settings))
        .route("/settings", put(api::settings::update_settings))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
