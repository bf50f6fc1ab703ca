//! # Board API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;

use config::AppConfig;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = AppConfig::from_env();

    tracing::info!(
        "Starting board API server on {}:{}",
        config.host,
        config.port
    );

    // Build application state (loads the catalog from disk, once)
    let state = AppState::from_file(&config.data_file).await;

    let static_dir = config.static_dir.clone();
    if !static_dir.is_dir() {
        tracing::warn!(
            path = %static_dir.display(),
            "static directory not found; serving the API only"
        );
    }

    // Start HTTP server
    HttpServer::new(move || {
        let app = App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes);

        if static_dir.is_dir() {
            app.service(actix_files::Files::new("/", &static_dir).index_file("index.html"))
        } else {
            app
        }
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,api_server=debug,board_core=debug,board_infra=debug")
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
