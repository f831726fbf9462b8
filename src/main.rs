use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use venue_chat::config::Settings;
use venue_chat::core::{ChatEngine, Matcher, NarrativeGenerator};
use venue_chat::routes::{self, chat::AppState, handle_json_payload_error};
use venue_chat::services::VenueCatalog;

fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Configuration comes first so logging can honour it
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting venue chat service...");

    // The catalog is loaded once; any failure aborts startup
    let catalog = VenueCatalog::load(&settings.catalog.path).map_err(|e| {
        error!("Failed to load venue catalog from {}: {}", settings.catalog.path, e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?;

    info!("Venue catalog loaded ({} venues)", catalog.len());

    let engine = ChatEngine::new(
        Matcher::new(settings.matching.max_results),
        NarrativeGenerator::new(settings.narrative.high_rating_threshold),
    );

    info!(
        "Chat engine initialized (max results: {}, high rating threshold: {})",
        settings.matching.max_results,
        settings.narrative.high_rating_threshold
    );

    // Build application state
    let app_state = AppState {
        catalog: Arc::new(catalog),
        engine,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
