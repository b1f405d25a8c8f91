use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use duo_finder::config::Settings;
use duo_finder::core::CommonMatchFinder;
use duo_finder::routes::{self, matches::AppState};
use duo_finder::services::RiotClient;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    // Initialize logging, LOG_LEVEL / LOG_FORMAT take precedence over the config file
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }

    info!("Starting Duo Finder service...");

    if settings.riot.api_key.is_empty() {
        warn!("RIOT_API_KEY is not set, every lookup will fail until it is configured");
    }

    let riot = RiotClient::new(&settings.riot).map_err(|e| {
        error!("Failed to create Riot API client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    let finder = CommonMatchFinder::from_settings(&settings.matching);

    info!(
        "Finder initialized: {} page(s) of {} match ids per player, default region {}",
        finder.plan().pages,
        finder.plan().page_size,
        settings.matching.default_region
    );

    // Build application state
    let app_state = AppState {
        riot: Arc::new(riot),
        finder,
        default_region: settings.matching.default_region,
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
            .configure(routes::configure_extractors)
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
