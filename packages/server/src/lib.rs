#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the Klima Insights dashboard.
//!
//! Loads the temperature, biodiversity, and disaster datasets once at
//! startup and answers one JSON request per chart update. The dataset
//! snapshot is immutable and shared by every worker.

mod handlers;
pub mod settings;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, error, middleware, web};
use klima_dataset::Dataset;
use klima_server_models::ApiError;

pub use settings::Settings;

/// Shared application state.
pub struct AppState {
    /// Loaded datasets, with the region broadcast already applied.
    pub dataset: Arc<Dataset>,
    /// Settings the server was started with.
    pub settings: Settings,
}

/// Registers the `/api` routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        log::debug!("Rejected query string: {message}");
        error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ApiError { error: message }),
        )
        .into()
    }))
    .service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/options", web::get().to(handlers::options))
            .route("/temperature/bar", web::get().to(handlers::temperature_bar))
            .route("/temperature/map", web::get().to(handlers::temperature_map))
            .route("/disaster/map", web::get().to(handlers::disaster_map))
            .route("/disaster/bar", web::get().to(handlers::disaster_bar))
            .route("/disaster/line", web::get().to(handlers::disaster_line))
            .route(
                "/biodiversity/map",
                web::get().to(handlers::biodiversity_map),
            ),
    );
}

/// Starts the Klima Insights API server.
///
/// Reads [`Settings`] from the environment, loads every dataset, and only
/// then binds the HTTP server. This is a regular async function; the
/// caller provides the runtime (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Error` if a dataset fails to load, or if the
/// HTTP server fails to bind or encounters a runtime error.
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let settings = Settings::from_env();

    let dataset = Dataset::load(&settings.data_dir).map_err(|e| {
        log::error!("Failed to load datasets: {e}");
        std::io::Error::other(e.to_string())
    })?;

    let bind_addr = settings.bind_addr.clone();
    let port = settings.port;

    let state = web::Data::new(AppState {
        dataset: Arc::new(dataset),
        settings,
    });

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
