use crate::config::Config;
use crate::services::CatalogTransport;
use actix_rt::signal::unix;
use actix_web::web::Data;
use actix_web::{web, App, HttpServer};
use futures_lite::FutureExt;
use search_engine::SearchEngine;
use std::sync::Arc;
use std::time::Duration;
use store_catalog::QueryBuilder;
use tracing::{error, info};

mod config;
mod http;
mod services;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    let mut terminate = unix::signal(unix::SignalKind::terminate())?;
    let mut interrupt = unix::signal(unix::SignalKind::interrupt())?;

    dotenv::dotenv().ok();
    env_logger::init();

    let config = Arc::from(Config::from_env());

    info!(version = VERSION, "Starting application...");

    let catalog_transport =
        CatalogTransport::create(Duration::from_secs(config.request_timeout))
            .expect("Unable to initialize catalog HTTP client");
    let search_engine = Arc::new(SearchEngine::new(
        QueryBuilder::new(config.catalog_endpoint.clone()),
        Arc::new(catalog_transport),
    ));

    let shutdown_timeout = config.shutdown_timeout;
    let bind_address = config.bind_address.clone();

    let server = HttpServer::new({
        let search_engine = Arc::clone(&search_engine);

        move || {
            App::new()
                .app_data(Data::new(Arc::clone(&search_engine)))
                .service(web::resource("/search").route(web::get().to(http::search)))
                .service(web::resource("/state").route(web::get().to(http::get_search_state)))
                .service(web::resource("/health").route(web::get().to(http::readiness_check)))
        }
    })
    .shutdown_timeout(shutdown_timeout)
    .bind(bind_address)?
    .run();

    let server_handle = server.handle();

    actix_rt::spawn({
        async move {
            if let Err(error) = server.await {
                error!(?error, "Error on http server");
            }
        }
    });

    info!("Application started");

    interrupt.recv().or(terminate.recv()).await;

    info!("Received shutdown signal. Shutting down gracefully...");

    search_engine.cancel();
    server_handle.stop(true).await;

    Ok(())
}
