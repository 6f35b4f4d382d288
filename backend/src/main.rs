use actix_web::{middleware, web, App, HttpServer};
use catalog_backend::catalog::SpecificationService;
use catalog_backend::config::Config;
use catalog_backend::error::{json_config, route_not_found};
use catalog_backend::services;
use catalog_backend::store::SqliteSpecificationStore;
use env_logger::Env;
use log::info;
use std::io;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::load().map_err(io::Error::other)?;

    let store = SqliteSpecificationStore::open(&config.database).map_err(io::Error::other)?;
    info!("Specification store opened at {}", config.database);

    let service = web::Data::new(SpecificationService::new(Arc::new(store)));
    let json_limit = config.json_limit;

    info!("Server running at {}", config.url());

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Logger::default())
            .app_data(json_config(json_limit))
            .app_data(service.clone())
            .service(services::specifications::configure_routes())
            .default_service(web::route().to(route_not_found))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
