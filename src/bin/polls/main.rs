use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlers, Logger};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use env_logger::Env;
use polls::app_config::AppConfig;
use polls::poll::{DbStore, PollStore};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_lib_mods();

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config file, using defaults: {}", e);
        AppConfig::default()
    });

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| config.database.url.clone());
    let db = polls::db::connect(&database_url, config.database.max_connections)
        .await
        .expect("Failed to connect to the database.");

    if config.database.create_schema {
        polls::db::create_schema(&db)
            .await
            .expect("Failed to create poll tables.");
    }

    let store: Arc<dyn PollStore> = Arc::new(DbStore::new(db));
    let bind = config.bind_address();
    log::info!("{} listening on {}:{}", config.site.name, bind.0, bind.1);

    HttpServer::new(move || {
        // Middleware is listed in reverse execution order.
        App::new()
            .app_data(Data::new(store.clone()))
            .app_data(Data::new(config.clone()))
            .wrap(
                ErrorHandlers::new()
                    .handler(StatusCode::NOT_FOUND, polls::web::error::render_404),
            )
            .wrap(Logger::new("%a %r %s %Dms"))
            .configure(polls::web::configure)
    })
    .bind(bind)?
    .run()
    .await
}

/// Initialize third party crates we rely on but don't have control over.
pub fn init_lib_mods() {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}
