//! RAX Upload Server - Entry Point
//!
//! A small actix-web application that accepts browser uploads and serves
//! them back from a single storage root.

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use log::info;

use rax_upload_server::config::ServerConfig;
use rax_upload_server::handlers::{self, AppState};
use rax_upload_server::storage::FileStorage;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = ServerConfig::load()
        .unwrap_or_else(|e| panic!("Failed to load configuration: {e}"));

    let storage = FileStorage::new(config.storage_root_path())
        .unwrap_or_else(|e| panic!("Invalid storage root: {e}"));

    // Startup hook: wipe and recreate the root unless the configuration asks
    // to keep uploads across restarts.
    if config.wipe_on_startup {
        storage
            .delete_all()
            .unwrap_or_else(|e| panic!("Failed to clear storage root: {e}"));
    }
    storage
        .initialize()
        .unwrap_or_else(|e| panic!("Failed to initialize storage root: {e}"));

    let socket = config.http_socket();
    info!("Launching upload server on {}", socket);

    let state = web::Data::new(AppState::new(storage, &config));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(handlers::config_routes)
    })
    .bind(socket)?
    .run()
    .await
}
