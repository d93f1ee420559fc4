//! Memo Service — standalone binary serving a JSON-file backed memo API.
//!
//! Default: http://0.0.0.0:8080/memos

mod config;
mod persist;
mod routes;
mod store;

use config::Config;
use routes::AppState;
use std::sync::Arc;
use store::MemoStore;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let store = MemoStore::open(&config.data_path);
    log::info!("Loaded {} memos from {}", store.len(), store.path().display());

    let state = Arc::new(AppState { store });
    let app = routes::router(state);

    let addr = config.bind_addr();
    log::info!("Endpoints:");
    log::info!("  GET    /memos     - list all memos");
    log::info!("  POST   /memos     - create a memo");
    log::info!("  GET    /memos/:id - fetch one memo");
    log::info!("  PUT    /memos/:id - replace a memo");
    log::info!("  DELETE /memos/:id - delete a memo");
    log::info!("Memo Service listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app).await.expect("Server error");
}
