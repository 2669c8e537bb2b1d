mod catalog;
mod config;
mod listing;
mod routes;
mod specs;
mod state;
mod views;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    // A missing .env is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::StorefrontConfig::from_env().expect("invalid configuration");
    let catalog =
        catalog::HttpCatalog::new(&config.backend_url, config.timeouts).expect("backend client init failed");
    tracing::info!(
        backend = %config.backend_url,
        images = %config.image_base_url,
        page_size = config.page_size,
        "catalog client initialized"
    );

    let port = config.port;
    let state = state::AppState::new(Arc::new(catalog), config);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "storefront listening");
    axum::serve(listener, app).await.expect("server failed");
}
