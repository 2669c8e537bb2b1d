//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every storefront page is rendered on the server: a handler reads from the
//! backend catalog, then renders a page component to HTML. Static assets
//! (stylesheet, logo) are served from `STATIC_DIR` under `/static`.

pub mod contact;
pub mod pages;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Storefront routes plus static assets.
pub fn app(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(pages::home))
        .route("/category/{category}", get(pages::category))
        .route("/category/{category}/{subcategory}", get(pages::subcategory))
        .route("/product/{id}", get(pages::product))
        .route("/contact", get(contact::show).post(contact::submit))
        .route("/healthz", get(healthz))
        .nest_service("/static", static_dir)
        .fallback(pages::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Wrap a rendered document in a response with the given status.
fn html_response(status: StatusCode, html: String) -> Response {
    (status, Html(html)).into_response()
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
