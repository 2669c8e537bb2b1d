//! Catalog page handlers: home, category, subcategory, product.
//!
//! Each handler issues its backend reads one at a time, once per request,
//! then renders. Backend failures are logged and rendered as error pages
//! (502); a missing product renders the not-found page (404).
//!
//! Every request builds its own `PageState`, so a page response always
//! answers the newest request of that state and is applied as is.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use leptos::prelude::*;
use serde::Deserialize;

use super::html_response;
use crate::listing::{PageState, group_by_subcategory, parse_page_param};
use crate::state::AppState;
use crate::views::category::CategoryPage;
use crate::views::home::{HomeListing, HomePage};
use crate::views::product::ProductDetail;
use crate::views::status::{FetchFailed, PageNotFound, ProductNotFound};
use crate::views::{page_title, render_document};

#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    pub page: Option<String>,
}

/// `GET /?page=N` — categories plus one page of products grouped by subcategory.
pub async fn home(State(state): State<AppState>, Query(query): Query<HomeQuery>) -> Response {
    let mut page_state = PageState::new(state.config.page_size);
    let request = page_state.request(parse_page_param(query.page.as_deref()));

    let categories = state
        .catalog
        .categories()
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "category fetch failed"))
        .ok();
    let listing = match state.catalog.product_page(request.page, request.size).await {
        Ok(page) => {
            tracing::debug!(
                page = page.page,
                size = page.size,
                total = page.total,
                total_pages = page.total_pages,
                "product page fetched"
            );
            page_state.apply(&request, &page);
            Some(HomeListing { groups: group_by_subcategory(page.data), page: page_state })
        }
        Err(e) => {
            tracing::warn!(error = %e, page = request.page, "product page fetch failed");
            None
        }
    };

    let status = if listing.is_some() { StatusCode::OK } else { StatusCode::BAD_GATEWAY };
    let image_base = state.config.image_base_url.clone();
    let html = render_document(page_title(""), move || {
        view! { <HomePage categories=categories listing=listing image_base=image_base/> }.into_any()
    });
    html_response(status, html)
}

/// `GET /category/{category}` — every product in a category.
pub async fn category(State(state): State<AppState>, Path(category): Path<String>) -> Response {
    render_category(&state, category, None).await
}

/// `GET /category/{category}/{subcategory}` — one subcategory of a category.
pub async fn subcategory(
    State(state): State<AppState>,
    Path((category, subcategory)): Path<(String, String)>,
) -> Response {
    render_category(&state, category, Some(subcategory)).await
}

async fn render_category(state: &AppState, category: String, subcategory: Option<String>) -> Response {
    let products = match &subcategory {
        Some(sub) => state.catalog.products_in_subcategory(&category, sub).await,
        None => state.catalog.products_in_category(&category).await,
    };
    let products = match products {
        Ok(products) => products,
        Err(e) => {
            tracing::warn!(error = %e, %category, ?subcategory, "category products fetch failed");
            let html = render_document(page_title(&category), || {
                view! { <FetchFailed message="Failed to fetch products."/> }.into_any()
            });
            return html_response(StatusCode::BAD_GATEWAY, html);
        }
    };
    let subcategories = state.catalog.subcategories(&category).await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, %category, "subcategory fetch failed");
        Vec::new()
    });

    let title = page_title(subcategory.as_deref().unwrap_or(&category));
    let image_base = state.config.image_base_url.clone();
    let html = render_document(title, move || {
        view! {
            <CategoryPage
                category=category
                subcategory=subcategory
                subcategories=subcategories
                products=products
                image_base=image_base
            />
        }
        .into_any()
    });
    html_response(StatusCode::OK, html)
}

/// `GET /product/{id}` — product detail, not-found, or failure page.
pub async fn product(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.catalog.product(&id).await {
        Ok(Some(product)) => {
            let title = page_title(&product.title);
            let image_base = state.config.image_base_url.clone();
            let html = render_document(title, move || {
                view! { <ProductDetail product=product image_base=image_base/> }.into_any()
            });
            html_response(StatusCode::OK, html)
        }
        Ok(None) => {
            tracing::info!(%id, "product not found");
            let html = render_document(page_title("Product Not Found"), || view! { <ProductNotFound/> }.into_any());
            html_response(StatusCode::NOT_FOUND, html)
        }
        Err(e) => {
            tracing::warn!(error = %e, %id, "product fetch failed");
            let html = render_document(page_title("Error"), || {
                view! { <FetchFailed message="Failed to fetch product. Please try again later."/> }.into_any()
            });
            html_response(StatusCode::BAD_GATEWAY, html)
        }
    }
}

/// Fallback for unknown routes.
pub async fn not_found() -> Response {
    let html = render_document(page_title("Page Not Found"), || view! { <PageNotFound/> }.into_any());
    html_response(StatusCode::NOT_FOUND, html)
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
