//! Backend HTTP client.
//!
//! Thin `reqwest` wrapper over the catalog endpoints. Status handling and
//! body decoding live in pure functions (`parse_body`, `parse_optional_body`)
//! for testability. Every call is a fresh, uncached read with no retries.

use std::time::Duration;

use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::CatalogApi;
use super::types::{CatalogError, Product, ProductPage};
use crate::config::BackendTimeouts;

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpCatalog {
    http: reqwest::Client,
    base: Url,
}

impl HttpCatalog {
    /// Build a client rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot carry path segments or the HTTP
    /// client fails to build.
    pub fn new(base_url: &str, timeouts: BackendTimeouts) -> Result<Self, CatalogError> {
        let base = Url::parse(base_url).map_err(|e| CatalogError::HttpClientBuild(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(CatalogError::HttpClientBuild(format!("backend URL cannot be a base: {base_url}")));
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| CatalogError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base })
    }

    /// Join percent-encoded path segments onto the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get(&self, url: Url) -> Result<(u16, String), CatalogError> {
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        tracing::debug!(%url, status, bytes = text.len(), "backend response");
        Ok((status, text))
    }
}

#[async_trait::async_trait]
impl CatalogApi for HttpCatalog {
    async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        let (status, text) = self.get(self.endpoint(&["categories"])).await?;
        parse_body::<CategoriesBody>(status, &text).map(|body| body.categories)
    }

    async fn products_in_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        let (status, text) = self
            .get(self.endpoint(&["categories", category, "products"]))
            .await?;
        parse_body::<ProductsBody>(status, &text).map(|body| body.products)
    }

    async fn subcategories(&self, category: &str) -> Result<Vec<String>, CatalogError> {
        let (status, text) = self
            .get(self.endpoint(&["categories", category, "subcategories"]))
            .await?;
        parse_body::<SubcategoriesBody>(status, &text).map(|body| body.subcategories)
    }

    async fn products_in_subcategory(
        &self,
        category: &str,
        subcategory: &str,
    ) -> Result<Vec<Product>, CatalogError> {
        let (status, text) = self
            .get(self.endpoint(&["categories", category, subcategory, "products"]))
            .await?;
        parse_body::<ProductsBody>(status, &text).map(|body| body.products)
    }

    async fn product_page(&self, page: u32, size: u32) -> Result<ProductPage, CatalogError> {
        let mut url = self.endpoint(&["products"]);
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("size", &size.to_string());
        let (status, text) = self.get(url).await?;
        parse_body(status, &text)
    }

    async fn product(&self, id: &str) -> Result<Option<Product>, CatalogError> {
        let (status, text) = self.get(self.endpoint(&["products", id])).await?;
        parse_optional_body(status, &text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Deserialize)]
struct CategoriesBody {
    categories: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SubcategoriesBody {
    subcategories: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ProductsBody {
    products: Vec<Product>,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_body<T: DeserializeOwned>(status: u16, text: &str) -> Result<T, CatalogError> {
    if !StatusCode::from_u16(status).is_ok_and(|s| s.is_success()) {
        return Err(CatalogError::Status { status });
    }
    serde_json::from_str(text).map_err(|e| CatalogError::Decode(e.to_string()))
}

/// Like [`parse_body`], but a 404 is an absent result rather than an error.
fn parse_optional_body<T: DeserializeOwned>(status: u16, text: &str) -> Result<Option<T>, CatalogError> {
    if status == StatusCode::NOT_FOUND.as_u16() {
        return Ok(None);
    }
    parse_body(status, text).map(Some)
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
