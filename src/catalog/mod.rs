//! Catalog — typed access to the backend product API.
//!
//! DESIGN
//! ======
//! The backend is an external service. Handlers only see the [`CatalogApi`]
//! trait, so tests swap in an in-memory catalog while the server runs
//! [`HttpCatalog`] against the real API.

pub mod http;
pub mod types;

pub use http::HttpCatalog;
pub use types::{CatalogError, Product, ProductPage};

// =============================================================================
// CATALOG TRAIT
// =============================================================================

/// Read operations offered by the backend. Enables mocking in tests.
#[async_trait::async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET /categories` — every category name.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the request fails or the body is malformed.
    async fn categories(&self) -> Result<Vec<String>, CatalogError>;

    /// `GET /categories/{category}/products` — every product in one category.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the request fails or the body is malformed.
    async fn products_in_category(&self, category: &str) -> Result<Vec<Product>, CatalogError>;

    /// `GET /categories/{category}/subcategories` — subcategory names in one category.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the request fails or the body is malformed.
    async fn subcategories(&self, category: &str) -> Result<Vec<String>, CatalogError>;

    /// `GET /categories/{category}/{subcategory}/products`.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the request fails or the body is malformed.
    async fn products_in_subcategory(&self, category: &str, subcategory: &str)
    -> Result<Vec<Product>, CatalogError>;

    /// `GET /products?page={page}&size={size}` — one page of product summaries.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the request fails or the body is malformed.
    async fn product_page(&self, page: u32, size: u32) -> Result<ProductPage, CatalogError>;

    /// `GET /products/{id}` — one full product, `None` when the backend answers 404.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] for any other failure.
    async fn product(&self, id: &str) -> Result<Option<Product>, CatalogError>;
}
