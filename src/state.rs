//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the backend catalog client and the parsed configuration. Nothing
//! mutable lives here: page state belongs to each request.

use std::sync::Arc;

use crate::catalog::CatalogApi;
use crate::config::StorefrontConfig;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogApi>,
    pub config: Arc<StorefrontConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogApi>, config: StorefrontConfig) -> Self {
        Self { catalog, config: Arc::new(config) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::path::PathBuf;
    use std::sync::Mutex;

    use super::*;
    use crate::catalog::{CatalogError, Product, ProductPage};
    use crate::config::BackendTimeouts;

    /// In-memory catalog that records every read it serves.
    #[derive(Default)]
    pub struct MockCatalog {
        pub categories: Vec<String>,
        pub products: Vec<Product>,
        pub subcategories: Vec<String>,
        pub total_pages: u32,
        /// When set, every read fails with this status.
        pub fail_status: Option<u16>,
        pub calls: Mutex<Vec<String>>,
    }

    impl MockCatalog {
        fn record(&self, call: String) -> Result<(), CatalogError> {
            self.calls.lock().unwrap().push(call);
            match self.fail_status {
                Some(status) => Err(CatalogError::Status { status }),
                None => Ok(()),
            }
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl CatalogApi for MockCatalog {
        async fn categories(&self) -> Result<Vec<String>, CatalogError> {
            self.record("categories".into())?;
            Ok(self.categories.clone())
        }

        async fn products_in_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
            self.record(format!("products_in_category:{category}"))?;
            Ok(self.products.iter().filter(|p| p.category == category).cloned().collect())
        }

        async fn subcategories(&self, category: &str) -> Result<Vec<String>, CatalogError> {
            self.record(format!("subcategories:{category}"))?;
            Ok(self.subcategories.clone())
        }

        async fn products_in_subcategory(
            &self,
            category: &str,
            subcategory: &str,
        ) -> Result<Vec<Product>, CatalogError> {
            self.record(format!("products_in_subcategory:{category}/{subcategory}"))?;
            Ok(self
                .products
                .iter()
                .filter(|p| p.category == category && p.subcategory.as_deref() == Some(subcategory))
                .cloned()
                .collect())
        }

        async fn product_page(&self, page: u32, size: u32) -> Result<ProductPage, CatalogError> {
            self.record(format!("product_page:{page}:{size}"))?;
            let start = (page.saturating_sub(1) * size) as usize;
            let data = self.products.iter().skip(start).take(size as usize).cloned().collect();
            Ok(ProductPage { data, page, size, total: self.products.len() as u64, total_pages: self.total_pages })
        }

        async fn product(&self, id: &str) -> Result<Option<Product>, CatalogError> {
            self.record(format!("product:{id}"))?;
            Ok(self.products.iter().find(|p| p.id == id).cloned())
        }
    }

    /// Configuration pointing at nothing; handlers under test never leave the mock.
    #[must_use]
    pub fn test_config() -> StorefrontConfig {
        StorefrontConfig {
            port: 0,
            backend_url: "http://backend.test".into(),
            image_base_url: "http://backend.test/images".into(),
            page_size: 2,
            timeouts: BackendTimeouts { request_secs: 1, connect_secs: 1 },
            static_dir: PathBuf::from("static"),
        }
    }

    /// Create a test `AppState` around a mock catalog, returning both.
    #[must_use]
    pub fn test_app_state(catalog: MockCatalog) -> (AppState, Arc<MockCatalog>) {
        let catalog = Arc::new(catalog);
        let state = AppState::new(catalog.clone(), test_config());
        (state, catalog)
    }

    /// Create a dummy `Product` for testing.
    #[must_use]
    pub fn dummy_product(id: &str, category: &str, subcategory: &str) -> Product {
        Product {
            id: id.into(),
            title: format!("Piece {id}"),
            description: "Hand-finished in our workshop with ethically sourced stones.".into(),
            images: vec![format!("{id}.jpg")],
            category: category.into(),
            subcategory: Some(subcategory.into()),
            url: format!("https://shop.example/{id}"),
            ..Product::default()
        }
    }
}
