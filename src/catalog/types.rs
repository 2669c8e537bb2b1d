//! Catalog types — products as the backend serves them, and fetch errors.
//!
//! Every product field is optional on the wire and may arrive as `null`.
//! Decoding fills gaps with empty values so a sparse record still renders.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by catalog reads.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The HTTP request to the backend failed before a response arrived.
    #[error("backend request failed: {0}")]
    Request(String),

    /// The backend returned a non-success status other than a handled 404.
    #[error("backend response error: status {status}")]
    Status { status: u16 },

    /// The response body did not have the expected shape.
    #[error("backend response parse failed: {0}")]
    Decode(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// PRODUCT
// =============================================================================

/// A catalog product.
///
/// Full records carry their identifier as `_id` and an `images` list; page
/// summaries carry `id` and a single `image`. Both shapes decode here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Product {
    #[serde(alias = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    /// Single cover image sent by page summaries.
    #[serde(rename = "image", default)]
    pub cover: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    /// Specification key -> value, in backend order.
    #[serde(default)]
    pub details: Option<Map<String, Value>>,
}

impl Product {
    /// Filename of the image shown on cards: the summary cover, else the first image.
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.cover
            .as_deref()
            .filter(|name| !name.is_empty())
            .or_else(|| self.images.first().map(String::as_str))
    }
}

// =============================================================================
// PRODUCT PAGE
// =============================================================================

/// One page of product summaries from `GET /products?page=&size=`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductPage {
    /// Required: an envelope without a `data` array is a malformed response.
    pub data: Vec<Product>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub page: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_pages: u32,
}

impl ProductPage {
    /// Page number the backend answered for; a missing or zero page reads as 1.
    #[must_use]
    pub fn current_page(&self) -> u32 {
        self.page.max(1)
    }

    /// Total page count; a missing or zero count reads as 1.
    #[must_use]
    pub fn page_count(&self) -> u32 {
        self.total_pages.max(1)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
