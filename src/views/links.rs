//! URL builders for storefront links and backend-hosted images.

use urlencoding::encode;

#[must_use]
pub fn home_href() -> &'static str {
    "/"
}

#[must_use]
pub fn page_href(page: u32) -> String {
    format!("/?page={page}")
}

#[must_use]
pub fn category_href(category: &str) -> String {
    format!("/category/{}", encode(category))
}

#[must_use]
pub fn subcategory_href(category: &str, subcategory: &str) -> String {
    format!("/category/{}/{}", encode(category), encode(subcategory))
}

#[must_use]
pub fn product_href(id: &str) -> String {
    format!("/product/{}", encode(id))
}

/// Contact form link prefilled with the product being asked about.
#[must_use]
pub fn contact_href(title: &str, id: &str) -> String {
    format!("/contact?product={}&id={}", encode(title), encode(id))
}

#[must_use]
pub fn image_src(image_base: &str, filename: &str) -> String {
    format!("{image_base}/{}", encode(filename))
}

/// First `max_chars` characters of a description, followed by `...`.
#[must_use]
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let head: String = text.chars().take(max_chars).collect();
    format!("{head}...")
}

#[cfg(test)]
#[path = "links_test.rs"]
mod tests;
