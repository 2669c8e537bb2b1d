//! Subcategory grouping for the home listing.

use std::collections::HashMap;

use crate::catalog::Product;

/// Section title for products that carry no subcategory.
pub const UNNAMED_SUBCATEGORY: &str = "Other";

/// Products sharing one subcategory, in the order they arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct SubcategoryGroup {
    pub subcategory: Option<String>,
    /// Category of the first product seen in this group.
    pub category: String,
    pub products: Vec<Product>,
}

impl SubcategoryGroup {
    #[must_use]
    pub fn title(&self) -> &str {
        self.subcategory.as_deref().filter(|name| !name.is_empty()).unwrap_or(UNNAMED_SUBCATEGORY)
    }
}

/// Group a page of products by subcategory.
///
/// Groups appear in order of first occurrence and keep their products in
/// encounter order. Nothing is sorted or dropped.
#[must_use]
pub fn group_by_subcategory(products: Vec<Product>) -> Vec<SubcategoryGroup> {
    let mut groups: Vec<SubcategoryGroup> = Vec::new();
    let mut positions: HashMap<Option<String>, usize> = HashMap::new();

    for product in products {
        if let Some(&at) = positions.get(&product.subcategory) {
            groups[at].products.push(product);
            continue;
        }
        positions.insert(product.subcategory.clone(), groups.len());
        groups.push(SubcategoryGroup {
            subcategory: product.subcategory.clone(),
            category: product.category.clone(),
            products: vec![product],
        });
    }

    groups
}

#[cfg(test)]
#[path = "grouping_test.rs"]
mod tests;
