//! Product cards for the home sections and the category grid.

use leptos::prelude::*;

use super::links::{excerpt, image_src, product_href};
use crate::catalog::Product;

/// Which listing a card is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    /// Home page section card: shorter excerpt plus a category label.
    Home,
    /// Category grid card.
    Grid,
}

impl CardStyle {
    fn excerpt_chars(self) -> usize {
        match self {
            Self::Home => 80,
            Self::Grid => 100,
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Home => "product-card product-card--home",
            Self::Grid => "product-card product-card--grid",
        }
    }
}

/// A clickable card linking to the product's detail page.
#[component]
pub fn ProductCard(product: Product, #[prop(into)] image_base: String, style: CardStyle) -> impl IntoView {
    let href = product_href(&product.id);
    let image = match product.cover_image() {
        Some(filename) => {
            let src = image_src(&image_base, filename);
            let alt = product.title.clone();
            view! { <img class="product-card__image" src=src alt=alt loading="lazy"/> }.into_any()
        }
        None => view! { <span class="product-card__no-image">"No Image"</span> }.into_any(),
    };
    let summary = excerpt(&product.description, style.excerpt_chars());
    let category = (style == CardStyle::Home).then(|| {
        view! { <span class="product-card__category">{product.category.clone()}</span> }
    });

    view! {
        <a class=style.class() href=href>
            <div class="product-card__media">{image}</div>
            <div class="product-card__body">
                <h3 class="product-card__title">{product.title}</h3>
                <p class="product-card__summary">{summary}</p>
                <div class="product-card__footer">
                    {category}
                    <span class="product-card__cta">"View Details →"</span>
                </div>
            </div>
        </a>
    }
}

/// Responsive grid of cards.
#[component]
pub fn ProductGrid(products: Vec<Product>, #[prop(into)] image_base: String, style: CardStyle) -> impl IntoView {
    view! {
        <div class="product-grid">
            {products
                .into_iter()
                .map(|product| {
                    view! { <ProductCard product=product image_base=image_base.clone() style=style/> }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
#[path = "cards_test.rs"]
mod tests;
