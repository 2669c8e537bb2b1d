//! Category navigation and the per-category product page.

use leptos::prelude::*;

use super::cards::{CardStyle, ProductGrid};
use super::layout::SiteHeader;
use super::links::{category_href, home_href, subcategory_href};
use crate::catalog::Product;

/// Links to every category.
#[component]
pub fn CategoryGrid(categories: Vec<String>) -> impl IntoView {
    view! {
        <nav class="category-grid" aria-label="Categories">
            {categories
                .into_iter()
                .map(|category| {
                    let href = category_href(&category);
                    let blurb = format!("Explore our exquisite {} collection", category.to_lowercase());
                    view! {
                        <a class="category-card" href=href>
                            <h3 class="category-card__name">{category}</h3>
                            <p class="category-card__blurb">{blurb}</p>
                            <span class="category-card__cta">"View Collection →"</span>
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// Filter links for a category's subcategories, with the active filter highlighted.
#[component]
fn SubcategoryNav(category: String, subcategories: Vec<String>, active: Option<String>) -> impl IntoView {
    let all_class = if active.is_none() { "subcategory-nav__link subcategory-nav__link--active" } else { "subcategory-nav__link" };
    let all_href = category_href(&category);
    let links = subcategories
        .into_iter()
        .map(|subcategory| {
            let href = subcategory_href(&category, &subcategory);
            let class = if active.as_deref() == Some(subcategory.as_str()) {
                "subcategory-nav__link subcategory-nav__link--active"
            } else {
                "subcategory-nav__link"
            };
            view! { <a class=class href=href>{subcategory}</a> }
        })
        .collect_view();

    view! {
        <nav class="subcategory-nav" aria-label="Subcategories">
            <a class=all_class href=all_href>"All"</a>
            {links}
        </nav>
    }
}

/// Products in one category, optionally narrowed to one subcategory.
#[component]
pub fn CategoryPage(
    category: String,
    subcategory: Option<String>,
    subcategories: Vec<String>,
    products: Vec<Product>,
    #[prop(into)] image_base: String,
) -> impl IntoView {
    let heading = match &subcategory {
        Some(sub) => format!("{category} · {sub}"),
        None => format!("{category} Collection"),
    };
    let blurb = format!("Discover our exquisite {} jewelry pieces", category.to_lowercase());
    let nav = (!subcategories.is_empty()).then(|| {
        view! { <SubcategoryNav category=category.clone() subcategories=subcategories active=subcategory.clone()/> }
    });
    let listing = if products.is_empty() {
        view! {
            <div class="category-page__empty">
                <p>"No products found in this category."</p>
            </div>
        }
        .into_any()
    } else {
        view! { <ProductGrid products=products image_base=image_base style=CardStyle::Grid/> }.into_any()
    };

    view! {
        <SiteHeader>
            <a class="site-header__link" href=home_href()>"← Home"</a>
            <span class="site-header__divider">"|"</span>
            <h1 class="site-header__title">{category}</h1>
        </SiteHeader>
        <main class="category-page">
            <div class="category-page__intro">
                <h2 class="category-page__heading">{heading}</h2>
                <p class="category-page__blurb">{blurb}</p>
            </div>
            {nav}
            {listing}
        </main>
    }
}

#[cfg(test)]
#[path = "category_test.rs"]
mod tests;
