//! Home page: category links, subcategory sections, and the pager.

use leptos::prelude::*;

use super::cards::{CardStyle, ProductGrid};
use super::category::CategoryGrid;
use super::layout::SiteHeader;
use super::links::home_href;
use super::pager::Pager;
use super::status::InlineError;
use crate::listing::{PageState, SubcategoryGroup};

/// One fetched page of the home listing.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeListing {
    pub groups: Vec<SubcategoryGroup>,
    pub page: PageState,
}

/// `None` for either section means its fetch failed.
#[component]
pub fn HomePage(
    categories: Option<Vec<String>>,
    listing: Option<HomeListing>,
    #[prop(into)] image_base: String,
) -> impl IntoView {
    let categories = match categories {
        Some(categories) => view! { <CategoryGrid categories=categories/> }.into_any(),
        None => view! { <InlineError message="Failed to load categories."/> }.into_any(),
    };
    let listing = match listing {
        Some(listing) => view! { <SubcategorySections listing=listing image_base=image_base/> }.into_any(),
        None => view! {
            <InlineError message="Failed to fetch products."/>
            <a class="status-panel__link" href=home_href()>"← Back to Home"</a>
        }
        .into_any(),
    };

    view! {
        <SiteHeader/>
        <main class="home-page">
            <div class="home-page__hero">
                <h1 class="home-page__title">"Exquisite Diamond Collections"</h1>
                <p class="home-page__lede">
                    "Discover our curated selection of high-grade diamonds, meticulously crafted into timeless pieces of elegance and sophistication."
                </p>
                <div class="home-page__rule"></div>
            </div>
            {categories}
            {listing}
        </main>
    }
}

#[component]
fn SubcategorySections(listing: HomeListing, #[prop(into)] image_base: String) -> impl IntoView {
    let sections = listing
        .groups
        .into_iter()
        .map(|group| {
            let title = group.title().to_owned();
            view! {
                <section class="subcategory-section">
                    <div class="subcategory-section__header">
                        <h2 class="subcategory-section__title">{title}</h2>
                        <p class="subcategory-section__category">{group.category}</p>
                    </div>
                    <ProductGrid products=group.products image_base=image_base.clone() style=CardStyle::Home/>
                </section>
            }
        })
        .collect_view();

    view! {
        <div class="home-page__sections">{sections}</div>
        <Pager state=listing.page/>
    }
}

#[cfg(test)]
#[path = "home_test.rs"]
mod tests;
