//! Product detail page.

use leptos::prelude::*;

use super::layout::SiteHeader;
use super::links::{category_href, contact_href, image_src};
use crate::catalog::Product;
use crate::specs::{SpecRow, SpecSection, spec_sections};

#[component]
pub fn ProductDetail(product: Product, #[prop(into)] image_base: String) -> impl IntoView {
    let back_href = category_href(&product.category);
    let back_label = format!("← Back to {}", product.category);
    let buy_href = contact_href(&product.title, &product.id);
    let sections = product.details.as_ref().map(spec_sections).unwrap_or_default();

    let gallery = if product.images.is_empty() {
        view! {
            <div class="product-page__no-images">
                <span>"No images available"</span>
            </div>
        }
        .into_any()
    } else {
        product
            .images
            .iter()
            .enumerate()
            .map(|(index, filename)| {
                let src = image_src(&image_base, filename);
                let alt = format!("{} - Image {}", product.title, index + 1);
                view! {
                    <div class="product-page__image">
                        <img src=src alt=alt/>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    let specifications = (!sections.is_empty()).then(|| view! { <Specifications sections=sections/> });
    let subcategory = product.subcategory.clone().map(|subcategory| {
        view! { <span class="product-page__badge product-page__badge--subcategory">{subcategory}</span> }
    });

    view! {
        <SiteHeader>
            <a class="site-header__link" href=back_href>{back_label}</a>
        </SiteHeader>
        <main class="product-page">
            <div class="product-page__layout">
                <div class="product-page__gallery">{gallery}</div>
                <div class="product-page__info">
                    <h1 class="product-page__title">{product.title}</h1>
                    <div class="product-page__badges">
                        <span class="product-page__badge">{product.category}</span>
                        {subcategory}
                    </div>
                    <h2 class="product-page__subheading">"Description"</h2>
                    <p class="product-page__description">{product.description}</p>
                    {specifications}
                    <a class="product-page__buy" href=buy_href>"Buy"</a>
                </div>
            </div>
        </main>
    }
}

#[component]
fn Specifications(sections: Vec<SpecSection>) -> impl IntoView {
    view! {
        <section class="specs">
            <h2 class="specs__heading">"Product Specifications"</h2>
            {sections
                .into_iter()
                .map(|section| {
                    view! {
                        <div class="specs__section">
                            <h3 class="specs__key">{section.key}</h3>
                            <div class="specs__rows">
                                {section.rows.into_iter().map(spec_row).collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

fn spec_row(row: SpecRow) -> AnyView {
    match row {
        SpecRow::Pair { label, value } => view! {
            <div class="specs__row">
                <span class="specs__label">{format!("{label}:")}</span>
                <span class="specs__value">{value}</span>
            </div>
        }
        .into_any(),
        SpecRow::Text(text) => view! { <p class="specs__text">{text}</p> }.into_any(),
    }
}

#[cfg(test)]
#[path = "product_test.rs"]
mod tests;
