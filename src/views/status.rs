//! Error and not-found states.

use leptos::prelude::*;

use super::layout::SiteHeader;
use super::links::home_href;

/// Heading shown when the backend has no such product.
pub const PRODUCT_NOT_FOUND: &str = "Product Not Found";
/// Heading shown when a backend read failed.
pub const FETCH_FAILED: &str = "Something Went Wrong";

/// A full-page message with a link back home.
#[component]
pub fn StatusPage(#[prop(into)] heading: String, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <SiteHeader/>
        <main class="status-page">
            <div class="status-panel">
                <h1 class="status-panel__heading">{heading}</h1>
                <p class="status-panel__message">{message}</p>
                <a class="status-panel__link" href=home_href()>"← Back to Home"</a>
            </div>
        </main>
    }
}

/// Missing product.
#[component]
pub fn ProductNotFound() -> impl IntoView {
    view! {
        <StatusPage
            heading=PRODUCT_NOT_FOUND
            message="The product you are looking for does not exist."
        />
    }
}

/// Generic backend failure.
#[component]
pub fn FetchFailed(#[prop(into)] message: String) -> impl IntoView {
    view! { <StatusPage heading=FETCH_FAILED message=message/> }
}

/// Unknown storefront route.
#[component]
pub fn PageNotFound() -> impl IntoView {
    view! { <StatusPage heading="Page Not Found" message="The page you are looking for does not exist."/> }
}

/// A section-level error inside an otherwise rendered page.
#[component]
pub fn InlineError(#[prop(into)] message: String) -> impl IntoView {
    view! { <p class="inline-error" role="alert">{message}</p> }
}

#[cfg(test)]
#[path = "status_test.rs"]
mod tests;
