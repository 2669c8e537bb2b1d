//! Pagination control for the home listing.

use leptos::prelude::*;

use super::links::page_href;
use crate::listing::{PageMarker, PageState};

/// Previous / numbered window / Next. Every step is a plain link to `/?page=N`.
#[component]
pub fn Pager(state: PageState) -> impl IntoView {
    let current = state.current;
    let previous = state.has_previous().then(|| page_href(current - 1));
    let next = state.has_next().then(|| page_href(current + 1));

    let markers = state
        .markers()
        .into_iter()
        .map(|marker| match marker {
            PageMarker::Page(page) if page == current => view! {
                <span class="pager__page pager__page--active" aria-current="page">{page.to_string()}</span>
            }
            .into_any(),
            PageMarker::Page(page) => view! {
                <a class="pager__page" href=page_href(page)>{page.to_string()}</a>
            }
            .into_any(),
            PageMarker::Ellipsis => view! { <span class="pager__ellipsis">"..."</span> }.into_any(),
        })
        .collect_view();

    view! {
        <nav class="pager" aria-label="Pagination">
            <PagerStep label="Previous" href=previous/>
            {markers}
            <PagerStep label="Next" href=next/>
        </nav>
    }
}

/// A Previous/Next step; rendered disabled when there is nowhere to go.
#[component]
fn PagerStep(label: &'static str, href: Option<String>) -> impl IntoView {
    match href {
        Some(href) => view! { <a class="pager__step" href=href>{label}</a> }.into_any(),
        None => view! {
            <span class="pager__step pager__step--disabled" aria-disabled="true">{label}</span>
        }
        .into_any(),
    }
}

#[cfg(test)]
#[path = "pager_test.rs"]
mod tests;
