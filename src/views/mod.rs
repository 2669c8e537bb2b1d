//! Page components, rendered to HTML on the server.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each route handler fetches its data first, then hands plain values to a
//! page component here. Components hold no signals: a page is rendered once
//! into a string inside a fresh reactive owner and sent as the response.

pub mod cards;
pub mod category;
pub mod contact;
pub mod home;
pub mod layout;
pub mod links;
pub mod pager;
pub mod product;
pub mod status;

use leptos::prelude::*;

use layout::Document;

/// Site name used in every document title.
pub const SITE_NAME: &str = "Fay Jewelry";

/// `"{page} | Fay Jewelry"`, or the bare site name when `page` is empty.
#[must_use]
pub fn page_title(page: &str) -> String {
    if page.is_empty() { SITE_NAME.to_owned() } else { format!("{page} | {SITE_NAME}") }
}

/// Render `content` inside the site document shell.
pub fn render_document(title: String, content: impl FnOnce() -> AnyView) -> String {
    let owner = Owner::new();
    owner.with(move || {
        let content = content();
        view! { <Document title=title>{content}</Document> }.to_html()
    })
}

/// Render a bare fragment, without the document shell.
#[cfg(test)]
pub fn render_fragment(content: impl FnOnce() -> AnyView) -> String {
    let owner = Owner::new();
    owner.with(move || content().to_html())
}
