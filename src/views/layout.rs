//! Document shell, site header, and footer shared by every page.

use leptos::prelude::*;

use super::links::home_href;

/// Full HTML document around a page body.
#[component]
pub fn Document(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Beautiful jewelry collection from Fay Jewelry"/>
                <link rel="stylesheet" href="/static/storefront.css"/>
                <title>{title}</title>
            </head>
            <body class="storefront">
                {children()}
                <SiteFooter/>
            </body>
        </html>
    }
}

/// Sticky header with the logo linking home. Children render as the right-hand nav.
#[component]
pub fn SiteHeader(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <a class="site-header__logo" href=home_href()>
                    <img src="/static/logo.svg" alt="HIGH GRADE DIAMONDS" width="280" height="168"/>
                </a>
                <nav class="site-header__nav">{children.map(|children| children())}</nav>
            </div>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = time::OffsetDateTime::now_utc().year();
    view! {
        <footer class="site-footer">
            <img class="site-footer__logo" src="/static/logo.svg" alt="HIGH GRADE DIAMONDS" width="280" height="168"/>
            <p class="site-footer__copyright">
                {format!("© {year} High Grade Diamonds. All rights reserved.")}
            </p>
        </footer>
    }
}
