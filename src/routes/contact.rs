//! Contact form routes. Submissions are logged, never forwarded.

use axum::extract::{Form, Query};
use axum::http::StatusCode;
use axum::response::Response;
use leptos::prelude::*;
use serde::Deserialize;

use super::html_response;
use crate::views::contact::{ContactForm, ContactPage};
use crate::views::{page_title, render_document};

#[derive(Debug, Default, Deserialize)]
pub struct ContactQuery {
    pub product: Option<String>,
    pub id: Option<String>,
}

/// `GET /contact?product=&id=` — form prefilled with the product inquiry.
pub async fn show(Query(query): Query<ContactQuery>) -> Response {
    let form = ContactForm::inquiry(
        query.product.as_deref().unwrap_or_default(),
        query.id.as_deref().unwrap_or_default(),
    );
    let html = render_document(page_title("Contact Us"), move || view! { <ContactPage form=form/> }.into_any());
    html_response(StatusCode::OK, html)
}

/// `POST /contact` — log the submission and show the form again with a confirmation.
pub async fn submit(Form(form): Form<ContactForm>) -> Response {
    tracing::info!(
        name = %form.name,
        email = %form.email,
        message = %form.message,
        "contact form submitted"
    );
    let html = render_document(page_title("Contact Us"), move || {
        view! { <ContactPage form=form submitted=true/> }.into_any()
    });
    html_response(StatusCode::OK, html)
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
