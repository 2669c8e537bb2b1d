//! Contact / inquiry form.

use leptos::prelude::*;
use serde::Deserialize;

use super::layout::SiteHeader;
use super::links::home_href;

/// Form fields, as posted back to `/contact`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// Empty form whose message asks about a specific product.
    #[must_use]
    pub fn inquiry(product: &str, product_id: &str) -> Self {
        Self {
            message: format!(
                "I am interested in the product: {product} (ID: {product_id}). Please provide more details."
            ),
            ..Self::default()
        }
    }
}

#[component]
pub fn ContactPage(form: ContactForm, #[prop(optional)] submitted: bool) -> impl IntoView {
    let notice = submitted.then(|| {
        view! {
            <p class="contact-form__notice" role="status">
                "Thank you for your message. We will be in touch shortly."
            </p>
        }
    });

    view! {
        <SiteHeader>
            <a class="site-header__link" href=home_href()>"← Home"</a>
        </SiteHeader>
        <main class="contact-page">
            <form class="contact-form" method="post" action="/contact">
                <h1 class="contact-form__title">"Contact Us"</h1>
                {notice}
                <label class="contact-form__field">
                    <span class="contact-form__label">"Your Name"</span>
                    <input type="text" name="name" value=form.name required=true/>
                </label>
                <label class="contact-form__field">
                    <span class="contact-form__label">"Your Email"</span>
                    <input type="email" name="email" value=form.email required=true/>
                </label>
                <label class="contact-form__field">
                    <span class="contact-form__label">"Message"</span>
                    <textarea name="message" rows="4" required=true>{form.message}</textarea>
                </label>
                <button class="contact-form__submit" type="submit">"Send Message"</button>
            </form>
        </main>
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
