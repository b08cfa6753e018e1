//! Contact Page Component
//!
//! Two-column layout: the form on the left, the fox on the right.

use leptos::prelude::*;

use crate::components::{AlertBanner, ContactForm, FoxScene};
use crate::config::ContactConfig;
use crate::context::ContactContext;

#[component]
pub fn ContactPage(config: ContactConfig) -> impl IntoView {
    let ctx = ContactContext::new(&config);
    provide_context(ctx);

    let animation = Memo::new(move |_| ctx.flow.with(|flow| flow.animation()));
    let alert = move || ctx.flow.with(|flow| flow.notification().current().cloned());
    let dismiss = Callback::new(move |_| ctx.dismiss_alert());

    view! {
        <section class="contact-page">
            {move || alert().map(|alert| view! { <AlertBanner alert=alert on_dismiss=dismiss /> })}

            <div class="contact-column">
                <h1 class="head-text">"Get in touch"</h1>
                <ContactForm />
            </div>

            <div class="contact-scene-column">
                <FoxScene animation=animation />
            </div>
        </section>
    }
}
