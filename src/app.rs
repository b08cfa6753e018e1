//! Contact Page App
//!
//! Root component: resolves deployment configuration and renders the page.

use leptos::prelude::*;

use crate::components::ContactPage;
use crate::config::ContactConfig;

#[component]
pub fn App() -> impl IntoView {
    match ContactConfig::from_build_env() {
        Ok(config) => {
            log::info!(
                "[APP] contact page ready, follow-up after {}ms",
                config.follow_up_delay_ms
            );
            view! { <ContactPage config=config /> }.into_any()
        }
        Err(e) => {
            log::error!("[APP] contact form disabled: {}", e);
            view! {
                <section class="contact-page">
                    <h1 class="head-text">"Get in touch"</h1>
                    <p class="config-error">"The contact form is not available right now."</p>
                </section>
            }
            .into_any()
        }
    }
}
