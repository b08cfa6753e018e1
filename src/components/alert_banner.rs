//! Alert Banner Component
//!
//! Status banner shown above the form after a send.

use contact_flow::{Alert, AlertKind};
use leptos::prelude::*;

/// Dismissible banner for one alert
///
/// # Arguments
/// * `alert` - Text and kind to display
/// * `on_dismiss` - Callback to execute when the close button is clicked
#[component]
pub fn AlertBanner(
    alert: Alert,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    let kind = alert.kind;
    let tone = match kind {
        AlertKind::Success => "alert alert-success",
        AlertKind::Danger => "alert alert-danger",
    };

    view! {
        <div class="alert-container">
            <div class=tone role="alert">
                <p class="alert-badge">{kind.label()}</p>
                <p class="alert-text">{alert.text}</p>
                <button
                    type="button"
                    class="alert-close"
                    aria-label="Dismiss"
                    on:click=move |_| on_dismiss.run(())
                >
                    "×"
                </button>
            </div>
        </div>
    }
}
