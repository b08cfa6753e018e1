use leptos::prelude::*;

/// Placeholder shown while the 3D model loads
#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader">
            <div class="loader-spinner"></div>
        </div>
    }
}
