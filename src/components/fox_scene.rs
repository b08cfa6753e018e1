//! Fox Scene Component
//!
//! Canvas hosting the animated fox. Rendering is delegated to the host script;
//! this component mounts it once and forwards clip changes.

use contact_flow::AnimationState;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, SceneSetup};
use crate::components::Loader;

const CANVAS_ID: &str = "fox-canvas";

#[component]
pub fn FoxScene(#[prop(into)] animation: Signal<AnimationState>) -> impl IntoView {
    let (ready, set_ready) = signal(false);

    // Mount the model once the canvas is in the DOM
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::mount_fox(CANVAS_ID, &SceneSetup::default()).await {
                Ok(()) => {
                    log::info!("[SCENE] fox loaded");
                    let _ = set_ready.try_set(true);
                }
                Err(e) => log::error!("[SCENE] failed to load fox: {}", e),
            }
        });
    });

    Effect::new(move |_| {
        let clip = animation.get();
        if !ready.get() {
            return;
        }
        if let Err(e) = commands::play_clip(CANVAS_ID, clip) {
            log::warn!("[SCENE] could not play {}: {}", clip, e);
        }
    });

    view! {
        <div class="contact-scene">
            <Show when=move || !ready.get()>
                <Loader />
            </Show>
            <canvas id=CANVAS_ID class="fox-canvas"></canvas>
        </div>
    }
}
