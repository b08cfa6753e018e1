//! 3D Scene Commands
//!
//! Bindings to the host script that renders the fox. The page only tells it
//! where to draw and which clip to play.

use contact_flow::AnimationState;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__PORTFOLIO_SCENE__"], js_name = mountFox)]
    async fn mount_fox_js(canvas_id: &str, setup: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "__PORTFOLIO_SCENE__"], js_name = playClip)]
    fn play_clip_js(canvas_id: &str, clip: &str) -> Result<(), JsValue>;
}

// ========================
// Types
// ========================

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CameraSetup {
    pub position: [f32; 3],
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LightSetup {
    pub directional_intensity: f32,
    pub directional_position: [f32; 3],
    pub ambient_intensity: f32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModelPlacement {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
}

/// Everything the host needs to stage the fox
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SceneSetup {
    pub camera: CameraSetup,
    pub lights: LightSetup,
    pub fox: ModelPlacement,
    pub initial_clip: AnimationState,
}

impl Default for SceneSetup {
    fn default() -> Self {
        Self {
            camera: CameraSetup {
                position: [0.0, 0.0, 5.0],
                fov: 75.0,
                near: 0.1,
                far: 1000.0,
            },
            lights: LightSetup {
                directional_intensity: 2.5,
                directional_position: [0.0, 0.0, 1.0],
                ambient_intensity: 0.5,
            },
            fox: ModelPlacement {
                position: [0.5, 0.5, 0.0],
                rotation: [12.6, -0.6, 0.0],
                scale: [0.5, 0.5, 0.5],
            },
            initial_clip: AnimationState::Idle,
        }
    }
}

// ========================
// Commands
// ========================

/// Load the fox into `canvas_id`. Resolves once the model is ready to play.
pub async fn mount_fox(canvas_id: &str, setup: &SceneSetup) -> Result<(), String> {
    let js_setup = serde_wasm_bindgen::to_value(setup).map_err(|e| e.to_string())?;
    mount_fox_js(canvas_id, js_setup)
        .await
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}

pub fn play_clip(canvas_id: &str, clip: AnimationState) -> Result<(), String> {
    play_clip_js(canvas_id, clip.as_str()).map_err(|e| format!("{:?}", e))
}
