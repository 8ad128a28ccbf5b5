//! nightveil: ambient firefly-and-smoke background animation.
//!
//! This crate provides a WASM-based decorative component that fills the
//! viewport with a continuously animated scene: glowing fireflies drifting
//! over large translucent smoke plumes, composited on a radial-gradient
//! backdrop every frame.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::ambient::{AmbientCanvas, Scene, SceneConfig, Surface, Theme};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("nightveil: logging initialized");
}

/// Load optional scene configuration from a script element with
/// id="ambient-config". Expected format: JSON with
/// `{ "smoke_texture": "https://..." }`.
fn load_scene_config() -> Option<SceneConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("ambient-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<SceneConfig>(&json_text) {
		Ok(config) => {
			info!("nightveil: loaded scene config");
			Some(config)
		}
		Err(e) => {
			warn!("nightveil: failed to parse scene config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Mounts the ambient animation behind any page content.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_scene_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="nightveil" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="ambient-backdrop">
			<AmbientCanvas texture_url=config.smoke_texture />
		</div>
	}
}
