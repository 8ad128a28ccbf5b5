//! Leptos component wrapping the ambient animation canvas.
//!
//! The component creates a full-viewport canvas element, starts the smoke
//! texture loading in the background, and runs an animation loop via
//! `requestAnimationFrame` that repaints the whole scene each frame. A
//! window resize only adjusts the canvas backing store; the scene reads the
//! new dimensions on its next frame.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, Window};

use super::rng::JsRng;
use super::scene::Scene;
use super::surface::CanvasSurface;
use super::theme::Theme;

/// Default smoke sprite. Overridable through the component prop or the
/// page-embedded config.
const SMOKE_TEXTURE_URL: &str =
	"https://s3-us-west-2.amazonaws.com/s.cdpn.io/95637/Smoke-Element.png";

/// Bundles the scene with its theme and the shared smoke sprite.
struct SceneContext {
	scene: Scene,
	theme: Theme,
	smoke: HtmlImageElement,
}

/// Renders the ambient firefly-and-smoke animation on a full-viewport
/// canvas.
///
/// The canvas sizes itself to the window and follows window resizes. The
/// smoke texture loads in the background; plumes stay invisible until it is
/// ready. Set `texture_url` to substitute another sprite.
#[component]
pub fn AmbientCanvas(#[prop(default = None)] texture_url: Option<String>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<SceneContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = (
			window.inner_width().unwrap().as_f64().unwrap(),
			window.inner_height().unwrap().as_f64().unwrap(),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let smoke = HtmlImageElement::new().unwrap();
		smoke.set_cross_origin(Some("anonymous"));
		smoke.set_src(texture_url.as_deref().unwrap_or(SMOKE_TEXTURE_URL));

		let theme = Theme::default();
		let scene = Scene::new(&theme, w, h, &mut JsRng);
		*context_init.borrow_mut() = Some(SceneContext {
			scene,
			theme,
			smoke,
		});

		let canvas_resize = canvas.clone();
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let win: Window = web_sys::window().unwrap();
			let (nw, nh) = (
				win.inner_width().unwrap().as_f64().unwrap(),
				win.inner_height().unwrap().as_f64().unwrap(),
			);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		let canvas_anim = canvas.clone();
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				let mut surface = CanvasSurface::new(
					ctx.clone(),
					c.smoke.clone(),
					f64::from(canvas_anim.width()),
					f64::from(canvas_anim.height()),
				);
				c.scene.frame(&mut surface, &c.theme, &mut JsRng);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="ambient-canvas"
			style="display: block; position: fixed; inset: 0; pointer-events: none;"
		/>
	}
}
