//! Drawing surface abstraction.
//!
//! The scene issues all drawing through [`Surface`] instead of holding a
//! canvas context directly. The deployed host wraps a live
//! `CanvasRenderingContext2d` in [`CanvasSurface`]; tests substitute a
//! command-recording fake. Dimensions are read back from the surface every
//! frame, so a window resize needs no plumbing beyond resizing the canvas
//! backing store.

use std::f64::consts::PI;

use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::theme::Color;

/// The 2D drawing commands the ambient scene needs, plus surface dimensions
/// and smoke-sprite readiness.
///
/// The sprite loads in the background; [`Surface::sprite_ready`] is a
/// non-blocking poll, and a failed load simply never reads as ready.
pub trait Surface {
	/// Current surface width in pixels.
	fn width(&self) -> f64;

	/// Current surface height in pixels.
	fn height(&self) -> f64;

	/// Fill the entire surface with a radial gradient centered at
	/// (`cx`, `cy`), running from `inner` at `inner_radius` to `outer` at
	/// `outer_radius`.
	fn fill_radial(
		&mut self,
		cx: f64,
		cy: f64,
		inner_radius: f64,
		outer_radius: f64,
		inner: Color,
		outer: Color,
	);

	/// Fill a disc at (`x`, `y`) with a soft glow of `blur` pixels in the
	/// same color.
	fn glow_disc(&mut self, x: f64, y: f64, radius: f64, color: Color, blur: f64);

	/// Whether the smoke sprite has finished loading.
	fn sprite_ready(&self) -> bool;

	/// Blit the smoke sprite centered at (`x`, `y`), rotated by `rotation`
	/// radians, scaled to `size` × `size`, at `alpha` opacity with a
	/// hue-rotation of `hue_deg` degrees. Transform, opacity, and filter
	/// state must not leak into later draws.
	fn draw_sprite(&mut self, x: f64, y: f64, size: f64, rotation: f64, alpha: f64, hue_deg: f64);
}

/// [`Surface`] implementation over a live canvas 2D context.
pub struct CanvasSurface {
	ctx: CanvasRenderingContext2d,
	sprite: HtmlImageElement,
	width: f64,
	height: f64,
}

impl CanvasSurface {
	/// Wrap a context for one frame of drawing. `width` and `height` are the
	/// canvas backing size at the time of the call.
	pub fn new(
		ctx: CanvasRenderingContext2d,
		sprite: HtmlImageElement,
		width: f64,
		height: f64,
	) -> Self {
		Self {
			ctx,
			sprite,
			width,
			height,
		}
	}
}

impl Surface for CanvasSurface {
	fn width(&self) -> f64 {
		self.width
	}

	fn height(&self) -> f64 {
		self.height
	}

	fn fill_radial(
		&mut self,
		cx: f64,
		cy: f64,
		inner_radius: f64,
		outer_radius: f64,
		inner: Color,
		outer: Color,
	) {
		let gradient = self
			.ctx
			.create_radial_gradient(cx, cy, inner_radius, cx, cy, outer_radius)
			.unwrap();

		gradient.add_color_stop(0.0, &inner.to_css()).unwrap();
		gradient.add_color_stop(1.0, &outer.to_css()).unwrap();

		#[allow(deprecated)]
		self.ctx.set_fill_style(&gradient);
		self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
	}

	fn glow_disc(&mut self, x: f64, y: f64, radius: f64, color: Color, blur: f64) {
		let css = color.to_css();
		self.ctx.set_shadow_blur(blur);
		self.ctx.set_shadow_color(&css);
		self.ctx.set_fill_style_str(&css);

		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.fill();

		self.ctx.set_shadow_blur(0.0);
	}

	fn sprite_ready(&self) -> bool {
		self.sprite.complete()
	}

	fn draw_sprite(&mut self, x: f64, y: f64, size: f64, rotation: f64, alpha: f64, hue_deg: f64) {
		self.ctx.save();
		let _ = self.ctx.translate(x, y);
		let _ = self.ctx.rotate(rotation);
		self.ctx.set_global_alpha(alpha);
		self.ctx.set_filter(&format!("hue-rotate({hue_deg}deg)"));

		let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
			&self.sprite,
			-size / 2.0,
			-size / 2.0,
			size,
			size,
		);

		self.ctx.restore();
		self.ctx.set_filter("none");
	}
}
