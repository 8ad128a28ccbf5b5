//! Scene state: the particle pools and per-frame composition.
//!
//! One [`Scene::frame`] call is one complete repaint: backdrop gradient,
//! then every smoke plume (update + draw), then every firefly, so the
//! fireflies sit visually above the smoke. The pools are built once and
//! their members recycle in place; the collections themselves never grow or
//! shrink.

use super::particles::{Firefly, Particle, SmokePlume};
use super::rng::RngSource;
use super::surface::Surface;
use super::theme::{BackdropStyle, Theme};

/// Paint the full-surface radial gradient. Runs first every frame; nothing
/// from the previous frame survives it.
pub fn paint_backdrop<S: Surface>(surface: &mut S, style: &BackdropStyle) {
	let (width, height) = (surface.width(), surface.height());
	surface.fill_radial(
		width / 2.0,
		height / 2.0,
		style.inner_radius,
		width,
		style.inner,
		style.outer,
	);
}

/// The two particle pools plus the surface dimensions they spawn into.
pub struct Scene {
	plumes: Vec<SmokePlume>,
	fireflies: Vec<Firefly>,
	width: f64,
	height: f64,
}

impl Scene {
	/// Build both pools at their fixed sizes. Every member spawns with its
	/// own randomized lifespan and velocity, so fade cycles stagger instead
	/// of pulsing together.
	pub fn new(theme: &Theme, width: f64, height: f64, rng: &mut dyn RngSource) -> Self {
		let mut plumes = Vec::with_capacity(theme.smoke.count);
		for _ in 0..theme.smoke.count {
			plumes.push(SmokePlume::new(theme, width, height, rng));
		}

		let mut fireflies = Vec::with_capacity(theme.fireflies.count);
		for _ in 0..theme.fireflies.count {
			fireflies.push(Firefly::new(theme, width, height, rng));
		}

		Self {
			plumes,
			fireflies,
			width,
			height,
		}
	}

	/// Run one frame: sync dimensions from the surface, repaint the
	/// backdrop, then update and draw every particle. Smoke first, so the
	/// fireflies composite on top.
	pub fn frame<S: Surface>(&mut self, surface: &mut S, theme: &Theme, rng: &mut dyn RngSource) {
		self.width = surface.width();
		self.height = surface.height();

		paint_backdrop(surface, &theme.backdrop);

		for plume in &mut self.plumes {
			plume.update(theme, self.width, self.height, rng);
			plume.draw(surface, theme);
		}
		for fly in &mut self.fireflies {
			fly.update(theme, self.width, self.height, rng);
			fly.draw(surface, theme);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::ambient::rng::testing::CycleRng;
	use crate::components::ambient::theme::Color;

	#[derive(Debug, PartialEq)]
	enum Call {
		Radial {
			cx: f64,
			cy: f64,
			inner_radius: f64,
			outer_radius: f64,
		},
		Disc,
		Sprite,
	}

	struct RecordingSurface {
		width: f64,
		height: f64,
		ready: bool,
		calls: Vec<Call>,
	}

	impl RecordingSurface {
		fn new(width: f64, height: f64, ready: bool) -> Self {
			Self {
				width,
				height,
				ready,
				calls: Vec::new(),
			}
		}
	}

	impl Surface for RecordingSurface {
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
			_inner: Color,
			_outer: Color,
		) {
			self.calls.push(Call::Radial {
				cx,
				cy,
				inner_radius,
				outer_radius,
			});
		}

		fn glow_disc(&mut self, _x: f64, _y: f64, _radius: f64, _color: Color, _blur: f64) {
			self.calls.push(Call::Disc);
		}

		fn sprite_ready(&self) -> bool {
			self.ready
		}

		fn draw_sprite(
			&mut self,
			_x: f64,
			_y: f64,
			_size: f64,
			_rotation: f64,
			_alpha: f64,
			_hue_deg: f64,
		) {
			self.calls.push(Call::Sprite);
		}
	}

	#[test]
	fn backdrop_gradient_follows_surface_geometry() {
		let theme = Theme::default();
		let mut surface = RecordingSurface::new(800.0, 600.0, true);
		paint_backdrop(&mut surface, &theme.backdrop);

		assert_eq!(
			surface.calls,
			vec![Call::Radial {
				cx: 400.0,
				cy: 300.0,
				inner_radius: 20.0,
				outer_radius: 800.0,
			}]
		);
	}

	#[test]
	fn smoke_draws_before_fireflies() {
		let theme = Theme::default();
		let mut rng = CycleRng::constant(0.5);
		let mut scene = Scene::new(&theme, 800.0, 600.0, &mut rng);
		let mut surface = RecordingSurface::new(800.0, 600.0, true);

		scene.frame(&mut surface, &theme, &mut rng);

		let smoke = theme.smoke.count;
		let fireflies = theme.fireflies.count;
		assert_eq!(surface.calls.len(), 1 + smoke + fireflies);
		assert!(matches!(surface.calls[0], Call::Radial { .. }));
		assert!(
			surface.calls[1..=smoke]
				.iter()
				.all(|call| *call == Call::Sprite)
		);
		assert!(
			surface.calls[smoke + 1..]
				.iter()
				.all(|call| *call == Call::Disc)
		);
	}

	#[test]
	fn unloaded_sprite_draws_no_smoke() {
		let theme = Theme::default();
		let mut rng = CycleRng::constant(0.5);
		let mut scene = Scene::new(&theme, 800.0, 600.0, &mut rng);
		let mut surface = RecordingSurface::new(800.0, 600.0, false);

		scene.frame(&mut surface, &theme, &mut rng);

		assert!(surface.calls.iter().all(|call| *call != Call::Sprite));
		let discs = surface
			.calls
			.iter()
			.filter(|call| **call == Call::Disc)
			.count();
		assert_eq!(discs, theme.fireflies.count);
	}

	#[test]
	fn one_plume_issues_nothing_until_ready() {
		let theme = Theme::default();
		let mut rng = CycleRng::constant(0.5);
		let plume = SmokePlume::new(&theme, 800.0, 600.0, &mut rng);

		let mut surface = RecordingSurface::new(800.0, 600.0, false);
		plume.draw(&mut surface, &theme);
		assert!(surface.calls.is_empty());

		surface.ready = true;
		plume.draw(&mut surface, &theme);
		assert_eq!(surface.calls, vec![Call::Sprite]);
	}

	#[test]
	fn pool_sizes_never_change() {
		let theme = Theme::default();
		let mut rng = CycleRng::constant(0.5);
		let mut scene = Scene::new(&theme, 800.0, 600.0, &mut rng);

		for _ in 0..50 {
			let mut surface = RecordingSurface::new(800.0, 600.0, true);
			scene.frame(&mut surface, &theme, &mut rng);
		}

		assert_eq!(scene.plumes.len(), theme.smoke.count);
		assert_eq!(scene.fireflies.len(), theme.fireflies.count);
	}

	#[test]
	fn frame_reads_dimensions_from_the_surface() {
		let theme = Theme::default();
		let mut rng = CycleRng::constant(0.5);
		let mut scene = Scene::new(&theme, 800.0, 600.0, &mut rng);

		let mut surface = RecordingSurface::new(800.0, 600.0, true);
		scene.frame(&mut surface, &theme, &mut rng);

		// A resize between frames shows up in the next backdrop.
		let mut resized = RecordingSurface::new(1024.0, 768.0, true);
		scene.frame(&mut resized, &theme, &mut rng);
		assert_eq!(
			resized.calls[0],
			Call::Radial {
				cx: 512.0,
				cy: 384.0,
				inner_radius: 20.0,
				outer_radius: 1024.0,
			}
		);
	}
}
