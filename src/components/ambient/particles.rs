//! The two particle variants and their shared lifecycle contract.
//!
//! Both variants repeat the same cycle forever: spawn with freshly
//! randomized fields, brighten (fireflies only), hold, fade, then
//! reinitialize in place once `age` outruns `max_age` or `alpha` reaches
//! zero. Nothing is ever deallocated; a spent particle is simply rerolled
//! where it sits.

use std::f64::consts::TAU;

use super::rng::RngSource;
use super::surface::Surface;
use super::theme::{Color, Theme};

/// Frames of firefly fade-in after spawn.
const FIREFLY_FADE_IN_FRAMES: f64 = 50.0;
const FIREFLY_FADE_IN_STEP: f64 = 0.02;
/// Frames before `max_age` at which firefly fade-out begins. Lifespans
/// shorter than this window fade immediately and respawn early; that churn
/// is part of the look.
const FIREFLY_FADE_OUT_WINDOW: f64 = 60.0;
const FIREFLY_FADE_OUT_STEP: f64 = 0.05;

/// Frames before `max_age` at which smoke fade-out begins. Smoke has no
/// fade-in: a plume spawns barely visible and only ever dims.
const SMOKE_FADE_OUT_WINDOW: f64 = 200.0;
const SMOKE_FADE_OUT_STEP: f64 = 0.0005;

/// Lifecycle contract shared by both particle variants.
pub trait Particle {
	/// Reroll every randomized field and restart the lifecycle in place.
	fn respawn(&mut self, theme: &Theme, width: f64, height: f64, rng: &mut dyn RngSource);

	/// Advance one frame: age, alpha phase, drift, then the respawn check.
	fn update(&mut self, theme: &Theme, width: f64, height: f64, rng: &mut dyn RngSource);

	/// Issue this particle's drawing commands for the current frame.
	fn draw<S: Surface>(&self, surface: &mut S, theme: &Theme);
}

/// A small glowing point that drifts slowly and twinkles in and out.
#[derive(Clone, Debug)]
pub struct Firefly {
	x: f64,
	y: f64,
	vx: f64,
	vy: f64,
	size: f64,
	alpha: f64,
	age: u32,
	max_age: f64,
	color: Color,
}

impl Firefly {
	/// Spawn a firefly somewhere on the surface.
	pub fn new(theme: &Theme, width: f64, height: f64, rng: &mut dyn RngSource) -> Self {
		let mut fly = Self {
			x: 0.0,
			y: 0.0,
			vx: 0.0,
			vy: 0.0,
			size: 0.0,
			alpha: 0.0,
			age: 0,
			max_age: 0.0,
			color: theme.fireflies.colors[0],
		};
		fly.respawn(theme, width, height, rng);
		fly
	}
}

impl Particle for Firefly {
	fn respawn(&mut self, theme: &Theme, width: f64, height: f64, rng: &mut dyn RngSource) {
		let style = &theme.fireflies;
		self.x = rng.next_f64() * width;
		self.y = rng.next_f64() * height;
		self.size = rng.range(style.size_min, style.size_max);
		self.alpha = 0.0;
		self.age = 0;
		self.max_age = rng.range(style.life_min, style.life_max);
		self.color = if rng.next_f64() > 0.5 {
			style.colors[0]
		} else {
			style.colors[1]
		};
		self.vx = (rng.next_f64() - 0.2) * 0.1;
		self.vy = (rng.next_f64() - 0.5) * 0.1;
	}

	fn update(&mut self, theme: &Theme, width: f64, height: f64, rng: &mut dyn RngSource) {
		self.age += 1;
		let age = f64::from(self.age);

		if age < FIREFLY_FADE_IN_FRAMES {
			self.alpha += FIREFLY_FADE_IN_STEP;
		} else if age > self.max_age - FIREFLY_FADE_OUT_WINDOW {
			self.alpha -= FIREFLY_FADE_OUT_STEP;
		}

		self.x += self.vx;
		self.y += self.vy;

		if age > self.max_age || self.alpha <= 0.0 {
			self.respawn(theme, width, height, rng);
		}
	}

	fn draw<S: Surface>(&self, surface: &mut S, theme: &Theme) {
		surface.glow_disc(
			self.x,
			self.y,
			self.size,
			self.color.with_alpha(self.alpha),
			theme.fireflies.glow,
		);
	}
}

/// A large, slowly rotating translucent sprite rising from below the
/// surface.
#[derive(Clone, Debug)]
pub struct SmokePlume {
	x: f64,
	y: f64,
	vx: f64,
	vy: f64,
	size: f64,
	alpha: f64,
	age: u32,
	max_age: f64,
	rotation: f64,
	rotation_speed: f64,
	/// Rolled once per life and never advanced; fixes this plume's
	/// hue-rotation angle for its whole lifetime.
	color_phase: f64,
}

impl SmokePlume {
	/// Spawn a plume below the bottom edge of the surface.
	pub fn new(theme: &Theme, width: f64, height: f64, rng: &mut dyn RngSource) -> Self {
		let mut plume = Self {
			x: 0.0,
			y: 0.0,
			vx: 0.0,
			vy: 0.0,
			size: 0.0,
			alpha: 0.0,
			age: 0,
			max_age: 0.0,
			rotation: 0.0,
			rotation_speed: 0.0,
			color_phase: 0.0,
		};
		plume.respawn(theme, width, height, rng);
		plume
	}
}

impl Particle for SmokePlume {
	fn respawn(&mut self, theme: &Theme, width: f64, height: f64, rng: &mut dyn RngSource) {
		let style = &theme.smoke;
		self.x = width / 2.0 + (rng.next_f64() - 0.5) * style.spawn_spread;
		self.y = height + rng.next_f64() * style.spawn_depth;
		self.size = rng.range(style.size_min, style.size_max);
		self.alpha = 0.00001 + rng.next_f64() * 0.02;
		self.vy = -0.05 - rng.next_f64() * 0.15;
		self.vx = (rng.next_f64() - 0.5) * 0.1;
		self.rotation = rng.next_f64() * TAU;
		self.rotation_speed = (rng.next_f64() - 0.5) * 0.003;
		self.age = 0;
		self.max_age = rng.range(style.life_min, style.life_max);
		self.color_phase = rng.next_f64() * TAU;
	}

	fn update(&mut self, theme: &Theme, width: f64, height: f64, rng: &mut dyn RngSource) {
		self.age += 1;
		let age = f64::from(self.age);

		if age > self.max_age - SMOKE_FADE_OUT_WINDOW {
			self.alpha -= SMOKE_FADE_OUT_STEP;
		}

		self.x += self.vx;
		self.y += self.vy;
		self.rotation += self.rotation_speed;

		if age > self.max_age || self.alpha <= 0.0 {
			self.respawn(theme, width, height, rng);
		}
	}

	fn draw<S: Surface>(&self, surface: &mut S, _theme: &Theme) {
		if !surface.sprite_ready() {
			return;
		}
		surface.draw_sprite(
			self.x,
			self.y,
			self.size,
			self.rotation,
			self.alpha,
			self.color_phase.sin() * 180.0,
		);
	}
}
