//! Backdrop animation state.
//!
//! Everything a frame reads or writes lives in [`BackdropState`]: the
//! particles, the time accumulator, the pointer offset and the surface size.
//! It is passed explicitly to the update and render steps, so several
//! backdrops can coexist and a frame can be stepped in isolation.

use fastrand::Rng;

use super::motion::MotionConfig;
use super::particles::{Particle, ParticleSystem};
use super::types::Catalog;

/// Last known pointer deviation from the viewport centre, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
	/// Horizontal deviation.
	pub x: f64,
	/// Vertical deviation.
	pub y: f64,
}

impl PointerOffset {
	/// Map a pointer position to `[-range/2, range/2]` on each axis.
	/// A degenerate viewport axis yields zero on that axis.
	pub fn from_pointer(
		px: f64,
		py: f64,
		viewport_width: f64,
		viewport_height: f64,
		range: f64,
	) -> Self {
		let axis = |p: f64, extent: f64| {
			if extent > 0.0 {
				(p / extent - 0.5) * range
			} else {
				0.0
			}
		};
		Self {
			x: axis(px, viewport_width),
			y: axis(py, viewport_height),
		}
	}
}

/// Mutable state of one backdrop instance.
#[derive(Clone, Debug)]
pub struct BackdropState {
	/// The particle set.
	pub particles: ParticleSystem,
	/// Latest pointer offset.
	pub pointer: PointerOffset,
	/// Monotonic phase accumulator, advanced by a fixed step per frame.
	pub time: f64,
	/// Surface width in pixels.
	pub width: f64,
	/// Surface height in pixels.
	pub height: f64,
}

impl BackdropState {
	/// Fresh state with particles seeded from `catalog`.
	pub fn new(catalog: &Catalog, width: f64, height: f64, rng: &mut Rng) -> Self {
		Self::with_particles(ParticleSystem::new(catalog, width, height, rng), width, height)
	}

	/// Fresh state around an existing particle set.
	pub fn with_particles(particles: ParticleSystem, width: f64, height: f64) -> Self {
		Self {
			particles,
			pointer: PointerOffset::default(),
			time: 0.0,
			width,
			height,
		}
	}

	/// Advance the simulation by one frame.
	pub fn tick(&mut self, motion: &MotionConfig, rng: &mut Rng) {
		self.time += motion.time_step;
		self.particles.update(motion, self.width, self.height, rng);
	}

	/// Record new surface bounds. Particles are left where they are.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Record a pointer move. Last write wins.
	pub fn pointer_moved(
		&mut self,
		px: f64,
		py: f64,
		viewport_width: f64,
		viewport_height: f64,
		motion: &MotionConfig,
	) {
		self.pointer = PointerOffset::from_pointer(
			px,
			py,
			viewport_width,
			viewport_height,
			motion.pointer_range,
		);
	}

	/// Render-only offset applied to every particle from the pointer position.
	pub fn parallax(&self, motion: &MotionConfig) -> (f64, f64) {
		(
			self.pointer.x * motion.parallax_damping,
			self.pointer.y * motion.parallax_damping,
		)
	}

	/// Where `particle` is drawn this frame: stored position plus sway and
	/// parallax. Sway follows the pre-wrap position of the last drift.
	pub fn drawn_position(&self, particle: &Particle, motion: &MotionConfig) -> (f64, f64) {
		let (ax, ay) = particle.sway_anchor();
		let (sx, sy) = motion.sway(self.time, ax, ay);
		let (px, py) = self.parallax(motion);
		(particle.x + sx + px, particle.y + sy + py)
	}
}
